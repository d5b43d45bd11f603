// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{parse_amount, parse_date};
use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use rusqlite::{params, Connection};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => import_expenses(conn, sub),
        _ => Ok(()),
    }
}

fn import_expenses(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut imported = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim().to_string();
        let title = rec.get(1).context("title missing")?.trim().to_string();
        let amount_raw = rec.get(2).context("amount missing")?.trim().to_string();
        let category = rec
            .get(3)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        let description = rec
            .get(4)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        if title.is_empty() {
            bail!("Empty title on row dated '{}'", date_raw);
        }
        let date = parse_date(&date_raw)
            .with_context(|| format!("Invalid expense date '{}'", date_raw))?;
        let amount = parse_amount(&amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, title))?;

        tx.execute(
            "INSERT INTO expenses(title, description, amount, category, expense_date) \
             VALUES (?1,?2,?3,?4,?5)",
            params![
                title,
                description,
                amount.to_string(),
                category,
                date.to_string()
            ],
        )?;
        imported += 1;
    }
    tx.commit()?;
    println!("Imported {} expense(s) from {}", imported, path);
    Ok(())
}
