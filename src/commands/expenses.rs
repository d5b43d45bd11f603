// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use crate::utils::{
    fmt_money, get_currency, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table,
};
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    if title.is_empty() {
        bail!("Expense title must not be empty");
    }
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty());

    conn.execute(
        "INSERT INTO expenses(title, description, amount, category, expense_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            title,
            description,
            amount.to_string(),
            category,
            date.to_string()
        ],
    )?;
    let ccy = get_currency(conn)?;
    println!("Recorded {} on {} for '{}'", fmt_money(&amount, &ccy), date, title);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.expense_date.clone(),
                    e.title.clone(),
                    e.amount.round_dp(2).to_string(),
                    e.category.clone().unwrap_or_default(),
                    e.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Title", "Amount", "Category", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Expense #{} not found", id);
    }
    println!("Removed expense #{}", id);
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let mut sql = String::from(
        "SELECT id, title, description, amount, category, expense_date, created_at, updated_at
         FROM expenses WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(expense_date,1,7)=?");
        params_vec.push(parse_month(month)?);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND category=?");
        params_vec.push(cat.into());
    }
    sql.push_str(" ORDER BY expense_date DESC, id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(expense_from_row(r)?);
    }
    Ok(data)
}

/// The full expense list as one in-memory snapshot, oldest first. Every
/// aggregation call starts from this.
pub fn snapshot(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, amount, category, expense_date, created_at, updated_at
         FROM expenses ORDER BY expense_date, id",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(expense_from_row(r)?);
    }
    Ok(data)
}

fn expense_from_row(r: &rusqlite::Row<'_>) -> Result<Expense> {
    let id: i64 = r.get(0)?;
    let amount_s: String = r.get(3)?;
    let amount = amount_s
        .parse()
        .with_context(|| format!("Invalid stored amount '{}' on expense #{}", amount_s, id))?;
    Ok(Expense {
        id,
        title: r.get(1)?,
        description: r.get(2)?,
        amount,
        category: r.get(4)?,
        expense_date: r.get(5)?,
        created_at: r.get(6)?,
        updated_at: r.get(7)?,
    })
}
