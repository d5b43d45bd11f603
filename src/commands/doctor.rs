// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{civil_date, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = scan(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Scan stored expenses for records the aggregation engine would skip or
/// that break the ingress invariants. Reads raw column text so a corrupt
/// amount is reported instead of failing the scan.
pub fn scan(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    let mut stmt =
        conn.prepare("SELECT id, title, amount, expense_date FROM expenses ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let title: String = r.get(1)?;
        let amount_raw: String = r.get(2)?;
        let date_raw: String = r.get(3)?;

        if civil_date(&date_raw).is_none() {
            rows.push(vec![
                "unreadable_date".into(),
                format!("#{} '{}' ({})", id, title, date_raw),
            ]);
        }
        match amount_raw.parse::<Decimal>() {
            Ok(d) if d < Decimal::ZERO => rows.push(vec![
                "negative_amount".into(),
                format!("#{} '{}' ({})", id, title, amount_raw),
            ]),
            Ok(_) => {}
            Err(_) => rows.push(vec![
                "invalid_amount".into(),
                format!("#{} '{}' ({})", id, title, amount_raw),
            ]),
        }
        if title.trim().is_empty() {
            rows.push(vec!["empty_title".into(), format!("#{}", id)]);
        }
    }
    Ok(rows)
}
