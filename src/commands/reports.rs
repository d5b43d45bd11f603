// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    aggregate, breakdown, daily_window, insights, monthly_window, spending_report, unbucketable,
    weekly_window, Bucket, CategoryShare, Insights,
};
use crate::commands::expenses;
use crate::models::Expense;
use crate::utils::{get_currency, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::time::Duration;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("daily", sub)) => daily(conn, sub),
        Some(("weekly", sub)) => weekly(conn, sub),
        Some(("monthly", sub)) => monthly(conn, sub),
        Some(("categories", sub)) => categories(conn, sub),
        Some(("insights", sub)) => insight_cards(conn, sub),
        Some(("summary", sub)) => summary(conn, sub),
        _ => Ok(()),
    }
}

/// The as-of date every report computes against: `--as-of` when given,
/// otherwise today in the local civil calendar.
fn as_of(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn load_snapshot(conn: &Connection) -> Result<Vec<Expense>> {
    let data = expenses::snapshot(conn)?;
    let skipped = unbucketable(&data);
    if !skipped.is_empty() {
        eprintln!(
            "warning: {} expense(s) with unreadable dates excluded from time buckets (see `spendscope doctor`)",
            skipped.len()
        );
    }
    Ok(data)
}

fn daily(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = as_of(sub)?;
    let data = load_snapshot(conn)?;
    let buckets = aggregate(&data, &daily_window(today));
    print_buckets(conn, sub, "Day", &buckets)
}

fn weekly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = as_of(sub)?;
    let data = load_snapshot(conn)?;
    let buckets = aggregate(&data, &weekly_window(today));
    print_buckets(conn, sub, "Week", &buckets)
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = as_of(sub)?;
    let data = load_snapshot(conn)?;
    let buckets = aggregate(&data, &monthly_window(today)?);
    print_buckets(conn, sub, "Month", &buckets)
}

fn print_buckets(
    conn: &Connection,
    sub: &clap::ArgMatches,
    period_hdr: &str,
    buckets: &[Bucket],
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        let ccy = get_currency(conn)?;
        println!("{}", bucket_table(period_hdr, &ccy, buckets));
    }
    Ok(())
}

fn bucket_table(period_hdr: &str, ccy: &str, buckets: &[Bucket]) -> comfy_table::Table {
    let rows = buckets
        .iter()
        .map(|b| {
            vec![
                b.label.clone(),
                format!("{:.2}", b.total),
                b.count.to_string(),
            ]
        })
        .collect();
    pretty_table(&[period_hdr, &format!("Total ({})", ccy), "Count"], rows)
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = load_snapshot(conn)?;
    let shares = breakdown(&data);
    if !maybe_print_json(json_flag, jsonl_flag, &shares)? {
        let ccy = get_currency(conn)?;
        println!("{}", category_table(&ccy, &shares));
    }
    Ok(())
}

fn category_table(ccy: &str, shares: &[CategoryShare]) -> comfy_table::Table {
    let rows = shares
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                format!("{:.2}", s.total),
                format!("{:.1}%", s.percentage),
            ]
        })
        .collect();
    pretty_table(&["Category", &format!("Total ({})", ccy), "Share"], rows)
}

fn insight_cards(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = as_of(sub)?;
    let data = load_snapshot(conn)?;
    let ins = insights(&data, today);
    if !maybe_print_json(json_flag, jsonl_flag, &ins)? {
        let ccy = get_currency(conn)?;
        println!("{}", insight_table(&ccy, &ins));
    }
    Ok(())
}

fn insight_table(ccy: &str, ins: &Insights) -> comfy_table::Table {
    let money = |d: &Decimal| format!("{} {:.2}", ccy, d);
    let rows = vec![
        vec!["This week".into(), money(&ins.current_week_total)],
        vec!["Last week".into(), money(&ins.last_week_total)],
        vec!["Week over week".into(), signed_pct(&ins.weekly_change_pct)],
        vec!["This month".into(), money(&ins.current_month_total)],
        vec!["Last month".into(), money(&ins.last_month_total)],
        vec![
            "Month over month".into(),
            signed_pct(&ins.monthly_change_pct),
        ],
        vec!["Top category".into(), ins.top_category.clone()],
        vec!["Top category spend".into(), money(&ins.top_category_amount)],
        vec!["Daily average (month-to-date)".into(), money(&ins.daily_average)],
    ];
    pretty_table(&["Insight", "Value"], rows)
}

fn signed_pct(pct: &Decimal) -> String {
    if *pct >= Decimal::ZERO {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = as_of(sub)?;
    let budget = sub
        .get_one::<u64>("budget-ms")
        .map(|ms| Duration::from_millis(*ms));
    let data = load_snapshot(conn)?;
    let report = spending_report(&data, today, budget)?;
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let ccy = get_currency(conn)?;
        println!("Insights (as of {})", today);
        println!("{}", insight_table(&ccy, &report.insights));
        println!("Spending by category");
        println!("{}", category_table(&ccy, &report.categories));
        println!("Daily spending, last 30 days");
        println!("{}", bucket_table("Day", &ccy, &report.daily));
        println!("Weekly spending, last 8 weeks");
        println!("{}", bucket_table("Week", &ccy, &report.weekly));
        println!("Monthly spending, last 6 months");
        println!("{}", bucket_table("Month", &ccy, &report.monthly));
    }
    Ok(())
}
