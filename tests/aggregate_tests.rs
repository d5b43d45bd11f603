// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendscope::analytics::{aggregate, daily_window, unbucketable, weekly_window};
use spendscope::models::Expense;

fn exp(id: i64, date: &str, amount: &str, category: Option<&str>) -> Expense {
    Expense {
        id,
        title: format!("expense {}", id),
        description: None,
        amount: amount.parse::<Decimal>().unwrap(),
        category: category.map(|c| c.to_string()),
        expense_date: date.to_string(),
        created_at: "2025-01-01 00:00:00".into(),
        updated_at: "2025-01-01 00:00:00".into(),
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
}

#[test]
fn two_same_day_expenses_share_one_bucket() {
    let data = vec![
        exp(1, "2025-08-01", "20", Some("Food")),
        exp(2, "2025-08-01", "30", Some("Fun")),
    ];
    let buckets = aggregate(&data, &daily_window(today()));
    assert_eq!(buckets.len(), 30);
    for b in &buckets {
        if b.label == "Aug 01" {
            assert_eq!(b.total, dec("50"));
            assert_eq!(b.count, 2);
        } else {
            assert_eq!(b.total, Decimal::ZERO);
            assert_eq!(b.count, 0);
        }
    }
}

#[test]
fn each_expense_is_counted_exactly_once() {
    let data = vec![exp(1, "2025-08-01", "12.34", Some("Food"))];
    let daily = aggregate(&data, &daily_window(today()));
    let total: Decimal = daily.iter().map(|b| b.total).sum();
    let count: usize = daily.iter().map(|b| b.count).sum();
    assert_eq!(total, dec("12.34"));
    assert_eq!(count, 1);

    let weekly = aggregate(&data, &weekly_window(today()));
    let total: Decimal = weekly.iter().map(|b| b.total).sum();
    assert_eq!(total, dec("12.34"));
}

#[test]
fn empty_snapshot_yields_full_zeroed_window() {
    let buckets = aggregate(&[], &daily_window(today()));
    assert_eq!(buckets.len(), 30);
    assert!(buckets.iter().all(|b| b.total.is_zero() && b.count == 0));
}

#[test]
fn unreadable_dates_are_excluded_and_reported() {
    let data = vec![
        exp(1, "not-a-date", "75", Some("Other")),
        exp(2, "2025-08-01", "10", None),
    ];
    let buckets = aggregate(&data, &daily_window(today()));
    let total: Decimal = buckets.iter().map(|b| b.total).sum();
    assert_eq!(total, dec("10"));

    let skipped = unbucketable(&data);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].id, 1);
}

#[test]
fn time_of_day_suffix_is_ignored_for_bucketing() {
    let data = vec![exp(1, "2025-08-01T13:45:00", "5", None)];
    let buckets = aggregate(&data, &daily_window(today()));
    let hit = buckets.iter().find(|b| b.label == "Aug 01").unwrap();
    assert_eq!(hit.total, dec("5"));
    assert_eq!(hit.count, 1);
}

#[test]
fn bucket_order_follows_the_window_not_the_totals() {
    let data = vec![
        exp(1, "2025-08-05", "100", None),
        exp(2, "2025-07-10", "1", None),
    ];
    let window = daily_window(today());
    let buckets = aggregate(&data, &window);
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    let expected: Vec<&str> = window.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn repeated_aggregation_is_identical() {
    let data = vec![
        exp(1, "2025-08-01", "20", Some("Food")),
        exp(2, "bad", "30", None),
    ];
    let window = daily_window(today());
    assert_eq!(aggregate(&data, &window), aggregate(&data, &window));
}
