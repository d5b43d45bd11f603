// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::window::Period;
use crate::models::Expense;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total: Decimal,
    pub count: usize,
}

/// Sum expenses into the given periods, one bucket per period in the same
/// order. Empty periods stay in the output with `total = 0, count = 0` so the
/// time axis stays continuous. Records without a readable expense date are
/// left out of every bucket; callers surface them via [`unbucketable`].
pub fn aggregate(expenses: &[Expense], periods: &[Period]) -> Vec<Bucket> {
    let dated: Vec<(NaiveDate, Decimal)> = expenses
        .iter()
        .filter_map(|e| e.civil_date().map(|d| (d, e.amount)))
        .collect();

    periods
        .iter()
        .map(|p| {
            let mut total = Decimal::ZERO;
            let mut count = 0usize;
            for (day, amount) in &dated {
                if p.contains(*day) {
                    total += *amount;
                    count += 1;
                }
            }
            Bucket {
                label: p.label.clone(),
                period_start: p.start,
                period_end: p.end,
                total,
                count,
            }
        })
        .collect()
}

/// Expenses whose stored date cannot be read as a calendar day. They never
/// appear in a bucket and are reported as a data-quality concern instead.
pub fn unbucketable(expenses: &[Expense]) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|e| e.civil_date().is_none())
        .collect()
}
