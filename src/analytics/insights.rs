// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::category::breakdown;
use super::window::{month_start, same_month, week_start};
use crate::models::Expense;

/// Sentinel top category for an empty snapshot.
pub const NO_TOP_CATEGORY: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub current_week_total: Decimal,
    pub last_week_total: Decimal,
    pub weekly_change_pct: Decimal,
    pub current_month_total: Decimal,
    pub last_month_total: Decimal,
    pub monthly_change_pct: Decimal,
    pub top_category: String,
    pub top_category_amount: Decimal,
    /// Spend in the month containing `today`, divided by its day-of-month.
    pub daily_average: Decimal,
}

/// Period-over-period spending deltas as of `today`. Week containment uses
/// the same Sunday-start convention as the weekly bucket window; month
/// containment is the calendar month of `today`.
pub fn insights(expenses: &[Expense], today: NaiveDate) -> Insights {
    let this_week = week_start(today);
    let last_week = this_week - Duration::days(7);
    let prev_month_day = month_start(today) - Duration::days(1);

    let current_week_total = total_where(expenses, |d| week_start(d) == this_week);
    let last_week_total = total_where(expenses, |d| week_start(d) == last_week);
    let current_month_total = total_where(expenses, |d| same_month(d, today));
    let last_month_total = total_where(expenses, |d| same_month(d, prev_month_day));

    let (top_category, top_category_amount) = match breakdown(expenses).first() {
        Some(share) => (share.category.clone(), share.total),
        None => (NO_TOP_CATEGORY.to_string(), Decimal::ZERO),
    };

    // day-of-month is always >= 1, so this never divides by zero
    let daily_average = current_month_total / Decimal::from(today.day());

    Insights {
        current_week_total,
        last_week_total,
        weekly_change_pct: change_pct(current_week_total, last_week_total),
        current_month_total,
        last_month_total,
        monthly_change_pct: change_pct(current_month_total, last_month_total),
        top_category,
        top_category_amount,
        daily_average,
    }
}

/// A zero prior period reads as a flat 0% change rather than an infinite
/// increase; a genuinely new spending signal is understated by this rule.
fn change_pct(current: Decimal, last: Decimal) -> Decimal {
    if last <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        (current - last) / last * Decimal::ONE_HUNDRED
    }
}

fn total_where<F>(expenses: &[Expense], pred: F) -> Decimal
where
    F: Fn(NaiveDate) -> bool,
{
    expenses
        .iter()
        .filter_map(|e| e.civil_date().map(|d| (d, e.amount)))
        .filter(|(day, _)| pred(*day))
        .map(|(_, amount)| amount)
        .sum()
}
