// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, Months, NaiveDate};

pub const DAILY_WINDOW_DAYS: usize = 30;
pub const WEEKLY_WINDOW_WEEKS: usize = 8;
pub const MONTHLY_WINDOW_MONTHS: usize = 6;

/// One labelled calendar interval. Both ends are inclusive; a day-sized
/// period has `start == end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Weeks start on Sunday.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

pub fn month_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.day0() as i64)
}

pub fn month_end(day: NaiveDate) -> Result<NaiveDate> {
    month_start(day)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .with_context(|| format!("Month end out of range for {}", day))
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The last 30 calendar days ending at `today`, oldest first.
pub fn daily_window(today: NaiveDate) -> Vec<Period> {
    (0..DAILY_WINDOW_DAYS as i64)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            Period {
                label: day.format("%b %d").to_string(),
                start: day,
                end: day,
            }
        })
        .collect()
}

/// The last 8 calendar weeks, oldest first, ending with the week that
/// contains `today`.
pub fn weekly_window(today: NaiveDate) -> Vec<Period> {
    let current = week_start(today);
    (0..WEEKLY_WINDOW_WEEKS as i64)
        .rev()
        .map(|back| {
            let start = current - Duration::weeks(back);
            let end = start + Duration::days(6);
            Period {
                label: format!("{} - {}", start.format("%b %d"), end.format("%b %d")),
                start,
                end,
            }
        })
        .collect()
}

/// The last 6 calendar months, oldest first, each spanning its full
/// first-to-last-day range.
pub fn monthly_window(today: NaiveDate) -> Result<Vec<Period>> {
    let current = month_start(today);
    let mut periods = Vec::with_capacity(MONTHLY_WINDOW_MONTHS);
    for back in (0..MONTHLY_WINDOW_MONTHS as u32).rev() {
        let start = current
            .checked_sub_months(Months::new(back))
            .with_context(|| format!("Month window out of range for {}", today))?;
        let end = month_end(start)?;
        periods.push(Period {
            label: start.format("%b %Y").to_string(),
            start,
            end,
        });
    }
    Ok(periods)
}
