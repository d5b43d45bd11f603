// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use spendscope::analytics::window::{
    daily_window, monthly_window, week_start, weekly_window, Period,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn assert_contiguous(periods: &[Period]) {
    for pair in periods.windows(2) {
        assert_eq!(
            pair[1].start,
            pair[0].end + Duration::days(1),
            "gap or overlap between '{}' and '{}'",
            pair[0].label,
            pair[1].label
        );
    }
}

#[test]
fn daily_window_is_30_contiguous_days_ending_today() {
    let today = d(2025, 8, 6);
    let days = daily_window(today);
    assert_eq!(days.len(), 30);
    assert_eq!(days[0].start, d(2025, 7, 8));
    assert_eq!(days[29].start, today);
    assert_eq!(days[29].end, today);
    assert_eq!(days[29].label, "Aug 06");
    for p in &days {
        assert_eq!(p.start, p.end);
    }
    assert_contiguous(&days);
}

#[test]
fn weekly_window_is_8_sunday_aligned_weeks() {
    let today = d(2025, 8, 6); // a Wednesday
    let weeks = weekly_window(today);
    assert_eq!(weeks.len(), 8);
    assert_eq!(weeks[0].start, d(2025, 6, 15));
    assert_eq!(weeks[0].label, "Jun 15 - Jun 21");
    assert_eq!(weeks[7].start, d(2025, 8, 3));
    assert_eq!(weeks[7].end, d(2025, 8, 9));
    assert!(weeks[7].contains(today));
    for p in &weeks {
        assert_eq!(p.start.weekday(), Weekday::Sun);
        assert_eq!(p.end - p.start, Duration::days(6));
    }
    assert_contiguous(&weeks);
}

#[test]
fn monthly_window_is_6_full_calendar_months() {
    let months = monthly_window(d(2025, 8, 6)).unwrap();
    assert_eq!(months.len(), 6);
    assert_eq!(months[0].start, d(2025, 3, 1));
    assert_eq!(months[0].end, d(2025, 3, 31));
    assert_eq!(months[0].label, "Mar 2025");
    assert_eq!(months[5].start, d(2025, 8, 1));
    assert_eq!(months[5].end, d(2025, 8, 31));
    assert_contiguous(&months);
}

#[test]
fn monthly_window_handles_leap_february_and_year_boundary() {
    let months = monthly_window(d(2024, 3, 15)).unwrap();
    assert_eq!(months[0].start, d(2023, 10, 1));
    assert_eq!(months[4].start, d(2024, 2, 1));
    assert_eq!(months[4].end, d(2024, 2, 29));
    assert_contiguous(&months);
}

#[test]
fn week_start_rolls_back_to_sunday() {
    assert_eq!(week_start(d(2025, 8, 6)), d(2025, 8, 3));
    assert_eq!(week_start(d(2025, 8, 3)), d(2025, 8, 3));
    assert_eq!(week_start(d(2025, 8, 9)), d(2025, 8, 3));
}

#[test]
fn windows_are_deterministic_for_a_fixed_date() {
    let today = d(2025, 8, 6);
    assert_eq!(daily_window(today), daily_window(today));
    assert_eq!(weekly_window(today), weekly_window(today));
    assert_eq!(
        monthly_window(today).unwrap(),
        monthly_window(today).unwrap()
    );
}
