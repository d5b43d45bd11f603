// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spending analytics over an in-memory expense snapshot.
//!
//! Every function here is a pure transform of `(snapshot, as-of date)`:
//! nothing reads the clock or the store, nothing is cached between calls,
//! and re-running with the same inputs yields identical output.

pub mod aggregate;
pub mod category;
pub mod insights;
pub mod window;

pub use aggregate::{aggregate, unbucketable, Bucket};
pub use category::{breakdown, CategoryShare, UNCATEGORIZED};
pub use insights::{insights, Insights, NO_TOP_CATEGORY};
pub use window::{daily_window, monthly_window, weekly_window, Period};

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::models::Expense;

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("spending report exhausted its {budget:?} computation budget during {stage}")]
    ComputationTimeout {
        budget: Duration,
        stage: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub daily: Vec<Bucket>,
    pub weekly: Vec<Bucket>,
    pub monthly: Vec<Bucket>,
    pub categories: Vec<CategoryShare>,
    pub insights: Insights,
}

/// Run the full pipeline over one snapshot. `budget` is an optional
/// wall-clock guard for unexpectedly large snapshots; when it trips, the
/// whole call fails and no partial report is returned.
pub fn spending_report(
    expenses: &[Expense],
    today: NaiveDate,
    budget: Option<Duration>,
) -> Result<SpendingReport> {
    let started = Instant::now();
    let checkpoint = |stage: &'static str| -> Result<()> {
        match budget {
            Some(b) if started.elapsed() >= b => {
                Err(AnalyticsError::ComputationTimeout { budget: b, stage }.into())
            }
            _ => Ok(()),
        }
    };

    let daily = aggregate(expenses, &daily_window(today));
    checkpoint("daily buckets")?;
    let weekly = aggregate(expenses, &weekly_window(today));
    checkpoint("weekly buckets")?;
    let monthly = aggregate(expenses, &monthly_window(today)?);
    checkpoint("monthly buckets")?;
    let categories = breakdown(expenses);
    checkpoint("category breakdown")?;
    let insights = insights::insights(expenses, today);
    checkpoint("insights")?;

    Ok(SpendingReport {
        daily,
        weekly,
        monthly,
        categories,
        insights,
    })
}
