// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub category: Option<String>,
    /// Stored as entered; bucketing parses it leniently via [`Expense::civil_date`].
    pub expense_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Expense {
    /// The calendar day this expense belongs to, or `None` when the stored
    /// text cannot be read as one. A time-of-day suffix (`T...`) is ignored.
    /// Records without a readable day are excluded from date-bucketed views
    /// but still count toward category totals.
    pub fn civil_date(&self) -> Option<NaiveDate> {
        crate::utils::civil_date(&self.expense_date)
    }
}
