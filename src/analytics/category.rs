// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{hash_map::Entry, HashMap};

use crate::models::Expense;

/// Group label for expenses recorded without a category.
pub const UNCATEGORIZED: &str = "(uncategorized)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Decimal,
    /// Share of the grand total, one decimal place. Exactly `0.0` for every
    /// entry when the grand total is zero.
    pub percentage: Decimal,
}

/// Total spend per category, sorted descending by total. Ties keep the order
/// in which categories were first encountered. Records with unreadable dates
/// still count here; only the category and amount matter.
pub fn breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for e in expenses {
        let label = match e.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c.to_string(),
            _ => UNCATEGORIZED.to_string(),
        };
        match totals.entry(label) {
            Entry::Occupied(mut o) => *o.get_mut() += e.amount,
            Entry::Vacant(v) => {
                order.push(v.key().clone());
                v.insert(e.amount);
            }
        }
    }

    let grand: Decimal = totals.values().copied().sum();
    let mut shares: Vec<CategoryShare> = order
        .into_iter()
        .map(|category| {
            let total = totals[&category];
            let percentage = if grand.is_zero() {
                Decimal::ZERO
            } else {
                (total / grand * Decimal::ONE_HUNDRED).round_dp(1)
            };
            CategoryShare {
                category,
                total,
                percentage,
            }
        })
        .collect();
    // stable sort keeps first-encountered order among equal totals
    shares.sort_by(|a, b| b.total.cmp(&a.total));
    shares
}
