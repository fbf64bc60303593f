// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregates over a slice of transactions.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{Transaction, TransactionKind};

/// Totals saturate at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSign {
    Negative,
    Zero,
    Positive,
}

impl Summary {
    pub fn balance_sign(&self) -> BalanceSign {
        if self.balance.is_sign_negative() && !self.balance.is_zero() {
            BalanceSign::Negative
        } else if self.balance.is_zero() {
            BalanceSign::Zero
        } else {
            BalanceSign::Positive
        }
    }
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut s = Summary::default();
    for t in transactions {
        match t.kind {
            TransactionKind::Income => {
                s.total_income = s.total_income.saturating_add(t.amount)
            }
            TransactionKind::Expense => {
                s.total_expense = s.total_expense.saturating_add(t.amount)
            }
        }
    }
    s.balance = s.total_income.saturating_sub(s.total_expense);
    s.count = transactions.len();
    s
}

/// Expense totals per category, in the order categories first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, Decimal)>,
}

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), *v))
    }

    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(*v))
    }

    /// Whole-percent share of the total per category, rounded half away from zero.
    pub fn shares(&self) -> Vec<(&str, Decimal)> {
        let total = self.total();
        if total.is_zero() {
            return self.iter().map(|(c, _)| (c, Decimal::ZERO)).collect();
        }
        self.iter()
            .map(|(c, v)| {
                // divide first so the ratio stays within range
                let pct = v
                    .checked_div(total)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                    .unwrap_or(Decimal::ZERO)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                (c, pct)
            })
            .collect()
    }

    fn add(&mut self, category: &str, amount: Decimal) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, total)) => *total = total.saturating_add(amount),
            None => self.entries.push((category.to_string(), amount)),
        }
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (c, v) in &self.entries {
            map.serialize_entry(c, &v.to_f64().unwrap_or_default())?;
        }
        map.end()
    }
}

pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for t in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        totals.add(&t.category, t.amount);
    }
    totals
}
