// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory transaction collection with write-through persistence.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::error::{Result, StoreError};
use crate::models::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
use crate::period::Period;
use crate::storage::{Persistence, Slot};
use crate::summary::{self, CategoryTotals, Summary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject categories outside the table for the transaction's kind.
    pub strict_categories: bool,
}

pub struct TransactionStore<S: Slot> {
    persistence: Persistence<S>,
    transactions: Vec<Transaction>,
    period: Period,
    options: StoreOptions,
}

impl<S: Slot> TransactionStore<S> {
    /// Loads whatever the slot holds. The period starts at the current month.
    pub fn open(persistence: Persistence<S>, options: StoreOptions) -> Self {
        let transactions = persistence.load();
        Self {
            persistence,
            transactions,
            period: Period::current(),
            options,
        }
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Writes the full collection to the slot. Called after every mutation.
    pub fn persist(&mut self) -> bool {
        self.persistence.save(&self.transactions)
    }

    pub fn create(&mut self, fields: NewTransaction) -> Result<Transaction> {
        self.check_category(fields.kind, &fields.category)?;
        let id = self.fresh_id();
        let tx = fields.into_transaction(id, Utc::now());
        log::debug!("create {} {} {} {}", tx.id, tx.kind, tx.category, tx.amount);
        self.transactions.push(tx.clone());
        self.persist();
        Ok(tx)
    }

    /// `Ok(None)` when no transaction has `id`.
    pub fn update(&mut self, id: &str, patch: &TransactionPatch) -> Result<Option<Transaction>> {
        let Some(idx) = self.transactions.iter().position(|t| t.id == id) else {
            log::debug!("update {}: not found", id);
            return Ok(None);
        };
        let mut merged = self.transactions[idx].clone();
        patch.apply_to(&mut merged);
        self.check_category(merged.kind, &merged.category)?;
        log::debug!("update {}", id);
        self.transactions[idx] = merged.clone();
        self.persist();
        Ok(Some(merged))
    }

    /// Returns whether a transaction was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            log::debug!("delete {}", id);
            self.persist();
        }
        removed
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions dated within `period`, in collection order.
    pub fn query_by_period(&self, period: Period) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| period.contains(t.date))
            .cloned()
            .collect()
    }

    pub fn current_transactions(&self) -> Vec<Transaction> {
        self.query_by_period(self.period)
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn summary_for(&self, period: Period) -> Summary {
        summary::summarize(&self.query_by_period(period))
    }

    pub fn category_totals_for(&self, period: Period) -> CategoryTotals {
        summary::category_totals(&self.query_by_period(period))
    }

    /// Fills an empty store with a handful of example transactions around
    /// `today`. Returns how many were added.
    pub fn seed_sample_data(&mut self, today: NaiveDate) -> usize {
        if !self.transactions.is_empty() {
            return 0;
        }
        let samples = [
            (TransactionKind::Income, 3500, "Salary", 0, "Monthly salary"),
            (TransactionKind::Expense, 1200, "Housing", 0, "Rent payment"),
            (TransactionKind::Expense, 350, "Food", 7, "Groceries"),
            (TransactionKind::Expense, 150, "Transportation", 14, "Gas and parking"),
            (TransactionKind::Income, 500, "Freelance", 10, "Web design project"),
        ];
        let now = Utc::now();
        for (kind, amount, category, days_ago, notes) in samples {
            let fields = NewTransaction::new(
                kind,
                Decimal::new(amount, 0),
                category,
                today - Duration::days(days_ago),
            )
            .with_notes(notes);
            let id = self.fresh_id();
            self.transactions
                .push(fields.into_transaction(id, now - Duration::days(days_ago)));
        }
        log::info!("seeded {} sample transactions", samples.len());
        self.persist();
        samples.len()
    }

    fn check_category(&self, kind: TransactionKind, category: &str) -> Result<()> {
        if self.options.strict_categories && !kind.allows(category) {
            return Err(StoreError::InvalidCategory {
                kind,
                category: category.to_string(),
            });
        }
        Ok(())
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

/// Newest first by `date`; ties keep collection order.
pub fn sorted_newest_first(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut out: Vec<&Transaction> = transactions.iter().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Millisecond timestamp followed by a random suffix, both base 36.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: u64 = rand::thread_rng().gen_range(36u64.pow(9)..36u64.pow(11));
    format!("{}{}", to_base36(millis), to_base36(suffix))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_alphanumeric())));
    }
}
