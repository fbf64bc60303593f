// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::selected_period;
use crate::period::Period;
use crate::storage::Slot;
use crate::store::TransactionStore;
use crate::summary::{BalanceSign, CategoryTotals, Summary};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle<S: Slot>(store: &TransactionStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub month: String,
    #[serde(flatten)]
    pub summary: Summary,
}

pub fn summary_report<S: Slot>(
    store: &TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<SummaryReport> {
    let period = selected_period(store, sub)?;
    Ok(SummaryReport {
        month: period.key(),
        summary: store.summary_for(period),
    })
}

fn summary<S: Slot>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let report = summary_report(store, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let s = report.summary;
    let balance_note = match s.balance_sign() {
        BalanceSign::Negative => "overspent",
        BalanceSign::Zero => "even",
        BalanceSign::Positive => "remaining",
    };
    let title = selected_period(store, sub)?.to_string();
    let rows = vec![
        vec!["Total Income".to_string(), fmt_money(s.total_income)],
        vec!["Total Expenses".to_string(), fmt_money(s.total_expense)],
        vec![
            format!("Balance ({})", balance_note),
            fmt_money(s.balance),
        ],
        vec!["Transactions".to_string(), s.count.to_string()],
    ];
    println!("{}", pretty_table(&[title.as_str(), "Amount"], rows));
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub spent: String,
    pub share: String,
}

pub fn category_rows(totals: &CategoryTotals) -> Vec<CategoryRow> {
    totals
        .iter()
        .zip(totals.shares())
        .map(|((category, spent), (_, share))| CategoryRow {
            category: category.to_string(),
            spent: fmt_money(spent),
            share: format!("{}%", share),
        })
        .collect()
}

pub fn category_totals<S: Slot>(
    store: &TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<(Period, CategoryTotals)> {
    let period = selected_period(store, sub)?;
    Ok((period, store.category_totals_for(period)))
}

fn categories<S: Slot>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let (period, totals) = category_totals(store, sub)?;
    if sub.get_flag("json") || sub.get_flag("jsonl") {
        maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)?;
        return Ok(());
    }
    if totals.is_empty() {
        println!("No expenses in {}", period);
        return Ok(());
    }
    let rows: Vec<Vec<String>> = category_rows(&totals)
        .into_iter()
        .map(|r| vec![r.category, r.spent, r.share])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    Ok(())
}
