// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::commands::selected_period;
use crate::models::{NewTransaction, Transaction, TransactionPatch};
use crate::storage::Slot;
use crate::store::{sorted_newest_first, TransactionStore};
use crate::utils::{
    fmt_money, fmt_signed, maybe_print_json, parse_amount, parse_date, parse_kind, pretty_table,
};

pub fn handle<S: Slot>(store: &mut TransactionStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Validated fields for a new transaction. `today` fills a missing date.
pub fn new_from_args(sub: &clap::ArgMatches, today: NaiveDate) -> Result<NewTransaction> {
    let kind = parse_kind(required(sub, "type")?)?;
    let amount = parse_amount(required(sub, "amount")?)?;
    let category = required(sub, "category")?.trim();
    if category.is_empty() {
        bail!("Category must not be empty");
    }
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today,
    };
    let mut fields = NewTransaction::new(kind, amount, category, date);
    if let Some(notes) = sub.get_one::<String>("notes") {
        fields = fields.with_notes(notes.trim());
    }
    Ok(fields)
}

pub fn patch_from_args(sub: &clap::ArgMatches) -> Result<TransactionPatch> {
    let mut patch = TransactionPatch::default();
    if let Some(t) = sub.get_one::<String>("type") {
        patch.kind = Some(parse_kind(t)?);
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_amount(a)?);
    }
    if let Some(c) = sub.get_one::<String>("category") {
        patch.category = Some(c.trim().to_string());
    }
    if let Some(d) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(d)?);
    }
    if let Some(n) = sub.get_one::<String>("notes") {
        let n = n.trim();
        patch.notes = Some(if n.is_empty() { None } else { Some(n.to_string()) });
    }
    Ok(patch)
}

fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    match sub.get_one::<String>(name) {
        Some(v) => Ok(v.as_str()),
        None => bail!("Missing --{}", name),
    }
}

fn add<S: Slot>(store: &mut TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let fields = new_from_args(sub, today)?;
    let tx = store.create(fields)?;
    println!(
        "Recorded {} {} ({}) on {} [{}]",
        tx.kind,
        fmt_money(tx.amount),
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

fn edit<S: Slot>(store: &mut TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let patch = patch_from_args(sub)?;
    if patch.is_empty() {
        bail!("Nothing to change for '{}'", id);
    }
    match store.update(id, &patch)? {
        Some(tx) => println!("Updated {}", tx.id),
        None => bail!("Transaction '{}' not found", id),
    }
    Ok(())
}

fn remove<S: Slot>(store: &mut TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    if !store.delete(id) {
        bail!("Transaction '{}' not found", id);
    }
    println!("Deleted {}", id);
    Ok(())
}

fn show<S: Slot>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let Some(tx) = store.get_by_id(id) else {
        bail!("Transaction '{}' not found", id);
    };
    let rows = vec![
        vec!["id".to_string(), tx.id.clone()],
        vec!["type".to_string(), tx.kind.to_string()],
        vec!["amount".to_string(), fmt_money(tx.amount)],
        vec!["category".to_string(), tx.category.clone()],
        vec!["date".to_string(), tx.date.to_string()],
        vec!["notes".to_string(), tx.notes.clone().unwrap_or_default()],
        vec!["created".to_string(), tx.created_at.to_rfc3339()],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

fn list<S: Slot>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions for this month");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.description.clone(),
                r.category.clone(),
                r.amount.clone(),
                r.id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Category", "Amount", "Id"], rows)
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub notes: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            description: t.description().to_string(),
            amount: fmt_signed(t),
            notes: t.notes.clone().unwrap_or_default(),
        }
    }
}

/// The selected month's transactions, newest first, capped by `--limit`.
pub fn query_rows<S: Slot>(
    store: &TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let period = selected_period(store, sub)?;
    let txs = store.query_by_period(period);
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(sorted_newest_first(&txs)
        .into_iter()
        .take(limit)
        .map(TransactionRow::from)
        .collect())
}
