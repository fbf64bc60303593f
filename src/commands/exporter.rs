// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::models::Transaction;
use crate::storage::Slot;
use crate::store::TransactionStore;
use crate::utils::{fmt_money, parse_period};

pub fn handle<S: Slot>(store: &TransactionStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

/// Oldest first; same-day transactions keep the order they were recorded in.
pub fn export_set<S: Slot>(
    store: &TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let mut txs = match sub.get_one::<String>("month") {
        Some(m) => store.query_by_period(parse_period(m)?),
        None => store.all().to_vec(),
    };
    txs.sort_by_key(|t| t.date);
    Ok(txs)
}

fn export_transactions<S: Slot>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .context("Missing --out")?;
    let txs = export_set(store, sub)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Open {} for writing", out))?;
            wtr.write_record([
                "id", "type", "date", "category", "amount", "notes", "createdAt",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.clone(),
                    t.kind.to_string(),
                    t.date.to_string(),
                    t.category.clone(),
                    fmt_money(t.amount),
                    t.notes.clone().unwrap_or_default(),
                    t.created_at.to_rfc3339(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
