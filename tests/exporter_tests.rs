// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendbook::commands::exporter;
use spendbook::{
    cli, MemorySlot, NewTransaction, Persistence, StoreOptions, Transaction, TransactionKind,
    TransactionStore,
};
use tempfile::tempdir;

fn store() -> TransactionStore<MemorySlot> {
    let mut store =
        TransactionStore::open(Persistence::new(MemorySlot::new()), StoreOptions::default());
    let entries = [
        (TransactionKind::Expense, 1234, "Food", (2025, 1, 9), Some("Corner shop")),
        (TransactionKind::Income, 300000, "Salary", (2025, 1, 2), None),
        (TransactionKind::Expense, 5000, "Utilities", (2025, 2, 1), None),
    ];
    for (kind, cents, category, (y, m, d), notes) in entries {
        let mut fields = NewTransaction::new(
            kind,
            Decimal::new(cents, 2),
            category,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        );
        if let Some(n) = notes {
            fields = fields.with_notes(n);
        }
        store.create(fields).unwrap();
    }
    store
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    let Some(("transactions", sub)) = export_m.subcommand() else {
        panic!("no transactions subcommand");
    };
    sub.clone()
}

#[test]
fn export_json_round_trips_month() {
    let store = store();
    let dir = tempdir().unwrap();
    let out = dir.path().join("jan.json");
    let out_str = out.to_string_lossy().to_string();
    let args = [
        "spendbook",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        out_str.as_str(),
        "--month",
        "2025-01",
    ];
    let m = cli::build_cli().get_matches_from(args);
    exporter::handle(&store, m.subcommand_matches("export").unwrap()).unwrap();

    let written: Vec<Transaction> =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let categories: Vec<&str> = written.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(categories, vec!["Salary", "Food"]);
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(raw[0]["type"], "income");
    assert!(raw[0].get("createdAt").is_some());
}

#[test]
fn export_csv_writes_header_and_rows() {
    let store = store();
    let dir = tempdir().unwrap();
    let out = dir.path().join("all.csv");
    let out_str = out.to_string_lossy().to_string();
    let m = export_matches(&["spendbook", "export", "transactions", "--out", out_str.as_str()]);
    let set = exporter::export_set(&store, &m).unwrap();
    assert_eq!(set.len(), 3);

    let top = cli::build_cli().get_matches_from(["spendbook", "export", "transactions", "--out", out_str.as_str()]);
    exporter::handle(&store, top.subcommand_matches("export").unwrap()).unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "type", "date", "category", "amount", "notes", "createdAt"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][3], "Food");
    assert_eq!(&rows[1][4], "12.34");
    assert_eq!(&rows[1][5], "Corner shop");
    assert_eq!(&rows[2][2], "2025-02-01");
}
