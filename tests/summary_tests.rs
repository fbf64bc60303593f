// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use spendbook::summary::BalanceSign;
use spendbook::{category_totals, summarize, Summary, Transaction, TransactionKind};

fn tx(kind: TransactionKind, amount: Decimal, category: &str) -> Transaction {
    Transaction {
        id: format!("{}-{}", category, amount),
        kind,
        amount,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        notes: None,
        created_at: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
    }
}

fn d(n: i64) -> Decimal {
    Decimal::from(n)
}

#[test]
fn empty_input_is_all_zero() {
    assert_eq!(summarize(&[]), Summary::default());
    let s = summarize(&[]);
    assert_eq!(s.count, 0);
    assert!(s.balance.is_zero());
    assert!(category_totals(&[]).is_empty());
}

#[test]
fn summary_splits_income_and_expense() {
    let txs = vec![
        tx(TransactionKind::Income, d(100), "Salary"),
        tx(TransactionKind::Expense, d(40), "Food"),
        tx(TransactionKind::Expense, d(10), "Food"),
    ];
    let s = summarize(&txs);
    assert_eq!(s.total_income, d(100));
    assert_eq!(s.total_expense, d(50));
    assert_eq!(s.balance, d(50));
    assert_eq!(s.count, 3);
    assert_eq!(s.balance_sign(), BalanceSign::Positive);
}

#[test]
fn balance_can_go_negative() {
    let txs = vec![
        tx(TransactionKind::Income, d(10), "Gifts"),
        tx(TransactionKind::Expense, Decimal::new(1050, 2), "Shopping"),
    ];
    let s = summarize(&txs);
    assert_eq!(s.balance, Decimal::new(-50, 2));
    assert_eq!(s.balance_sign(), BalanceSign::Negative);
}

#[test]
fn decimal_amounts_sum_exactly() {
    let txs: Vec<Transaction> = (0..10)
        .map(|_| tx(TransactionKind::Expense, Decimal::new(1, 1), "Food"))
        .collect();
    assert_eq!(summarize(&txs).total_expense, Decimal::ONE);
}

#[test]
fn category_totals_keep_first_seen_order() {
    let txs = vec![
        tx(TransactionKind::Expense, d(20), "Food"),
        tx(TransactionKind::Expense, d(5), "Food"),
        tx(TransactionKind::Expense, d(100), "Housing"),
    ];
    let totals = category_totals(&txs);
    assert_eq!(totals.categories(), vec!["Food", "Housing"]);
    assert_eq!(totals.get("Food"), Some(d(25)));
    assert_eq!(totals.get("Housing"), Some(d(100)));
    assert_eq!(totals.total(), d(125));
}

#[test]
fn category_totals_ignore_income() {
    let txs = vec![
        tx(TransactionKind::Income, d(500), "Other"),
        tx(TransactionKind::Expense, d(30), "Utilities"),
    ];
    let totals = category_totals(&txs);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("Other"), None);
}

#[test]
fn category_totals_serialize_in_order() {
    let txs = vec![
        tx(TransactionKind::Expense, d(3), "Transportation"),
        tx(TransactionKind::Expense, d(1), "Education"),
    ];
    let json = serde_json::to_string(&category_totals(&txs)).unwrap();
    assert_eq!(json, r#"{"Transportation":3.0,"Education":1.0}"#);
}

#[test]
fn shares_round_to_whole_percent() {
    let txs = vec![
        tx(TransactionKind::Expense, d(1), "Food"),
        tx(TransactionKind::Expense, d(1), "Housing"),
        tx(TransactionKind::Expense, d(1), "Shopping"),
        tx(TransactionKind::Expense, d(5), "Education"),
    ];
    let totals = category_totals(&txs);
    let shares = totals.shares();
    assert_eq!(
        shares,
        vec![
            ("Food", Decimal::new(13, 0)),
            ("Housing", Decimal::new(13, 0)),
            ("Shopping", Decimal::new(13, 0)),
            ("Education", Decimal::new(63, 0)),
        ]
    );
}

#[test]
fn totals_saturate_instead_of_overflowing() {
    let txs = vec![
        tx(TransactionKind::Expense, Decimal::MAX, "Housing"),
        tx(TransactionKind::Expense, Decimal::MAX, "Housing"),
        tx(TransactionKind::Income, Decimal::MAX, "Salary"),
        tx(TransactionKind::Income, Decimal::ONE, "Gifts"),
    ];
    let s = summarize(&txs);
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.count, 4);

    let totals = category_totals(&txs);
    assert_eq!(totals.get("Housing"), Some(Decimal::MAX));
    assert_eq!(totals.total(), Decimal::MAX);
}

#[test]
fn balance_saturates_on_huge_expenses() {
    let txs = vec![
        tx(TransactionKind::Expense, Decimal::MAX, "Housing"),
        tx(TransactionKind::Expense, Decimal::MAX, "Food"),
    ];
    assert_eq!(summarize(&txs).balance, Decimal::MIN);
    assert_eq!(summarize(&txs).balance_sign(), BalanceSign::Negative);
}

#[test]
fn shares_of_huge_amounts_stay_in_range() {
    let big = Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0);
    let txs = vec![
        tx(TransactionKind::Expense, big, "Housing"),
        tx(TransactionKind::Expense, big, "Food"),
    ];
    let totals = category_totals(&txs);
    let shares = totals.shares();
    assert_eq!(
        shares,
        vec![
            ("Housing", Decimal::new(50, 0)),
            ("Food", Decimal::new(50, 0)),
        ]
    );

    let single = vec![tx(TransactionKind::Expense, Decimal::MAX, "Shopping")];
    assert_eq!(
        category_totals(&single).shares(),
        vec![("Shopping", Decimal::ONE_HUNDRED)]
    );
}

#[test]
fn summary_json_uses_numbers() {
    let txs = vec![
        tx(TransactionKind::Income, Decimal::new(1050, 2), "Salary"),
        tx(TransactionKind::Expense, Decimal::new(250, 2), "Food"),
    ];
    let v = serde_json::to_value(summarize(&txs)).unwrap();
    assert_eq!(v["totalIncome"], 10.5);
    assert_eq!(v["totalExpense"], 2.5);
    assert_eq!(v["balance"], 8.0);
    assert_eq!(v["count"], 2);
}
