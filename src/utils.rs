// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionKind};
use crate::period::Period;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_period(s: &str) -> Result<Period> {
    s.parse::<Period>()
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Amounts are entered as positive quantities; the type carries the sign.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        bail!("Amount must be greater than zero, got '{}'", s);
    }
    Ok(d)
}

pub fn parse_kind(s: &str) -> Result<TransactionKind> {
    s.parse::<TransactionKind>().map_err(anyhow::Error::msg)
}

pub fn fmt_money(d: Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

/// Income with a leading `+`, expense with `-`.
pub fn fmt_signed(tx: &Transaction) -> String {
    let signed = tx.signed_amount();
    if signed.is_sign_negative() {
        fmt_money(signed)
    } else {
        format!("+{}", fmt_money(signed))
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_must_be_positive() {
        assert!(parse_amount("12.50").is_ok());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn money_formats_two_places() {
        assert_eq!(fmt_money(Decimal::new(35, 0)), "35.00");
        assert_eq!(fmt_money(Decimal::new(12346, 3)), "12.35");
    }

    #[test]
    fn signed_amount_follows_kind() {
        let mut tx = Transaction {
            id: "a1".to_string(),
            kind: TransactionKind::Expense,
            amount: Decimal::new(5, 1),
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            notes: None,
            created_at: chrono::Utc::now(),
        };
        assert_eq!(fmt_signed(&tx), "-0.50");
        tx.kind = TransactionKind::Income;
        assert_eq!(fmt_signed(&tx), "+0.50");
    }
}
