// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::TransactionKind;
use crate::utils::{parse_kind, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let kinds = match m.get_one::<String>("type") {
        Some(t) => vec![parse_kind(t)?],
        None => vec![TransactionKind::Income, TransactionKind::Expense],
    };
    let mut data = Vec::new();
    for kind in kinds {
        for name in kind.categories() {
            data.push(vec![kind.to_string(), name.to_string()]);
        }
    }
    println!("{}", pretty_table(&["Type", "Category"], data));
    Ok(())
}
