// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::period::Period;
use crate::storage::Slot;
use crate::store::TransactionStore;
use crate::utils::pretty_table;

/// Same window as the month picker: this calendar year and last, newest first.
pub fn handle<S: Slot>(store: &TransactionStore<S>, _m: &clap::ArgMatches) -> Result<()> {
    let selected = store.period();
    let data: Vec<Vec<String>> = Period::picker(Period::current().year())
        .into_iter()
        .map(|p| {
            let mark = if p == selected { "*" } else { "" };
            vec![p.key(), p.to_string(), mark.to_string()]
        })
        .collect();
    println!("{}", pretty_table(&["Key", "Month", ""], data));
    Ok(())
}
