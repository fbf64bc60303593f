// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::period::Period;
use crate::storage::Slot;
use crate::store::TransactionStore;
use crate::utils::parse_period;

pub mod categories;
pub mod exporter;
pub mod months;
pub mod reports;
pub mod transactions;

/// `--month` when given, otherwise the store's selected period.
pub(crate) fn selected_period<S: Slot>(
    store: &TransactionStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Period> {
    match sub.get_one::<String>("month") {
        Some(m) => parse_period(m),
        None => Ok(store.period()),
    }
}
