// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod period;
pub mod storage;
pub mod store;
pub mod summary;
pub mod utils;

pub use error::{Result, StoreError};
pub use models::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
pub use period::Period;
pub use storage::{MemorySlot, Persistence, Slot, SqliteSlot};
pub use store::{StoreOptions, TransactionStore};
pub use summary::{category_totals, summarize, CategoryTotals, Summary};
