// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::models::TransactionKind;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Category '{category}' is not a valid {kind} category")]
    InvalidCategory {
        kind: TransactionKind,
        category: String,
    },

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine platform-specific data dir")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StoreError>;
