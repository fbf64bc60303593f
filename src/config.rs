// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::env;
use std::path::PathBuf;

use crate::error::Result;
use crate::storage::default_db_path;
use crate::store::StoreOptions;

pub const ENV_DB: &str = "SPENDBOOK_DB";
pub const ENV_STRICT: &str = "SPENDBOOK_STRICT_CATEGORIES";
pub const ENV_NO_SEED: &str = "SPENDBOOK_NO_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub strict_categories: bool,
    /// Populate sample transactions when the store opens empty.
    pub seed_sample: bool,
}

impl Config {
    /// Defaults, then environment, then the explicit overrides.
    pub fn resolve(db_override: Option<PathBuf>, strict_override: bool) -> Result<Self> {
        let db_path = match db_override.or_else(|| env::var_os(ENV_DB).map(PathBuf::from)) {
            Some(p) => p,
            None => default_db_path()?,
        };
        Ok(Self {
            db_path,
            strict_categories: strict_override || env_flag(ENV_STRICT),
            seed_sample: !env_flag(ENV_NO_SEED),
        })
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            strict_categories: self.strict_categories,
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| parse_flag(&v)).unwrap_or(false)
}

fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
