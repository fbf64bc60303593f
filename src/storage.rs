// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Durable key-value slot holding the serialized transaction collection.
//!
//! The whole collection lives under a single key as a JSON array. Reads fail
//! soft: a missing or corrupt slot loads as an empty collection.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::models::Transaction;

pub const TRANSACTIONS_KEY: &str = "expenseTrackerTransactions";
/// Reserved in the key namespace, nothing reads or writes it yet.
pub const BUDGETS_KEY: &str = "expenseTrackerBudgets";

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendbook", "spendbook"));

pub fn default_db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(StoreError::NoDataDir)?;
    Ok(proj.data_dir().join("spendbook.sqlite"))
}

/// A durable string-valued key-value medium.
pub trait Slot {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value table inside a SQLite database.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

impl Slot for SqliteSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-process slot. Nothing survives the value being dropped.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut slot = Self::new();
        slot.entries.insert(key.to_string(), value.to_string());
        slot
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load/save of the full collection over a [`Slot`].
pub struct Persistence<S: Slot> {
    slot: S,
}

impl<S: Slot> Persistence<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Never fails. Absent, unreadable and unparsable slots all yield an empty list.
    pub fn load(&self) -> Vec<Transaction> {
        let raw = match self.slot.read(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read {}: {}", TRANSACTIONS_KEY, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(txs) => {
                log::debug!("loaded {} transactions", txs.len());
                txs
            }
            Err(e) => {
                log::warn!("discarding unparsable {}: {}", TRANSACTIONS_KEY, e);
                Vec::new()
            }
        }
    }

    /// Overwrites the slot with `transactions`. Failures are logged, not
    /// returned; the result only reports whether the write landed.
    pub fn save(&mut self, transactions: &[Transaction]) -> bool {
        let outcome = serde_json::to_string(transactions)
            .map_err(StoreError::from)
            .and_then(|json| self.slot.write(TRANSACTIONS_KEY, &json));
        match outcome {
            Ok(()) => {
                log::debug!("saved {} transactions", transactions.len());
                true
            }
            Err(e) => {
                log::error!("could not save transactions: {}", e);
                false
            }
        }
    }
}
