// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent Storage Module
//!
//! A namespaced key-value store on top of SQLite. Every value is JSON text.
//! Multi-key writes and deletes run inside a single transaction so a failed
//! write never leaves half of a group persisted.

#[cfg(feature = "testing")]
pub mod keys;
#[cfg(not(feature = "testing"))]
pub(crate) mod keys;

mod error;
pub mod migration;

pub use error::StorageError;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// SQLite-based key-value storage.
pub struct Storage {
    conn: Connection,
    namespace: String,
}

impl Storage {
    /// Opens or creates a storage database at the given path.
    pub fn open<P: AsRef<Path>>(path: P, namespace: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let storage = Storage {
            conn,
            namespace: namespace.to_string(),
        };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// Creates an in-memory storage (for testing).
    pub fn in_memory(namespace: &str) -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage {
            conn,
            namespace: namespace.to_string(),
        };
        storage.run_migrations()?;
        Ok(storage)
    }

    fn run_migrations(&self) -> Result<(), StorageError> {
        let migrations = migration::all_migrations();
        migration::MigrationRunner::run(&self.conn, &migrations)
    }

    /// Returns the current schema version.
    pub fn schema_version(&self) -> Result<u32, StorageError> {
        migration::MigrationRunner::current_version(&self.conn)
    }

    /// The namespace every key is stored under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn physical_key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }

    /// Reads the raw JSON text stored under `key`.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![self.physical_key(key)],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Stores raw text under `key`, replacing any previous value.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![self.physical_key(key), value, unix_now() as i64],
        )?;
        Ok(())
    }

    /// Reads and deserializes the JSON value stored under `key`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Serializes `value` as JSON and stores it under `key`.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }

    /// Writes several entries atomically.
    pub fn write_batch(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        let now = unix_now() as i64;
        for (key, value) in entries {
            tx.execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![self.physical_key(key), value, now],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Removes `key`. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let removed = self.conn.execute(
            "DELETE FROM kv WHERE key = ?1",
            params![self.physical_key(key)],
        )?;
        Ok(removed > 0)
    }

    /// Removes several keys atomically.
    pub fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        for key in keys {
            tx.execute(
                "DELETE FROM kv WHERE key = ?1",
                params![self.physical_key(key)],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Lists the logical keys present in this namespace.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let prefix = format!("{}:", self.namespace);
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv WHERE substr(key, 1, ?1) = ?2 ORDER BY key")?;
        let rows = stmt.query_map(params![prefix.chars().count() as i64, prefix], |row| {
            row.get::<_, String>(0)
        })?;

        let mut keys = Vec::new();
        for key in rows {
            let key = key?;
            if let Some(logical) = key.strip_prefix(&prefix) {
                keys.push(logical.to_string());
            }
        }
        Ok(keys)
    }
}

/// Seconds since the UNIX epoch, saturating to 0 on a clock before 1970.
pub(crate) fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
