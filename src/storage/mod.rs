// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Persistent state storage.
//!
//! This module provides the key-value abstraction the playlist persists its
//! state through, addressed by two fixed logical keys: one for the
//! serialized song list and one for the serialized current index.
//!
//! Backends implement [`KeyValueStore`] and can be swapped without touching
//! the playlist's contract. [`SqliteStore`] is the production backend, a
//! single `kv` table in a SQLite database file. [`MemoryStore`] backs tests
//! and shares its map across clones so a "session restart" can be simulated
//! by loading a fresh playlist against the same data.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, params};
use thiserror::Error;

/// Key holding the serialized song list (a JSON array of songs).
pub(crate) const PLAYLIST_KEY: &str = "playlist";

/// Key holding the serialized current index (decimal text).
pub(crate) const CURRENT_INDEX_KEY: &str = "current_index";

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Durable key-value storage for playlist state.
pub(crate) trait KeyValueStore {
    /// Returns the stored value for `key`. A key that was never written is
    /// `None`, never an error.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// SQLite-backed store.
pub(crate) struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and ensures the `kv` table
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the schema
    /// cannot be created.
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?")
            .ok()?;
        stmt.query_row([key], |row| row.get(0)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let sql = "
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key)
            DO UPDATE SET value = ?2";

        let mut stmt = self.conn.prepare_cached(sql)?;
        stmt.execute(params![key, value])?;

        Ok(())
    }
}

/// In-memory store.
///
/// Clones share the same backing map, so state written through one handle is
/// visible through every other.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("state.db")).unwrap();

        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn sqlite_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SqliteStore::open(dir.path().join("state.db")).unwrap();

        store.set(PLAYLIST_KEY, "[]").unwrap();

        assert_eq!(store.get(PLAYLIST_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn sqlite_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SqliteStore::open(dir.path().join("state.db")).unwrap();

        store.set(CURRENT_INDEX_KEY, "1").unwrap();
        store.set(CURRENT_INDEX_KEY, "2").unwrap();

        assert_eq!(store.get(CURRENT_INDEX_KEY).as_deref(), Some("2"));
    }

    #[test]
    fn sqlite_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set(PLAYLIST_KEY, "persisted").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get(PLAYLIST_KEY).as_deref(), Some("persisted"));
    }

    #[test]
    fn memory_clones_share_state() {
        let mut store = MemoryStore::new();
        let other = store.clone();

        store.set("key", "value").unwrap();

        assert_eq!(other.get("key").as_deref(), Some("value"));
    }
}
