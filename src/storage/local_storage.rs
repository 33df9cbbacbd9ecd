//! Local key-value storage.
//!
//! Implements `LocalStorageTrait` — a `localStorage`-style string store
//! (get/set/remove by key), backed by SQLite via `rusqlite`.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use crate::database::Database;
use crate::types::errors::StorageError;

/// Trait defining the key-value storage surface.
///
/// Mirrors the DOM Storage API: string keys, string values, no TTLs.
/// Implementations report every backend failure as
/// [`StorageError::Unavailable`]; callers decide whether to absorb it.
pub trait LocalStorageTrait {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Local storage backed by a shared SQLite database.
pub struct LocalStorage {
    db: Arc<Database>,
}

impl LocalStorage {
    /// Creates a new `LocalStorage` over the shared database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl LocalStorageTrait for LocalStorage {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.db.connection().query_row(
            "SELECT value FROM local_storage WHERE key = ?1",
            params![key],
            |row| row.get(0),
        ) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    /// Stores `value` under `key`, overwriting any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value, Self::now()],
            )
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(())
    }

    /// Removes `key` and its value. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.db
            .connection()
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(())
    }
}
