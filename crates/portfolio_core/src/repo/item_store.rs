//! Item store contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Persist each category's ordered sequence under its versioned key.
//! - Mask storage failures behind fallback values and warning logs.
//!
//! # Invariants
//! - `save` overwrites the whole sequence for a key synchronously.
//! - `load` returns the stored sequence only when it is present and a JSON
//!   array of items; otherwise it returns a fresh copy of the fallback.
//! - Read and write failures are logged at `warn` and never propagated
//!   through the `ItemStore` trait.

use crate::db::DbError;
use crate::model::item::Item;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised by fallible store accessors.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode items: {err}"),
            Self::InvalidData(message) => write!(f, "invalid stored item data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Best-effort durable storage for named item sequences.
pub trait ItemStore {
    /// Returns the stored sequence for `key`, or a copy of `fallback`.
    fn load(&self, key: &str, fallback: &[Item]) -> Vec<Item>;
    /// Overwrites the stored sequence for `key`. Failures are swallowed.
    fn save(&self, key: &str, items: &[Item]);
}

/// SQLite-backed item store over the `kv_store` table.
pub struct SqliteItemStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemStore<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Reads the raw JSON text stored under `key`.
    pub fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Writes raw JSON text under `key`, replacing any previous value.
    pub fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    /// Fallible load: `Ok(None)` when the key has never been written.
    pub fn try_load(&self, key: &str) -> RepoResult<Option<Vec<Item>>> {
        match self.read_value(key)? {
            Some(raw) => decode_items(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Fallible save.
    pub fn try_save(&self, key: &str, items: &[Item]) -> RepoResult<()> {
        let raw = serde_json::to_string(items).map_err(RepoError::Encode)?;
        self.write_value(key, &raw)
    }
}

impl ItemStore for SqliteItemStore<'_> {
    fn load(&self, key: &str, fallback: &[Item]) -> Vec<Item> {
        match self.try_load(key) {
            Ok(Some(items)) => {
                debug!(
                    "event=store_load module=repo status=ok key={} count={}",
                    key,
                    items.len()
                );
                items
            }
            Ok(None) => {
                debug!("event=store_load module=repo status=ok key={key} source=fallback");
                fallback.to_vec()
            }
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=error key={} source=fallback error={}",
                    key, err
                );
                fallback.to_vec()
            }
        }
    }

    fn save(&self, key: &str, items: &[Item]) {
        match self.try_save(key, items) {
            Ok(()) => debug!(
                "event=store_save module=repo status=ok key={} count={}",
                key,
                items.len()
            ),
            Err(err) => warn!(
                "event=store_save module=repo status=error key={} error={}",
                key, err
            ),
        }
    }
}

fn decode_items(raw: &str) -> RepoResult<Vec<Item>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|err| RepoError::InvalidData(format!("unparseable JSON: {err}")))?;
    if !value.is_array() {
        return Err(RepoError::InvalidData(
            "stored value is not a sequence".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|err| RepoError::InvalidData(format!("malformed item in sequence: {err}")))
}
