//! Item store database bootstrap.
//!
//! # Responsibility
//! - Open the SQLite connection that backs `SqliteItemStore`.
//! - Make sure the `kv_store` table exists before any item is read or written.
//!
//! # Invariants
//! - The store layout version lives in `PRAGMA user_version`.
//! - A database written by a newer build is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or preparing the item store database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a build with a newer store layout.
    NewerStoreLayout { found: u32, supported: u32 },
    /// Layout version claims the table exists but it does not.
    MissingStoreTable,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "item store database error: {err}"),
            Self::NewerStoreLayout { found, supported } => write!(
                f,
                "item store layout v{found} was written by a newer build (this build reads up to v{supported})"
            ),
            Self::MissingStoreTable => {
                write!(f, "item store table `kv_store` is missing after bootstrap")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
