//! `kv_store` table bootstrap.
//!
//! The store has a single table, so the layout is one versioned `CREATE`
//! statement rather than a migration list.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Layout version written to `PRAGMA user_version` once `kv_store` exists.
pub const STORE_SCHEMA_VERSION: u32 = 1;

const KV_STORE_SQL: &str = include_str!("kv_store.sql");

/// Creates `kv_store` when the database predates it and checks the result.
///
/// # Errors
/// - `NewerStoreLayout` when `user_version` exceeds `STORE_SCHEMA_VERSION`.
/// - `MissingStoreTable` when the version is current but the table is gone.
pub fn ensure_store_schema(conn: &mut Connection) -> DbResult<()> {
    let found = store_schema_version(conn)?;
    if found > STORE_SCHEMA_VERSION {
        return Err(DbError::NewerStoreLayout {
            found,
            supported: STORE_SCHEMA_VERSION,
        });
    }

    if found < STORE_SCHEMA_VERSION {
        let tx = conn.transaction()?;
        tx.execute_batch(KV_STORE_SQL)?;
        tx.pragma_update(None, "user_version", STORE_SCHEMA_VERSION)?;
        tx.commit()?;
        info!(
            "event=store_schema module=db status=ok from_version={} to_version={}",
            found, STORE_SCHEMA_VERSION
        );
    }

    if !kv_store_exists(conn)? {
        return Err(DbError::MissingStoreTable);
    }
    Ok(())
}

/// Reads the layout version recorded in the database.
pub fn store_schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

fn kv_store_exists(conn: &Connection) -> DbResult<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store');",
        [],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}
