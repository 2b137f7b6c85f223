//! Schema migrations.
//!
//! The applied version is tracked in SQLite's `user_version` header field,
//! so the database holds no bookkeeping table next to `items`.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

/// Ordered list of schema steps. `IF NOT EXISTS` keeps step 1 compatible
/// with databases whose `items` table was created by an earlier deployment.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_items_table",
    sql: r#"
        CREATE TABLE IF NOT EXISTS items (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        VARCHAR(256),
            quantity    INTEGER,
            description VARCHAR(256),
            date_added  DATETIME
        );
    "#,
}];

/// Current schema version recorded in the database header.
pub fn schema_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Latest version known to this build.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.name, e)))?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", m.version))?;
        tx.commit()?;

        tracing::info!(version = m.version, name = m.name, "migration applied");
    }

    Ok(())
}
