//! SQLite persistence handle.
//!
//! The handle only knows where the database lives. Every unit of work opens
//! its own connection and transaction through [`DbPool::with_session`], so no
//! connection is ever shared between requests.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Transaction};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a session waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct DbPool {
    path: PathBuf,
}

impl DbPool {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Build the handle and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let pool = Self::new(path);
        let conn = pool.connect()?;
        init_db(&conn)?;
        Ok(pool)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection to the database file.
    pub fn connect(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Run `func` inside one session: a dedicated connection and transaction.
    ///
    /// The transaction is committed when `func` returns `Ok` and rolled back
    /// otherwise. A panic inside `func` drops the transaction, which also
    /// rolls it back.
    pub fn with_session<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        match func(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rb) = tx.rollback() {
                    tracing::warn!(error = %rb, "rollback failed");
                }
                Err(e)
            }
        }
    }
}
