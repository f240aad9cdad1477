//! Document store access for users, journals, and insights.
//!
//! This module provides the `DocumentStore` trait — the seam through which the
//! pipeline reads collections and commits the insight batch — and `Store`, the
//! SQLite-backed implementation. Collections map to tables; reads return whole
//! collections in insertion order; the insight batch commits as one
//! transaction with full-document replace semantics per uid.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `records`: Record types and collection read/write operations
//!
//! # Example
//!
//! ```no_run
//! use glean::store::{DocumentStore, Store};
//! use std::path::Path;
//!
//! let store = Store::open(Path::new("/tmp/glean.db"))?;
//! store.initialize_schema()?;
//! let users = store.list_users()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod records;
pub mod schema;

pub use records::{Insight, JournalEntry, User};

use crate::errors::{AppResult, StoreError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// The document store seam used by the pipeline.
///
/// The pipeline takes this as an explicitly constructed, injected handle
/// rather than reaching for a process-global client, which also lets tests
/// substitute a stub store.
pub trait DocumentStore {
    /// Fetches every user record in the users collection.
    fn list_users(&self) -> AppResult<Vec<User>>;

    /// Fetches every journal entry in the journals collection.
    fn list_journals(&self) -> AppResult<Vec<JournalEntry>>;

    /// Commits one atomic batch of insight documents, one full-document
    /// replace per uid. All-or-nothing: a failed commit persists nothing.
    fn write_insights(&self, batch: &[Insight]) -> AppResult<()>;
}

/// SQLite-backed store handle with connection pooling.
///
/// Constructed once per process and shared by reference for the lifetime of
/// the invocation.
pub struct Store {
    pool: Pool<SqliteConnectionManager>,
}

impl Store {
    /// Opens or creates the store at the given path.
    ///
    /// The parent directory is created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the connection
    /// pool cannot be initialized.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening store at: {:?}", db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Custom(format!(
                        "Failed to create store directory {:?}: {}",
                        parent, e
                    ))
                })?;
            }
        }

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(5)
            .build(manager)
            .map_err(StoreError::Pool)?;

        // Verify the store is reachable before handing the pool out
        let conn = pool.get().map_err(StoreError::Pool)?;
        conn.execute_batch("PRAGMA journal_mode = WAL")
            .map_err(StoreError::Sqlite)?;
        drop(conn);

        info!("Store opened successfully");
        Ok(Store { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| StoreError::Pool(e).into())
    }

    /// Initializes the store schema.
    ///
    /// Creates all collections if they don't exist. Idempotent and safe to
    /// call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Store schema initialized");
        Ok(())
    }
}

impl DocumentStore for Store {
    fn list_users(&self) -> AppResult<Vec<User>> {
        let conn = self.get_conn()?;
        records::list_users(&conn)
    }

    fn list_journals(&self) -> AppResult<Vec<JournalEntry>> {
        let conn = self.get_conn()?;
        records::list_journals(&conn)
    }

    fn write_insights(&self, batch: &[Insight]) -> AppResult<()> {
        let mut conn = self.get_conn()?;
        records::replace_insights(&mut conn, batch)
    }
}
