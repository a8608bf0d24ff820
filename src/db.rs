//! Database module for zencloud.
//!
//! Provides SQLite connectivity through a shared sqlx pool and creates the
//! metadata schema on startup.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::Result;

/// Database wrapper holding the shared connection pool.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database at the specified path.
    ///
    /// The database file and its parent directories are created when absent,
    /// and the schema is applied before the handle is returned.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening database at {:?}", path);

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    ///
    /// Uses a single connection that is never recycled, so the database
    /// lives as long as the pool.
    pub async fn open_in_memory() -> Result<Self> {
        debug!("Opening in-memory database");

        let options = SqliteConnectOptions::new().filename(":memory:");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the metadata schema if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS filemeta (
                id          TEXT PRIMARY KEY,
                filename    TEXT NOT NULL,
                extension   TEXT NOT NULL,
                upload_date TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        debug!("Schema is up to date");
        Ok(())
    }
}
