//! File metadata repository for zencloud.
//!
//! CRUD operations for file records in the database.

use sqlx::SqlitePool;

use super::record::FileRecord;
use crate::{Result, ZencloudError};

/// Repository for file record operations.
pub struct FileRecordRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FileRecordRepository<'a> {
    /// Create a new FileRecordRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a fully formed record.
    ///
    /// The id is assigned by the caller, so a duplicate fails on the
    /// primary key.
    pub async fn insert(&self, record: &FileRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO filemeta (id, filename, extension, upload_date)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.filename)
        .bind(&record.extension)
        .bind(record.upload_date)
        .execute(self.pool)
        .await
        .map_err(|e| ZencloudError::Database(e.to_string()))?;

        Ok(())
    }

    /// Get a record by id.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<FileRecord>> {
        let result = sqlx::query_as::<_, FileRecord>(
            "SELECT id, filename, extension, upload_date
             FROM filemeta WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| ZencloudError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all records, newest upload first.
    pub async fn list(&self) -> Result<Vec<FileRecord>> {
        let result = sqlx::query_as::<_, FileRecord>(
            "SELECT id, filename, extension, upload_date
             FROM filemeta ORDER BY upload_date DESC, id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| ZencloudError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Delete a record by id.
    ///
    /// Returns true if a row was deleted.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM filemeta WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| ZencloudError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
