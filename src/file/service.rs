//! File service for zencloud.
//!
//! High-level file operations composing the blob store and the metadata
//! repository: store, lookup, list and remove.

use std::path::PathBuf;

use crate::db::Database;
use crate::{Result, ZencloudError};

use super::record::FileRecord;
use super::repository::FileRecordRepository;
use super::storage::BlobStorage;

/// File service coordinating the two stores.
///
/// Each operation runs its blob and metadata steps in sequence without a
/// surrounding transaction, so a failure between the two leaves the stores
/// divergent. The failure modes are documented per operation.
pub struct FileService<'a> {
    db: &'a Database,
    storage: &'a BlobStorage,
}

impl<'a> FileService<'a> {
    /// Create a new FileService.
    pub fn new(db: &'a Database, storage: &'a BlobStorage) -> Self {
        Self { db, storage }
    }

    /// Store an uploaded file: blob write first, then the metadata insert.
    ///
    /// No compensating cleanup: when the insert fails, the blob stays on
    /// disk with no record pointing at it.
    pub async fn store(&self, filename: &str, content: &[u8]) -> Result<FileRecord> {
        let record = FileRecord::new(filename);

        self.storage.save(&record.stored_name(), content)?;
        FileRecordRepository::new(self.db.pool())
            .insert(&record)
            .await?;

        tracing::info!(
            id = %record.id,
            filename = %record.filename,
            size = content.len(),
            "file stored"
        );
        Ok(record)
    }

    /// Look up the metadata record for an id.
    pub async fn lookup(&self, id: &str) -> Result<Option<FileRecord>> {
        FileRecordRepository::new(self.db.pool())
            .get_by_id(id)
            .await
    }

    /// List all stored files, newest upload first.
    pub async fn list(&self) -> Result<Vec<FileRecord>> {
        FileRecordRepository::new(self.db.pool()).list().await
    }

    /// Remove a file: blob first, then the metadata row.
    ///
    /// A blob removal failure aborts before the row is touched, so the
    /// operation can be retried. A row deletion failure afterwards leaves a
    /// record pointing at nothing.
    pub async fn remove(&self, id: &str) -> Result<FileRecord> {
        let record = self
            .lookup(id)
            .await?
            .ok_or_else(|| ZencloudError::NotFound("file".to_string()))?;

        self.storage.remove(&record.stored_name())?;
        FileRecordRepository::new(self.db.pool())
            .delete(&record.id)
            .await?;

        tracing::info!(id = %record.id, "file deleted");
        Ok(record)
    }

    /// Full on-disk path of the blob for a record.
    pub fn blob_path(&self, record: &FileRecord) -> PathBuf {
        self.storage.blob_path(&record.stored_name())
    }
}
