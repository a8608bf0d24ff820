//! Blob storage for zencloud.
//!
//! Physical file storage in a single flat directory. Blobs are named
//! `<id><extension>`, so the metadata record alone locates the content.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// On-disk blob store.
///
/// ```text
/// {base_path}/
/// ├── 1f0e97a2-6f3c-4b2e-9f14-02a1d2b7c6aa.txt
/// ├── 5b8c21de-90ab-4cde-8123-456789abcdef.tar.gz
/// └── ...
/// ```
#[derive(Debug, Clone)]
pub struct BlobStorage {
    /// Base directory for blob storage.
    base_path: PathBuf,
}

impl BlobStorage {
    /// Create a new BlobStorage with the given base path.
    ///
    /// The base directory will be created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the full path for a stored name.
    pub fn blob_path(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }

    /// Write content under the given stored name, replacing any existing blob.
    pub fn save(&self, stored_name: &str, content: &[u8]) -> Result<()> {
        fs::write(self.blob_path(stored_name), content)?;
        Ok(())
    }

    /// Remove a blob.
    ///
    /// A missing blob is an I/O error, not a clean no-op: delete callers
    /// treat any removal failure as fatal and keep the metadata row.
    pub fn remove(&self, stored_name: &str) -> Result<()> {
        fs::remove_file(self.blob_path(stored_name))?;
        Ok(())
    }

    /// Check if a blob exists.
    pub fn exists(&self, stored_name: &str) -> bool {
        self.blob_path(stored_name).exists()
    }
}
