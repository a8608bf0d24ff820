//! API handlers for the zencloud web API.

pub mod files;

pub use files::*;

use std::sync::Arc;

use crate::db::Database;
use crate::file::BlobStorage;

/// Shared database handle for the web API.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle; the pool inside is safe for concurrent use.
    pub db: SharedDatabase,
    /// Blob storage directory.
    pub storage: BlobStorage,
    /// Maximum accepted request body size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase, storage: BlobStorage, max_upload_size: u64) -> Self {
        Self {
            db,
            storage,
            max_upload_size,
        }
    }
}
