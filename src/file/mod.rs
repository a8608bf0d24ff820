//! File management module for zencloud.
//!
//! This module covers the whole lifecycle of a stored file:
//! - Metadata records keyed by generated UUIDs
//! - Blob storage on disk under `<id><extension>`
//! - The service composing both stores for upload/list/delete

mod record;
mod repository;
mod service;
mod storage;

pub use record::{extension_of, FileRecord};
pub use repository::FileRecordRepository;
pub use service::FileService;
pub use storage::BlobStorage;
