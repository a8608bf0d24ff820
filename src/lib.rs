//! zencloud - Self-hosted file storage service
//!
//! Upload, list, download and delete files over an HTTP API. Metadata lives
//! in SQLite, blobs on disk under their generated id.

pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{Result, ZencloudError};
pub use file::{extension_of, BlobStorage, FileRecord, FileRecordRepository, FileService};
pub use web::{ApiError, WebServer};
