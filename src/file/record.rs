//! File metadata record for zencloud.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Metadata for a stored file.
///
/// This is both the database row and the JSON shape returned by the API.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FileRecord {
    /// Generated UUID, string form.
    pub id: String,
    /// Original filename as supplied by the client, stored verbatim.
    pub filename: String,
    /// Extension derived from the filename at upload time (includes the dot).
    pub extension: String,
    /// When the file was uploaded.
    pub upload_date: DateTime<Utc>,
}

impl FileRecord {
    /// Build the record for a fresh upload: generated id, derived extension,
    /// server-side timestamp.
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let extension = extension_of(&filename).to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            filename,
            extension,
            upload_date: Utc::now(),
        }
    }

    /// Name of the blob on disk: `<id><extension>`.
    pub fn stored_name(&self) -> String {
        format!("{}{}", self.id, self.extension)
    }
}

/// Derive the file extension: the substring from the last `.` onward,
/// including the dot, or empty when the final path element has none.
///
/// The scan stops at a path separator, so `"a.b/c"` has no extension while
/// `".hidden"` yields `".hidden"`.
pub fn extension_of(filename: &str) -> &str {
    for (i, c) in filename.char_indices().rev() {
        match c {
            '.' => return &filename[i..],
            '/' | '\\' => return "",
            _ => {}
        }
    }
    ""
}
