//! Error types for zencloud.

use thiserror::Error;

/// Common error type for zencloud.
#[derive(Error, Debug)]
pub enum ZencloudError {
    /// Database error.
    ///
    /// Wraps errors from the metadata store; sqlx errors convert
    /// automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error from the blob store or the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for ZencloudError {
    fn from(e: sqlx::Error) -> Self {
        ZencloudError::Database(e.to_string())
    }
}

/// Result type alias for zencloud operations.
pub type Result<T> = std::result::Result<T, ZencloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = ZencloudError::Database("UNIQUE constraint failed".to_string());
        assert_eq!(
            err.to_string(),
            "database error: UNIQUE constraint failed"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = ZencloudError::NotFound("file".to_string());
        assert_eq!(err.to_string(), "file not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = ZencloudError::Config("invalid port".to_string());
        assert_eq!(err.to_string(), "configuration error: invalid port");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "blob missing");
        let err: ZencloudError = io_err.into();
        assert!(matches!(err, ZencloudError::Io(_)));
        assert!(err.to_string().contains("blob missing"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(ZencloudError::NotFound("file".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
