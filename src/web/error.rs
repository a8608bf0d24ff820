//! API error handling for the zencloud web layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ZencloudError;

/// API error type: an HTTP status plus a plain-text message body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ZencloudError> for ApiError {
    fn from(err: ZencloudError) -> Self {
        match &err {
            ZencloudError::NotFound(msg) => ApiError::not_found(format!("{msg} not found")),
            // Store failures report the underlying error text to the caller
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_constructors() {
        let err = ApiError::bad_request("bad");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "bad");

        let err = ApiError::not_found("missing");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::internal("boom");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_not_found() {
        let err: ApiError = ZencloudError::NotFound("file".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "file not found");
    }

    #[test]
    fn test_from_database_error_exposes_message() {
        let err: ApiError = ZencloudError::Database("disk is full".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("disk is full"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only fs");
        let err: ApiError = ZencloudError::Io(io).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("read-only fs"));
    }
}
