//! File handlers for the zencloud web API.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, Query, Request, State},
    http::{header, HeaderValue},
    response::Response,
    Json,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::file::{FileRecord, FileService};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::ZencloudError;

/// Query parameters identifying a file by id.
#[derive(Debug, serde::Deserialize)]
pub struct FileIdQuery {
    /// File id.
    pub id: Option<String>,
}

impl FileIdQuery {
    /// An absent or empty id is the same client error.
    fn require_id(&self) -> Result<&str, ApiError> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::bad_request("Missing id parameter"))
    }
}

/// Generate a safe Content-Disposition header value for file downloads.
///
/// Sanitizes the filename to prevent header injection and uses RFC 5987
/// encoding for non-ASCII filenames.
fn content_disposition_header(filename: &str) -> String {
    // Sanitize filename for the basic filename parameter (ASCII fallback)
    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' => '_',
            '\\' => '_',
            _ => c,
        })
        .collect();

    // For ASCII-only filenames, use simple format
    if filename.is_ascii() && !filename.chars().any(|c| c.is_control() || c == '"' || c == '\\') {
        return format!("attachment; filename=\"{}\"", filename);
    }

    // Use RFC 5987 encoding for non-ASCII or special characters
    let encoded = urlencoding::encode(filename);

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized, encoded
    )
}

/// POST /upload - Store a multipart-uploaded file.
///
/// The payload is the first multipart field named `file` that carries a
/// filename. Responds with the full metadata record as JSON.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<FileRecord>, ApiError> {
    let mut filename: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request(format!("Invalid multipart data: {e}"))
    })? {
        let is_file_field = field.name() == Some("file") && field.file_name().is_some();
        if !is_file_field {
            continue;
        }

        filename = field.file_name().map(|s| s.to_string());
        content = Some(
            field
                .bytes()
                .await
                .map_err(|e| {
                    tracing::error!("Failed to read file content: {}", e);
                    ApiError::bad_request(format!("Failed to read file: {e}"))
                })?
                .to_vec(),
        );
        break;
    }

    let (filename, content) = match (filename, content) {
        (Some(filename), Some(content)) => (filename, content),
        _ => return Err(ApiError::bad_request("File not provided")),
    };

    let service = FileService::new(&state.db, &state.storage);
    let record = service.store(&filename, &content).await?;

    Ok(Json(record))
}

/// GET /download?id= - Serve a stored blob.
///
/// The blob is handed to the static-file service, so range and conditional
/// requests work and the content type follows the blob path. A blob missing
/// from disk surfaces as that service's own 404, not the metadata one.
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileIdQuery>,
    request: Request,
) -> Result<Response, ApiError> {
    let id = query.require_id()?;

    let service = FileService::new(&state.db, &state.storage);
    let record = service
        .lookup(id)
        .await?
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    let path = service.blob_path(&record);
    let response = ServeFile::new(path).oneshot(request).await.map_err(|e| {
        tracing::error!("Failed to serve file: {}", e);
        ApiError::internal(format!("Failed to serve file: {e}"))
    })?;

    let mut response = response.map(Body::new);
    if response.status().is_success() {
        if let Ok(value) = HeaderValue::from_str(&content_disposition_header(&record.filename)) {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, value);
        }
    }

    Ok(response)
}

/// GET /files - List all stored files, newest upload first.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let service = FileService::new(&state.db, &state.storage);
    let records = service.list().await?;

    Ok(Json(records))
}

/// DELETE /delete?id= - Remove a stored file.
///
/// Blob removal comes first; when it fails the metadata row is kept so the
/// delete can be retried. Row removal failing afterwards leaves the record
/// pointing at nothing.
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileIdQuery>,
) -> Result<&'static str, ApiError> {
    let id = query.require_id()?;

    let service = FileService::new(&state.db, &state.storage);
    service.remove(id).await.map_err(|e| match e {
        ZencloudError::NotFound(_) => ApiError::not_found("File not found"),
        ZencloudError::Io(err) => {
            tracing::error!("Failed to delete blob: {}", err);
            ApiError::internal(format!("Error deleting file from disk: {err}"))
        }
        ZencloudError::Database(err) => {
            tracing::error!("Failed to delete metadata: {}", err);
            ApiError::internal(format!("Error deleting metadata: {err}"))
        }
        other => other.into(),
    })?;

    Ok("File deleted successfully")
}

/// OPTIONS handler for the delete route. The CORS layer answers real
/// preflights before they get here; anything else gets a bare 200.
pub async fn preflight() {}
