//! File handlers for the Depot API.

use std::io;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, Path, Query, State},
    http::header,
    response::Response,
    Json,
};
use tokio_util::io::ReaderStream;

use crate::web::dto::{
    FileDeleteResponse, FileListResponse, FileResponse, PaginationQuery, StatsResponse,
    UploadQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::file::UploadRequest;

/// Generate a safe Content-Disposition header value for file downloads.
///
/// This function sanitizes the filename to prevent header injection attacks
/// and uses RFC 5987 encoding for non-ASCII filenames.
///
/// # Security
///
/// The function:
/// - Removes control characters (including CR, LF which could cause header injection)
/// - Escapes double quotes and backslashes
/// - Uses RFC 5987 filename* parameter for proper Unicode support
fn content_disposition_header(filename: &str) -> String {
    // Sanitize filename for the basic filename parameter (ASCII fallback)
    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control()) // Remove control characters (CR, LF, etc.)
        .map(|c| match c {
            '"' => '_',  // Replace double quotes
            '\\' => '_', // Replace backslashes
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

/// GET /health - Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/v1/upload - Upload a new file.
///
/// Request body: multipart/form-data with a "file" field. The optional
/// description is taken from the `description` query parameter. The file
/// field is streamed straight into the blob store, never buffered whole.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<FileResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| ApiError::bad_request("No filename provided"))?;

        let mut request = UploadRequest::new(filename);
        if let Some(ref description) = query.description {
            request = request.with_description(description);
        }

        // Adapt the multipart field into the byte stream the service expects
        let stream = futures::stream::try_unfold(field, |mut field| async move {
            match field.chunk().await {
                Ok(Some(bytes)) => Ok(Some((bytes, field))),
                Ok(None) => Ok(None),
                Err(e) => Err(io::Error::other(e)),
            }
        });

        let record = state.service.upload(&request, Box::pin(stream)).await?;
        return Ok(Json(record.into()));
    }

    Err(ApiError::bad_request("No file provided"))
}

/// GET /api/v1/files - Paginated list of uploaded files.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<FileListResponse>, ApiError> {
    let per_page = pagination
        .per_page
        .unwrap_or(state.service.pagination().default_per_page);

    let listing = state.service.list(pagination.page, per_page).await?;

    Ok(Json(FileListResponse {
        files: listing.records.into_iter().map(Into::into).collect(),
        total: listing.total,
        page: listing.page,
        per_page: listing.per_page,
        total_pages: listing.total_pages,
    }))
}

/// GET /api/v1/files/:file_id - Get file metadata.
pub async fn get_file_info(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let record = state.service.get_info(&file_id).await?;
    Ok(Json(record.into()))
}

/// GET /api/v1/download/:file_id - Download a file.
///
/// The blob is streamed in bounded chunks; memory use does not grow with
/// file size.
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Response<Body>, ApiError> {
    let download = state.service.download(&file_id).await?;

    let body = Body::from_stream(ReaderStream::new(download.reader));

    let response = Response::builder()
        .header(header::CONTENT_TYPE, download.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_header(&download.original_filename),
        )
        .header(header::CONTENT_LENGTH, download.size_bytes)
        .body(body)
        .map_err(|e| {
            tracing::error!("Failed to build response: {}", e);
            ApiError::internal("Failed to build response")
        })?;

    Ok(response)
}

/// DELETE /api/v1/files/:file_id - Delete a file.
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Json<FileDeleteResponse>, ApiError> {
    state.service.delete(&file_id).await?;

    Ok(Json(FileDeleteResponse {
        message: "File deleted successfully".to_string(),
        file_id,
    }))
}

/// GET /api/v1/stats - Storage statistics.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.service.stats().await?;
    Ok(Json(stats.into()))
}
