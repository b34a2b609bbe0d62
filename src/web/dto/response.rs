//! Response DTOs for the Depot API.

use serde::Serialize;

use crate::file::{FileRecord, StorageStats};

/// File metadata in responses.
#[derive(Debug, Serialize)]
pub struct FileResponse {
    /// Internal record id.
    pub id: i64,
    /// External file identifier, used for download/info/delete addressing.
    pub file_id: String,
    /// Original filename as uploaded.
    pub original_filename: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Detected content type.
    pub content_type: String,
    /// Lower-cased file extension.
    pub extension: String,
    /// Upload timestamp.
    pub created_at: String,
    /// Optional description.
    pub description: Option<String>,
    /// Relative URL for downloading this file.
    pub download_url: String,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        let download_url = format!("/api/v1/download/{}", record.file_id);
        Self {
            id: record.id,
            file_id: record.file_id,
            original_filename: record.original_filename,
            size_bytes: record.size_bytes,
            content_type: record.content_type,
            extension: record.extension,
            created_at: record.created_at,
            description: record.description,
            download_url,
        }
    }
}

/// Paginated file listing.
#[derive(Debug, Serialize)]
pub struct FileListResponse {
    /// Files on this page.
    pub files: Vec<FileResponse>,
    /// Total number of files.
    pub total: i64,
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

/// Confirmation of a file deletion.
#[derive(Debug, Serialize)]
pub struct FileDeleteResponse {
    /// Confirmation message.
    pub message: String,
    /// Identifier of the deleted file.
    pub file_id: String,
}

/// Storage statistics response.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Total number of files.
    pub total_files: i64,
    /// Sum of all file sizes in bytes.
    pub total_size_bytes: i64,
    /// Human-readable total size.
    pub total_size_formatted: String,
    /// Configured maximum file size in bytes.
    pub max_file_size: u64,
    /// Configured extension allow-list.
    pub allowed_extensions: Vec<String>,
}

impl From<StorageStats> for StatsResponse {
    fn from(stats: StorageStats) -> Self {
        Self {
            total_files: stats.total_files,
            total_size_bytes: stats.total_size_bytes,
            total_size_formatted: stats.total_size_formatted,
            max_file_size: stats.max_file_size,
            allowed_extensions: stats.allowed_extensions,
        }
    }
}
