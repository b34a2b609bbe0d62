//! File service for Depot.
//!
//! This module provides the high-level file operations:
//! - Upload with extension and size validation
//! - Paginated listing and metadata lookup
//! - Download with blob integrity checking
//! - Deletion with the metadata-first consistency policy

use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::Stream;
use uuid::Uuid;

use crate::config::{PaginationConfig, StorageConfig};
use crate::db::Database;
use crate::{DepotError, Result};

use super::record::{FileRecord, FileRepository, NewFileRecord};
use super::storage::BlobStore;
use super::MAX_FILENAME_LENGTH;

/// Request data for a file upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Original filename as supplied by the client.
    pub original_filename: String,
    /// Client-declared size, if any. Advisory only; the authoritative size
    /// is measured from the bytes actually written.
    pub declared_size: Option<u64>,
    /// File description (optional).
    pub description: Option<String>,
}

impl UploadRequest {
    /// Create a new upload request.
    pub fn new(original_filename: impl Into<String>) -> Self {
        Self {
            original_filename: original_filename.into(),
            declared_size: None,
            description: None,
        }
    }

    /// Set the declared size.
    pub fn with_declared_size(mut self, size: u64) -> Self {
        self.declared_size = Some(size);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One page of file records plus pagination totals.
#[derive(Debug)]
pub struct FileListing {
    /// Records on this page, in insertion order.
    pub records: Vec<FileRecord>,
    /// Total live records across all pages.
    pub total: i64,
    /// Requested page number (1-based).
    pub page: u32,
    /// Requested page size.
    pub per_page: u32,
    /// Total number of pages (0 when there are no records).
    pub total_pages: u32,
}

/// Result of a file download.
pub struct Download {
    /// Open handle on the blob, ready for streaming.
    pub reader: tokio::fs::File,
    /// Original filename for the download response.
    pub original_filename: String,
    /// Detected content type.
    pub content_type: String,
    /// Blob size in bytes.
    pub size_bytes: i64,
}

/// Aggregate statistics over all stored files.
#[derive(Debug, Clone)]
pub struct StorageStats {
    /// Total number of live files.
    pub total_files: i64,
    /// Sum of all file sizes in bytes.
    pub total_size_bytes: i64,
    /// Human-readable rendering of the total size.
    pub total_size_formatted: String,
    /// Configured maximum file size in bytes.
    pub max_file_size: u64,
    /// Configured extension allow-list.
    pub allowed_extensions: Vec<String>,
}

/// File service orchestrating validation, blob storage and metadata.
///
/// Owns the consistency contract between the two stores: blobs are written
/// before metadata rows, so a crash can only leave an orphan blob (harmless)
/// and never a metadata row pointing at a missing blob.
pub struct FileService {
    db: Arc<Database>,
    store: BlobStore,
    storage_config: StorageConfig,
    pagination: PaginationConfig,
}

impl FileService {
    /// Create a new FileService.
    pub fn new(
        db: Arc<Database>,
        store: BlobStore,
        storage_config: StorageConfig,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            db,
            store,
            storage_config,
            pagination,
        }
    }

    /// Get the pagination configuration.
    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }

    /// Get the configured max file size in bytes.
    pub fn max_file_size(&self) -> u64 {
        self.storage_config.max_file_size_bytes
    }

    /// Upload a file from a byte stream.
    ///
    /// Validation happens before any mutation. The blob is written first and
    /// the metadata row second; if the metadata write fails the blob is
    /// removed on a best-effort basis.
    pub async fn upload<S>(&self, request: &UploadRequest, stream: S) -> Result<FileRecord>
    where
        S: Stream<Item = io::Result<Bytes>> + Unpin,
    {
        if request.original_filename.chars().count() > MAX_FILENAME_LENGTH {
            return Err(DepotError::Validation(format!(
                "filename must be at most {MAX_FILENAME_LENGTH} characters"
            )));
        }

        let extension = extract_extension(&request.original_filename);
        if !self.storage_config.is_extension_allowed(&extension) {
            return Err(DepotError::InvalidFileType(extension));
        }

        // Advisory pre-write check; the declared size can be absent or wrong
        let max = self.storage_config.max_file_size_bytes;
        if let Some(declared) = request.declared_size {
            if declared > max {
                return Err(DepotError::FileTooLarge { size: declared, max });
            }
        }

        let file_id = Uuid::new_v4().to_string();
        let stored_name = BlobStore::generate_stored_name(&extension);

        let outcome = self.store.put(&stored_name, stream).await?;

        // Authoritative size check on the bytes actually written
        if outcome.size_bytes > max {
            if let Err(e) = self.store.delete(&outcome.storage_path).await {
                tracing::warn!("Failed to remove oversized blob {stored_name}: {e}");
            }
            return Err(DepotError::FileTooLarge {
                size: outcome.size_bytes,
                max,
            });
        }

        let mut new_record = NewFileRecord::new(
            &file_id,
            &stored_name,
            &request.original_filename,
            outcome.storage_path.to_string_lossy(),
            outcome.size_bytes as i64,
            &outcome.content_type,
            &extension,
        );
        if let Some(ref desc) = request.description {
            if !desc.trim().is_empty() {
                new_record = new_record.with_description(desc);
            }
        }

        let repo = FileRepository::new(self.db.pool());
        match repo.create(&new_record).await {
            Ok(record) => {
                tracing::info!(
                    "Uploaded {} as {} ({} bytes, {})",
                    record.original_filename,
                    record.file_id,
                    record.size_bytes,
                    record.content_type
                );
                Ok(record)
            }
            Err(e) => {
                // Best-effort cleanup so the failed upload leaves nothing behind
                let _ = self.store.delete(&outcome.storage_path).await;
                Err(e)
            }
        }
    }

    /// List files with pagination.
    ///
    /// `page` is 1-based; `per_page` must be in [1, max_per_page]. A page
    /// past the last simply returns an empty listing.
    pub async fn list(&self, page: u32, per_page: u32) -> Result<FileListing> {
        if page < 1 {
            return Err(DepotError::Validation("page must be >= 1".to_string()));
        }
        if per_page < 1 || per_page > self.pagination.max_per_page {
            return Err(DepotError::Validation(format!(
                "per_page must be between 1 and {}",
                self.pagination.max_per_page
            )));
        }

        let repo = FileRepository::new(self.db.pool());
        // Widened to u64: page * per_page can exceed u32 for far-out pages,
        // which are valid requests that must yield an empty listing
        let offset = u64::from(page - 1) * u64::from(per_page);
        let records = repo.list(offset.min(i64::MAX as u64) as i64, per_page).await?;
        let total = repo.count().await?;
        let total_pages = (total as u64).div_ceil(per_page as u64) as u32;

        Ok(FileListing {
            records,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Get file metadata by file_id.
    pub async fn get_info(&self, file_id: &str) -> Result<FileRecord> {
        let repo = FileRepository::new(self.db.pool());
        repo.get_by_file_id(file_id)
            .await?
            .ok_or_else(|| DepotError::NotFound("file".to_string()))
    }

    /// Open a file for download.
    ///
    /// A live metadata record whose blob has vanished is reported as
    /// `BlobMissing`, not `NotFound`: the former is an integrity violation,
    /// the latter an unknown id.
    pub async fn download(&self, file_id: &str) -> Result<Download> {
        let record = self.get_info(file_id).await?;

        if !self.store.exists(&record.storage_path).await {
            tracing::error!(
                "Integrity violation: blob {} missing for file {}",
                record.storage_path,
                record.file_id
            );
            return Err(DepotError::BlobMissing(record.file_id));
        }

        let reader = self.store.reader(&record.storage_path).await?;

        Ok(Download {
            reader,
            original_filename: record.original_filename,
            content_type: record.content_type,
            size_bytes: record.size_bytes,
        })
    }

    /// Delete a file.
    ///
    /// Blob removal is attempted first, but any storage error there is
    /// logged and swallowed; the metadata row is removed regardless. Ghost
    /// listings are worse than unreclaimed disk space.
    pub async fn delete(&self, file_id: &str) -> Result<()> {
        let record = self.get_info(file_id).await?;

        match self.store.delete(&record.storage_path).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("Blob for {} was already gone", record.file_id);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to delete blob {} for file {}: {}",
                    record.storage_path,
                    record.file_id,
                    e
                );
            }
        }

        let repo = FileRepository::new(self.db.pool());
        repo.delete(file_id).await?;
        tracing::info!("Deleted file {}", file_id);

        Ok(())
    }

    /// Aggregate statistics over all stored files.
    pub async fn stats(&self) -> Result<StorageStats> {
        let repo = FileRepository::new(self.db.pool());
        let total_files = repo.count().await?;
        let total_size_bytes = repo.total_size().await?;

        Ok(StorageStats {
            total_files,
            total_size_bytes,
            total_size_formatted: format_size(total_size_bytes.max(0) as u64),
            max_file_size: self.storage_config.max_file_size_bytes,
            allowed_extensions: self.storage_config.allowed_extensions.clone(),
        })
    }
}

/// Extract the lower-cased, dot-prefixed extension from a filename.
///
/// Returns an empty string when the filename has no extension, which will
/// never match an allow-list entry.
pub fn extract_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| format!(".{}", s.to_lowercase()))
        .unwrap_or_default()
}

/// Format a byte count using binary units (B/KB/MB/GB/TB).
///
/// One decimal place, largest unit where the value is still >= 1.0.
/// Zero renders as "0B" exactly.
pub fn format_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0B".to_string();
    }

    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1}{}", size, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, FileService) {
        let db = Arc::new(Database::open_in_memory().await.unwrap());
        let temp_dir = TempDir::new().unwrap();
        let store = BlobStore::new(temp_dir.path()).unwrap();
        let service = FileService::new(
            db,
            store,
            StorageConfig::default(),
            PaginationConfig::default(),
        );
        (temp_dir, service)
    }

    async fn setup_with_max_size(max: u64) -> (TempDir, FileService) {
        let db = Arc::new(Database::open_in_memory().await.unwrap());
        let temp_dir = TempDir::new().unwrap();
        let store = BlobStore::new(temp_dir.path()).unwrap();
        let storage_config = StorageConfig {
            max_file_size_bytes: max,
            ..StorageConfig::default()
        };
        let service = FileService::new(
            db,
            store,
            storage_config,
            PaginationConfig::default(),
        );
        (temp_dir, service)
    }

    fn content_stream(content: &[u8]) -> impl Stream<Item = io::Result<Bytes>> + Unpin {
        stream::iter(vec![Ok(Bytes::copy_from_slice(content))])
    }

    async fn upload_bytes(service: &FileService, name: &str, content: &[u8]) -> FileRecord {
        service
            .upload(&UploadRequest::new(name), content_stream(content))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_success() {
        let (_temp_dir, service) = setup().await;

        let request = UploadRequest::new("test.txt").with_description("A test file");
        let record = service
            .upload(&request, content_stream(b"Hello, World!"))
            .await
            .unwrap();

        assert_eq!(record.original_filename, "test.txt");
        assert_eq!(record.size_bytes, 13);
        assert_eq!(record.extension, ".txt");
        assert_eq!(record.description, Some("A test file".to_string()));
        assert_eq!(record.content_type, "text/plain");
        assert!(!record.file_id.is_empty());
        assert!(record.stored_name.ends_with(".txt"));
        assert_ne!(record.stored_name, record.original_filename);
    }

    #[tokio::test]
    async fn test_upload_size_matches_stream_length() {
        let (_temp_dir, service) = setup().await;

        for len in [0usize, 1, 1023, 8192, 20000] {
            let content = vec![0x42u8; len];
            let record = upload_bytes(&service, "data.txt", &content).await;
            assert_eq!(record.size_bytes, len as i64);
        }
    }

    #[tokio::test]
    async fn test_upload_extension_lowercased() {
        let (_temp_dir, service) = setup().await;

        let record = upload_bytes(&service, "PHOTO.JPG", b"fake jpeg").await;
        assert_eq!(record.extension, ".jpg");
        assert!(record.stored_name.ends_with(".jpg"));
        // Display name keeps the original casing
        assert_eq!(record.original_filename, "PHOTO.JPG");
    }

    #[tokio::test]
    async fn test_upload_invalid_extension() {
        let (_temp_dir, service) = setup().await;

        let result = service
            .upload(&UploadRequest::new("virus.exe"), content_stream(b"data"))
            .await;

        assert!(matches!(result, Err(DepotError::InvalidFileType(_))));
        // Nothing was created
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_files, 0);
    }

    #[tokio::test]
    async fn test_upload_no_extension() {
        let (_temp_dir, service) = setup().await;

        let result = service
            .upload(&UploadRequest::new("README"), content_stream(b"data"))
            .await;

        assert!(matches!(result, Err(DepotError::InvalidFileType(_))));
    }

    #[tokio::test]
    async fn test_upload_declared_size_too_large_fails_fast() {
        let (_temp_dir, service) = setup_with_max_size(100).await;

        let request = UploadRequest::new("big.txt").with_declared_size(200);
        let result = service.upload(&request, content_stream(b"small")).await;

        assert!(matches!(
            result,
            Err(DepotError::FileTooLarge { size: 200, max: 100 })
        ));
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_files, 0);
    }

    #[tokio::test]
    async fn test_upload_actual_size_too_large_leaves_nothing() {
        let (temp_dir, service) = setup_with_max_size(100).await;

        // Stream is larger than the max but carries no declared size, so the
        // limit can only be enforced after the bytes are written.
        let content = vec![0u8; 200];
        let result = service
            .upload(&UploadRequest::new("big.txt"), content_stream(&content))
            .await;

        assert!(matches!(
            result,
            Err(DepotError::FileTooLarge { size: 200, max: 100 })
        ));

        // No metadata record and no blob left behind
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_files, 0);
        let leftovers = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_upload_stream_error_leaves_nothing() {
        let (temp_dir, service) = setup().await;

        let chunks: Vec<io::Result<Bytes>> = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "client disconnected",
            )),
        ];
        let result = service
            .upload(&UploadRequest::new("aborted.txt"), stream::iter(chunks))
            .await;

        assert!(matches!(result, Err(DepotError::Storage(_))));
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_files, 0);
        let leftovers = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_upload_filename_too_long() {
        let (_temp_dir, service) = setup().await;

        let long_name = format!("{}.txt", "a".repeat(300));
        let result = service
            .upload(&UploadRequest::new(long_name), content_stream(b"data"))
            .await;

        assert!(matches!(result, Err(DepotError::Validation(_))));
    }

    #[tokio::test]
    async fn test_upload_blank_description_dropped() {
        let (_temp_dir, service) = setup().await;

        let request = UploadRequest::new("test.txt").with_description("   ");
        let record = service
            .upload(&request, content_stream(b"data"))
            .await
            .unwrap();

        assert_eq!(record.description, None);
    }

    #[tokio::test]
    async fn test_download_round_trip() {
        let (_temp_dir, service) = setup().await;
        use tokio::io::AsyncReadExt;

        let content = b"Download test content".to_vec();
        let record = upload_bytes(&service, "download.txt", &content).await;

        let mut download = service.download(&record.file_id).await.unwrap();

        assert_eq!(download.original_filename, "download.txt");
        assert_eq!(download.content_type, "text/plain");
        assert_eq!(download.size_bytes, content.len() as i64);

        let mut loaded = Vec::new();
        download.reader.read_to_end(&mut loaded).await.unwrap();
        assert_eq!(loaded, content);
    }

    #[tokio::test]
    async fn test_download_not_found() {
        let (_temp_dir, service) = setup().await;

        let result = service.download("never-issued").await;
        assert!(matches!(result, Err(DepotError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_download_blob_missing() {
        let (_temp_dir, service) = setup().await;

        let record = upload_bytes(&service, "gone.txt", b"data").await;

        // Remove the blob behind the service's back
        std::fs::remove_file(&record.storage_path).unwrap();

        let result = service.download(&record.file_id).await;
        assert!(matches!(result, Err(DepotError::BlobMissing(id)) if id == record.file_id));
    }

    #[tokio::test]
    async fn test_get_info() {
        let (_temp_dir, service) = setup().await;

        let record = upload_bytes(&service, "info.txt", b"data").await;

        let info = service.get_info(&record.file_id).await.unwrap();
        assert_eq!(info.id, record.id);
        assert_eq!(info.original_filename, "info.txt");
    }

    #[tokio::test]
    async fn test_get_info_not_found() {
        let (_temp_dir, service) = setup().await;

        let result = service.get_info("never-issued").await;
        assert!(matches!(result, Err(DepotError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let (_temp_dir, service) = setup().await;

        let record = upload_bytes(&service, "delete.txt", b"data").await;

        service.delete(&record.file_id).await.unwrap();

        let result = service.get_info(&record.file_id).await;
        assert!(matches!(result, Err(DepotError::NotFound(_))));
        assert!(!std::path::Path::new(&record.storage_path).exists());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let (_temp_dir, service) = setup().await;

        let result = service.delete("never-issued").await;
        assert!(matches!(result, Err(DepotError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_succeeds_when_blob_already_gone() {
        let (_temp_dir, service) = setup().await;

        let record = upload_bytes(&service, "ghost.txt", b"data").await;
        std::fs::remove_file(&record.storage_path).unwrap();

        // Metadata cleanliness wins: the record goes away regardless
        service.delete(&record.file_id).await.unwrap();

        let result = service.get_info(&record.file_id).await;
        assert!(matches!(result, Err(DepotError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let (_temp_dir, service) = setup().await;

        for n in 0..25 {
            upload_bytes(&service, &format!("file-{n}.txt"), b"x").await;
        }

        let page1 = service.list(1, 10).await.unwrap();
        assert_eq!(page1.records.len(), 10);
        assert_eq!(page1.total, 25);
        assert_eq!(page1.total_pages, 3);

        let page3 = service.list(3, 10).await.unwrap();
        assert_eq!(page3.records.len(), 5);
        assert_eq!(page3.total_pages, 3);

        // Page past the end is empty, not an error
        let page4 = service.list(4, 10).await.unwrap();
        assert_eq!(page4.records.len(), 0);
        assert_eq!(page4.total, 25);
    }

    #[tokio::test]
    async fn test_list_huge_page_is_empty() {
        let (_temp_dir, service) = setup().await;

        upload_bytes(&service, "only.txt", b"x").await;

        // A page number far past the end is still a valid request; the
        // offset must not wrap around into an in-range page
        let listing = service.list(50_000_000, 100).await.unwrap();
        assert_eq!(listing.records.len(), 0);
        assert_eq!(listing.total, 1);
        assert_eq!(listing.page, 50_000_000);

        let listing = service.list(u32::MAX, 100).await.unwrap();
        assert_eq!(listing.records.len(), 0);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (_temp_dir, service) = setup().await;

        let listing = service.list(1, 10).await.unwrap();
        assert_eq!(listing.records.len(), 0);
        assert_eq!(listing.total, 0);
        assert_eq!(listing.total_pages, 0);
    }

    #[tokio::test]
    async fn test_list_idempotent() {
        let (_temp_dir, service) = setup().await;

        for n in 0..3 {
            upload_bytes(&service, &format!("file-{n}.txt"), b"x").await;
        }

        let first = service.list(1, 10).await.unwrap();
        let second = service.list(1, 10).await.unwrap();

        let ids: Vec<_> = first.records.iter().map(|r| r.file_id.clone()).collect();
        let ids2: Vec<_> = second.records.iter().map(|r| r.file_id.clone()).collect();
        assert_eq!(ids, ids2);
    }

    #[tokio::test]
    async fn test_list_invalid_parameters() {
        let (_temp_dir, service) = setup().await;

        assert!(matches!(
            service.list(0, 10).await,
            Err(DepotError::Validation(_))
        ));
        assert!(matches!(
            service.list(1, 0).await,
            Err(DepotError::Validation(_))
        ));
        assert!(matches!(
            service.list(1, 101).await,
            Err(DepotError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_stats() {
        let (_temp_dir, service) = setup().await;

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.total_size_bytes, 0);
        assert_eq!(stats.total_size_formatted, "0B");

        upload_bytes(&service, "a.txt", &vec![0u8; 1024]).await;
        upload_bytes(&service, "b.txt", &vec![0u8; 512]).await;

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.total_size_bytes, 1536);
        assert_eq!(stats.total_size_formatted, "1.5KB");
        assert_eq!(stats.max_file_size, 104_857_600);
        assert!(stats.allowed_extensions.contains(&".txt".to_string()));
    }

    #[tokio::test]
    async fn test_file_ids_are_unique() {
        let (_temp_dir, service) = setup().await;

        let a = upload_bytes(&service, "a.txt", b"same content").await;
        let b = upload_bytes(&service, "b.txt", b"same content").await;

        assert_ne!(a.file_id, b.file_id);
        assert_ne!(a.stored_name, b.stored_name);
        assert_ne!(a.storage_path, b.storage_path);
    }

    #[tokio::test]
    async fn test_delete_keeps_other_records() {
        let (_temp_dir, service) = setup().await;
        let db_check = {
            let a = upload_bytes(&service, "a.txt", b"1").await;
            let b = upload_bytes(&service, "b.txt", b"2").await;
            service.delete(&a.file_id).await.unwrap();
            b
        };

        let listing = service.list(1, 10).await.unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.records[0].file_id, db_check.file_id);
    }

    #[test]
    fn test_extract_extension() {
        assert_eq!(extract_extension("test.txt"), ".txt");
        assert_eq!(extract_extension("document.PDF"), ".pdf");
        assert_eq!(extract_extension("archive.tar.gz"), ".gz");
        assert_eq!(extract_extension("no_ext"), "");
        assert_eq!(extract_extension(".hidden"), "");
        assert_eq!(extract_extension("file.hidden"), ".hidden");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(1), "1.0B");
        assert_eq!(format_size(512), "512.0B");
        assert_eq!(format_size(1024), "1.0KB");
        assert_eq!(format_size(1536), "1.5KB");
        assert_eq!(format_size(1024 * 1024), "1.0MB");
        assert_eq!(format_size(1_073_741_824), "1.0GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.0TB");
        // TB is the largest unit
        assert_eq!(format_size(1024u64.pow(5)), "1024.0TB");
    }

    #[test]
    fn test_upload_request_builder() {
        let request = UploadRequest::new("test.txt")
            .with_declared_size(100)
            .with_description("Description");

        assert_eq!(request.original_filename, "test.txt");
        assert_eq!(request.declared_size, Some(100));
        assert_eq!(request.description, Some("Description".to_string()));
    }
}
