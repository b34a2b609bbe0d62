//! File metadata types and repository for Depot.

use sqlx::SqlitePool;

use crate::{DepotError, Result};

/// Metadata for a stored file.
///
/// Everything except `description` is immutable after creation. `id` is the
/// internal row id; `file_id` is the identifier exposed to clients so the
/// internal sequence can never be enumerated.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FileRecord {
    /// Internal sequential id, assigned by the database.
    pub id: i64,
    /// Externally-visible unique identifier (UUID v4, never reused).
    pub file_id: String,
    /// Name under which the blob is physically stored (UUID + extension).
    pub stored_name: String,
    /// Client-supplied display name. Never used for storage addressing.
    pub original_filename: String,
    /// Location of the blob on durable storage.
    pub storage_path: String,
    /// Byte count measured from the bytes actually written.
    pub size_bytes: i64,
    /// Content type detected from the file content.
    pub content_type: String,
    /// Lower-cased, dot-prefixed extension of the original filename.
    pub extension: String,
    /// Optional client-supplied description.
    pub description: Option<String>,
    /// When the file was uploaded.
    pub created_at: String,
}

/// Data for creating a new file record.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// External unique identifier.
    pub file_id: String,
    /// Stored blob name.
    pub stored_name: String,
    /// Original display filename.
    pub original_filename: String,
    /// Blob location on disk.
    pub storage_path: String,
    /// Measured size in bytes.
    pub size_bytes: i64,
    /// Sniffed content type.
    pub content_type: String,
    /// Validated extension.
    pub extension: String,
    /// Optional description.
    pub description: Option<String>,
}

impl NewFileRecord {
    /// Create a new NewFileRecord.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        file_id: impl Into<String>,
        stored_name: impl Into<String>,
        original_filename: impl Into<String>,
        storage_path: impl Into<String>,
        size_bytes: i64,
        content_type: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            file_id: file_id.into(),
            stored_name: stored_name.into(),
            original_filename: original_filename.into(),
            storage_path: storage_path.into(),
            size_bytes,
            content_type: content_type.into(),
            extension: extension.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

const SELECT_COLUMNS: &str = "id, file_id, stored_name, original_filename, storage_path, \
     size_bytes, content_type, extension, description, created_at";

/// Repository for file metadata operations.
pub struct FileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FileRepository<'a> {
    /// Create a new FileRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new file record.
    ///
    /// The database assigns `id` and `created_at`; the stored row is
    /// re-fetched and returned as the canonical record.
    pub async fn create(&self, record: &NewFileRecord) -> Result<FileRecord> {
        sqlx::query(
            "INSERT INTO files (file_id, stored_name, original_filename, storage_path, \
             size_bytes, content_type, extension, description)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.file_id)
        .bind(&record.stored_name)
        .bind(&record.original_filename)
        .bind(&record.storage_path)
        .bind(record.size_bytes)
        .bind(&record.content_type)
        .bind(&record.extension)
        .bind(&record.description)
        .execute(self.pool)
        .await?;

        self.get_by_file_id(&record.file_id)
            .await?
            .ok_or_else(|| DepotError::Database("inserted file row not found".to_string()))
    }

    /// Get a file record by its external file_id.
    pub async fn get_by_file_id(&self, file_id: &str) -> Result<Option<FileRecord>> {
        let record = sqlx::query_as::<_, FileRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM files WHERE file_id = ?"
        ))
        .bind(file_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// List file records in insertion order.
    ///
    /// Ordering by `id` keeps pagination stable as long as no deletions
    /// happen between pages.
    pub async fn list(&self, offset: i64, limit: u32) -> Result<Vec<FileRecord>> {
        let records = sqlx::query_as::<_, FileRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM files ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Count live file records.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM files")
            .fetch_one(self.pool)
            .await?;

        Ok(count.0)
    }

    /// Total size in bytes of all live file records.
    pub async fn total_size(&self) -> Result<i64> {
        let size: (i64,) = sqlx::query_as("SELECT COALESCE(SUM(size_bytes), 0) FROM files")
            .fetch_one(self.pool)
            .await?;

        Ok(size.0)
    }

    /// Delete a file record by its external file_id.
    ///
    /// Returns `true` if a record was removed.
    pub async fn delete(&self, file_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM files WHERE file_id = ?")
            .bind(file_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    fn sample_record(n: u32) -> NewFileRecord {
        NewFileRecord::new(
            format!("file-id-{n}"),
            format!("stored-{n}.txt"),
            format!("original-{n}.txt"),
            format!("data/uploads/stored-{n}.txt"),
            100 * n as i64,
            "text/plain",
            ".txt",
        )
    }

    #[tokio::test]
    async fn test_create_record() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        let new_record = sample_record(1).with_description("A test file");
        let record = repo.create(&new_record).await.unwrap();

        assert!(record.id > 0);
        assert_eq!(record.file_id, "file-id-1");
        assert_eq!(record.stored_name, "stored-1.txt");
        assert_eq!(record.original_filename, "original-1.txt");
        assert_eq!(record.size_bytes, 100);
        assert_eq!(record.content_type, "text/plain");
        assert_eq!(record.extension, ".txt");
        assert_eq!(record.description, Some("A test file".to_string()));
        assert!(!record.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_file_id_fails() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        repo.create(&sample_record(1)).await.unwrap();
        let result = repo.create(&sample_record(1)).await;

        assert!(matches!(result, Err(DepotError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_by_file_id() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        repo.create(&sample_record(1)).await.unwrap();

        let found = repo.get_by_file_id("file-id-1").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().original_filename, "original-1.txt");
    }

    #[tokio::test]
    async fn test_get_by_file_id_not_found() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        let found = repo.get_by_file_id("missing").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_insertion_order() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        for n in 1..=5 {
            repo.create(&sample_record(n)).await.unwrap();
        }

        let records = repo.list(0, 10).await.unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].file_id, "file-id-1");
        assert_eq!(records[4].file_id, "file-id-5");
    }

    #[tokio::test]
    async fn test_list_offset_limit() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        for n in 1..=5 {
            repo.create(&sample_record(n)).await.unwrap();
        }

        let page = repo.list(2, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].file_id, "file-id-3");
        assert_eq!(page[1].file_id, "file-id-4");

        let past_end = repo.list(10, 2).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_list_is_stable_without_writes() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        for n in 1..=3 {
            repo.create(&sample_record(n)).await.unwrap();
        }

        let first = repo.list(0, 10).await.unwrap();
        let second = repo.list(0, 10).await.unwrap();

        let ids: Vec<_> = first.iter().map(|r| r.file_id.clone()).collect();
        let ids2: Vec<_> = second.iter().map(|r| r.file_id.clone()).collect();
        assert_eq!(ids, ids2);
    }

    #[tokio::test]
    async fn test_count_and_total_size() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.total_size().await.unwrap(), 0);

        repo.create(&sample_record(1)).await.unwrap(); // 100 bytes
        repo.create(&sample_record(2)).await.unwrap(); // 200 bytes

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.total_size().await.unwrap(), 300);
    }

    #[tokio::test]
    async fn test_delete_record() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        repo.create(&sample_record(1)).await.unwrap();

        let deleted = repo.delete("file-id-1").await.unwrap();
        assert!(deleted);

        let found = repo.get_by_file_id("file-id-1").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_record_not_found() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        let deleted = repo.delete("missing").await.unwrap();
        assert!(!deleted);
    }

    #[test]
    fn test_new_record_builder() {
        let record = NewFileRecord::new(
            "fid",
            "stored.txt",
            "orig.txt",
            "uploads/stored.txt",
            1024,
            "text/plain",
            ".txt",
        )
        .with_description("Description");

        assert_eq!(record.file_id, "fid");
        assert_eq!(record.stored_name, "stored.txt");
        assert_eq!(record.size_bytes, 1024);
        assert_eq!(record.description, Some("Description".to_string()));
    }
}
