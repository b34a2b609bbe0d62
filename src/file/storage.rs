//! Blob storage for Depot.
//!
//! This module provides physical file storage functionality:
//! - UUID-based blob naming (client filenames never touch the filesystem)
//! - Streaming writes in bounded chunks with partial-file cleanup
//! - Content-type sniffing from the written bytes

use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::{DepotError, Result};

/// Number of leading bytes retained for content-type sniffing.
///
/// Magic numbers live in the first few bytes; 8KB comfortably covers every
/// format `infer` knows about.
const SNIFF_LEN: usize = 8192;

/// Outcome of a successful blob write.
#[derive(Debug, Clone)]
pub struct PutOutcome {
    /// Full path of the written blob.
    pub storage_path: PathBuf,
    /// Exact number of bytes written.
    pub size_bytes: u64,
    /// Content type detected from the written bytes.
    pub content_type: String,
}

/// Blob store for managing physical files.
///
/// Blobs are stored flat under the base directory:
/// ```text
/// {base_path}/
/// ├── ab12cd34-5678-90ab-cdef-123456789012.txt
/// ├── cd90ab12-3456-7890-abcd-ef1234567890.png
/// └── ...
/// ```
#[derive(Debug, Clone)]
pub struct BlobStore {
    /// Base directory for blob storage.
    base_path: PathBuf,
}

impl BlobStore {
    /// Create a new BlobStore with the given base path.
    ///
    /// The base directory will be created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Generate a new UUID-based stored name with the given extension.
    ///
    /// The extension must already be validated and dot-prefixed.
    pub fn generate_stored_name(extension: &str) -> String {
        format!("{}{}", Uuid::new_v4(), extension)
    }

    /// Get the full storage path for a stored name.
    pub fn storage_path(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }

    /// Write a byte stream to storage under the given stored name.
    ///
    /// The stream is consumed incrementally, so memory use is bounded by the
    /// chunk size regardless of file size. Returns the path, the exact count
    /// of bytes written, and a content type inferred from the written bytes.
    ///
    /// On any failure (including a stream error from a disconnected client)
    /// the partial file is removed before the error is returned.
    pub async fn put<S>(&self, stored_name: &str, mut stream: S) -> Result<PutOutcome>
    where
        S: Stream<Item = io::Result<Bytes>> + Unpin,
    {
        let path = self.storage_path(stored_name);

        match self.write_stream(&path, &mut stream).await {
            Ok((size_bytes, head)) => Ok(PutOutcome {
                content_type: sniff_content_type(&head, stored_name),
                storage_path: path,
                size_bytes,
            }),
            Err(e) => {
                // Never leave a partial blob behind
                if let Err(cleanup_err) = fs::remove_file(&path).await {
                    if cleanup_err.kind() != io::ErrorKind::NotFound {
                        tracing::warn!(
                            "Failed to remove partial blob {:?}: {}",
                            path,
                            cleanup_err
                        );
                    }
                }
                Err(e)
            }
        }
    }

    /// Write the stream to disk, returning the byte count and sniff prefix.
    async fn write_stream<S>(&self, path: &Path, stream: &mut S) -> Result<(u64, Vec<u8>)>
    where
        S: Stream<Item = io::Result<Bytes>> + Unpin,
    {
        let mut file = fs::File::create(path).await?;
        let mut size_bytes: u64 = 0;
        let mut head: Vec<u8> = Vec::with_capacity(SNIFF_LEN);

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if head.len() < SNIFF_LEN {
                let take = (SNIFF_LEN - head.len()).min(chunk.len());
                head.extend_from_slice(&chunk[..take]);
            }
            file.write_all(&chunk).await?;
            size_bytes += chunk.len() as u64;
        }

        file.flush().await?;
        Ok((size_bytes, head))
    }

    /// Open a blob for reading.
    ///
    /// Fails with `NotFound` if the path does not exist; callers holding a
    /// live metadata record should check `exists` first and report
    /// `BlobMissing` instead.
    pub async fn reader(&self, storage_path: impl AsRef<Path>) -> Result<fs::File> {
        let path = storage_path.as_ref();
        match fs::File::open(path).await {
            Ok(file) => Ok(file),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DepotError::NotFound(format!(
                "blob at {}",
                path.display()
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a blob exists in storage.
    pub async fn exists(&self, storage_path: impl AsRef<Path>) -> bool {
        fs::metadata(storage_path.as_ref()).await.is_ok()
    }

    /// Delete a blob from storage.
    ///
    /// Idempotent: returns `true` if the blob was deleted, `false` if it was
    /// already gone.
    pub async fn delete(&self, storage_path: impl AsRef<Path>) -> Result<bool> {
        match fs::remove_file(storage_path.as_ref()).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Detect a content type from the leading bytes of a blob.
///
/// Magic-number detection comes first; the stored name's extension is only a
/// fallback for formats without a signature (plain text, CSV and friends).
/// Client-declared content types are never consulted.
fn sniff_content_type(head: &[u8], stored_name: &str) -> String {
    if let Some(kind) = infer::get(head) {
        return kind.mime_type().to_string();
    }

    mime_guess::from_path(stored_name)
        .first_or_octet_stream()
        .to_string()
}
