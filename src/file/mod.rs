//! File management module for Depot.
//!
//! This module provides the file-handling core:
//! - Metadata records and repository
//! - Blob storage with UUID naming and streaming writes
//! - The file service orchestrating both

mod record;
mod service;
mod storage;

pub use record::{FileRecord, FileRepository, NewFileRecord};
pub use service::{
    extract_extension, format_size, Download, FileListing, FileService, StorageStats,
    UploadRequest,
};
pub use storage::{BlobStore, PutOutcome};

/// Maximum length for the original filename (in characters).
pub const MAX_FILENAME_LENGTH: usize = 255;
