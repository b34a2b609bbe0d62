//! Depot - a small file upload and download service.
//!
//! Files are stored as opaque blobs on the local filesystem under
//! randomized names, with their metadata kept in an SQLite database.
//! A REST API exposes upload, listing, metadata lookup, download,
//! deletion and storage statistics.

pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{DepotError, Result};
pub use file::{
    extract_extension, format_size, BlobStore, Download, FileListing, FileRecord, FileRepository,
    FileService, NewFileRecord, StorageStats, UploadRequest, MAX_FILENAME_LENGTH,
};
pub use web::WebServer;
