//! HTTP handlers for the Depot API.

mod files;

pub use files::{
    delete_file, download_file, get_file_info, get_stats, health, list_files, upload_file,
};

use crate::file::FileService;

/// Shared application state for the API handlers.
pub struct AppState {
    /// The file service behind every endpoint.
    pub service: FileService,
}

impl AppState {
    /// Create a new AppState.
    pub fn new(service: FileService) -> Self {
        Self { service }
    }
}
