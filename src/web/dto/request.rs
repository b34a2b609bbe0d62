//! Request DTOs for the Depot API.

use serde::Deserialize;

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page. Falls back to the configured default when absent.
    #[serde(default)]
    pub per_page: Option<u32>,
}

fn default_page() -> u32 {
    1
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: None,
        }
    }
}

/// Query parameters for file upload.
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    /// Optional file description.
    #[serde(default)]
    pub description: Option<String>,
}
