//! Web API module for Depot.
//!
//! This module provides the REST API over the file service: upload,
//! listing, metadata lookup, download, deletion and storage statistics.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
