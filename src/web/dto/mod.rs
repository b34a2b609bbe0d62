//! Request and response DTOs for the Depot API.

mod request;
mod response;

pub use request::{PaginationQuery, UploadQuery};
pub use response::{FileDeleteResponse, FileListResponse, FileResponse, StatsResponse};
