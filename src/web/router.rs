//! Router configuration for the Depot API.

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    delete_file, download_file, get_file_info, get_stats, health, list_files, upload_file,
    AppState,
};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Multipart framing adds a little on top of the payload itself; the
    // authoritative size limit is enforced by the file service.
    let body_limit = app_state.service.max_file_size() as usize + 64 * 1024;

    let api_routes = Router::new()
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/files", get(list_files))
        .route("/files/:file_id", get(get_file_info).delete(delete_file))
        .route("/download/:file_id", get(download_file))
        .route("/stats", get(get_stats));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        )
        .with_state(app_state)
}

/// Permissive CORS layer for the API.
///
/// The API carries no credentials, so any origin may call it.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
}
