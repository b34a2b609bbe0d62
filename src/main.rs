use std::sync::Arc;

use tracing::info;

use depot::file::{BlobStore, FileService};
use depot::web::WebServer;
use depot::{Config, Database};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = depot::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        depot::logging::init_console_only(&config.logging.level);
    }

    info!("Depot file service");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!("Failed to open database at {}: {}", config.database.path, e);
            std::process::exit(1);
        }
    };

    let store = match BlobStore::new(&config.storage.upload_dir) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Failed to initialize blob storage at {}: {}",
                config.storage.upload_dir,
                e
            );
            std::process::exit(1);
        }
    };

    let service = FileService::new(
        db,
        store,
        config.storage.clone(),
        config.pagination.clone(),
    );

    let server = match WebServer::new(&config.server, service) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to configure web server: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
