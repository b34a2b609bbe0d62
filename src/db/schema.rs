//! Database schema and migrations for Depot.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - files table
    r#"
-- File metadata records. Blobs live on the filesystem under stored_name;
-- file_id is the only identifier ever exposed to clients.
CREATE TABLE files (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    file_id           TEXT NOT NULL UNIQUE,      -- external UUID, never reused
    stored_name       TEXT NOT NULL UNIQUE,      -- UUID + validated extension
    original_filename TEXT NOT NULL,             -- display name only
    storage_path      TEXT NOT NULL,
    size_bytes        INTEGER NOT NULL,          -- measured at write time
    content_type      TEXT NOT NULL,             -- sniffed from content
    extension         TEXT NOT NULL,             -- lower-cased, dot-prefixed
    description       TEXT,
    created_at        TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_files_file_id ON files(file_id);
"#,
];
