//! SQLite storage bootstrap: opens the pool and makes sure the schema exists.

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// `users` table. `email` carries the UNIQUE constraint that arbitrates
/// concurrent registrations.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Creates the database directory and file if absent, opens a pool and runs
/// the idempotent schema DDL. Any error here must stop the process before it
/// starts serving.
pub async fn ensure_ready(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    if let Some(dir) = cfg.path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create database directory {}", dir.display()))?;
    }
    debug!(path = %cfg.path.display(), "opening database");

    let opts = SqliteConnectOptions::new()
        .filename(&cfg.path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(cfg.busy_timeout());

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(opts)
        .await
        .with_context(|| format!("open database {}", cfg.path.display()))?;

    sqlx::query(SCHEMA)
        .execute(&pool)
        .await
        .context("create users table")?;

    info!(path = %cfg.path.display(), "users table created/verified");
    Ok(pool)
}
