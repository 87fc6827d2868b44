//! SQLite-backed stores.
//!
//! One [`SqliteStore`] owns the pool and implements [`Store`](crate::storage::Store)
//! for every entity kind, one table each.

mod help_requests;
mod menu_item_reviews;
mod menu_items;

use crate::storage::StorageError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects to `database_url`, creating the database file and its parent
    /// directory when missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        if let Some(parent) = database_file(database_url).and_then(|file| file.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::OperationFailed(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        info!(url = %database_url, max_connections, "Connected to SQLite");
        Ok(Self { pool })
    }

    /// A private in-memory database on a single long-lived connection.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Creates the tables if they do not exist yet.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ucsb_dining_commons_menu_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                dining_commons_code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                station TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS menu_item_reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                item_id INTEGER NOT NULL,
                reviewer_email TEXT NOT NULL,
                stars INTEGER NOT NULL,
                date_reviewed TEXT NOT NULL,
                comments TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS help_requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                requester_email TEXT NOT NULL,
                team_id TEXT NOT NULL,
                table_or_breakout_room TEXT NOT NULL,
                request_time TEXT NOT NULL,
                explanation TEXT NOT NULL,
                solved BOOLEAN NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Database schema ready");
        Ok(())
    }

    /// Waits for in-flight queries, then closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("SQLite pool closed");
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// File path portion of a `sqlite:` URL, or `None` for in-memory databases.
fn database_file(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path.contains(":memory:") {
        None
    } else {
        Some(Path::new(path))
    }
}
