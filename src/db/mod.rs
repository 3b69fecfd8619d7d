//! Database Module
//!
//! SQLite connection pool for the contact-message collaborator. Products
//! and orders never touch this — they are in-memory only.

pub mod repository;

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::utils::AppError;

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database at the given path and run migrations.
    ///
    /// Pass `":memory:"` for an in-memory database (tests); the pool is then
    /// pinned to a single connection so the schema survives.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let in_memory = db_path == ":memory:";

        let pool = if in_memory {
            let options = SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?;
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .connect_with(options)
                .await
        } else {
            if let Some(parent) = Path::new(db_path).parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AppError::database(format!("Failed to create data dir: {e}")))?;
            }

            // WAL, foreign keys, normal sync
            let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
                .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("foreign_keys", "ON");
            SqlitePoolOptions::new().max_connections(5).connect_with(options).await
        }
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // busy_timeout: 写冲突时等待 5s 而非立即失败
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;

        tracing::info!("Database connection established (SQLite, busy_timeout=5000ms)");

        Ok(Self { pool })
    }

    /// In-memory database, mainly for tests
    pub async fn open_in_memory() -> Result<Self, AppError> {
        Self::new(":memory:").await
    }
}
