// src/core/storage.rs
//! Key/value store for small JSON blobs, the client's local storage

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;

use crate::app_log;
use crate::core::FsOps;

pub const ANALYSIS_HISTORY_KEY: &str = "analysisHistory";
pub const JOB_DESCRIPTION_KEY: &str = "jobDescription";

#[derive(Clone)]
pub struct LocalStorage {
    pool: SqlitePool,
}

impl LocalStorage {
    /// Open (or create) the store at `database_path`.
    pub async fn open(database_path: &Path) -> Result<Self> {
        if let Some(parent) = database_path.parent() {
            FsOps::ensure_dir_exists(parent).await?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to open local storage: {}", database_path.display())
        })?;

        app_log!(info, "Local storage opened: {}", database_path.display());

        let storage = Self { pool };
        storage.migrate().await?;
        Ok(storage)
    }

    /// Throwaway store; a single connection keeps the in-memory database alive.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory storage")?;

        let storage = Self { pool };
        storage.migrate().await?;
        Ok(storage)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create local_storage table")?;

        Ok(())
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Failed to read '{}'", key))?;
        Ok(value)
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to write '{}'", key))?;

        app_log!(trace, "Stored '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    pub async fn remove_item(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to remove '{}'", key))?;
        Ok(())
    }

    /// Read and parse a JSON blob. Missing keys are `None`.
    pub async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .with_context(|| format!("Stored '{}' is not valid JSON", key)),
            None => Ok(None),
        }
    }

    pub async fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize '{}'", key))?;
        self.set_item(key, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_get_remove() {
        let storage = LocalStorage::in_memory().await.unwrap();
        assert_eq!(storage.get_item(JOB_DESCRIPTION_KEY).await.unwrap(), None);

        storage.set_item(JOB_DESCRIPTION_KEY, "Rust developer").await.unwrap();
        storage.set_item(JOB_DESCRIPTION_KEY, "Senior Rust developer").await.unwrap();
        assert_eq!(
            storage.get_item(JOB_DESCRIPTION_KEY).await.unwrap().as_deref(),
            Some("Senior Rust developer")
        );

        storage.remove_item(JOB_DESCRIPTION_KEY).await.unwrap();
        assert_eq!(storage.get_item(JOB_DESCRIPTION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_json_blobs_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store/local_storage.db");

        {
            let storage = LocalStorage::open(&path).await.unwrap();
            storage
                .save_json(ANALYSIS_HISTORY_KEY, &json!([{"timestamp": "t", "analysis": {}}]))
                .await
                .unwrap();
            storage.close().await;
        }

        let storage = LocalStorage::open(&path).await.unwrap();
        let history: Option<serde_json::Value> =
            storage.load_json(ANALYSIS_HISTORY_KEY).await.unwrap();
        assert_eq!(history.unwrap()[0]["timestamp"], "t");
    }

    #[tokio::test]
    async fn test_corrupt_json_is_an_error() {
        let storage = LocalStorage::in_memory().await.unwrap();
        storage.set_item(ANALYSIS_HISTORY_KEY, "{not json").await.unwrap();
        let loaded: Result<Option<serde_json::Value>> =
            storage.load_json(ANALYSIS_HISTORY_KEY).await;
        assert!(loaded.is_err());
    }
}
