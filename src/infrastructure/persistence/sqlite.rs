//! SQLite-backed store: the durable backend.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::domain::entities::{ClickEvent, LinkRecord};
use crate::domain::errors::StoreError;
use crate::domain::stores::{ClickLedger, LinkRegistry};

/// Registry + ledger on a single SQLite database.
///
/// The pool is capped at one connection: the store is a single-logical-writer
/// resource, and a lone connection serializes mutations the same way the
/// in-memory backend's write lock does.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (or creates) the database and applies embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the database cannot be opened or
    /// migrated.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .map_err(backend)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(Self { pool })
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// Maps a failed link insert, surfacing unique-constraint hits as the
/// domain-level duplicate error.
fn map_insert_error(e: sqlx::Error, code: &str) -> StoreError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return StoreError::DuplicateShortcode {
                code: code.to_string(),
            };
        }
    }

    backend(e)
}

fn link_from_row(row: &sqlx::sqlite::SqliteRow) -> LinkRecord {
    LinkRecord {
        long_url: row.get("long_url"),
        shortcode: row.get("shortcode"),
        created_at: row.get("created_at"),
        expires_at: row.get("expires_at"),
    }
}

fn click_from_row(row: &sqlx::sqlite::SqliteRow) -> ClickEvent {
    ClickEvent {
        shortcode: row.get("shortcode"),
        timestamp: row.get("timestamp"),
        source: row.get("source"),
        location: row.get("location"),
    }
}

#[async_trait]
impl LinkRegistry for SqliteStore {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM links WHERE shortcode = ?")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        Ok(row.is_some())
    }

    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        let row = sqlx::query(
            "SELECT long_url, shortcode, created_at, expires_at FROM links WHERE shortcode = ?",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        Ok(row.as_ref().map(link_from_row))
    }

    async fn insert_all(&self, records: Vec<LinkRecord>) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(backend)?;

        for record in &records {
            sqlx::query(
                "INSERT INTO links (shortcode, long_url, created_at, expires_at) \
                 VALUES (?, ?, ?, ?)",
            )
            .bind(&record.shortcode)
            .bind(&record.long_url)
            .bind(record.created_at)
            .bind(record.expires_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_insert_error(e, &record.shortcode))?;
        }

        tx.commit().await.map_err(backend)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<LinkRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT long_url, shortcode, created_at, expires_at FROM links ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.iter().map(link_from_row).collect())
    }
}

#[async_trait]
impl ClickLedger for SqliteStore {
    async fn append(&self, event: ClickEvent) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO clicks (shortcode, timestamp, source, location) VALUES (?, ?, ?, ?)",
        )
        .bind(&event.shortcode)
        .bind(event.timestamp)
        .bind(&event.source)
        .bind(&event.location)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(())
    }

    async fn for_code(&self, code: &str) -> Result<Vec<ClickEvent>, StoreError> {
        let rows = sqlx::query(
            "SELECT shortcode, timestamp, source, location FROM clicks \
             WHERE shortcode = ? ORDER BY id",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.iter().map(click_from_row).collect())
    }

    async fn all(&self) -> Result<Vec<ClickEvent>, StoreError> {
        let rows =
            sqlx::query("SELECT shortcode, timestamp, source, location FROM clicks ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(backend)?;

        Ok(rows.iter().map(click_from_row).collect())
    }
}
