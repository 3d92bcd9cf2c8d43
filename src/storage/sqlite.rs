//! SQLite-backed contact store.

use super::{ContactRepository, StorageResult};
use crate::domain::{Contact, NewContact};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

/// Contact store over a pool of SQLite connections.
///
/// Every operation checks out its own connection and hands it back when the
/// guard drops at the end of the call.
#[derive(Clone)]
pub struct SqliteContactStore {
    pool: SqlitePool,
}

impl SqliteContactStore {
    /// Opens (creating if needed) the database file and makes sure the
    /// contacts table exists.
    pub async fn open(path: &Path, max_connections: u32) -> StorageResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        info!(path = %path.display(), "contact store ready");
        Ok(store)
    }

    /// Waits for checked-out connections to come back, then closes them.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ContactRepository for SqliteContactStore {
    async fn ensure_schema(&self) -> StorageResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone TEXT NOT NULL
            )",
        )
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    async fn insert(&self, contact: &NewContact) -> StorageResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("INSERT INTO contacts (name, phone) VALUES (?, ?)")
            .bind(contact.name())
            .bind(contact.phone())
            .execute(&mut *conn)
            .await?;
        let id = result.last_insert_rowid();
        debug!(id, "inserted contact");
        Ok(id)
    }

    async fn delete(&self, id: &str) -> StorageResult<u64> {
        // The raw text is bound as-is; column affinity decides whether it
        // matches an integer id.
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        debug!(id, removed = result.rows_affected(), "deleted contact");
        Ok(result.rows_affected())
    }

    async fn list(&self) -> StorageResult<Vec<Contact>> {
        let mut conn = self.pool.acquire().await?;
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT id, name, phone FROM contacts ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(contacts)
    }

    async fn ping(&self) -> StorageResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
