pub mod sqlite;

use crate::domain::{Contact, NewContact};
use async_trait::async_trait;
use thiserror::Error;

pub use sqlite::SqliteContactStore;

/// Errors raised by the storage layer. None of them are recovered from.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence for contacts.
///
/// Each call is a single statement that commits on its own; there is no
/// transaction spanning calls.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Creates the contacts table if it does not exist yet.
    async fn ensure_schema(&self) -> StorageResult<()>;

    /// Inserts a contact and returns the id storage assigned to it.
    async fn insert(&self, contact: &NewContact) -> StorageResult<i64>;

    /// Deletes by id. An id matching no row is not an error; the number of
    /// removed rows is returned.
    async fn delete(&self, id: &str) -> StorageResult<u64>;

    /// Every stored contact, in ascending id order.
    async fn list(&self) -> StorageResult<Vec<Contact>>;

    /// Round-trips a trivial query to check the database is reachable.
    async fn ping(&self) -> StorageResult<()>;
}
