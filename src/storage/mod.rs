pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::entities::Entity;
use async_trait::async_trait;

/// Keyed persistence for one entity kind.
///
/// A missing record is not an error here: lookups return `None` and deletes
/// return `false`, leaving the translation to HTTP to the handlers.
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// Every stored record, ordered by surrogate id.
    async fn list_all(&self) -> Result<Vec<E>, StorageError>;

    async fn find_by_key(&self, key: &E::Key) -> Result<Option<E>, StorageError>;

    /// Inserts the record when its key is new, replaces it otherwise.
    /// Returns the record as stored, including any generated id.
    async fn save(&self, record: E) -> Result<E, StorageError>;

    /// Returns `true` when a record was removed.
    async fn delete_by_key(&self, key: &E::Key) -> Result<bool, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}
