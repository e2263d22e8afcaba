mod file;
mod memory;
mod postgres;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("migration error: {0}")]
    Migration(#[from] refinery::Error),
}

/// Storage contract shared by all backends. The collection is ordered
/// newest-first; `id` and `date` are assigned here, never by the caller.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Returns every note, newest first.
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError>;

    /// Assigns an id and timestamp, prepends the note, and returns it.
    /// Callers are expected to have validated `text` already.
    async fn create_note(&self, text: String) -> Result<Note, StoreError>;

    /// Removes the note with `id` if present; returns whether one was removed.
    async fn delete_note(&self, id: i64) -> Result<bool, StoreError>;
}
