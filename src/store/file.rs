use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use super::{NoteStore, StoreError};
use crate::models::Note;

/// Backend that round-trips the whole collection through a single JSON
/// document. Every list re-reads the file so externally made edits show up;
/// writes go through a temp file and rename so a crash mid-write cannot
/// leave a half-written document behind.
pub struct FileStore {
    path: PathBuf,
    tmp_path: PathBuf,
    /// Serializes read-modify-write cycles across concurrent requests.
    write_lock: tokio::sync::Mutex<()>,
    next_id: AtomicI64,
}

impl FileStore {
    /// Opens (or initializes) `<data_dir>/notes.json`, creating the
    /// directory and an empty document if absent. The id counter is seeded
    /// past the highest persisted id so restarts never reuse one.
    pub async fn new(data_dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(data_dir).await?;

        let path = data_dir.join("notes.json");
        let tmp_path = data_dir.join(".notes.json.tmp");

        let store = Self {
            path,
            tmp_path,
            write_lock: tokio::sync::Mutex::new(()),
            next_id: AtomicI64::new(1),
        };

        if !store.path.exists() {
            store.write_notes(&[]).await?;
        }

        let max_id = store
            .read_notes()
            .await
            .iter()
            .map(|note| note.id)
            .max()
            .unwrap_or(0);
        store.next_id.store(max_id + 1, Ordering::SeqCst);

        Ok(store)
    }

    /// Best-effort read: an unreadable or corrupt document behaves like an
    /// empty collection rather than failing the request.
    async fn read_notes(&self) -> Vec<Note> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!("failed to parse {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    async fn write_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(notes)?;
        fs::write(&self.tmp_path, bytes).await?;
        fs::rename(&self.tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl NoteStore for FileStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.read_notes().await)
    }

    async fn create_note(&self, text: String) -> Result<Note, StoreError> {
        let _guard = self.write_lock.lock().await;

        let note = Note {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            text,
            date: Utc::now(),
        };

        let mut notes = self.read_notes().await;
        notes.insert(0, note.clone());
        self.write_notes(&notes).await?;

        Ok(note)
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.read_notes().await;
        let initial_len = notes.len();
        notes.retain(|note| note.id != id);

        if notes.len() == initial_len {
            return Ok(false);
        }

        self.write_notes(&notes).await?;
        Ok(true)
    }
}
