use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::{NoteStore, StoreError};
use crate::models::Note;

/// Process-local backend. Contents are lost on restart.
pub struct MemoryStore {
    notes: Mutex<Vec<Note>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn create_note(&self, text: String) -> Result<Note, StoreError> {
        let note = Note {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            text,
            date: Utc::now(),
        };

        self.notes.lock().unwrap().insert(0, note.clone());

        Ok(note)
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        let mut notes = self.notes.lock().unwrap();
        let initial_len = notes.len();
        notes.retain(|note| note.id != id);

        Ok(notes.len() < initial_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_prepends_newest_first() {
        let store = MemoryStore::new();
        store.create_note("first".to_string()).await.unwrap();
        store.create_note("second".to_string()).await.unwrap();

        let notes = store.list_notes().await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].text, "second");
        assert_eq!(notes[1].text, "first");
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing() {
        let store = MemoryStore::new();
        let a = store.create_note("a".to_string()).await.unwrap();
        let b = store.create_note("b".to_string()).await.unwrap();

        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_note() {
        let store = MemoryStore::new();
        let a = store.create_note("a".to_string()).await.unwrap();
        let b = store.create_note("b".to_string()).await.unwrap();
        let c = store.create_note("c".to_string()).await.unwrap();

        assert!(store.delete_note(b.id).await.unwrap());

        let notes = store.list_notes().await.unwrap();
        let ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![c.id, a.id]);
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_failure_and_changes_nothing() {
        let store = MemoryStore::new();
        store.create_note("a".to_string()).await.unwrap();

        assert!(!store.delete_note(999_999).await.unwrap());
        assert_eq!(store.list_notes().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_not_found_the_second_time() {
        let store = MemoryStore::new();
        let note = store.create_note("a".to_string()).await.unwrap();

        assert!(store.delete_note(note.id).await.unwrap());
        assert!(!store.delete_note(note.id).await.unwrap());
    }
}
