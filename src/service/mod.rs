use std::sync::Arc;

use crate::{
    dto::NoteResponse,
    store::{NoteStore, StoreError},
};

/// Maps store results into response DTOs. Holds no state of its own; the
/// backend is injected at startup so tests can run against isolated stores.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn create_note(&self, text: String) -> Result<NoteResponse, StoreError> {
        self.store.create_note(text).await.map(NoteResponse::from)
    }

    pub async fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        self.store.delete_note(id).await
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, StoreError> {
        self.store.list_notes().await.map(|notes| {
            notes.into_iter().map(NoteResponse::from).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn created_note_renders_a_non_empty_date() {
        let service = NoteService::new(Arc::new(MemoryStore::new()));

        let note = service.create_note("Buy milk".to_string()).await.unwrap();

        assert_eq!(note.text, "Buy milk");
        assert!(!note.date.is_empty());
    }

    #[tokio::test]
    async fn listing_returns_responses_newest_first() {
        let service = NoteService::new(Arc::new(MemoryStore::new()));
        service.create_note("old".to_string()).await.unwrap();
        service.create_note("new".to_string()).await.unwrap();

        let notes = service.get_all_notes().await.unwrap();
        assert_eq!(notes[0].text, "new");
        assert_eq!(notes[1].text, "old");
    }
}
