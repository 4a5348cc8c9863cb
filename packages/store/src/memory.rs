use std::sync::{Arc, Mutex};

use chrono::Utc;
use types::{CreateNoteRequest, Note, UpdateNoteRequest};

use crate::error::StoreError;
use crate::repo::NoteStore;

/// In-memory NoteStore for tests and running without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an existing record as-is, replacing any note with the same id.
    pub fn insert(&self, note: Note) {
        let mut notes = self.notes.lock().unwrap();
        notes.retain(|n| n.id != note.id);
        notes.push(note);
    }

    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NoteStore for MemoryStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes: Vec<Note> = self.notes.lock().unwrap().iter().rev().cloned().collect();
        // Stable: notes created in the same instant stay newest-inserted first.
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    async fn get_note(&self, id: &str) -> Result<Note, StoreError> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create_note(&self, request: CreateNoteRequest) -> Result<Note, StoreError> {
        let now = Utc::now();
        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            content: request.content,
            created_at: now,
            updated_at: now,
            author_id: request.author_id,
            is_public: request.is_public,
            tags: request.tags,
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &str, request: UpdateNoteRequest) -> Result<Note, StoreError> {
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound)?;
        request.apply_to(note);
        if request.updated_at.is_none() {
            note.updated_at = Utc::now();
        }
        Ok(note.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use types::PLACEHOLDER_AUTHOR_ID;

    #[tokio::test]
    async fn test_create_then_get_uses_defaults() {
        let store = MemoryStore::new();

        let created = store
            .create_note(CreateNoteRequest::titled("Test", PLACEHOLDER_AUTHOR_ID))
            .await
            .unwrap();

        let fetched = store.get_note(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Test");
        assert!(fetched.tags.is_empty());
        assert!(!fetched.is_public);
        assert_eq!(fetched.content, "");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(store.get_note("missing").await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = MemoryStore::new();
        let first = store
            .create_note(CreateNoteRequest::titled("first", "a"))
            .await
            .unwrap();
        let mut older = first.clone();
        older.id = "older".to_string();
        older.title = "older".to_string();
        older.created_at = first.created_at - Duration::days(1);
        store.insert(older);
        store
            .create_note(CreateNoteRequest::titled("second", "a"))
            .await
            .unwrap();

        let titles: Vec<String> = store
            .list_notes()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["second", "first", "older"]);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let store = MemoryStore::new();
        let mut request = CreateNoteRequest::titled("Plan", "a");
        request.content = "body".to_string();
        request.tags = vec!["x".to_string()];
        let note = store.create_note(request).await.unwrap();

        let updated = store
            .update_note(
                &note.id,
                UpdateNoteRequest {
                    is_public: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_public);
        assert_eq!(updated.title, "Plan");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.tags, vec!["x"]);
        assert!(updated.updated_at >= note.updated_at);
        assert_eq!(store.get_note(&note.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let result = store
            .update_note("missing", UpdateNoteRequest::default())
            .await;
        assert_eq!(result, Err(StoreError::NotFound));
        assert!(store.is_empty());
    }
}
