//! # Note editing state machine
//!
//! [`NoteEditSession`] tracks one note being edited: the snapshot fetched from
//! the store (`original`), whether the fetch or a save is in flight, and the
//! last user-visible error. The form fields themselves live outside the
//! session (the UI keeps them in their own signal) and are passed in where
//! needed, which keeps [`has_unsaved_changes`] a pure function of two
//! snapshots.
//!
//! ```text
//! new ──load──▶ loading ──ok──▶ ready ──save(form)──▶ saving ──ok──▶ ready (original = saved row)
//!                  │                        │                 └─err─▶ ready + SaveFailed
//!                  ├─not found─▶ NotFound    └─blank title─▶ ready + EmptyTitle (no request)
//!                  └─other─────▶ LoadFailed
//! ```
//!
//! Both load and save come in two flavours: a one-shot `async fn` taking a
//! [`NoteStore`], and a `begin_*`/`finish_*` pair for callers that must not
//! hold a borrow of the session across the await (Dioxus signals).

use chrono::{DateTime, Utc};
use types::{Note, NoteFormData, UpdateNoteRequest};

use crate::error::StoreError;
use crate::repo::NoteStore;

/// Error surfaced to the person editing a note.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("note not found")]
    NotFound,
    #[error("Please enter a title.")]
    EmptyTitle,
    #[error("Could not load the note.")]
    LoadFailed,
    #[error("{0}")]
    SaveFailed(String),
}

impl EditError {
    fn save_failed(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            other => {
                let message = other.to_string();
                if message.trim().is_empty() {
                    Self::SaveFailed("Could not save the note.".to_string())
                } else {
                    Self::SaveFailed(message)
                }
            }
        }
    }
}

/// Whether `form` differs from the persisted `original`.
///
/// Title and content are compared trimmed, tags ignore order.
pub fn has_unsaved_changes(original: &Note, form: &NoteFormData) -> bool {
    form.title.trim() != original.title.trim()
        || form.content.trim() != original.content.trim()
        || sorted(&form.tags) != sorted(&original.tags)
        || form.is_public != original.is_public
}

fn sorted(tags: &[String]) -> Vec<&str> {
    let mut tags: Vec<&str> = tags.iter().map(String::as_str).collect();
    tags.sort_unstable();
    tags
}

/// Validate and insert a new note built from `form`.
///
/// A blank title is rejected without contacting the store.
pub async fn create_note<S: NoteStore>(
    store: &S,
    form: &NoteFormData,
    author_id: &str,
) -> Result<Note, EditError> {
    if form.title_is_blank() {
        return Err(EditError::EmptyTitle);
    }
    store
        .create_note(form.create_request(author_id))
        .await
        .map_err(EditError::save_failed)
}

/// Edit state for a single note.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteEditSession {
    note_id: String,
    original: Option<Note>,
    loading: bool,
    saving: bool,
    error: Option<EditError>,
}

impl NoteEditSession {
    pub fn new(note_id: impl Into<String>) -> Self {
        Self {
            note_id: note_id.into(),
            original: None,
            loading: true,
            saving: false,
            error: None,
        }
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    /// The last persisted snapshot, once loaded.
    pub fn original(&self) -> Option<&Note> {
        self.original.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&EditError> {
        self.error.as_ref()
    }

    pub fn is_not_found(&self) -> bool {
        self.error == Some(EditError::NotFound)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Record the result of fetching the note. On success returns the form
    /// state to start editing from.
    pub fn finish_load(&mut self, result: Result<Note, StoreError>) -> Option<NoteFormData> {
        self.loading = false;
        match result {
            Ok(note) => {
                let form = NoteFormData::from(&note);
                self.original = Some(note);
                self.error = None;
                Some(form)
            }
            Err(StoreError::NotFound) => {
                self.original = None;
                self.error = Some(EditError::NotFound);
                None
            }
            Err(_) => {
                self.original = None;
                self.error = Some(EditError::LoadFailed);
                None
            }
        }
    }

    pub async fn load<S: NoteStore>(&mut self, store: &S) -> Option<NoteFormData> {
        self.loading = true;
        self.error = None;
        let result = store.get_note(&self.note_id).await;
        self.finish_load(result)
    }

    /// False until a note has been loaded.
    pub fn has_unsaved_changes(&self, form: &NoteFormData) -> bool {
        self.original
            .as_ref()
            .is_some_and(|original| has_unsaved_changes(original, form))
    }

    /// Validate `form` and build the update to send. A blank title records
    /// [`EditError::EmptyTitle`] and yields no request.
    pub fn begin_save(
        &mut self,
        form: &NoteFormData,
        now: DateTime<Utc>,
    ) -> Result<UpdateNoteRequest, EditError> {
        if form.title_is_blank() {
            self.error = Some(EditError::EmptyTitle);
            return Err(EditError::EmptyTitle);
        }
        self.saving = true;
        self.error = None;
        Ok(form.update_request(now))
    }

    /// Record the store's answer to an update. Returns whether it succeeded.
    pub fn finish_save(&mut self, result: Result<Note, StoreError>) -> bool {
        self.saving = false;
        match result {
            Ok(note) => {
                self.original = Some(note);
                true
            }
            Err(err) => {
                self.error = Some(EditError::save_failed(err));
                false
            }
        }
    }

    /// Validate and persist `form`. Never propagates the failure; it is left
    /// in [`error`](Self::error) instead.
    pub async fn save<S: NoteStore>(&mut self, store: &S, form: &NoteFormData) -> bool {
        let Ok(request) = self.begin_save(form, Utc::now()) else {
            return false;
        };
        let result = store.update_note(&self.note_id, request).await;
        self.finish_save(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use std::cell::Cell;
    use types::{CreateNoteRequest, PLACEHOLDER_AUTHOR_ID};

    /// Counts calls and fails every update.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        updates: Cell<usize>,
        fail_with: Option<StoreError>,
    }

    impl NoteStore for FlakyStore {
        async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
            self.inner.list_notes().await
        }

        async fn get_note(&self, id: &str) -> Result<Note, StoreError> {
            self.inner.get_note(id).await
        }

        async fn create_note(&self, request: CreateNoteRequest) -> Result<Note, StoreError> {
            self.inner.create_note(request).await
        }

        async fn update_note(
            &self,
            id: &str,
            request: UpdateNoteRequest,
        ) -> Result<Note, StoreError> {
            self.updates.set(self.updates.get() + 1);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => self.inner.update_note(id, request).await,
            }
        }
    }

    async fn seeded(store: &MemoryStore) -> Note {
        let mut request = CreateNoteRequest::titled("Roadmap", PLACEHOLDER_AUTHOR_ID);
        request.content = "Q3 goals".to_string();
        request.tags = vec!["plan".to_string(), "team".to_string()];
        store.create_note(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_clean_right_after_load() {
        let store = MemoryStore::new();
        let note = seeded(&store).await;

        let mut session = NoteEditSession::new(&note.id);
        assert!(session.is_loading());
        let form = session.load(&store).await.unwrap();

        assert!(!session.is_loading());
        assert_eq!(session.original(), Some(&note));
        assert!(!session.has_unsaved_changes(&form));
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_each_field_marks_dirty() {
        let store = MemoryStore::new();
        let note = seeded(&store).await;
        let clean = NoteFormData::from(&note);

        let mut form = clean.clone();
        form.title.push('!');
        assert!(has_unsaved_changes(&note, &form));

        let mut form = clean.clone();
        form.content = "changed".to_string();
        assert!(has_unsaved_changes(&note, &form));

        let mut form = clean.clone();
        form.add_tag("new");
        assert!(has_unsaved_changes(&note, &form));

        let mut form = clean.clone();
        form.remove_tag("plan");
        assert!(has_unsaved_changes(&note, &form));

        let mut form = clean.clone();
        form.is_public = !form.is_public;
        assert!(has_unsaved_changes(&note, &form));
    }

    #[tokio::test]
    async fn test_tag_order_and_whitespace_are_not_changes() {
        let store = MemoryStore::new();
        let note = seeded(&store).await;

        let mut form = NoteFormData::from(&note);
        form.tags.reverse();
        form.title = format!("  {}  ", note.title);
        form.content = format!("{}\n", note.content);
        assert!(!has_unsaved_changes(&note, &form));
    }

    #[test]
    fn test_dirty_is_false_before_load() {
        let session = NoteEditSession::new("anything");
        let form = NoteFormData {
            title: "typed early".to_string(),
            ..Default::default()
        };
        assert!(!session.has_unsaved_changes(&form));
    }

    #[tokio::test]
    async fn test_load_missing_note_is_not_found() {
        let store = MemoryStore::new();
        let mut session = NoteEditSession::new("nope");
        assert!(session.load(&store).await.is_none());
        assert!(session.is_not_found());
        assert!(session.original().is_none());
    }

    #[tokio::test]
    async fn test_load_backend_failure_is_generic() {
        let mut session = NoteEditSession::new("x");
        let form = session.finish_load(Err(StoreError::Backend("connection reset".to_string())));
        assert!(form.is_none());
        assert_eq!(session.error(), Some(&EditError::LoadFailed));
        assert!(!session.is_not_found());
    }

    #[tokio::test]
    async fn test_blank_title_rejected_without_request() {
        let store = FlakyStore::default();
        let note = seeded(&store.inner).await;
        let mut session = NoteEditSession::new(&note.id);
        let mut form = session.load(&store).await.unwrap();

        form.title = "   ".to_string();
        assert!(!session.save(&store, &form).await);
        assert_eq!(session.error(), Some(&EditError::EmptyTitle));
        assert_eq!(store.updates.get(), 0);
        assert!(!session.is_saving());
    }

    #[tokio::test]
    async fn test_successful_save_clears_dirty_flag() {
        let store = MemoryStore::new();
        let note = seeded(&store).await;
        let mut session = NoteEditSession::new(&note.id);
        let mut form = session.load(&store).await.unwrap();

        form.title = "  Roadmap v2 ".to_string();
        form.add_tag("q3");
        assert!(session.has_unsaved_changes(&form));

        assert!(session.save(&store, &form).await);
        assert!(!session.has_unsaved_changes(&form));
        assert!(!session.is_saving());

        let stored = store.get_note(&note.id).await.unwrap();
        assert_eq!(stored.title, "Roadmap v2");
        assert_eq!(stored.tags, vec!["plan", "team", "q3"]);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_message_and_dirty_flag() {
        let store = FlakyStore {
            fail_with: Some(StoreError::Backend("permission denied".to_string())),
            ..Default::default()
        };
        let note = seeded(&store.inner).await;
        let mut session = NoteEditSession::new(&note.id);
        let mut form = session.load(&store).await.unwrap();
        form.content = "rewritten".to_string();

        assert!(!session.save(&store, &form).await);
        assert_eq!(
            session.error(),
            Some(&EditError::SaveFailed("permission denied".to_string()))
        );
        assert!(session.has_unsaved_changes(&form));
        assert_eq!(store.updates.get(), 1);

        session.dismiss_error();
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_create_then_fetch_has_defaults() {
        let store = MemoryStore::new();
        let form = NoteFormData {
            title: "Test".to_string(),
            ..Default::default()
        };

        let created = create_note(&store, &form, PLACEHOLDER_AUTHOR_ID).await.unwrap();
        let fetched = store.get_note(&created.id).await.unwrap();

        assert_eq!(fetched.title, "Test");
        assert!(fetched.tags.is_empty());
        assert!(!fetched.is_public);
    }

    #[tokio::test]
    async fn test_create_with_blank_title_is_rejected() {
        let store = MemoryStore::new();
        let form = NoteFormData {
            title: " ".to_string(),
            content: "orphan body".to_string(),
            ..Default::default()
        };
        assert_eq!(
            create_note(&store, &form, PLACEHOLDER_AUTHOR_ID).await,
            Err(EditError::EmptyTitle)
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_reload_after_failed_load_recovers() {
        let store = MemoryStore::new();
        let note = seeded(&store).await;

        let mut session = NoteEditSession::new(&note.id);
        assert!(session
            .finish_load(Err(StoreError::Backend("connection reset".to_string())))
            .is_none());
        assert!(session.original().is_none());
        assert!(!session.is_not_found());
        assert!(session.error().is_some());

        let form = session.load(&store).await.unwrap();
        assert_eq!(session.original(), Some(&note));
        assert!(session.error().is_none());
        assert!(!session.has_unsaved_changes(&form));
    }
}
