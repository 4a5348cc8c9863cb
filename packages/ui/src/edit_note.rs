//! Hook driving the edit page: loads a note through [`api::ApiStore`] into a
//! [`NoteEditSession`] and keeps the form fields beside it.

use api::ApiStore;
use chrono::Utc;
use dioxus::prelude::*;
use store::{NoteEditSession, NoteStore};
use types::NoteFormData;

/// Handles returned by [`use_edit_note`]. All fields are signals, so the
/// struct is `Copy` and can be moved into event handlers freely.
#[derive(Clone, Copy)]
pub struct EditNote {
    pub session: Signal<NoteEditSession>,
    pub form: Signal<NoteFormData>,
    /// Form differs from the last persisted snapshot.
    pub dirty: Memo<bool>,
    loader: Resource<()>,
}

impl EditNote {
    /// Validate and persist the form. Failures are recorded on the session
    /// and reported as `false`; after success the saved row becomes the new
    /// original, which clears [`dirty`](Self::dirty).
    pub async fn save(mut self) -> bool {
        let form = self.form.peek().clone();
        let request = match self.session.write().begin_save(&form, Utc::now()) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "save rejected before sending");
                return false;
            }
        };

        let id = self.session.peek().note_id().to_string();
        let result = ApiStore.update_note(&id, request).await;
        if let Err(err) = &result {
            tracing::warn!(%id, error = %err, "saving note failed");
        }
        self.session.write().finish_save(result)
    }

    /// Fetch the note again, e.g. after a failed load.
    pub fn reload(mut self) {
        self.loader.restart();
    }

    pub fn dismiss_error(mut self) {
        self.session.write().dismiss_error();
    }
}

/// Load `note_id` for editing. Re-fetches when the id changes; the fetch is
/// dropped if the calling component unmounts first.
pub fn use_edit_note(note_id: String) -> EditNote {
    let mut id = use_signal(|| note_id.clone());
    if *id.peek() != note_id {
        id.set(note_id.clone());
    }

    let mut session = use_signal(|| NoteEditSession::new(note_id));
    let mut form = use_signal(NoteFormData::default);

    let loader = use_resource(move || async move {
        let note_id = id();
        session.set(NoteEditSession::new(note_id.clone()));
        let result = ApiStore.get_note(&note_id).await;
        if let Err(err) = &result {
            tracing::warn!(id = %note_id, error = %err, "loading note for edit failed");
        }
        if let Some(loaded) = session.write().finish_load(result) {
            form.set(loaded);
        }
    });

    let dirty = use_memo(move || session.read().has_unsaved_changes(&form.read()));

    EditNote {
        session,
        form,
        dirty,
        loader,
    }
}
