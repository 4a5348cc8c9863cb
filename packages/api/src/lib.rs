//! # API crate — note backend and server functions for the notes app
//!
//! This crate sits between the UI and the `notes` table. It defines the Dioxus
//! server functions the notes app calls, the server-side backends they run
//! against, and [`ApiStore`], which lets client code use those server
//! functions through the ordinary [`store::NoteStore`] trait.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | — (`from_env` needs `server`) | Backend selection from `SUPABASE_URL`/`SUPABASE_ANON_KEY` or `DATABASE_URL` |
//! | [`db`] | `server` | [`db::Backend`]: PostgREST, direct Postgres, or in-memory |
//! | [`models`] | `server` | `NoteRow`, the raw `notes` row and its conversion to [`types::Note`] |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` below is a Dioxus server function, compiled twice:
//! once with full server logic (behind `#[cfg(feature = "server")]`, receiving
//! the [`db::Backend`] through an `axum::Extension` extractor) and once as a
//! thin client stub that forwards the call over HTTP.
//!
//! - `list_notes` — `GET /api/notes`, newest first
//! - `get_note` — `GET /api/notes/:id`, `Ok(None)` when the row does not exist
//! - `create_note` — `POST /api/notes`
//! - `update_note` — `POST /api/notes/:id`, `Ok(None)` when the row does not exist
//!
//! "Not found" travels as `Ok(None)` rather than as an error so the client can
//! tell it apart from every other failure without parsing messages.

use dioxus::prelude::*;
use store::{NoteStore, StoreError};
use types::{CreateNoteRequest, Note, UpdateNoteRequest};

pub mod config;
pub mod db;
pub mod models;

pub use config::{BackendConfig, ConfigError};

#[cfg(feature = "server")]
fn backend_error(err: StoreError) -> ServerFnError {
    tracing::error!(error = %err, "note backend call failed");
    ServerFnError::new(err.to_string())
}

/// List every note, newest first.
#[cfg(feature = "server")]
#[get("/api/notes", backend: axum::Extension<db::Backend>)]
pub async fn list_notes() -> Result<Vec<Note>, ServerFnError> {
    let notes = backend.list_notes().await.map_err(backend_error)?;
    tracing::debug!(count = notes.len(), "listed notes");
    Ok(notes)
}

#[cfg(not(feature = "server"))]
#[get("/api/notes")]
pub async fn list_notes() -> Result<Vec<Note>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch one note by id.
#[cfg(feature = "server")]
#[get("/api/notes/:id", backend: axum::Extension<db::Backend>)]
pub async fn get_note(id: String) -> Result<Option<Note>, ServerFnError> {
    match backend.get_note(&id).await {
        Ok(note) => Ok(Some(note)),
        Err(StoreError::NotFound) => {
            tracing::info!(%id, "note not found");
            Ok(None)
        }
        Err(err) => Err(backend_error(err)),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/notes/:id")]
pub async fn get_note(id: String) -> Result<Option<Note>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert a note. The title must not be blank.
#[cfg(feature = "server")]
#[post("/api/notes", backend: axum::Extension<db::Backend>)]
pub async fn create_note(request: CreateNoteRequest) -> Result<Note, ServerFnError> {
    if request.title.trim().is_empty() {
        return Err(ServerFnError::new(
            StoreError::Invalid("title is required".to_string()).to_string(),
        ));
    }

    let note = backend.create_note(request).await.map_err(backend_error)?;
    tracing::info!(id = %note.id, "created note");
    Ok(note)
}

#[cfg(not(feature = "server"))]
#[post("/api/notes")]
pub async fn create_note(request: CreateNoteRequest) -> Result<Note, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Apply a partial update to a note. A present title must not be blank.
#[cfg(feature = "server")]
#[post("/api/notes/:id", backend: axum::Extension<db::Backend>)]
pub async fn update_note(
    id: String,
    request: UpdateNoteRequest,
) -> Result<Option<Note>, ServerFnError> {
    if request.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ServerFnError::new(
            StoreError::Invalid("title is required".to_string()).to_string(),
        ));
    }

    match backend.update_note(&id, request).await {
        Ok(note) => {
            tracing::info!(%id, "updated note");
            Ok(Some(note))
        }
        Err(StoreError::NotFound) => Ok(None),
        Err(err) => Err(backend_error(err)),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/:id")]
pub async fn update_note(
    id: String,
    request: UpdateNoteRequest,
) -> Result<Option<Note>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Turn a server-function result back into a store result: `Ok(None)` is the
/// not-found signal, any transport or server error is a backend failure.
fn found(result: Result<Option<Note>, ServerFnError>) -> Result<Note, StoreError> {
    result
        .map_err(StoreError::backend)?
        .ok_or(StoreError::NotFound)
}

/// [`NoteStore`] backed by the server functions above. This is what the UI
/// uses; the actual backend only exists on the server.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiStore;

impl NoteStore for ApiStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        crate::list_notes().await.map_err(StoreError::backend)
    }

    async fn get_note(&self, id: &str) -> Result<Note, StoreError> {
        found(crate::get_note(id.to_string()).await)
    }

    async fn create_note(&self, request: CreateNoteRequest) -> Result<Note, StoreError> {
        crate::create_note(request).await.map_err(StoreError::backend)
    }

    async fn update_note(&self, id: &str, request: UpdateNoteRequest) -> Result<Note, StoreError> {
        found(crate::update_note(id.to_string(), request).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::PLACEHOLDER_AUTHOR_ID;

    fn sample() -> Note {
        let now = chrono::Utc::now();
        Note {
            id: "11111111-1111-4111-8111-111111111111".to_string(),
            title: "Standup".to_string(),
            content: String::new(),
            created_at: now,
            updated_at: now,
            author_id: PLACEHOLDER_AUTHOR_ID.to_string(),
            is_public: false,
            tags: Vec::new(),
        }
    }

    #[test]
    fn missing_row_becomes_not_found() {
        assert_eq!(found(Ok(None)), Err(StoreError::NotFound));
    }

    #[test]
    fn present_row_passes_through() {
        let note = sample();
        assert_eq!(found(Ok(Some(note.clone()))), Ok(note));
    }

    #[test]
    fn server_error_becomes_backend_failure() {
        match found(Err(ServerFnError::new("pool timed out"))) {
            Err(StoreError::Backend(message)) => assert!(message.contains("pool timed out")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
