//! # Note storage seam
//!
//! [`NoteStore`] is the only way the rest of the workspace touches persisted
//! notes. It mirrors the four table operations the notes app performs on the
//! `notes` table: list, select by id, insert and update by id. There is no
//! delete.
//!
//! Implementations:
//!
//! | Type | Crate | Backing |
//! |------|-------|---------|
//! | [`crate::MemoryStore`] | `store` | `Vec` behind a mutex; tests and local development |
//! | `RestStore` | `api` (server) | hosted PostgREST endpoint |
//! | `PgStore` | `api` (server) | direct Postgres pool |
//! | `ApiStore` | `api` | the notes server functions, used by the UI |
//!
//! Every implementation reports a missing row as [`StoreError::NotFound`] so
//! callers can tell "not found" apart from any other failure.

use types::{CreateNoteRequest, Note, UpdateNoteRequest};

use crate::error::StoreError;

/// Async access to the `notes` table.
pub trait NoteStore {
    /// All notes, newest first.
    fn list_notes(&self) -> impl std::future::Future<Output = Result<Vec<Note>, StoreError>>;
    fn get_note(&self, id: &str) -> impl std::future::Future<Output = Result<Note, StoreError>>;
    fn create_note(
        &self,
        request: CreateNoteRequest,
    ) -> impl std::future::Future<Output = Result<Note, StoreError>>;
    /// Apply a partial update and return the stored row. Last write wins.
    fn update_note(
        &self,
        id: &str,
        request: UpdateNoteRequest,
    ) -> impl std::future::Future<Output = Result<Note, StoreError>>;
}
