//! URL paths of the notes app pages.
//!
//! Shared views link with these; the platform crate's router must serve the
//! same paths.

pub const HOME: &str = "/";
pub const NOTES: &str = "/notes";
pub const NEW_NOTE: &str = "/notes/new";

pub fn note(id: &str) -> String {
    format!("/notes/{id}")
}

pub fn edit_note(id: &str) -> String {
    format!("/notes/{id}/edit")
}
