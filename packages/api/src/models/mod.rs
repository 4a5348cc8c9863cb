//! Database row models.

#[cfg(feature = "server")]
mod note;

#[cfg(feature = "server")]
pub use note::NoteRow;
