pub mod edit;
pub mod error;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use edit::{create_note, has_unsaved_changes, EditError, NoteEditSession};
pub use error::StoreError;
pub use repo::NoteStore;
pub use types::{CreateNoteRequest, Note, NoteFormData, UpdateNoteRequest};
