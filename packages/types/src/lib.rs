//! # Shared domain types
//!
//! Every type here is `Serialize + Deserialize` so it can cross the
//! server/client boundary through Dioxus server functions unchanged.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`note`] | [`Note`], the persisted note record, plus sharing/editing status types |
//! | [`forms`] | [`NoteFormData`] and the create/update request payloads |
//! | [`user`] | [`User`], [`Team`], [`TeamMember`] |
//! | [`kanban`] | Board/column/card types. Declared for the data model only; nothing consumes them yet. |

pub mod forms;
pub mod kanban;
pub mod note;
pub mod user;

pub use forms::{CreateNoteRequest, NoteFormData, UpdateNoteRequest};
pub use note::{Note, NoteAccess, NoteEditingStatus, NotePermission};
pub use user::{Team, TeamMember, TeamRole, User};

/// Author id written on every note until sign-in exists.
pub const PLACEHOLDER_AUTHOR_ID: &str = "00000000-0000-0000-0000-000000000000";
