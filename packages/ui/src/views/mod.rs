//! Page views shared by every platform crate. Views link with [`crate::paths`]
//! and report programmatic navigation through callbacks.

mod home;
pub use home::HomeView;

mod notes_list;
pub use notes_list::{load_notes, visible_tags, NotesListView, MAX_CARD_TAGS};

mod note_detail;
pub use note_detail::NoteDetailView;

mod new_note;
pub use new_note::NewNoteView;

mod edit_note;
pub use edit_note::EditNoteView;

mod not_found;
pub use not_found::NotFoundView;
