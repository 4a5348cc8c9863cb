mod home;
pub use home::Home;

mod notes;
pub use notes::Notes;

mod new_note;
pub use new_note::NewNote;

mod note_detail;
pub use note_detail::NoteDetail;

mod edit_note;
pub use edit_note::EditNote;

mod not_found;
pub use not_found::NotFound;
