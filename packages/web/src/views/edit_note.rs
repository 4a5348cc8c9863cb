use dioxus::prelude::*;
use ui::views::EditNoteView;

use crate::Route;

#[component]
pub fn EditNote(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        EditNoteView {
            key: "{id}",
            id: id.clone(),
            on_navigate_note: move |id: String| {
                nav.push(Route::NoteDetail { id });
            },
        }
    }
}
