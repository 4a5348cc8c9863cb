use dioxus::prelude::*;
use ui::views::NewNoteView;

use crate::Route;

#[component]
pub fn NewNote() -> Element {
    let nav = use_navigator();

    rsx! {
        NewNoteView {
            on_created: move |id: String| {
                nav.push(Route::NoteDetail { id });
            },
            on_cancel: move |_| {
                nav.push(Route::Notes {});
            },
        }
    }
}
