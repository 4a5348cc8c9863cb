use dioxus::prelude::*;
use ui::views::NotesListView;

#[component]
pub fn Notes() -> Element {
    rsx! { NotesListView {} }
}
