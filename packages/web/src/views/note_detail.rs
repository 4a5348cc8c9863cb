use dioxus::prelude::*;
use ui::views::NoteDetailView;

#[component]
pub fn NoteDetail(id: String) -> Element {
    rsx! { NoteDetailView { id } }
}
