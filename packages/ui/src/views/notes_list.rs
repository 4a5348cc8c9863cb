use api::ApiStore;
use dioxus::prelude::*;
use store::{NoteStore, StoreError};
use types::Note;

use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::icons::{FaCircleExclamation, FaFileLines};
use crate::{paths, Icon, LoadingSpinner, Navigation, PageContainer};

/// Tags shown on a list card before collapsing the rest into "+N".
pub const MAX_CARD_TAGS: usize = 3;
const PREVIEW_CHARS: usize = 180;

/// Split tags into the ones shown on a card and the count of hidden ones.
pub fn visible_tags(tags: &[String]) -> (&[String], usize) {
    let shown = tags.len().min(MAX_CARD_TAGS);
    (&tags[..shown], tags.len() - shown)
}

/// List notes from `store`, logging a failure once when it happens.
pub async fn load_notes<S: NoteStore>(store: &S) -> Result<Vec<Note>, StoreError> {
    let result = store.list_notes().await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "listing notes failed");
    }
    result
}

/// All notes, newest first.
#[component]
pub fn NotesListView() -> Element {
    let mut notes = use_resource(|| async move { load_notes(&ApiStore).await });

    let count = match &*notes.read() {
        Some(Ok(list)) => format!("{} notes", list.len()),
        Some(Err(_)) => String::new(),
        None => "Loading...".to_string(),
    };

    let body = match &*notes.read() {
        None => rsx! { LoadingSpinner { message: "Loading notes..." } },
        Some(Err(_)) => {
            rsx! {
                Card {
                    class: "mb-8 bg-red-50 border-red-200",
                    div {
                        class: "flex items-center space-x-3",
                        Icon { class: "h-5 w-5 text-red-600", icon: FaCircleExclamation, width: 20, height: 20 }
                        div {
                            class: "flex-1",
                            h4 { class: "text-sm font-medium text-red-900", "Something went wrong" }
                            p { class: "text-sm text-red-800", "Could not load notes." }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            onclick: move |_| notes.restart(),
                            "Try again"
                        }
                    }
                }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! { EmptyNotes {} },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                for note in list.iter().cloned() {
                    NoteCard { key: "{note.id}", note }
                }
            }
        },
    };

    rsx! {
        PageContainer {
            Navigation {
                actions: rsx! {
                    span { class: "text-sm text-slate-600", "{count}" }
                    Link { to: paths::NEW_NOTE, Button { size: ButtonSize::Sm, "New note" } }
                },
            }
            div {
                class: "mx-auto max-w-7xl px-6 py-8",
                div {
                    class: "mb-8",
                    h1 { class: "text-2xl font-bold text-slate-900", "All notes" }
                    p { class: "mt-1 text-slate-600", "Your team's knowledge in one place" }
                }
                {body}
            }
        }
    }
}

#[component]
fn NoteCard(note: Note) -> Element {
    let (tags, hidden) = visible_tags(&note.tags);
    let tags = tags.to_vec();
    let preview = note.preview(PREVIEW_CHARS);
    let updated = note.updated_at.format("%Y-%m-%d").to_string();
    let dot = if note.is_public { "bg-green-400" } else { "bg-slate-300" };

    rsx! {
        Card {
            padding: crate::components::CardPadding::None,
            class: "group border-slate-200 transition-all duration-200 hover:border-slate-300 hover:shadow-md",
            div {
                class: "p-6 pb-4",
                div {
                    class: "mb-3 flex items-start justify-between",
                    h3 {
                        class: "line-clamp-2 text-lg font-semibold text-slate-900 transition-colors group-hover:text-blue-600",
                        "{note.title}"
                    }
                    div {
                        class: "ml-2 mt-2 h-2 w-2 flex-shrink-0 rounded-full {dot}",
                        title: if note.is_public { "Public" } else { "Private" },
                    }
                }
                div {
                    class: "mb-4 flex flex-wrap gap-1",
                    for tag in tags {
                        span {
                            key: "{tag}",
                            class: "inline-flex items-center rounded-md bg-blue-50 px-2 py-1 text-xs font-medium text-blue-700",
                            "{tag}"
                        }
                    }
                    if hidden > 0 {
                        span {
                            class: "inline-flex items-center rounded-md bg-slate-100 px-2 py-1 text-xs font-medium text-slate-600",
                            "+{hidden}"
                        }
                    }
                }
            }
            div {
                class: "px-6 pb-4",
                p { class: "line-clamp-3 text-sm leading-relaxed text-slate-600", "{preview}" }
            }
            div {
                class: "flex items-center justify-between border-t border-slate-100 bg-slate-50 px-6 py-4",
                span { class: "text-xs text-slate-500", "Updated {updated}" }
                Link {
                    to: paths::note(&note.id),
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, class: "text-xs", "Open" }
                }
            }
        }
    }
}

#[component]
fn EmptyNotes() -> Element {
    rsx! {
        Card {
            class: "py-16 text-center",
            div {
                class: "mx-auto mb-6 flex h-16 w-16 items-center justify-center rounded-full bg-slate-100 text-slate-400",
                Icon { icon: FaFileLines, width: 32, height: 32 }
            }
            h3 { class: "mb-2 text-lg font-semibold text-slate-900", "No notes yet" }
            p { class: "mb-6 text-slate-600", "Write your first note" }
            Link { to: paths::NEW_NOTE, Button { "New note" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_notes, visible_tags};
    use store::{MemoryStore, NoteStore, StoreError};
    use types::{CreateNoteRequest, Note, UpdateNoteRequest, PLACEHOLDER_AUTHOR_ID};

    struct DownStore;

    impl NoteStore for DownStore {
        async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
            Err(StoreError::Backend("offline".to_string()))
        }

        async fn get_note(&self, _id: &str) -> Result<Note, StoreError> {
            Err(StoreError::Backend("offline".to_string()))
        }

        async fn create_note(&self, _request: CreateNoteRequest) -> Result<Note, StoreError> {
            Err(StoreError::Backend("offline".to_string()))
        }

        async fn update_note(
            &self,
            _id: &str,
            _request: UpdateNoteRequest,
        ) -> Result<Note, StoreError> {
            Err(StoreError::Backend("offline".to_string()))
        }
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shows_at_most_three_tags() {
        let all = tags(&["a", "b", "c", "d", "e"]);
        let (shown, hidden) = visible_tags(&all);
        assert_eq!(shown, &all[..3]);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn short_tag_lists_are_shown_whole() {
        let all = tags(&["a"]);
        assert_eq!(visible_tags(&all), (&all[..], 0));
        assert_eq!(visible_tags(&[]), (&[][..], 0));
    }

    #[tokio::test]
    async fn load_notes_returns_store_listing() {
        let store = MemoryStore::new();
        store
            .create_note(CreateNoteRequest::titled("First", PLACEHOLDER_AUTHOR_ID))
            .await
            .unwrap();
        let notes = load_notes(&store).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "First");
    }

    #[tokio::test]
    async fn load_notes_passes_failures_through() {
        let err = load_notes(&DownStore).await.unwrap_err();
        assert_eq!(err, StoreError::Backend("offline".to_string()));
    }
}
