use api::ApiStore;
use dioxus::prelude::*;
use store::{NoteStore, StoreError};

use crate::components::{Button, ButtonSize, ButtonVariant, Card, CardBody, CardHeader, CardPadding};
use crate::markdown::render_markdown;
use crate::navigation::Breadcrumb;
use crate::views::NotFoundView;
use crate::{paths, ErrorCard, LoadingSpinner, Navigation, PageContainer};

/// Read-only view of one note with its content rendered as Markdown.
#[component]
pub fn NoteDetailView(id: String) -> Element {
    // Track the id in a signal so the resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut resource = use_resource(move || async move { ApiStore.get_note(&id_signal()).await });

    let note = match &*resource.read() {
        None => return rsx! { LoadingSpinner { message: "Loading note..." } },
        Some(Err(StoreError::NotFound)) => return rsx! { NotFoundView {} },
        Some(Err(err)) => {
            tracing::warn!(%id, error = %err, "loading note failed");
            return rsx! {
                ErrorCard {
                    message: "Could not load the note.",
                    on_retry: move |_| resource.restart(),
                }
            };
        }
        Some(Ok(found)) => found.clone(),
    };

    let html = render_markdown(&note.content);
    let created = note.created_at.format("%Y-%m-%d").to_string();
    let updated = note.updated_at.format("%Y-%m-%d").to_string();

    rsx! {
        PageContainer {
            Navigation {
                breadcrumbs: vec![
                    Breadcrumb::link("All notes", paths::NOTES),
                    Breadcrumb::current(note.title.clone()),
                ],
                actions: rsx! {
                    Link {
                        to: paths::edit_note(&note.id),
                        Button { size: ButtonSize::Sm, "Edit" }
                    }
                },
            }
            div {
                class: "mx-auto max-w-4xl px-6 py-8",
                Card {
                    padding: CardPadding::None,
                    class: "mb-8",
                    CardHeader {
                        class: "p-8 pb-6",
                        div {
                            class: "mb-6 flex items-start justify-between",
                            div {
                                class: "flex-1",
                                h1 { class: "mb-4 text-3xl font-bold text-slate-900", "{note.title}" }
                                div {
                                    class: "mb-4 flex flex-wrap gap-2",
                                    for tag in note.tags.iter() {
                                        span {
                                            key: "{tag}",
                                            class: "inline-flex items-center rounded-full bg-blue-50 px-3 py-1 text-sm font-medium text-blue-700",
                                            "{tag}"
                                        }
                                    }
                                }
                            }
                            if note.is_public {
                                div {
                                    class: "ml-6 flex items-center space-x-2 text-sm text-green-600",
                                    div { class: "h-2 w-2 rounded-full bg-green-400" }
                                    span { "Public" }
                                }
                            } else {
                                div {
                                    class: "ml-6 flex items-center space-x-2 text-sm text-slate-500",
                                    div { class: "h-2 w-2 rounded-full bg-slate-400" }
                                    span { "Private" }
                                }
                            }
                        }
                        div {
                            class: "flex items-center space-x-6 text-sm text-slate-500",
                            span { "Created {created}" }
                            span { "Updated {updated}" }
                        }
                    }
                    CardBody {
                        class: "p-8 pt-0",
                        if note.content.trim().is_empty() {
                            p { class: "italic text-slate-400", "This note is empty." }
                        } else {
                            div { class: "markdown-body max-w-none", dangerous_inner_html: html }
                        }
                    }
                }
                div {
                    class: "flex items-center justify-between",
                    Link {
                        to: paths::NOTES,
                        Button { variant: ButtonVariant::Outline, "← Back to notes" }
                    }
                    Link {
                        to: paths::edit_note(&note.id),
                        Button { "Edit note" }
                    }
                }
            }
        }
    }
}
