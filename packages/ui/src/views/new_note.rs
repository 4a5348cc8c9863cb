use api::ApiStore;
use dioxus::prelude::*;
use types::{NoteFormData, PLACEHOLDER_AUTHOR_ID};

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::navigation::Breadcrumb;
use crate::{paths, ConfirmDialog, Navigation, NoteForm, PageContainer};

/// Form for writing a new note.
#[component]
pub fn NewNoteView(
    /// Called with the new note's id once it is stored.
    on_created: EventHandler<String>,
    /// Called when leaving without creating (after confirmation if needed).
    on_cancel: EventHandler<()>,
) -> Element {
    let form = use_signal(NoteFormData::default);
    let mut creating = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirm_leave = use_signal(|| false);

    let create = move || {
        if creating() {
            return;
        }
        spawn(async move {
            creating.set(true);
            error.set(None);
            let data = form.peek().clone();
            match store::create_note(&ApiStore, &data, PLACEHOLDER_AUTHOR_ID).await {
                Ok(note) => {
                    tracing::info!(id = %note.id, "created note");
                    on_created.call(note.id);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "creating note failed");
                    error.set(Some(err.to_string()));
                }
            }
            creating.set(false);
        });
    };

    let mut cancel = move || {
        if form.read().has_content() {
            confirm_leave.set(true);
        } else {
            on_cancel.call(());
        }
    };

    rsx! {
        PageContainer {
            Navigation {
                breadcrumbs: vec![
                    Breadcrumb::link("All notes", paths::NOTES),
                    Breadcrumb::current("New note"),
                ],
                actions: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        disabled: creating(),
                        onclick: move |_| cancel(),
                        "Cancel"
                    }
                    Button {
                        size: ButtonSize::Sm,
                        disabled: creating() || form.read().title_is_blank(),
                        onclick: move |_| create(),
                        if creating() { "Creating..." } else { "Create note" }
                    }
                },
            }
            div {
                class: "mx-auto max-w-4xl px-6 py-8",
                div {
                    class: "mb-6",
                    h1 { class: "mb-2 text-2xl font-bold text-slate-900", "New note" }
                    p { class: "text-slate-600", "Write down an idea and share it with your team." }
                }
                NoteForm {
                    form,
                    submitting: creating(),
                    error: error(),
                    on_error_dismiss: move |_| error.set(None),
                    on_submit: move |_| create(),
                    on_cancel: move |_| cancel(),
                    submit_label: "Create note",
                }
            }
            ConfirmDialog {
                open: confirm_leave(),
                title: "Discard this note?",
                message: "What you have written so far will be lost.",
                on_confirm: move |_| {
                    confirm_leave.set(false);
                    on_cancel.call(());
                },
                on_cancel: move |_| confirm_leave.set(false),
            }
        }
    }
}
