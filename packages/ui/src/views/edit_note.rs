use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::navigation::Breadcrumb;
use crate::views::NotFoundView;
use crate::{paths, use_edit_note, ConfirmDialog, ErrorCard, LoadingSpinner, Navigation, NoteForm, PageContainer};

/// Edit form for an existing note, with unsaved-change tracking.
#[component]
pub fn EditNoteView(
    id: String,
    /// Called with the note id after a successful save, or when leaving.
    on_navigate_note: EventHandler<String>,
) -> Element {
    let edit = use_edit_note(id.clone());
    let mut confirm_leave = use_signal(|| false);

    let session = edit.session.read();
    if session.is_loading() {
        return rsx! { LoadingSpinner { message: "Loading note..." } };
    }
    if session.is_not_found() {
        return rsx! { NotFoundView {} };
    }
    let Some(original) = session.original().cloned() else {
        let message = session
            .error()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Could not load the note.".to_string());
        return rsx! {
            ErrorCard {
                message,
                on_retry: move |_| edit.reload(),
            }
        };
    };
    let saving = session.is_saving();
    let error = session.error().map(ToString::to_string);
    drop(session);

    let dirty = (edit.dirty)();

    let save = move || {
        if !*edit.dirty.peek() {
            return;
        }
        spawn(async move {
            let id = edit.session.peek().note_id().to_string();
            if edit.save().await {
                on_navigate_note.call(id);
            }
        });
    };

    let mut cancel = move || {
        if (edit.dirty)() {
            confirm_leave.set(true);
        } else {
            on_navigate_note.call(edit.session.peek().note_id().to_string());
        }
    };

    rsx! {
        PageContainer {
            Navigation {
                breadcrumbs: vec![
                    Breadcrumb::link("All notes", paths::NOTES),
                    Breadcrumb::link(original.title.clone(), paths::note(&original.id)),
                    Breadcrumb::current("Edit"),
                ],
                actions: rsx! {
                    if dirty {
                        span {
                            class: "flex items-center space-x-2 text-sm text-amber-600",
                            div { class: "h-2 w-2 rounded-full bg-amber-400" }
                            span { "Unsaved changes" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        disabled: saving,
                        onclick: move |_| cancel(),
                        "Cancel"
                    }
                    Button {
                        size: ButtonSize::Sm,
                        disabled: saving || !dirty,
                        onclick: move |_| save(),
                        if saving { "Saving..." } else { "Save" }
                    }
                },
            }
            div {
                class: "mx-auto max-w-4xl px-6 py-8",
                NoteForm {
                    form: edit.form,
                    submitting: saving,
                    can_submit: dirty,
                    error,
                    on_error_dismiss: move |_| edit.dismiss_error(),
                    on_submit: move |_| save(),
                    on_cancel: move |_| cancel(),
                    submit_label: "Save changes",
                }
            }
            ConfirmDialog {
                open: confirm_leave(),
                title: "Leave without saving?",
                message: "You have unsaved changes that will be lost.",
                on_confirm: move |_| {
                    confirm_leave.set(false);
                    on_navigate_note.call(id.clone());
                },
                on_cancel: move |_| confirm_leave.set(false),
            }
        }
    }
}
