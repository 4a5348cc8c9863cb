use dioxus::prelude::*;
use types::NoteFormData;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, CardBody, CardHeader, CardPadding, Input};
use crate::status::ErrorBanner;

/// Whether the form may be submitted right now.
pub fn submit_allowed(form: &NoteFormData, submitting: bool, can_submit: bool) -> bool {
    can_submit && !submitting && !form.title_is_blank()
}

/// Title, tags, visibility and content fields bound to `form`.
///
/// The form owns no data: the page keeps `form` so it can compare it with the
/// stored note and decide what submitting means.
#[component]
pub fn NoteForm(
    form: Signal<NoteFormData>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
    #[props(default)] submitting: bool,
    /// Extra gate from the page, e.g. "has unsaved changes" when editing.
    #[props(default = true)]
    can_submit: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] on_error_dismiss: EventHandler<()>,
    #[props(into, default = "Save".to_string())] submit_label: String,
) -> Element {
    let mut form = form;
    let title_blank = form.read().title_is_blank();
    let allowed = submit_allowed(&form.read(), submitting, can_submit);
    let char_count = form.read().content.chars().count();
    let is_public = form.read().is_public;

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if submit_allowed(&form.peek(), submitting, can_submit) {
                    on_submit.call(());
                }
            },
            Card {
                padding: CardPadding::None,
                CardHeader {
                    class: "p-8 pb-6",
                    if let Some(message) = error {
                        ErrorBanner { message, on_dismiss: on_error_dismiss }
                    }
                    div {
                        class: "space-y-6",
                        Input {
                            id: "title",
                            label: "Title *",
                            class: "text-xl font-semibold",
                            full_width: true,
                            value: form.read().title.clone(),
                            placeholder: "Enter a title",
                            disabled: submitting,
                            required: true,
                            oninput: move |evt: FormEvent| form.write().title = evt.value(),
                        }
                        TagEditor { form, disabled: submitting }
                        div {
                            class: "flex items-center space-x-3",
                            label {
                                class: "flex cursor-pointer items-center space-x-2",
                                input {
                                    r#type: "checkbox",
                                    class: "h-4 w-4 rounded border-gray-300 bg-gray-100 text-blue-600 focus:ring-blue-500",
                                    checked: is_public,
                                    disabled: submitting,
                                    onchange: move |evt: FormEvent| form.write().is_public = evt.checked(),
                                }
                                span { class: "text-sm font-medium text-slate-700", "Public note" }
                            }
                            span {
                                class: "text-xs text-slate-500",
                                if is_public { "Visible to everyone on the team" } else { "Only visible to you" }
                            }
                        }
                    }
                }
                CardBody {
                    class: "p-8 pt-0",
                    label {
                        r#for: "content",
                        class: "mb-2 block text-sm font-medium text-slate-700",
                        "Content"
                    }
                    textarea {
                        id: "content",
                        class: "h-96 w-full resize-none rounded-lg border border-slate-200 p-4 font-mono text-sm leading-relaxed text-slate-700 focus:border-transparent focus:ring-2 focus:ring-blue-500",
                        value: form.read().content.clone(),
                        placeholder: "Write your note...",
                        disabled: submitting,
                        oninput: move |evt: FormEvent| form.write().content = evt.value(),
                    }
                    div {
                        class: "mt-4 flex items-center space-x-4 text-sm text-slate-500",
                        span { "Markdown supported" }
                        span { "•" }
                        span { "{char_count} characters" }
                        span { "•" }
                        span { if title_blank { "Title required" } else { "Title set" } }
                    }
                }
            }
            div {
                class: "mt-8 flex items-center justify-between",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: submitting,
                    onclick: move |_| on_cancel.call(()),
                    "← Cancel"
                }
                Button {
                    r#type: "submit",
                    disabled: !allowed,
                    if submitting { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}

/// Tag chips with remove buttons and an input that adds on Enter or click.
/// Blank and duplicate tags are ignored and leave the draft in place.
#[component]
pub fn TagEditor(form: Signal<NoteFormData>, #[props(default)] disabled: bool) -> Element {
    let mut form = form;
    let mut draft = use_signal(String::new);
    let tags = form.read().tags.clone();

    let mut add = move || {
        if form.write().add_tag(&draft.peek()) {
            draft.set(String::new());
        }
    };

    rsx! {
        div {
            span { class: "mb-2 block text-sm font-medium text-slate-700", "Tags" }
            if !tags.is_empty() {
                div {
                    class: "mb-3 flex flex-wrap gap-2",
                    for tag in tags {
                        span {
                            key: "{tag}",
                            class: "group inline-flex items-center rounded-full bg-blue-50 px-3 py-1 text-sm font-medium text-blue-700",
                            "{tag}"
                            button {
                                r#type: "button",
                                class: "ml-2 text-blue-500 hover:text-blue-700",
                                aria_label: "Remove tag {tag}",
                                disabled,
                                onclick: {
                                    let tag = tag.clone();
                                    move |_| form.write().remove_tag(&tag)
                                },
                                "×"
                            }
                        }
                    }
                }
            }
            div {
                class: "flex space-x-2",
                Input {
                    class: "flex-1",
                    value: draft(),
                    placeholder: "Add a tag (e.g. planning, meeting, idea)",
                    disabled,
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            add();
                        }
                    },
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Sm,
                    disabled: disabled || draft.read().trim().is_empty(),
                    onclick: move |_| add(),
                    "Add"
                }
            }
        }
    }
}
