use dioxus::prelude::*;
use ui::components::{
    Button, ButtonSize, ButtonVariant, Card, CardBody, CardFooter, CardHeader, CardPadding, CardVariant, Input,
    InputVariant, Modal, ModalBody, ModalFooter, ModalHeader, ModalSize,
};

use crate::stories::StoryKind;

/// Renders one story. Keyed by the caller so switching stories resets state.
#[component]
pub fn StoryCanvas(kind: StoryKind) -> Element {
    match kind {
        StoryKind::ButtonPrimary => rsx! { Button { variant: ButtonVariant::Primary, "Button" } },
        StoryKind::ButtonSecondary => rsx! { Button { variant: ButtonVariant::Secondary, "Button" } },
        StoryKind::ButtonOutline => rsx! { Button { variant: ButtonVariant::Outline, "Button" } },
        StoryKind::ButtonSizes => rsx! {
            div {
                class: "flex items-center gap-4",
                Button { size: ButtonSize::Sm, "Small" }
                Button { size: ButtonSize::Md, "Medium" }
                Button { size: ButtonSize::Lg, "Large" }
            }
        },
        StoryKind::ButtonDisabled => rsx! {
            div {
                class: "flex items-center gap-4",
                Button { disabled: true, "Primary" }
                Button { variant: ButtonVariant::Outline, disabled: true, "Outline" }
            }
        },
        StoryKind::InputDefault => rsx! { Input { placeholder: "Type something" } },
        StoryKind::InputWithLabel => rsx! {
            Input { label: "Email", placeholder: "example@email.com" }
        },
        StoryKind::InputWithError => rsx! {
            Input { label: "Password", r#type: "password", error: "Incorrect password" }
        },
        StoryKind::InputWithHelperText => rsx! {
            Input {
                label: "Username",
                placeholder: "Choose a username",
                helper_text: "3-20 letters or digits",
            }
        },
        StoryKind::CardDefault => rsx! { Card { "This is a basic card with some content." } },
        StoryKind::CardOutlined => rsx! {
            Card { variant: CardVariant::Outlined, "This is an outlined card." }
        },
        StoryKind::CardElevated => rsx! {
            Card { variant: CardVariant::Elevated, "This is an elevated card with shadow." }
        },
        StoryKind::CardCompound => rsx! {
            Card {
                variant: CardVariant::Elevated,
                class: "w-[400px]",
                CardHeader { h3 { class: "text-xl font-semibold", "Sign in" } }
                CardBody { LoginFields {} }
                CardFooter {
                    div {
                        class: "flex gap-2",
                        Button { variant: ButtonVariant::Outline, class: "flex-1", "Cancel" }
                        Button { class: "flex-1", "Sign in" }
                    }
                }
            }
        },
        StoryKind::CardPaddings => rsx! {
            div {
                class: "flex flex-wrap gap-4",
                Card { padding: CardPadding::Sm, "Small padding" }
                Card { padding: CardPadding::Md, "Medium padding" }
                Card { padding: CardPadding::Lg, "Large padding" }
                Card { padding: CardPadding::None, "No padding" }
            }
        },
        StoryKind::ModalBasic => rsx! { BasicModalStory {} },
        StoryKind::ModalLogin => rsx! { LoginModalStory {} },
        StoryKind::ModalSizes => rsx! { ModalSizesStory {} },
    }
}

#[component]
fn LoginFields() -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-4",
            Input { label: "Email", placeholder: "example@email.com", full_width: true }
            Input { label: "Password", r#type: "password", placeholder: "••••••••", full_width: true }
        }
    }
}

#[component]
fn BasicModalStory() -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        Button { onclick: move |_| is_open.set(true), "Open modal" }
        Modal {
            open: is_open(),
            on_close: move |_| is_open.set(false),
            title: "Basic modal",
            ModalHeader { title: "Basic modal", on_close: move |_| is_open.set(false) }
            ModalBody {
                p { "This is a basic modal example." }
            }
            ModalFooter {
                Button { variant: ButtonVariant::Outline, onclick: move |_| is_open.set(false), "Cancel" }
                Button { onclick: move |_| is_open.set(false), "Confirm" }
            }
        }
    }
}

#[component]
fn LoginModalStory() -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        Button { onclick: move |_| is_open.set(true), "Open login modal" }
        Modal {
            open: is_open(),
            on_close: move |_| is_open.set(false),
            size: ModalSize::Md,
            title: "Sign in",
            ModalHeader { title: "Sign in", on_close: move |_| is_open.set(false) }
            ModalBody { LoginFields {} }
            ModalFooter {
                Button { variant: ButtonVariant::Outline, onclick: move |_| is_open.set(false), "Cancel" }
                Button { onclick: move |_| is_open.set(false), "Sign in" }
            }
        }
    }
}

#[component]
fn ModalSizesStory() -> Element {
    let mut open = use_signal(|| Option::<ModalSize>::None);
    let sizes = [
        (ModalSize::Sm, "Small"),
        (ModalSize::Md, "Medium"),
        (ModalSize::Lg, "Large"),
        (ModalSize::Xl, "Extra large"),
    ];

    rsx! {
        div {
            class: "flex flex-wrap gap-2",
            for (size, label) in sizes {
                Button {
                    key: "{label}",
                    variant: ButtonVariant::Outline,
                    onclick: move |_| open.set(Some(size)),
                    "{label}"
                }
            }
        }
        Modal {
            open: open().is_some(),
            on_close: move |_| open.set(None),
            size: open().unwrap_or_default(),
            close_on_backdrop_click: false,
            ModalHeader { title: "Sized modal", on_close: move |_| open.set(None) }
            ModalBody {
                p { "Escape closes this one; clicking the backdrop does not." }
                Input { variant: InputVariant::Default, placeholder: "Focusable field", full_width: true }
            }
        }
    }
}
