//! Component showcase: every button variant and size, and a modal.

use dioxus::prelude::*;
use ui::components::{Button, ButtonSize, ButtonVariant, Modal, ModalBody, ModalFooter, ModalHeader, ModalSize};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }

        main {
            class: "min-h-screen p-8",
            div {
                class: "mx-auto max-w-2xl space-y-8",
                section {
                    class: "space-y-4",
                    h2 { class: "text-xl font-semibold", "UI kit buttons" }
                    div {
                        class: "flex flex-wrap gap-4",
                        Button { variant: ButtonVariant::Primary, "Primary" }
                        Button { variant: ButtonVariant::Secondary, "Secondary" }
                        Button { variant: ButtonVariant::Outline, "Outline" }
                    }
                    div {
                        class: "flex flex-wrap items-center gap-4",
                        Button { size: ButtonSize::Sm, "Small" }
                        Button { size: ButtonSize::Md, "Medium" }
                        Button { size: ButtonSize::Lg, "Large" }
                    }
                }
                Button { onclick: move |_| is_open.set(true), "Open modal" }
                Modal {
                    open: is_open(),
                    on_close: move |_| is_open.set(false),
                    size: ModalSize::Md,
                    title: "Sign in",
                    ModalHeader { title: "Sign in", on_close: move |_| is_open.set(false) }
                    ModalBody { "hello" }
                    ModalFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| is_open.set(false),
                            "Cancel"
                        }
                        Button { onclick: move |_| is_open.set(false), "Sign in" }
                    }
                }
            }
        }
    }
}
