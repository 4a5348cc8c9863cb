use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Modal, ModalBody, ModalFooter, ModalHeader, ModalSize};

/// Yes/no question shown in a [`Modal`]. Escape and backdrop clicks cancel.
#[component]
pub fn ConfirmDialog(
    open: bool,
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(into, default = "Leave".to_string())] confirm_label: String,
    #[props(into, default = "Stay".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            open,
            on_close: on_cancel,
            size: ModalSize::Sm,
            title: title.clone(),
            ModalHeader { title, on_close: on_cancel }
            ModalBody {
                p { class: "text-slate-600", "{message}" }
            }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "{cancel_label}"
                }
                Button {
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
