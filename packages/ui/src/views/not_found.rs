use dioxus::prelude::*;

use crate::{ErrorCard, ErrorIcon};

/// 404 page. `path` is the unmatched URL, when the router knows it.
#[component]
pub fn NotFoundView(#[props(into, default)] path: Option<String>) -> Element {
    let message = match path {
        Some(path) => format!("Nothing lives at {path}."),
        None => "The note or page you are looking for does not exist.".to_string(),
    };

    rsx! {
        ErrorCard {
            title: "Page not found",
            message,
            icon: ErrorIcon::Warning,
        }
    }
}
