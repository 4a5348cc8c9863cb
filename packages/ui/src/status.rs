//! Loading and failure states shared by the notes pages.

use dioxus::prelude::*;

use crate::components::{cn, Button, ButtonVariant, Card, CardPadding};
use crate::icons::{FaCircleExclamation, FaCircleInfo, FaTriangleExclamation};
use crate::{paths, Icon};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-8 w-8",
            Self::Md => "h-12 w-12",
            Self::Lg => "h-16 w-16",
        }
    }
}

#[component]
pub fn LoadingSpinner(
    #[props(into, default = "Loading...".to_string())] message: String,
    #[props(default)] size: SpinnerSize,
) -> Element {
    let spinner = cn([
        "mx-auto mb-4 animate-spin rounded-full border-b-2 border-blue-600",
        size.class(),
    ]);

    rsx! {
        div {
            class: "flex min-h-screen items-center justify-center bg-slate-50",
            div {
                class: "text-center",
                div { class: spinner }
                p { class: "text-slate-600", "{message}" }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorIcon {
    #[default]
    Error,
    Warning,
    Info,
}

/// Full-page failure card with a link back and an optional retry button.
#[component]
pub fn ErrorCard(
    #[props(into, default = "Something went wrong".to_string())] title: String,
    #[props(into)] message: String,
    #[props(into, default = paths::NOTES.to_string())] back_link: String,
    #[props(into, default = "Back to notes".to_string())] back_text: String,
    #[props(default)] icon: ErrorIcon,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    const ICON_CLASS: &str = "mx-auto mb-4 h-16 w-16";

    rsx! {
        div {
            class: "flex min-h-screen items-center justify-center bg-slate-50",
            Card {
                padding: CardPadding::Lg,
                class: "max-w-md text-center",
                match icon {
                    ErrorIcon::Error => rsx! {
                        Icon { class: "{ICON_CLASS} text-red-400", icon: FaCircleExclamation, width: 64, height: 64 }
                    },
                    ErrorIcon::Warning => rsx! {
                        Icon { class: "{ICON_CLASS} text-amber-400", icon: FaTriangleExclamation, width: 64, height: 64 }
                    },
                    ErrorIcon::Info => rsx! {
                        Icon { class: "{ICON_CLASS} text-blue-400", icon: FaCircleInfo, width: 64, height: 64 }
                    },
                }
                h2 { class: "mb-2 text-xl font-semibold text-slate-900", "{title}" }
                p { class: "mb-6 text-slate-600", "{message}" }
                div {
                    class: "flex justify-center space-x-3",
                    if let Some(retry) = on_retry {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| retry.call(()),
                            "Try again"
                        }
                    }
                    Link {
                        to: back_link,
                        Button { "{back_text}" }
                    }
                }
            }
        }
    }
}

/// Inline failure banner used inside a page rather than replacing it.
#[component]
pub fn ErrorBanner(
    #[props(into)] message: String,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "mb-6 rounded-lg border border-red-200 bg-red-50 p-4",
            role: "alert",
            div {
                class: "flex items-center space-x-2",
                Icon { class: "h-5 w-5 text-red-600", icon: FaCircleExclamation, width: 20, height: 20 }
                span { class: "text-sm font-medium text-red-800", "{message}" }
                if let Some(dismiss) = on_dismiss {
                    button {
                        r#type: "button",
                        class: "ml-auto text-red-600 hover:text-red-800",
                        aria_label: "Dismiss",
                        onclick: move |_| dismiss.call(()),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SpinnerSize;

    #[test]
    fn spinner_sizes() {
        assert_eq!(SpinnerSize::Sm.class(), "h-8 w-8");
        assert_eq!(SpinnerSize::default().class(), "h-12 w-12");
        assert_eq!(SpinnerSize::Lg.class(), "h-16 w-16");
    }
}
