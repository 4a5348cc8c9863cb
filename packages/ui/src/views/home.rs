use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::icons::{FaBolt, FaTags, FaUsers};
use crate::{paths, Icon, Navigation, PageContainer, PageContent};

/// Landing page with links into the notes list and the new-note form.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        PageContainer {
            Navigation {
                actions: rsx! {
                    Link { to: paths::NOTES, Button { variant: ButtonVariant::Outline, "All notes" } }
                    Link { to: paths::NEW_NOTE, Button { "New note" } }
                },
            }
            PageContent {
                div {
                    class: "text-center",
                    h2 { class: "mb-4 text-4xl font-bold text-slate-900", "Smart notes for your team" }
                    p {
                        class: "mx-auto mb-12 max-w-2xl text-xl text-slate-600",
                        "Capture ideas, organise them with tags, and share them with the people you work with."
                    }
                    div {
                        class: "flex justify-center space-x-4",
                        Link {
                            to: paths::NOTES,
                            Button { size: ButtonSize::Lg, class: "px-8", "Get started" }
                        }
                        Link {
                            to: paths::NEW_NOTE,
                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Lg, class: "px-8", "Write a note" }
                        }
                    }
                }
                div {
                    class: "mt-20 grid gap-8 md:grid-cols-3",
                    FeatureCard {
                        accent: "bg-blue-100 text-blue-600",
                        title: "Markdown notes",
                        body: "Write with headings, lists, tables and code blocks, rendered when you read the note.",
                        Icon { icon: FaBolt, width: 24, height: 24 }
                    }
                    FeatureCard {
                        accent: "bg-green-100 text-green-600",
                        title: "Public or private",
                        body: "Keep a note to yourself or mark it public for the rest of the team.",
                        Icon { icon: FaUsers, width: 24, height: 24 }
                    }
                    FeatureCard {
                        accent: "bg-purple-100 text-purple-600",
                        title: "Tags",
                        body: "Sort notes with tags and spot related ones at a glance in the list.",
                        Icon { icon: FaTags, width: 24, height: 24 }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(accent: &'static str, title: &'static str, body: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-slate-200 bg-white p-8 shadow-sm transition-shadow hover:shadow-md",
            div {
                class: "mb-6 flex h-12 w-12 items-center justify-center rounded-lg {accent}",
                {children}
            }
            h3 { class: "mb-3 text-xl font-semibold text-slate-900", "{title}" }
            p { class: "leading-relaxed text-slate-600", "{body}" }
        }
    }
}
