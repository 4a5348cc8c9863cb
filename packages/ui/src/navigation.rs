use dioxus::prelude::*;

use crate::paths;

/// One entry of the breadcrumb trail. The last entry usually has no link.
#[derive(Clone, Debug, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Top bar: logo linking home, breadcrumb trail, and page actions on the right.
#[component]
pub fn Navigation(
    #[props(default)] breadcrumbs: Vec<Breadcrumb>,
    #[props(into, default)] title: Option<String>,
    #[props(default = VNode::empty())] actions: Element,
) -> Element {
    let title = title.unwrap_or_else(|| "Notes".to_string());

    rsx! {
        nav {
            class: "border-b border-slate-200 bg-white px-6 py-4",
            div {
                class: "mx-auto flex max-w-7xl items-center justify-between",
                div {
                    class: "flex items-center space-x-4",
                    Link {
                        to: paths::HOME,
                        class: "flex items-center space-x-4",
                        div {
                            class: "flex h-8 w-8 items-center justify-center rounded bg-blue-600",
                            span { class: "text-sm font-bold text-white", "N" }
                        }
                        h1 { class: "text-xl font-semibold text-slate-800", "{title}" }
                    }
                    if !breadcrumbs.is_empty() {
                        div {
                            class: "flex items-center space-x-2 text-sm text-slate-500",
                            for (index, crumb) in breadcrumbs.into_iter().enumerate() {
                                div {
                                    key: "{index}",
                                    class: "flex items-center space-x-2",
                                    span { "/" }
                                    if let Some(href) = crumb.href {
                                        Link {
                                            to: href,
                                            class: "max-w-[150px] truncate hover:text-slate-700",
                                            {crumb.label}
                                        }
                                    } else {
                                        span { class: "max-w-[200px] truncate text-slate-900", {crumb.label} }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "flex items-center space-x-3", {actions} }
            }
        }
    }
}
