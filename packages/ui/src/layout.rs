use dioxus::prelude::*;

/// Full-height page background.
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-50", {children} }
    }
}

/// Centered content column.
#[component]
pub fn PageContent(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: crate::components::cn(["mx-auto max-w-4xl px-6 py-16", &class]), {children} }
    }
}
