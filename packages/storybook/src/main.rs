//! Gallery of every UI component story.

use dioxus::prelude::*;

mod canvas;
mod stories;

use canvas::StoryCanvas;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Index {},
        #[route("/:component/:story")]
        StoryPage { component: String, story: String },
        #[route("/:..segments")]
        Missing { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        Router::<Route> {}
    }
}

/// Sidebar listing every story, grouped by component.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let active = route.to_string();

    rsx! {
        div {
            class: "flex min-h-screen bg-slate-50",
            aside {
                class: "w-64 shrink-0 border-r border-slate-200 bg-white p-6",
                Link { to: Route::Index {}, class: "mb-6 block text-lg font-semibold text-slate-900", "UI kit" }
                for component in stories::components() {
                    div {
                        key: "{component}",
                        class: "mb-4",
                        h2 { class: "mb-2 text-xs font-semibold uppercase tracking-wide text-slate-500", "{component}" }
                        ul {
                            for story in stories::stories_for(component) {
                                li {
                                    key: "{story.slug}",
                                    Link {
                                        to: story.path(),
                                        class: nav_link_class(story.path() == active),
                                        "{story.title}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            main { class: "flex-1 p-10", Outlet::<Route> {} }
        }
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "block rounded px-2 py-1 text-sm bg-blue-50 text-blue-700"
    } else {
        "block rounded px-2 py-1 text-sm text-slate-700 hover:bg-slate-100"
    }
}

#[component]
fn Index() -> Element {
    rsx! {
        h1 { class: "mb-2 text-2xl font-bold text-slate-900", "Components" }
        p { class: "mb-8 text-slate-600", "Pick a story from the sidebar, or jump straight in:" }
        div {
            class: "grid gap-4 md:grid-cols-2",
            for component in stories::components() {
                div {
                    key: "{component}",
                    class: "rounded-xl border border-gray-200 bg-white p-4",
                    h2 { class: "mb-2 font-semibold text-slate-900", "{component}" }
                    ul {
                        class: "space-y-1 text-sm",
                        for story in stories::stories_for(component) {
                            li {
                                key: "{story.slug}",
                                Link { to: story.path(), class: "text-blue-600 hover:underline", "{story.title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StoryPage(component: String, story: String) -> Element {
    let Some(found) = stories::find(&component, &story) else {
        return rsx! { Missing { segments: vec![component, story] } };
    };

    let key = found.path();

    rsx! {
        h1 { class: "mb-1 text-2xl font-bold text-slate-900", "{found.component}" }
        p { class: "mb-8 text-slate-600", "{found.title}" }
        div {
            class: "flex min-h-64 items-center justify-center rounded-xl border border-dashed border-slate-300 bg-white p-10",
            StoryCanvas { key: "{key}", kind: found.kind }
        }
    }
}

#[component]
fn Missing(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        h1 { class: "mb-2 text-2xl font-bold text-slate-900", "No such story" }
        p { class: "text-slate-600", "Nothing is registered at /{path}." }
    }
}
