use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::Task;
use dioxus::prelude::*;

use super::cn;

/// Id of the header title, referenced by the dialog's `aria-labelledby`.
pub const MODAL_TITLE_ID: &str = "modal-title";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "max-w-md",
            Self::Md => "max-w-lg",
            Self::Lg => "max-w-2xl",
            Self::Xl => "max-w-4xl",
        }
    }
}

pub fn modal_class(size: ModalSize, extra: &str) -> String {
    cn([
        "relative z-10 bg-white rounded-xl shadow-xl max-h-[90vh] overflow-y-auto mx-4 w-full",
        size.class(),
        extra,
    ])
}

static NEXT_KEY: AtomicUsize = AtomicUsize::new(0);

fn next_key() -> usize {
    NEXT_KEY.fetch_add(1, Ordering::Relaxed)
}

fn lock_js(key: usize, listen_escape: bool) -> String {
    format!(
        r#"(function() {{
            document.body.style.overflow = 'hidden';
            if (!{listen_escape}) return;
            window.__modalEscape = window.__modalEscape || {{}};
            if (window.__modalEscape[{key}]) return;
            var handler = function(event) {{
                if (event.key === 'Escape') dioxus.send(event.key);
            }};
            window.__modalEscape[{key}] = handler;
            document.addEventListener('keydown', handler);
        }})();"#
    )
}

fn release_js(key: usize) -> String {
    format!(
        r#"(function() {{
            var handlers = window.__modalEscape || {{}};
            if (handlers[{key}]) {{
                document.removeEventListener('keydown', handlers[{key}]);
                delete handlers[{key}];
            }}
            document.body.style.overflow = 'unset';
        }})();"#
    )
}

/// Scripts to run when a modal's state changes: release what this instance
/// held, then lock again if it is open. A modal that never locked releases
/// nothing, so it cannot undo another modal's lock.
fn transition_scripts(
    key: usize,
    held: bool,
    open: bool,
    listen_escape: bool,
) -> (Option<String>, Option<String>) {
    let release = held.then(|| release_js(key));
    let lock = open.then(|| lock_js(key, listen_escape));
    (release, lock)
}

/// Dialog rendered above the page.
///
/// Renders nothing while `open` is false. While open, background scrolling is
/// locked and, when `close_on_escape` is set and there is an `on_close`
/// handler, Escape calls `on_close`. Both are undone when the modal closes or
/// unmounts.
#[component]
pub fn Modal(
    open: bool,
    #[props(default)] on_close: Option<EventHandler<()>>,
    #[props(default)] size: ModalSize,
    #[props(default = true)] close_on_backdrop_click: bool,
    #[props(default = true)] close_on_escape: bool,
    /// Only wires `aria-labelledby`; render the text with [`ModalHeader`].
    #[props(into, default)]
    title: Option<String>,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let key = use_hook(next_key);
    let listen_escape = close_on_escape && on_close.is_some();

    // Mirror props into a signal so the effect below re-runs when they change.
    let mut state = use_signal(|| (open, listen_escape));
    if *state.peek() != (open, listen_escape) {
        state.set((open, listen_escape));
    }
    let mut listener = use_signal(|| None::<Task>);

    use_effect(move || {
        let (open, listen_escape) = state();
        let held = match listener.take() {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        };
        let (release, lock) = transition_scripts(key, held, open, listen_escape);
        if let Some(release) = release {
            document::eval(&release);
        }
        let Some(lock) = lock else {
            return;
        };
        let task = spawn(async move {
            let mut eval = document::eval(&lock);
            while let Ok(pressed) = eval.recv::<String>().await {
                if pressed == "Escape" {
                    if let Some(handler) = on_close {
                        handler.call(());
                    }
                }
            }
        });
        listener.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = listener.take() {
            task.cancel();
            document::eval(&release_js(key));
        }
    });

    if !open {
        return rsx! {};
    }

    let on_backdrop = move |_| {
        if close_on_backdrop_click {
            if let Some(handler) = on_close {
                handler.call(());
            }
        }
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center",
            div {
                class: "fixed inset-0 bg-black/50 transition-opacity",
                onclick: on_backdrop,
            }
            div {
                class: modal_class(size, &class),
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: title.as_ref().map(|_| MODAL_TITLE_ID),
                {children}
            }
        }
    }
}

#[component]
pub fn ModalHeader(
    #[props(default = true)] show_close_button: bool,
    #[props(default)] on_close: Option<EventHandler<()>>,
    #[props(into, default)] title: Option<String>,
    #[props(into, default)] class: String,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    rsx! {
        div {
            class: cn(["flex items-center justify-between p-6 border-b border-gray-200", &class]),
            div {
                class: "flex-1",
                if let Some(title) = title {
                    h2 { id: MODAL_TITLE_ID, class: "text-xl font-semibold text-gray-900", "{title}" }
                }
                {children}
            }
            if let (true, Some(handler)) = (show_close_button, on_close) {
                button {
                    r#type: "button",
                    class: "ml-4 text-gray-400 hover:text-gray-600 transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 rounded",
                    aria_label: "Close modal",
                    onclick: move |_| handler.call(()),
                    crate::Icon { icon: crate::icons::FaXmark, width: 20, height: 20 }
                }
            }
        }
    }
}

#[component]
pub fn ModalBody(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: cn(["p-6", &class]), {children} }
    }
}

#[component]
pub fn ModalFooter(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: cn([
                "flex items-center justify-end gap-3 p-6 border-t border-gray-200 bg-gray-50 rounded-b-xl",
                &class,
            ]),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_map_to_max_widths() {
        assert_eq!(ModalSize::Sm.class(), "max-w-md");
        assert_eq!(ModalSize::default().class(), "max-w-lg");
        assert_eq!(ModalSize::Lg.class(), "max-w-2xl");
        assert!(modal_class(ModalSize::Xl, "p-2").ends_with("max-w-4xl p-2"));
    }

    #[test]
    fn release_script_restores_scrolling() {
        let js = release_js(3);
        assert!(js.contains("removeEventListener('keydown', handlers[3])"));
        assert!(js.contains("overflow = 'unset'"));
    }

    #[test]
    fn lock_script_only_listens_when_asked() {
        assert!(lock_js(1, false).contains("if (!false) return;"));
        assert!(lock_js(1, true).contains("addEventListener('keydown', handler)"));
    }

    #[test]
    fn closed_modal_that_never_locked_releases_nothing() {
        assert_eq!(transition_scripts(4, false, false, true), (None, None));
    }

    #[test]
    fn opening_locks_and_closing_releases() {
        let (release, lock) = transition_scripts(4, false, true, true);
        assert!(release.is_none());
        assert_eq!(lock, Some(lock_js(4, true)));

        let (release, lock) = transition_scripts(4, true, false, true);
        assert_eq!(release, Some(release_js(4)));
        assert!(lock.is_none());
    }

    #[test]
    fn prop_change_while_open_relocks() {
        let (release, lock) = transition_scripts(4, true, true, false);
        assert_eq!(release, Some(release_js(4)));
        assert_eq!(lock, Some(lock_js(4, false)));
    }
}
