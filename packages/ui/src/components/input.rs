use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use super::cn;

const BASE: &str = "px-4 py-2 rounded-xl border transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed text-sm";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputVariant {
    #[default]
    Default,
    Error,
}

impl InputVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "border-gray-300 bg-white text-gray-900 placeholder-gray-500 focus:border-blue-600 focus:ring-blue-500",
            Self::Error => "border-red-500 bg-white text-gray-900 placeholder-gray-500 focus:border-red-600 focus:ring-red-500",
        }
    }
}

/// An error message always renders the field in the error style.
pub fn input_class(variant: InputVariant, has_error: bool, full_width: bool, extra: &str) -> String {
    let variant = if has_error { InputVariant::Error } else { variant };
    cn([BASE, variant.class(), if full_width { "w-full" } else { "" }, extra])
}

/// Which line renders under the field. Error text wins over helper text.
pub fn input_hint<'a>(error: Option<&'a str>, helper_text: Option<&'a str>) -> Option<(&'a str, bool)> {
    match (error, helper_text) {
        (Some(err), _) => Some((err, true)),
        (None, Some(help)) => Some((help, false)),
        (None, None) => None,
    }
}

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

fn generated_id() -> String {
    format!("input-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Text field with an optional label, error message and helper text.
///
/// Without an explicit `id` one is generated once per mounted field so the
/// label stays attached to it.
#[component]
pub fn Input(
    #[props(default)] variant: InputVariant,
    #[props(into, default)] label: Option<String>,
    #[props(into, default)] error: Option<String>,
    #[props(into, default)] helper_text: Option<String>,
    #[props(default)] full_width: bool,
    #[props(into, default)] class: String,
    #[props(into, default)] id: Option<String>,
    #[props(default = "text")] r#type: &'static str,
    #[props(into, default)] value: String,
    #[props(into, default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onkeydown: EventHandler<KeyboardEvent>,
    #[props(default)] onblur: EventHandler<FocusEvent>,
) -> Element {
    let input_id = use_hook(move || id.unwrap_or_else(generated_id));
    let class = input_class(variant, error.is_some(), full_width, &class);
    let hint = input_hint(error.as_deref(), helper_text.as_deref());

    rsx! {
        div {
            class: cn(["flex flex-col", if full_width { "w-full" } else { "" }]),
            if let Some(text) = label {
                label {
                    r#for: "{input_id}",
                    class: "mb-1.5 text-sm font-medium text-gray-700",
                    "{text}"
                }
            }
            input {
                id: "{input_id}",
                class: class,
                r#type: r#type,
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                oninput: move |evt| oninput.call(evt),
                onkeydown: move |evt| onkeydown.call(evt),
                onblur: move |evt| onblur.call(evt),
            }
            match hint {
                Some((text, true)) => rsx! { p { class: "mt-1.5 text-sm text-red-600", "{text}" } },
                Some((text, false)) => rsx! { p { class: "mt-1.5 text-sm text-gray-500", "{text}" } },
                None => rsx! {},
            }
        }
    }
}
