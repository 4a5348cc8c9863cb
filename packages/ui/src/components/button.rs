use dioxus::prelude::*;

use super::cn;

const BASE: &str = "inline-flex items-center justify-center rounded-md font-medium transition-colors focus:outline-none focus:ring-2 disabled:opacity-50 cursor-pointer";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
            Self::Secondary => "bg-gray-600 text-white hover:bg-gray-700 focus:ring-gray-500",
            Self::Outline => {
                "border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 focus:ring-gray-500"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// Full class string for a button.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn([BASE, size.class(), variant.class(), extra])
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(into, default)] class: String,
    /// `button` or `submit`.
    #[props(default = "button")]
    r#type: &'static str,
    #[props(default)] disabled: bool,
    #[props(into, default)] title: Option<String>,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: button_class(variant, size, &class),
            r#type: r#type,
            disabled: disabled,
            title: title,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_medium() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("px-4 py-2 text-base"));
        assert!(class.contains("bg-blue-600"));
    }

    #[test]
    fn variants_and_sizes_select_their_classes() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Lg, "px-8");
        assert!(class.contains("border border-gray-300 bg-white"));
        assert!(class.contains("px-6 py-3 text-lg"));
        assert!(class.ends_with("px-8"));
        assert!(!class.contains("bg-blue-600"));

        let class = button_class(ButtonVariant::Secondary, ButtonSize::Sm, "");
        assert!(class.contains("bg-gray-600"));
        assert!(class.contains("text-sm"));
    }
}
