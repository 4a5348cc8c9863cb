use dioxus::prelude::*;

use super::cn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

impl CardVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "border border-gray-200",
            Self::Outlined => "border-2 border-gray-300",
            Self::Elevated => "shadow-lg border border-gray-100",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub fn class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sm => "p-3",
            Self::Md => "p-4",
            Self::Lg => "p-6",
        }
    }
}

pub fn card_class(variant: CardVariant, padding: CardPadding, full_width: bool, extra: &str) -> String {
    cn([
        "rounded-xl bg-white transition-colors",
        variant.class(),
        padding.class(),
        if full_width { "w-full" } else { "" },
        extra,
    ])
}

#[component]
pub fn Card(
    #[props(default)] variant: CardVariant,
    #[props(default)] padding: CardPadding,
    #[props(default)] full_width: bool,
    #[props(into, default)] class: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: card_class(variant, padding, full_width, &class),
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn CardHeader(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: cn(["mb-4 pb-3 border-b border-gray-200", &class]), {children} }
    }
}

#[component]
pub fn CardBody(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: cn(["mb-4", &class]), {children} }
    }
}

#[component]
pub fn CardFooter(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: cn(["pt-3 border-t border-gray-200", &class]), {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_has_border_and_medium_padding() {
        assert_eq!(
            card_class(CardVariant::default(), CardPadding::default(), false, ""),
            "rounded-xl bg-white transition-colors border border-gray-200 p-4"
        );
    }

    #[test]
    fn no_padding_adds_no_class() {
        assert_eq!(
            card_class(CardVariant::Elevated, CardPadding::None, true, "mb-8"),
            "rounded-xl bg-white transition-colors shadow-lg border border-gray-100 w-full mb-8"
        );
    }
}
