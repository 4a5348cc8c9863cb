//! Story registry. Each story is addressable at `/{component}/{slug}`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoryKind {
    ButtonPrimary,
    ButtonSecondary,
    ButtonOutline,
    ButtonSizes,
    ButtonDisabled,
    InputDefault,
    InputWithLabel,
    InputWithError,
    InputWithHelperText,
    CardDefault,
    CardOutlined,
    CardElevated,
    CardCompound,
    CardPaddings,
    ModalBasic,
    ModalLogin,
    ModalSizes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub component: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub kind: StoryKind,
}

impl Story {
    const fn new(component: &'static str, slug: &'static str, title: &'static str, kind: StoryKind) -> Self {
        Self {
            component,
            slug,
            title,
            kind,
        }
    }

    pub fn component_slug(&self) -> String {
        self.component.to_ascii_lowercase()
    }

    pub fn path(&self) -> String {
        format!("/{}/{}", self.component_slug(), self.slug)
    }
}

pub const STORIES: &[Story] = &[
    Story::new("Button", "primary", "Primary", StoryKind::ButtonPrimary),
    Story::new("Button", "secondary", "Secondary", StoryKind::ButtonSecondary),
    Story::new("Button", "outline", "Outline", StoryKind::ButtonOutline),
    Story::new("Button", "sizes", "Sizes", StoryKind::ButtonSizes),
    Story::new("Button", "disabled", "Disabled", StoryKind::ButtonDisabled),
    Story::new("Input", "default", "Default", StoryKind::InputDefault),
    Story::new("Input", "with-label", "With label", StoryKind::InputWithLabel),
    Story::new("Input", "with-error", "With error", StoryKind::InputWithError),
    Story::new("Input", "with-helper-text", "With helper text", StoryKind::InputWithHelperText),
    Story::new("Card", "default", "Default", StoryKind::CardDefault),
    Story::new("Card", "outlined", "Outlined", StoryKind::CardOutlined),
    Story::new("Card", "elevated", "Elevated", StoryKind::CardElevated),
    Story::new("Card", "with-compound-components", "With compound components", StoryKind::CardCompound),
    Story::new("Card", "padding-variants", "Padding variants", StoryKind::CardPaddings),
    Story::new("Modal", "basic", "Basic modal", StoryKind::ModalBasic),
    Story::new("Modal", "login", "Login modal", StoryKind::ModalLogin),
    Story::new("Modal", "sizes", "Sizes", StoryKind::ModalSizes),
];

/// Component names in registry order, without repeats.
pub fn components() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for story in STORIES {
        if !names.contains(&story.component) {
            names.push(story.component);
        }
    }
    names
}

pub fn stories_for(component: &str) -> impl Iterator<Item = &'static Story> + '_ {
    STORIES
        .iter()
        .filter(move |s| s.component.eq_ignore_ascii_case(component))
}

/// Look a story up by its URL segments. The component segment is
/// case-insensitive.
pub fn find(component: &str, slug: &str) -> Option<&'static Story> {
    stories_for(component).find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_component_has_stories() {
        assert_eq!(components(), vec!["Button", "Input", "Card", "Modal"]);
        for component in components() {
            assert!(stories_for(component).count() >= 2, "{component} has too few stories");
        }
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<String> = STORIES.iter().map(Story::path).collect();
        assert_eq!(paths.len(), STORIES.len());
    }

    #[test]
    fn kinds_are_unique() {
        let kinds: Vec<StoryKind> = STORIES.iter().map(|s| s.kind).collect();
        for (i, kind) in kinds.iter().enumerate() {
            assert!(!kinds[i + 1..].contains(kind), "{kind:?} registered twice");
        }
    }

    #[test]
    fn find_matches_path_segments() {
        let story = find("input", "with-error").expect("registered");
        assert_eq!(story.kind, StoryKind::InputWithError);
        assert_eq!(story.path(), "/input/with-error");
        assert_eq!(find("Modal", "basic").map(|s| s.kind), Some(StoryKind::ModalBasic));
        assert!(find("button", "nope").is_none());
        assert!(find("table", "default").is_none());
    }
}
