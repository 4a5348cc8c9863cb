//! This crate contains all shared UI for the workspace: the component
//! primitives, the notes-app building blocks and the page views.

use dioxus::prelude::*;

pub mod components;
pub mod paths;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod markdown;
pub use markdown::render_markdown;

mod navigation;
pub use navigation::{Breadcrumb, Navigation};

mod layout;
pub use layout::{PageContainer, PageContent};

mod status;
pub use status::{ErrorBanner, ErrorCard, ErrorIcon, LoadingSpinner, SpinnerSize};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod note_form;
pub use note_form::{submit_allowed, NoteForm, TagEditor};

mod edit_note;
pub use edit_note::{use_edit_note, EditNote};
