//! Form state and the request payloads built from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Client-side editing state for a note.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteFormData {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_public: bool,
}

impl NoteFormData {
    /// Add a tag after trimming it. Returns `false` when the tag is blank or
    /// already present, leaving the list untouched.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove a tag. Unknown tags are ignored.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn title_is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Whether anything has been typed or tagged yet.
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty() || !self.content.trim().is_empty() || !self.tags.is_empty()
    }

    /// Insert payload with trimmed title and content.
    pub fn create_request(&self, author_id: &str) -> CreateNoteRequest {
        CreateNoteRequest {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            author_id: author_id.to_string(),
            is_public: self.is_public,
            tags: self.tags.clone(),
        }
    }

    /// Full update payload with trimmed title and content.
    pub fn update_request(&self, updated_at: DateTime<Utc>) -> UpdateNoteRequest {
        UpdateNoteRequest {
            title: Some(self.title.trim().to_string()),
            content: Some(self.content.trim().to_string()),
            is_public: Some(self.is_public),
            tags: Some(self.tags.clone()),
            updated_at: Some(updated_at),
        }
    }
}

impl From<&Note> for NoteFormData {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            is_public: note.is_public,
        }
    }
}

/// Payload for inserting a note. Omitted columns take the table defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author_id: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateNoteRequest {
    /// A request carrying only a title; everything else at its default.
    pub fn titled(title: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            author_id: author_id.into(),
            is_public: false,
            tags: Vec::new(),
        }
    }
}

/// Partial update. `None` fields are left as stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UpdateNoteRequest {
    /// Apply the present fields to `note`.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(is_public) = self.is_public {
            note.is_public = is_public;
        }
        if let Some(tags) = &self.tags {
            note.tags = tags.clone();
        }
        if let Some(updated_at) = self.updated_at {
            note.updated_at = updated_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_trims_and_appends() {
        let mut form = NoteFormData::default();
        assert!(form.add_tag("  meeting "));
        assert!(form.add_tag("ideas"));
        assert_eq!(form.tags, vec!["meeting", "ideas"]);
    }

    #[test]
    fn test_add_existing_tag_is_noop() {
        let mut form = NoteFormData::default();
        form.add_tag("plan");
        form.add_tag("review");
        let before = form.tags.clone();
        assert!(!form.add_tag("plan"));
        assert!(!form.add_tag(" plan "));
        assert_eq!(form.tags, before);
    }

    #[test]
    fn test_add_blank_tag_is_rejected() {
        let mut form = NoteFormData::default();
        assert!(!form.add_tag("   "));
        assert!(form.tags.is_empty());
    }

    #[test]
    fn test_remove_missing_tag_is_noop() {
        let mut form = NoteFormData::default();
        form.add_tag("a");
        form.add_tag("b");
        form.remove_tag("c");
        assert_eq!(form.tags, vec!["a", "b"]);
        form.remove_tag("a");
        assert_eq!(form.tags, vec!["b"]);
    }

    #[test]
    fn test_has_content() {
        let mut form = NoteFormData::default();
        assert!(!form.has_content());
        form.content = "  \n ".to_string();
        assert!(!form.has_content());
        form.add_tag("x");
        assert!(form.has_content());
    }

    #[test]
    fn test_requests_trim_text_fields() {
        let form = NoteFormData {
            title: "  Weekly sync ".to_string(),
            content: "\n notes \n".to_string(),
            tags: vec!["team".to_string()],
            is_public: true,
        };

        let create = form.create_request("author");
        assert_eq!(create.title, "Weekly sync");
        assert_eq!(create.content, "notes");
        assert_eq!(create.author_id, "author");

        let now = Utc::now();
        let update = form.update_request(now);
        assert_eq!(update.title.as_deref(), Some("Weekly sync"));
        assert_eq!(update.content.as_deref(), Some("notes"));
        assert_eq!(update.is_public, Some(true));
        assert_eq!(update.updated_at, Some(now));
    }

    #[test]
    fn test_partial_update_serializes_only_present_fields() {
        let update = UpdateNoteRequest {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "New" }));
    }
}
