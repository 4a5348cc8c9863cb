use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled text document with tags and a visibility flag.
///
/// The backend table owns the persisted copy; pages only ever hold a
/// snapshot fetched for the current view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_id: String,
    pub is_public: bool,
    /// Ordered, duplicate-free tag list.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// First `max_chars` characters of the content, with an ellipsis when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let trimmed = self.content.trim();
        let mut chars = trimmed.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}…", head.trim_end())
        } else {
            head
        }
    }
}

/// Access level a user holds on a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteAccess {
    Read,
    Write,
    Admin,
}

/// Grants one user access to one note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotePermission {
    pub note_id: String,
    pub user_id: String,
    pub permission: NoteAccess,
}

/// "Someone is editing" indicator for a note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteEditingStatus {
    pub note_id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub cursor_position: Option<u32>,
    pub last_activity: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_with_content(content: &str) -> Note {
        let now = Utc::now();
        Note {
            id: "n1".to_string(),
            title: "Title".to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
            author_id: crate::PLACEHOLDER_AUTHOR_ID.to_string(),
            is_public: false,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_preview_short_content_is_unchanged() {
        assert_eq!(note_with_content("  hello  ").preview(10), "hello");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let note = note_with_content("가나다라마바사");
        assert_eq!(note.preview(3), "가나다…");
    }

    #[test]
    fn test_missing_tags_deserialize_as_empty() {
        let json = r#"{
            "id": "n1",
            "title": "T",
            "content": "",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z",
            "author_id": "a",
            "is_public": true
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(note.tags.is_empty());
        assert!(note.is_public);
    }
}
