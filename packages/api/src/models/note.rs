//! # `notes` table row
//!
//! [`NoteRow`] is the raw shape of a row in the `notes` table, shared by both
//! server backends: it derives [`sqlx::FromRow`] for direct Postgres queries
//! and [`Deserialize`] for PostgREST JSON responses, whose keys are the column
//! names.
//!
//! `content` and `tags` are nullable on hosted tables that predate the
//! migration; [`NoteRow::into_note`] reads `NULL` as an empty string or empty
//! list. The id is converted to a `String` so [`types::Note`] stays free of
//! server-only crates.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use types::Note;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Deserialize)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub author_id: String,
    pub is_public: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteRow {
    pub fn into_note(self) -> Note {
        Note {
            id: self.id.to_string(),
            title: self.title,
            content: self.content.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            author_id: self.author_id,
            is_public: self.is_public,
            tags: self.tags.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgrest_row_with_nulls() {
        let json = r#"{
            "id": "6f1c2b1e-8a0f-4a53-9a7e-2f8e6a1d0c11",
            "title": "Standup",
            "content": null,
            "author_id": "00000000-0000-0000-0000-000000000000",
            "is_public": false,
            "tags": null,
            "created_at": "2024-06-01T09:30:00.123456+00:00",
            "updated_at": "2024-06-02T11:00:00+00:00"
        }"#;
        let note = serde_json::from_str::<NoteRow>(json).unwrap().into_note();
        assert_eq!(note.id, "6f1c2b1e-8a0f-4a53-9a7e-2f8e6a1d0c11");
        assert_eq!(note.content, "");
        assert!(note.tags.is_empty());
        assert!(note.updated_at > note.created_at);
    }
}
