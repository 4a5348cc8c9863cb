//! Kanban board model.
//!
//! Boards hold ordered columns ("To do", "In progress", "Done"), columns hold
//! ordered cards. Membership is per board, and a member's [`BoardRole`]
//! decides which [`BoardPermission`]s they hold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub team_id: String,
    pub owner_id: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub members: Vec<BoardMember>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub board_id: String,
    pub order: i32,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Header colour, hex.
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub column_id: String,
    pub order: i32,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardRole {
    Admin,
    Member,
    Viewer,
}

impl BoardRole {
    pub fn permissions(self) -> &'static [BoardPermission] {
        use BoardPermission::*;
        match self {
            BoardRole::Admin => &[
                ViewBoard,
                CreateCard,
                EditCard,
                MoveCard,
                DeleteCard,
                ManageBoard,
            ],
            BoardRole::Member => &[ViewBoard, CreateCard, EditCard, MoveCard],
            BoardRole::Viewer => &[ViewBoard],
        }
    }

    pub fn can(self, permission: BoardPermission) -> bool {
        self.permissions().contains(&permission)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardMember {
    pub board_id: String,
    pub user_id: String,
    #[serde(default)]
    pub user: Option<User>,
    pub role: BoardRole,
    pub joined_at: DateTime<Utc>,
}

/// Card label such as "urgent" or "bug".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub color: String,
    pub board_id: String,
}

/// A card dragged to a new column/position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardMoveEvent {
    pub card_id: String,
    pub source_column_id: String,
    pub target_column_id: String,
    pub new_order: i32,
    pub moved_by: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardPermission {
    ViewBoard,
    CreateCard,
    EditCard,
    MoveCard,
    DeleteCard,
    ManageBoard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        assert_eq!(BoardRole::Admin.permissions().len(), 6);
        assert!(BoardRole::Member.can(BoardPermission::MoveCard));
        assert!(!BoardRole::Member.can(BoardPermission::DeleteCard));
        assert_eq!(BoardRole::Viewer.permissions(), &[BoardPermission::ViewBoard]);
    }

    #[test]
    fn test_permission_wire_names() {
        let json = serde_json::to_string(&BoardPermission::ManageBoard).unwrap();
        assert_eq!(json, "\"manage_board\"");
    }
}
