//! Direct Postgres backend.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use store::{NoteStore, StoreError};
use types::{CreateNoteRequest, Note, UpdateNoteRequest};

use super::parse_note_id;
use crate::models::NoteRow;

/// `notes` table access through an SQLx connection pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open a pool with up to `max_connections` connections.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl NoteStore for PgStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let rows: Vec<NoteRow> = sqlx::query_as("SELECT * FROM notes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        Ok(rows.into_iter().map(NoteRow::into_note).collect())
    }

    async fn get_note(&self, id: &str) -> Result<Note, StoreError> {
        let id = parse_note_id(id)?;

        let row: Option<NoteRow> = sqlx::query_as("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        row.map(NoteRow::into_note).ok_or(StoreError::NotFound)
    }

    async fn create_note(&self, request: CreateNoteRequest) -> Result<Note, StoreError> {
        let row: NoteRow = sqlx::query_as(
            "INSERT INTO notes (title, content, author_id, is_public, tags)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&request.title)
        .bind(&request.content)
        .bind(&request.author_id)
        .bind(request.is_public)
        .bind(&request.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(row.into_note())
    }

    async fn update_note(&self, id: &str, request: UpdateNoteRequest) -> Result<Note, StoreError> {
        let id = parse_note_id(id)?;

        // NULL parameters keep the stored value.
        let row: Option<NoteRow> = sqlx::query_as(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                is_public = COALESCE($4, is_public),
                tags = COALESCE($5, tags),
                updated_at = COALESCE($6, NOW())
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.content)
        .bind(request.is_public)
        .bind(&request.tags)
        .bind(request.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        row.map(NoteRow::into_note).ok_or(StoreError::NotFound)
    }
}
