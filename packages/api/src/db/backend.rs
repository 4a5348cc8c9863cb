use store::{MemoryStore, NoteStore, StoreError};
use types::{CreateNoteRequest, Note, UpdateNoteRequest};

use super::{PgStore, RestStore};
use crate::config::BackendConfig;

/// The note backend shared by every server function.
#[derive(Clone, Debug)]
pub enum Backend {
    Rest(RestStore),
    Postgres(PgStore),
    Memory(MemoryStore),
}

impl Backend {
    /// Build the backend described by `config`. Postgres connects eagerly so a
    /// bad `DATABASE_URL` fails at startup rather than on the first request.
    pub async fn connect(config: &BackendConfig) -> Result<Self, StoreError> {
        let backend = match config {
            BackendConfig::Rest { url, anon_key } => Self::Rest(RestStore::new(url, anon_key)),
            BackendConfig::Postgres {
                url,
                max_connections,
            } => Self::Postgres(
                PgStore::connect(url, *max_connections)
                    .await
                    .map_err(StoreError::backend)?,
            ),
            BackendConfig::Memory => Self::Memory(MemoryStore::new()),
        };
        tracing::info!(backend = config.kind(), "note backend ready");
        Ok(backend)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rest(_) => "postgrest",
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

impl NoteStore for Backend {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        match self {
            Self::Rest(store) => store.list_notes().await,
            Self::Postgres(store) => store.list_notes().await,
            Self::Memory(store) => store.list_notes().await,
        }
    }

    async fn get_note(&self, id: &str) -> Result<Note, StoreError> {
        match self {
            Self::Rest(store) => store.get_note(id).await,
            Self::Postgres(store) => store.get_note(id).await,
            Self::Memory(store) => store.get_note(id).await,
        }
    }

    async fn create_note(&self, request: CreateNoteRequest) -> Result<Note, StoreError> {
        match self {
            Self::Rest(store) => store.create_note(request).await,
            Self::Postgres(store) => store.create_note(request).await,
            Self::Memory(store) => store.create_note(request).await,
        }
    }

    async fn update_note(&self, id: &str, request: UpdateNoteRequest) -> Result<Note, StoreError> {
        match self {
            Self::Rest(store) => store.update_note(id, request).await,
            Self::Postgres(store) => store.update_note(id, request).await,
            Self::Memory(store) => store.update_note(id, request).await,
        }
    }
}
