//! # Database module — note backends for the server
//!
//! Everything here is gated behind `#[cfg(feature = "server")]` so client (WASM)
//! builds never pull in SQLx or reqwest.
//!
//! ## Design
//!
//! The server builds exactly one [`Backend`] at startup from a
//! [`BackendConfig`](crate::config::BackendConfig) and hands it to the axum
//! router as an `Extension`. Server functions receive it as an extractor, so
//! there is no module-level client handle. `Backend` is cheap to clone: every
//! variant shares its connection pool or HTTP client internally.
//!
//! | Variant | Type | Talks to |
//! |---------|------|----------|
//! | `Rest` | [`RestStore`] | hosted PostgREST (`/rest/v1/notes`) with the anon key |
//! | `Postgres` | [`PgStore`] | Postgres through an SQLx pool |
//! | `Memory` | [`store::MemoryStore`] | process memory |
//!
//! All three implement [`store::NoteStore`] and report missing rows (including
//! ids that are not valid UUIDs) as `StoreError::NotFound`.

#[cfg(feature = "server")]
mod backend;
#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
mod rest;

#[cfg(feature = "server")]
pub use backend::Backend;
#[cfg(feature = "server")]
pub use pool::PgStore;
#[cfg(feature = "server")]
pub use rest::RestStore;

#[cfg(feature = "server")]
fn parse_note_id(id: &str) -> Result<uuid::Uuid, store::StoreError> {
    uuid::Uuid::parse_str(id).map_err(|_| store::StoreError::NotFound)
}
