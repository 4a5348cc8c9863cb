//! # Hosted PostgREST backend
//!
//! Talks to the `notes` table through a PostgREST endpoint (`{url}/rest/v1/notes`),
//! sending the anonymous key both as the `apikey` header and as the bearer token.
//!
//! Single-row calls ask for `application/vnd.pgrst.object+json`, which makes
//! PostgREST answer with a bare object, or with error code [`ROW_NOT_FOUND`]
//! when the filter matched nothing. Inserts and updates send
//! `Prefer: return=representation` so the stored row comes back in the same
//! round trip.

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use store::{NoteStore, StoreError};
use types::{CreateNoteRequest, Note, UpdateNoteRequest};

use super::parse_note_id;
use crate::models::NoteRow;

/// PostgREST error code for "the result contains 0 rows".
pub const ROW_NOT_FOUND: &str = "PGRST116";

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

/// Map a failed PostgREST response to a [`StoreError`].
fn classify_error(status: StatusCode, body: &str) -> StoreError {
    let error: PostgrestError = serde_json::from_str(body).unwrap_or_default();

    if error.code.as_deref() == Some(ROW_NOT_FOUND) {
        return StoreError::NotFound;
    }

    let message = match (error.message, error.details) {
        (Some(message), Some(details)) if !details.is_empty() => format!("{message} ({details})"),
        (Some(message), _) => message,
        (None, _) if !body.trim().is_empty() => format!("{status}: {}", body.trim()),
        (None, _) => status.to_string(),
    };
    StoreError::Backend(message)
}

/// `notes` table access over PostgREST.
#[derive(Clone, Debug)]
pub struct RestStore {
    client: Client,
    table_url: String,
    anon_key: String,
}

impl RestStore {
    /// `base_url` is the project URL without the `/rest/v1` suffix.
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            client: Client::new(),
            table_url: format!("{}/rest/v1/notes", base_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.table_url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Request builder for calls that return exactly one row.
    fn single(&self, method: Method) -> RequestBuilder {
        self.request(method)
            .header(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT))
            .header("Prefer", RETURN_REPRESENTATION)
    }
}

async fn read_body(response: Response) -> Result<String, StoreError> {
    let status = response.status();
    let body = response.text().await.map_err(StoreError::backend)?;
    if !status.is_success() {
        return Err(classify_error(status, &body));
    }
    Ok(body)
}

async fn read_row(response: Response) -> Result<Note, StoreError> {
    let body = read_body(response).await?;
    let row: NoteRow = serde_json::from_str(&body).map_err(StoreError::backend)?;
    Ok(row.into_note())
}

impl NoteStore for RestStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(StoreError::backend)?;

        let body = read_body(response).await?;
        let rows: Vec<NoteRow> = serde_json::from_str(&body).map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(NoteRow::into_note).collect())
    }

    async fn get_note(&self, id: &str) -> Result<Note, StoreError> {
        let id = parse_note_id(id)?;

        let response = self
            .single(Method::GET)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(StoreError::backend)?;

        read_row(response).await
    }

    async fn create_note(&self, request: CreateNoteRequest) -> Result<Note, StoreError> {
        let response = self
            .single(Method::POST)
            .query(&[("select", "*")])
            .json(&request)
            .send()
            .await
            .map_err(StoreError::backend)?;

        read_row(response).await
    }

    async fn update_note(&self, id: &str, request: UpdateNoteRequest) -> Result<Note, StoreError> {
        let id = parse_note_id(id)?;

        let response = self
            .single(Method::PATCH)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .json(&request)
            .send()
            .await
            .map_err(StoreError::backend)?;

        read_row(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rows_is_not_found() {
        let body = r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#;
        assert_eq!(classify_error(StatusCode::NOT_ACCEPTABLE, body), StoreError::NotFound);
    }

    #[test]
    fn test_other_codes_keep_message() {
        let body = r#"{"code":"42501","details":null,"hint":null,"message":"permission denied for table notes"}"#;
        assert_eq!(
            classify_error(StatusCode::UNAUTHORIZED, body),
            StoreError::Backend("permission denied for table notes".to_string())
        );
    }

    #[test]
    fn test_non_json_error_body() {
        assert_eq!(
            classify_error(StatusCode::BAD_GATEWAY, "upstream down\n"),
            StoreError::Backend("502 Bad Gateway: upstream down".to_string())
        );
        assert_eq!(
            classify_error(StatusCode::SERVICE_UNAVAILABLE, ""),
            StoreError::Backend("503 Service Unavailable".to_string())
        );
    }

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let store = RestStore::new("https://abc.supabase.co/", "anon");
        assert_eq!(store.table_url, "https://abc.supabase.co/rest/v1/notes");
    }
}
