//! Remote note store speaking the HTTP wire contract.
//!
//! Each operation maps 1:1 to one request against a configured base
//! address. Non-success statuses are translated into the error taxonomy:
//! 404 means the target id does not exist, other 4xx statuses mean the
//! payload was rejected, and everything else (including transport
//! failures) means the backend is unavailable. The store never retries.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use quicknotes_core::{defaults, Error, Note, NoteDraft, NoteStore, Result};

/// HTTP-backed note store.
pub struct RemoteNoteStore {
    client: Client,
    base_url: String,
}

/// Request body for create and update calls.
#[derive(Serialize)]
struct DraftPayload<'a> {
    title: &'a str,
    content: &'a str,
}

impl<'a> From<&'a NoteDraft> for DraftPayload<'a> {
    fn from(draft: &'a NoteDraft) -> Self {
        Self {
            title: &draft.title,
            content: &draft.content,
        }
    }
}

impl RemoteNoteStore {
    /// Create a store against the given base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(
            base_url,
            Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        )
    }

    /// Create a store with a custom request timeout.
    ///
    /// The timeout is the only deadline enforced here; the controller
    /// layer adds none of its own.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: Uuid) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    async fn read_failure_body(response: reqwest::Response) -> String {
        response.text().await.unwrap_or_default()
    }
}

#[async_trait]
impl NoteStore for RemoteNoteStore {
    #[instrument(skip(self), fields(subsystem = "store", component = "remote", op = "list"))]
    async fn list(&self) -> Result<Vec<Note>> {
        let start = Instant::now();

        let response = self.client.get(self.notes_url()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = Self::read_failure_body(response).await;
            warn!(status = %status, "List request failed");
            return Err(Error::Unavailable(format!(
                "list returned {}: {}",
                status, body
            )));
        }

        let notes: Vec<Note> = response
            .json()
            .await
            .map_err(|e| Error::Unavailable(format!("failed to parse note list: {}", e)))?;

        debug!(
            result_count = notes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fetched notes"
        );
        Ok(notes)
    }

    #[instrument(skip(self, draft), fields(subsystem = "store", component = "remote", op = "create"))]
    async fn create(&self, draft: NoteDraft) -> Result<Note> {
        let response = self
            .client
            .post(self.notes_url())
            .json(&DraftPayload::from(&draft))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = Self::read_failure_body(response).await;
            warn!(status = %status, "Create request failed");
            return Err(if status.is_client_error() {
                Error::InvalidRecord(format!("create rejected with {}: {}", status, body))
            } else {
                Error::Unavailable(format!("create returned {}: {}", status, body))
            });
        }

        let note: Note = response
            .json()
            .await
            .map_err(|e| Error::Unavailable(format!("failed to parse created note: {}", e)))?;

        debug!(note_id = %note.id, "Created note");
        Ok(note)
    }

    #[instrument(skip(self, draft), fields(subsystem = "store", component = "remote", op = "update", note_id = %id))]
    async fn update(&self, id: Uuid, draft: NoteDraft) -> Result<Note> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(&DraftPayload::from(&draft))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = Self::read_failure_body(response).await;
            warn!(status = %status, "Update request failed");
            return Err(if status == StatusCode::NOT_FOUND {
                Error::NotFound(id)
            } else if status.is_client_error() {
                Error::InvalidRecord(format!("update rejected with {}: {}", status, body))
            } else {
                Error::Unavailable(format!("update returned {}: {}", status, body))
            });
        }

        let note: Note = response
            .json()
            .await
            .map_err(|e| Error::Unavailable(format!("failed to parse updated note: {}", e)))?;

        debug!("Updated note");
        Ok(note)
    }

    #[instrument(skip(self), fields(subsystem = "store", component = "remote", op = "delete", note_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<()> {
        let response = self.client.delete(self.note_url(id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = Self::read_failure_body(response).await;
            warn!(status = %status, "Delete request failed");
            return Err(if status == StatusCode::NOT_FOUND {
                Error::NotFound(id)
            } else {
                Error::Unavailable(format!("delete returned {}: {}", status, body))
            });
        }

        debug!("Deleted note");
        Ok(())
    }
}
