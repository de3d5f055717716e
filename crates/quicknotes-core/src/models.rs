//! Core data models for quicknotes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted note record.
///
/// `id` and both timestamps are assigned by the store, never by the caller.
/// The serialized form is the wire record exchanged with the remote backend
/// and the element type of the local backend's persisted array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when either required field is empty after trimming.
    pub fn has_blank_field(&self) -> bool {
        self.title.trim().is_empty() || self.content.trim().is_empty()
    }
}
