//! Local note store backed by a single JSON file.
//!
//! The whole collection lives as one serialized array under one path. Every
//! operation reads the array fully into memory and mutations write it back
//! in full; there are no partial writes and no separate index. Two store
//! instances pointed at the same file are last-writer-wins; the system
//! targets a single active client.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use quicknotes_core::{Error, Note, NoteDraft, NoteStore, Result};

/// File-backed note store performing full read-modify-write per operation.
pub struct LocalNoteStore {
    path: PathBuf,
}

impl LocalNoteStore {
    /// Create a store persisting to the given path.
    ///
    /// The file is created lazily on the first mutation; an absent file is
    /// an empty collection, not an error.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Unavailable(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            Error::Unavailable(format!(
                "corrupted note payload in {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_all(&self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string_pretty(notes)
            .map_err(|e| Error::InvalidRecord(format!("failed to serialize notes: {}", e)))?;

        fs::write(&self.path, raw).map_err(|e| {
            Error::Unavailable(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl NoteStore for LocalNoteStore {
    #[instrument(skip(self), fields(subsystem = "store", component = "local", op = "list"))]
    async fn list(&self) -> Result<Vec<Note>> {
        let notes = self.read_all()?;
        debug!(result_count = notes.len(), "Listed notes");
        Ok(notes)
    }

    #[instrument(skip(self, draft), fields(subsystem = "store", component = "local", op = "create"))]
    async fn create(&self, draft: NoteDraft) -> Result<Note> {
        let mut notes = self.read_all()?;

        let now = Utc::now();
        let note = Note {
            id: Uuid::now_v7(),
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };

        notes.push(note.clone());
        self.write_all(&notes)?;

        debug!(note_id = %note.id, "Created note");
        Ok(note)
    }

    #[instrument(skip(self, draft), fields(subsystem = "store", component = "local", op = "update", note_id = %id))]
    async fn update(&self, id: Uuid, draft: NoteDraft) -> Result<Note> {
        let mut notes = self.read_all()?;

        let slot = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NotFound(id))?;

        slot.title = draft.title;
        slot.content = draft.content;
        slot.updated_at = Utc::now();
        let updated = slot.clone();

        self.write_all(&notes)?;

        debug!("Updated note");
        Ok(updated)
    }

    #[instrument(skip(self), fields(subsystem = "store", component = "local", op = "delete", note_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut notes = self.read_all()?;

        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(Error::NotFound(id));
        }

        self.write_all(&notes)?;

        debug!("Deleted note");
        Ok(())
    }
}
