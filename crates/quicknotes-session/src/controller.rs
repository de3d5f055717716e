//! Session-scoped note controller.
//!
//! One controller instance is constructed per running session with an
//! injected store; it owns the in-memory list outright. The presentation
//! layer reads snapshots through the accessors and routes every mutation
//! intent back through the operations here; it never touches the list
//! directly.
//!
//! Per-operation contract: the loading flag covers the store call; on
//! success the reconciliation rule for that operation is applied and any
//! previous error is cleared; on failure the list is left exactly as it
//! was before the attempt and a message naming the failed operation is
//! recorded. A failed operation is never retried automatically.

use std::sync::Arc;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use quicknotes_core::{Error, Note, NoteDraft, NoteStore, Result};

/// Owner of the authoritative in-memory note list for one session.
pub struct NoteController {
    store: Arc<dyn NoteStore>,
    notes: Vec<Note>,
    loading: bool,
    error: Option<String>,
}

impl NoteController {
    /// Create a controller over the given store.
    ///
    /// The list starts empty; call [`load`](Self::load) to populate it.
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            store,
            notes: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Read-only snapshot of the current list.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// True while a store call is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message describing the last failed operation, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the current error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace the whole in-memory list with the store's contents.
    #[instrument(skip(self), fields(subsystem = "session", op = "load"))]
    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        self.error = None;

        let result = self.store.list().await;
        self.loading = false;

        match result {
            Ok(notes) => {
                debug!(result_count = notes.len(), "Loaded notes");
                self.notes = notes;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Load failed");
                self.error = Some(format!("Failed to fetch notes: {}", e));
                Err(e)
            }
        }
    }

    /// Create a note and surface it at the head of the list.
    #[instrument(skip(self, draft), fields(subsystem = "session", op = "add"))]
    pub async fn add(&mut self, draft: NoteDraft) -> Result<()> {
        self.validate(&draft)?;

        self.loading = true;
        let result = self.store.create(draft).await;
        self.loading = false;

        match result {
            Ok(note) => {
                debug!(note_id = %note.id, "Added note");
                self.notes.insert(0, note);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Add failed");
                self.error = Some(format!("Failed to create note: {}", e));
                Err(e)
            }
        }
    }

    /// Update a note, replacing its list entry in place.
    #[instrument(skip(self, draft), fields(subsystem = "session", op = "edit", note_id = %id))]
    pub async fn edit(&mut self, id: Uuid, draft: NoteDraft) -> Result<()> {
        self.validate(&draft)?;

        self.loading = true;
        let result = self.store.update(id, draft).await;
        self.loading = false;

        match result {
            Ok(note) => {
                debug!("Edited note");
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
                    *slot = note;
                }
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Edit failed");
                self.error = Some(format!("Failed to update note: {}", e));
                Err(e)
            }
        }
    }

    /// Delete a note and remove its list entry in place.
    #[instrument(skip(self), fields(subsystem = "session", op = "remove", note_id = %id))]
    pub async fn remove(&mut self, id: Uuid) -> Result<()> {
        self.loading = true;
        let result = self.store.delete(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                debug!("Removed note");
                self.notes.retain(|n| n.id != id);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Remove failed");
                self.error = Some(format!("Failed to delete note: {}", e));
                Err(e)
            }
        }
    }

    /// Reject blank drafts before any store call is made.
    fn validate(&mut self, draft: &NoteDraft) -> Result<()> {
        if draft.has_blank_field() {
            let err = Error::Validation("title and content are required".to_string());
            self.error = Some(err.to_string());
            return Err(err);
        }
        Ok(())
    }
}
