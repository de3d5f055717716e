//! Mock note store for deterministic testing.
//!
//! Keeps the collection in memory, records every operation, and can be
//! switched into a forced-failure mode to exercise error recovery paths
//! without a real backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use quicknotes_core::{Error, Note, NoteDraft, NoteStore, Result};

/// One recorded store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List,
    Create,
    Update(Uuid),
    Delete(Uuid),
}

/// In-memory note store with a call log and failure injection.
#[derive(Clone, Default)]
pub struct MockNoteStore {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    notes: Vec<Note>,
    calls: Vec<MockCall>,
    unavailable: bool,
}

impl MockNoteStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing notes.
    pub fn with_notes(self, notes: Vec<Note>) -> Self {
        self.inner.lock().unwrap().notes = notes;
        self
    }

    /// When set, every operation fails with `Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().unavailable = unavailable;
    }

    /// All operations recorded so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of create calls recorded.
    pub fn create_call_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| **c == MockCall::Create)
            .count()
    }

    /// Snapshot of the persisted collection.
    pub fn stored_notes(&self) -> Vec<Note> {
        self.inner.lock().unwrap().notes.clone()
    }

    fn check_available(state: &MockState) -> Result<()> {
        if state.unavailable {
            return Err(Error::Unavailable("mock store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn list(&self) -> Result<Vec<Note>> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(MockCall::List);
        Self::check_available(&state)?;
        Ok(state.notes.clone())
    }

    async fn create(&self, draft: NoteDraft) -> Result<Note> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(MockCall::Create);
        Self::check_available(&state)?;

        let now = Utc::now();
        let note = Note {
            id: Uuid::now_v7(),
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };
        state.notes.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: Uuid, draft: NoteDraft) -> Result<Note> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(MockCall::Update(id));
        Self::check_available(&state)?;

        let slot = state
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NotFound(id))?;
        slot.title = draft.title;
        slot.content = draft.content;
        slot.updated_at = Utc::now();
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(MockCall::Delete(id));
        Self::check_available(&state)?;

        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        if state.notes.len() == before {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}
