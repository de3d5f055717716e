//! Core traits for quicknotes abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Note, NoteDraft};

/// Uniform CRUD contract over the note backing store.
///
/// Implementations persist either to an embedded local file or to a remote
/// HTTP service; the backend is selected once at construction and callers
/// hold a `dyn NoteStore` without knowing which one they got. No
/// implementation retries internally; retry policy belongs to the caller.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All persisted notes, in storage order.
    ///
    /// Fails with `Unavailable` when the backend cannot be reached or its
    /// payload cannot be read.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Assign identity and timestamps, persist the record, and return the
    /// canonical note. `created_at` equals `updated_at` at creation.
    async fn create(&self, draft: NoteDraft) -> Result<Note>;

    /// Merge the draft fields into the existing record, refresh
    /// `updated_at`, persist, and return the canonical updated note.
    /// Fails with `NotFound` when the id is absent.
    async fn update(&self, id: Uuid, draft: NoteDraft) -> Result<Note>;

    /// Remove the record by id, persisting the removal.
    /// Fails with `NotFound` when the id is absent.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
