//! # quicknotes-store
//!
//! Note persistence backends for quicknotes: a local file-backed store and
//! a remote HTTP-backed store behind the shared [`NoteStore`] contract,
//! plus the configuration that selects between them at startup.
//!
//! [`NoteStore`]: quicknotes_core::NoteStore

pub mod config;
pub mod local;
#[cfg(feature = "mock")]
pub mod mock;
pub mod remote;

pub use config::StoreConfig;
pub use local::LocalNoteStore;
pub use remote::RemoteNoteStore;
