//! # quicknotes-session
//!
//! The session-scoped note controller: owns the authoritative in-memory
//! note list and mediates every mutation through an injected `NoteStore`.

pub mod controller;

pub use controller::NoteController;
