// src/application/mod.rs
pub mod navigator;
pub mod note_store;
pub mod notes_app;
pub mod preferences;
pub mod session_gate;

pub use navigator::{Navigator, Route};
pub use note_store::{Board, NoteStore};
pub use notes_app::{Effect, Intent, NotesApp};
pub use preferences::{PreferenceError, PreferenceStore};
pub use session_gate::{LoginOutcome, SessionGate};
