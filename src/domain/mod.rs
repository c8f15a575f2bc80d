// src/domain/mod.rs
pub mod error;
pub mod filter;
pub mod note;
pub mod session;

pub use error::DomainError;
pub use filter::{partition_favorites, NoteFilter, UnknownFilter};
pub use note::{Note, NoteDraft, NoteId};
pub use session::{validate_login, Session};
