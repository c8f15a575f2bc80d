// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle assigned by the note store when a note is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub body: String,
    pub is_favorite: bool,
    pub is_hidden: bool,
    pub is_reminder: bool,
}

/// Contents of the edit dialog at the moment the user hits save.
///
/// The favorite flag is not part of the dialog: new notes start as
/// non-favorites and edits keep whatever the note already had.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub body: String,
    pub is_hidden: bool,
    pub is_reminder: bool,
}

impl NoteDraft {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn reminder(mut self, is_reminder: bool) -> Self {
        self.is_reminder = is_reminder;
        self
    }

    pub fn hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    /// Build the note this draft produces, keeping `is_favorite` from the
    /// note being edited.
    pub fn into_note(self, id: NoteId, is_favorite: bool) -> Note {
        Note {
            id,
            body: self.body,
            is_favorite,
            is_hidden: self.is_hidden,
            is_reminder: self.is_reminder,
        }
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            body: note.body.clone(),
            is_hidden: note.is_hidden,
            is_reminder: note.is_reminder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_draft_when_converting_then_keeps_given_favorite_flag() {
        let draft = NoteDraft::new("milk").reminder(true);

        let note = draft.into_note(NoteId(7), true);

        assert_eq!(note.id, NoteId(7));
        assert_eq!(note.body, "milk");
        assert!(note.is_favorite);
        assert!(note.is_reminder);
        assert!(!note.is_hidden);
    }

    #[test]
    fn given_note_when_taking_draft_then_drops_identity_and_favorite() {
        let note = Note {
            id: NoteId(3),
            body: "secret".to_string(),
            is_favorite: true,
            is_hidden: true,
            is_reminder: false,
        };

        let draft = NoteDraft::from(&note);

        assert_eq!(draft, NoteDraft::new("secret").hidden(true));
    }
}
