// src/application/note_store.rs
use crate::domain::{partition_favorites, Note, NoteDraft, NoteFilter, NoteId};
use serde::Serialize;
use tracing::{debug, instrument};

/// One filtered view split into its two display regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    pub filter: NoteFilter,
    pub favorites: Vec<Note>,
    pub others: Vec<Note>,
}

impl Board {
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.others.is_empty()
    }
}

/// Ordered, in-memory note collection.
///
/// Lookups go through the `NoteId` handed out by `add`, so two notes with
/// the same text stay distinguishable. Missing ids are silently ignored;
/// mutators report whether anything changed.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new non-favorite note built from `draft`.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, draft: NoteDraft) -> NoteId {
        self.next_id += 1;
        let id = NoteId(self.next_id);
        self.notes.push(draft.into_note(id, false));
        debug!(%id, total = self.notes.len(), "Added note");
        id
    }

    /// Replace the note in place, keeping its position and favorite flag.
    #[instrument(level = "debug", skip(self))]
    pub fn replace(&mut self, id: NoteId, draft: NoteDraft) -> bool {
        match self.position(id) {
            Some(index) => {
                let is_favorite = self.notes[index].is_favorite;
                self.notes[index] = draft.into_note(id, is_favorite);
                true
            }
            None => {
                debug!(%id, "Replace target not found, ignoring");
                false
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: NoteId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => {
                debug!(%id, "Remove target not found, ignoring");
                false
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn toggle_favorite(&mut self, id: NoteId) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.is_favorite = !note.is_favorite;
                true
            }
            None => {
                debug!(%id, "Favorite target not found, ignoring");
                false
            }
        }
    }

    /// Edit dialog confirm: a new note when `target` is `None`, otherwise an
    /// in-place replacement. Returns the id the draft ended up under, or
    /// `None` if the edited note no longer exists.
    pub fn save(&mut self, target: Option<NoteId>, draft: NoteDraft) -> Option<NoteId> {
        match target {
            None => Some(self.add(draft)),
            Some(id) => self.replace(id, draft).then_some(id),
        }
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn filter(&self, filter: NoteFilter) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect()
    }

    pub fn board(&self, filter: NoteFilter) -> Board {
        let (favorites, others) = partition_favorites(self.filter(filter));
        Board {
            filter,
            favorites,
            others,
        }
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}
