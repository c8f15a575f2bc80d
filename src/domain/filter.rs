// src/domain/filter.rs
use crate::domain::Note;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three named views over the note collection.
///
/// Views overlap: a note that is both a reminder and hidden shows up under
/// `Reminders` and `Hidden`, and never under `Notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFilter {
    #[default]
    Notes,
    Reminders,
    Hidden,
}

impl NoteFilter {
    /// Display order of the filter tabs
    pub const ALL: [NoteFilter; 3] = [NoteFilter::Notes, NoteFilter::Reminders, NoteFilter::Hidden];

    pub fn matches(self, note: &Note) -> bool {
        match self {
            NoteFilter::Notes => !note.is_hidden && !note.is_reminder,
            NoteFilter::Reminders => note.is_reminder,
            NoteFilter::Hidden => note.is_hidden,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoteFilter::Notes => "Notes",
            NoteFilter::Reminders => "Reminders",
            NoteFilter::Hidden => "Hidden",
        }
    }
}

impl fmt::Display for NoteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown filter '{0}' (expected notes, reminders or hidden)")]
pub struct UnknownFilter(pub String);

impl FromStr for NoteFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notes" => Ok(NoteFilter::Notes),
            "reminders" => Ok(NoteFilter::Reminders),
            "hidden" => Ok(NoteFilter::Hidden),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

/// Split notes into favorites and the rest, keeping relative order in both.
pub fn partition_favorites<I>(notes: I) -> (Vec<Note>, Vec<Note>)
where
    I: IntoIterator<Item = Note>,
{
    notes.into_iter().partition(|note| note.is_favorite)
}
