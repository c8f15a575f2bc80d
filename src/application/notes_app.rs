// src/application/notes_app.rs
use crate::application::navigator::{Navigator, Route};
use crate::application::note_store::{Board, NoteStore};
use crate::application::preferences::PreferenceStore;
use crate::application::session_gate::SessionGate;
use crate::domain::{NoteDraft, NoteFilter, NoteId};
use tracing::{debug, info};

/// A user action coming from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitLogin { email: String, accepted_terms: bool },
    /// Edit dialog confirm; `target` is `None` for a new note
    Save { target: Option<NoteId>, draft: NoteDraft },
    Delete(NoteId),
    ToggleFavorite(NoteId),
    SelectFilter(NoteFilter),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Rerender,
    Exit,
}

/// Screen state for one app session: navigation, the note collection and
/// the login form's inline error. Notes are dropped with the app.
pub struct NotesApp<P: PreferenceStore> {
    gate: SessionGate<P>,
    navigator: Navigator,
    store: NoteStore,
    filter: NoteFilter,
    login_error: Option<String>,
}

impl<P: PreferenceStore> NotesApp<P> {
    /// The persisted login flag is read here and nowhere else.
    pub fn new(preferences: P, default_filter: NoteFilter) -> Self {
        let gate = SessionGate::new(preferences);
        let start = if gate.is_logged_in() {
            Route::Notes
        } else {
            Route::Login
        };
        info!(?start, "Starting app");

        Self {
            gate,
            navigator: Navigator::start(start),
            store: NoteStore::new(),
            filter: default_filter,
            login_error: None,
        }
    }

    pub fn route(&self) -> Option<Route> {
        self.navigator.current()
    }

    pub fn filter(&self) -> NoteFilter {
        self.filter
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn gate(&self) -> &SessionGate<P> {
        &self.gate
    }

    pub fn board(&self) -> Board {
        self.store.board(self.filter)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Effect {
        debug!(?intent, route = ?self.route(), "Dispatching intent");

        match (self.route(), intent) {
            (_, Intent::Back) => match self.navigator.back() {
                Some(_) => Effect::Rerender,
                None => Effect::Exit,
            },
            (Some(Route::Login), Intent::SubmitLogin { email, accepted_terms }) => {
                self.login_error = None;
                // Login must not be reachable by going back
                match self.gate.login(&email, accepted_terms) {
                    Ok(_) => self.navigator.navigate_clearing(Route::Notes),
                    Err(e) => self.login_error = Some(e.to_string()),
                }
                Effect::Rerender
            }
            (Some(Route::Notes), Intent::Save { target, draft }) => {
                self.store.save(target, draft);
                Effect::Rerender
            }
            (Some(Route::Notes), Intent::Delete(id)) => {
                self.store.remove(id);
                Effect::Rerender
            }
            (Some(Route::Notes), Intent::ToggleFavorite(id)) => {
                self.store.toggle_favorite(id);
                Effect::Rerender
            }
            (Some(Route::Notes), Intent::SelectFilter(filter)) => {
                self.filter = filter;
                Effect::Rerender
            }
            (route, intent) => {
                debug!(?route, ?intent, "Intent not available on this screen, ignoring");
                Effect::Rerender
            }
        }
    }
}
