// src/ports/text.rs
use crate::application::{Board, NotesApp, PreferenceStore, Route};
use crate::constants::{APP_TITLE, DEFAULT_MAX_BODY_WIDTH};
use crate::domain::{Note, NoteFilter};
use crate::util::text::{extract_first_line, truncate};
use anyhow::{Context, Result};
use tracing::instrument;

/// Plain-text rendering of the app's current screen.
#[derive(Debug, Clone)]
pub struct TextPresenter {
    max_body_width: usize,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::with_max_body_width(DEFAULT_MAX_BODY_WIDTH)
    }

    pub fn with_max_body_width(max_body_width: usize) -> Self {
        Self { max_body_width }
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render<P: PreferenceStore>(&self, app: &NotesApp<P>) -> String {
        match app.route() {
            Some(Route::Login) => self.render_login(app.login_error()),
            Some(Route::Notes) => self.render_board(&app.board()),
            None => String::new(),
        }
    }

    pub fn render_login(&self, error: Option<&str>) -> String {
        let mut out = String::from(
            "Create an account\n\
             Enter your email address to sign up\n  \
             login <email> --accept   (accepts the terms and conditions)\n",
        );
        if let Some(error) = error {
            out.push_str(&format!("\n! {error}\n"));
        }
        out
    }

    pub fn render_board(&self, board: &Board) -> String {
        let mut out = format!("{APP_TITLE}\n{}\n", render_tabs(board.filter));

        if board.is_empty() {
            out.push_str("\n(nothing here yet)\n");
            return out;
        }
        out.push_str(&self.render_region("Favorites", &board.favorites));
        out.push_str(&self.render_region("Notes", &board.others));
        out
    }

    /// Empty regions are not shown at all
    fn render_region(&self, heading: &str, notes: &[Note]) -> String {
        if notes.is_empty() {
            return String::new();
        }
        let lines: String = notes
            .iter()
            .map(|note| format!("{}\n", self.render_note(note)))
            .collect();
        format!("\n{heading}\n{lines}")
    }

    fn render_note(&self, note: &Note) -> String {
        let star = if note.is_favorite { '★' } else { '☆' };
        let body = truncate(&extract_first_line(&note.body), self.max_body_width);
        format!("  [{}] {} {}", note.id, star, body)
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_tabs(selected: NoteFilter) -> String {
    NoteFilter::ALL
        .iter()
        .map(|f| {
            if *f == selected {
                format!("[{}]", f.label())
            } else {
                format!(" {} ", f.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_board_json(board: &Board) -> Result<String> {
    serde_json::to_string_pretty(board).context("Failed to serialize board to JSON")
}
