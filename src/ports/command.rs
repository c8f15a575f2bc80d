// src/ports/command.rs
use crate::application::Intent;
use crate::domain::{NoteDraft, NoteFilter, NoteId, UnknownFilter};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  login <email> [--accept]                 sign in (terms must be accepted)
  add <text> [--reminder] [--hidden]       create a note
  edit <id> <text> [--reminder] [--hidden] replace a note's text and flags
  fav <id>                                 toggle favorite
  rm <id>                                  delete a note
  filter <notes|reminders|hidden>          switch view
  show [--json]                            print the current screen
  back                                     go back (exits from the first screen)
  help                                     this text
  quit                                     leave; notes are discarded";

/// One line typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Show { json: bool },
    Help,
    Quit,
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}', type 'help'")]
    UnknownCommand(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid note id '{0}'")]
    InvalidId(String),
    #[error("Unknown flag '{0}'")]
    UnknownFlag(String),
    #[error(transparent)]
    Filter(#[from] UnknownFilter),
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "" => Ok(Command::Empty),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "back" => Ok(Command::Intent(Intent::Back)),
        "show" => {
            let (_, flags) = split_flags(rest);
            let json = check_flags(&flags, &["--json"])?.contains(&"--json");
            Ok(Command::Show { json })
        }
        "login" => {
            let (words, flags) = split_flags(rest);
            let accepted_terms = check_flags(&flags, &["--accept"])?.contains(&"--accept");
            let email = words.first().copied().unwrap_or_default().to_string();
            Ok(Command::Intent(Intent::SubmitLogin { email, accepted_terms }))
        }
        "add" => {
            let draft = parse_draft(rest)?;
            Ok(Command::Intent(Intent::Save { target: None, draft }))
        }
        "edit" => {
            let (id, rest) = take_id(rest)?;
            let draft = parse_draft(rest)?;
            Ok(Command::Intent(Intent::Save {
                target: Some(id),
                draft,
            }))
        }
        "fav" => Ok(Command::Intent(Intent::ToggleFavorite(take_id(rest)?.0))),
        "rm" | "delete" => Ok(Command::Intent(Intent::Delete(take_id(rest)?.0))),
        "filter" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("filter name"));
            }
            let filter: NoteFilter = rest.parse()?;
            Ok(Command::Intent(Intent::SelectFilter(filter)))
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Note text may be empty, same as saving an empty dialog.
fn parse_draft(rest: &str) -> Result<NoteDraft, ParseError> {
    let (words, flags) = split_flags(rest);
    let flags = check_flags(&flags, &["--reminder", "--hidden"])?;
    Ok(NoteDraft::new(words.join(" "))
        .reminder(flags.contains(&"--reminder"))
        .hidden(flags.contains(&"--hidden")))
}

fn take_id(rest: &str) -> Result<(NoteId, &str), ParseError> {
    let (raw, rest) = match rest.split_once(char::is_whitespace) {
        Some((raw, rest)) => (raw, rest.trim()),
        None => (rest, ""),
    };
    if raw.is_empty() {
        return Err(ParseError::MissingArgument("note id"));
    }
    let id = raw
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))?;
    Ok((NoteId(id), rest))
}

fn split_flags(rest: &str) -> (Vec<&str>, Vec<&str>) {
    rest.split_whitespace().partition(|w| !w.starts_with("--"))
}

fn check_flags<'a>(flags: &[&'a str], allowed: &[&str]) -> Result<Vec<&'a str>, ParseError> {
    match flags.iter().find(|f| !allowed.contains(*f)) {
        Some(bad) => Err(ParseError::UnknownFlag(bad.to_string())),
        None => Ok(flags.to_vec()),
    }
}
