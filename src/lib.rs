// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{Effect, NotesApp, PreferenceStore, SessionGate};
use infrastructure::config::default_config_path;
use infrastructure::{Config, FilePreferenceStore};
use ports::command::{self, Command, HELP};
use ports::{render_board_json, TextPresenter};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use crate::cli::args::{Args, Command as CliCommand};

pub fn run(args: Args) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(args, stdin.lock(), stdout.lock())
}

/// Execute `args`, reading shell input from `input` and writing everything
/// meant for stdout to `output`.
pub fn run_with_io<R, W>(args: Args, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    debug!(?args, "Starting notitas with arguments");

    match args.command {
        CliCommand::Init { force } => {
            let path = init_config(args.config, force)?;
            writeln!(output, "Wrote default config to {}", path.display())?;
        }
        CliCommand::Login { email, accept_terms } => {
            let config = Config::load_or_default(args.config.as_deref())?;
            let (prefs_path, preferences) = open_preferences(&config, args.prefs)?;
            let mut gate = SessionGate::new(preferences);
            let outcome = gate.login(&email, accept_terms)?;
            writeln!(output, "Logged in as {}", outcome.email)?;
            if !outcome.persisted {
                eprintln!(
                    "warning: session could not be saved to {}; you will need to log in again",
                    prefs_path.display()
                );
            }
        }
        CliCommand::Status { json } => {
            let config = Config::load_or_default(args.config.as_deref())?;
            let (_, preferences) = open_preferences(&config, args.prefs)?;
            let session = SessionGate::new(preferences).session();
            if json {
                writeln!(output, "{}", serde_json::to_string_pretty(&session)?)?;
            } else {
                match session {
                    domain::Session::LoggedIn { email } => writeln!(output, "Logged in as {}", email)?,
                    domain::Session::LoggedOut => writeln!(output, "Not logged in")?,
                }
            }
        }
        CliCommand::Shell => {
            let config = Config::load_or_default(args.config.as_deref())?;
            let (_, preferences) = open_preferences(&config, args.prefs)?;
            let app = NotesApp::new(preferences, config.display.default_filter);
            let presenter = TextPresenter::with_max_body_width(config.display.max_body_width);
            run_shell(app, &presenter, input, output)?;
        }
    }

    Ok(())
}

fn open_preferences(config: &Config, prefs: Option<PathBuf>) -> Result<(PathBuf, FilePreferenceStore)> {
    let prefs_path = match prefs {
        Some(path) => {
            debug!(?path, "Using provided preferences path");
            path
        }
        None => config.preferences_path()?,
    };
    let preferences = FilePreferenceStore::open(&prefs_path)?;
    Ok((prefs_path, preferences))
}

/// Write a default config to `path` or the default location. Refuses to
/// overwrite unless `force` is set.
fn init_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => default_config_path().context("Could not find config directory")?,
    };
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Config::create_default(&path)?;
    info!(?path, "Wrote default config");
    Ok(path)
}

/// Read commands line by line, feed them to the app and print the screen
/// after every change. Returns when the input ends, on `quit`, or when
/// back-navigation leaves the first screen.
pub fn run_shell<P, R, W>(
    mut app: NotesApp<P>,
    presenter: &TextPresenter,
    input: R,
    mut output: W,
) -> Result<()>
where
    P: PreferenceStore,
    R: BufRead,
    W: Write,
{
    info!("Shell session started");
    write!(output, "{}", presenter.render(&app)).context("Failed to write output")?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let cmd = match command::parse(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!(%line, error = %e, "Rejected command");
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        match cmd {
            Command::Empty => continue,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
            Command::Show { json: true } => {
                writeln!(output, "{}", render_board_json(&app.board())?)?
            }
            Command::Show { json: false } => write!(output, "{}", presenter.render(&app))?,
            Command::Intent(intent) => match app.dispatch(intent) {
                Effect::Rerender => write!(output, "{}", presenter.render(&app))?,
                Effect::Exit => break,
            },
        }
    }

    info!(notes = app.store().len(), "Shell session ended, discarding notes");
    output.flush().context("Failed to flush output")?;
    Ok(())
}
