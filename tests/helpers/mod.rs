use anyhow::{Context, Result};
use clap::Parser;
use notitas::application::NotesApp;
use notitas::cli::args::Args;
use notitas::domain::NoteFilter;
use notitas::infrastructure::{Config, FilePreferenceStore};
use notitas::ports::TextPresenter;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture owning a preference file in a temporary directory
#[allow(dead_code)]
pub struct TestPrefs {
    _temp_dir: TempDir,
    pub prefs_path: PathBuf,
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestPrefs {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let prefs_path = temp_dir.path().join("notitas_prefs.toml");
        let config_path = temp_dir.path().join("config.toml");
        Config::create_default(&config_path)?;

        Ok(Self {
            _temp_dir: temp_dir,
            prefs_path,
            config_path,
        })
    }

    /// Open a fresh handle, like a new process would
    pub fn open(&self) -> Result<FilePreferenceStore> {
        FilePreferenceStore::open(&self.prefs_path)
    }

    /// Run a shell session over `script` and return everything it printed
    pub fn run_script(&self, script: &str) -> Result<String> {
        let app = NotesApp::new(self.open()?, NoteFilter::Notes);
        let mut output = Vec::new();
        notitas::run_shell(app, &TextPresenter::new(), script.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    /// Run the CLI with `args` against this fixture's config and preference
    /// file and return what it printed to stdout
    pub fn run_cli(&self, args: &[&str]) -> Result<String> {
        let mut argv = vec![
            "notitas".to_string(),
            "--config".to_string(),
            self.config_path.display().to_string(),
            "--prefs".to_string(),
            self.prefs_path.display().to_string(),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));
        let args = Args::try_parse_from(argv)?;

        let mut output = Vec::new();
        notitas::run_with_io(args, "".as_bytes(), &mut output)?;
        Ok(String::from_utf8(output)?)
    }
}
