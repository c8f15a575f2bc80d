// src/infrastructure/preferences.rs
use crate::application::{PreferenceError, PreferenceStore};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use toml::Value;
use tracing::{debug, info, instrument};

/// Preferences kept as a flat TOML table on disk.
///
/// The file is read once when opened. Writes are staged in memory and
/// flushed by `apply`, which replaces the file through a temp file + rename.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl FilePreferenceStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "Opening preference store");

        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences at {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse preferences at {}", path.display()))?
        } else {
            debug!(?path, "No preferences file yet, starting empty");
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    #[instrument(level = "debug", skip(self))]
    fn write_file(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let content = toml::to_string(&self.values).context("Failed to serialize preferences")?;

        let mut tmp = NamedTempFile::new_in(&dir).context("Failed to create temporary file")?;
        tmp.write_all(content.as_bytes())
            .context("Failed to write temporary preferences file")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        info!(path = ?self.path, "Saved preferences");
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), Value::Boolean(value));
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    fn apply(&mut self) -> Result<(), PreferenceError> {
        self.write_file()
            .map_err(|e| PreferenceError::Write(format!("{:#}", e)))
    }
}
