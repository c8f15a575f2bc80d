// src/infrastructure/config.rs
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_MAX_BODY_WIDTH, PREFS_FILE_NAME};
use crate::domain::NoteFilter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for notitas
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct PreferencesConfig {
    /// Empty means the platform config directory
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_filter: NoteFilter,
    #[serde(default = "default_max_body_width")]
    pub max_body_width: usize,
}

fn default_max_body_width() -> usize { DEFAULT_MAX_BODY_WIDTH }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_filter: NoteFilter::default(),
            max_body_width: default_max_body_width(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()));
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(&path)
            }
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Write the default configuration to `path` and return it
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Where the preference file lives: the configured path, or the platform
    /// config directory.
    pub fn preferences_path(&self) -> Result<PathBuf> {
        if !self.preferences.path.is_empty() {
            return Ok(PathBuf::from(&self.preferences.path));
        }
        let dir = default_config_dir().context("Could not find config directory")?;
        Ok(dir.join(PREFS_FILE_NAME))
    }
}

pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("notitas"))
}

pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|d| d.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_config_when_saving_then_writes_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let config = Config::default();
        config.save(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[preferences]"));
        assert!(content.contains("[display]"));
        assert!(content.contains(r#"default_filter = "notes""#));
    }

    #[test]
    fn given_no_file_when_creating_default_then_writes_loadable_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let created = Config::create_default(&config_path).unwrap();

        assert_eq!(created, Config::default());
        assert_eq!(Config::load(&config_path).unwrap(), created);
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[preferences]
path = "/tmp/custom_prefs.toml"

[display]
default_filter = "reminders"
max_body_width = 20
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.preferences.path, "/tmp/custom_prefs.toml");
        assert_eq!(config.display.default_filter, NoteFilter::Reminders);
        assert_eq!(config.display.max_body_width, 20);
        assert_eq!(
            config.preferences_path().unwrap(),
            PathBuf::from("/tmp/custom_prefs.toml")
        );
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[display]\ndefault_filter = \"hidden\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.display.default_filter, NoteFilter::Hidden);
        assert_eq!(config.display.max_body_width, DEFAULT_MAX_BODY_WIDTH);
        assert_eq!(config.preferences.path, "");
    }

    #[test]
    fn given_unknown_filter_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[display]\ndefault_filter = \"archived\"\n").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn given_nonexistent_explicit_file_when_loading_then_returns_error() {
        let result = Config::load_or_default(Some(Path::new("/nonexistent/path/config.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn given_round_trip_when_saving_and_loading_then_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");
        let original = Config {
            preferences: PreferencesConfig {
                path: "/x/prefs.toml".to_string(),
            },
            display: DisplayConfig {
                default_filter: NoteFilter::Hidden,
                max_body_width: 12,
            },
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded, original);
    }
}
