// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// File name of the persisted preference store inside the config directory.
///
/// Used in: `infrastructure/config.rs`
pub const PREFS_FILE_NAME: &str = "notitas_prefs.toml";

/// File name of the optional application config inside the config directory.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Characters of a note body shown per line in the notes screen before
/// truncating with an ellipsis.
///
/// Used in: `infrastructure/config.rs`, `ports/text.rs`
pub const DEFAULT_MAX_BODY_WIDTH: usize = 40;

/// Title shown at the top of the notes screen.
///
/// Used in: `ports/text.rs`
pub const APP_TITLE: &str = "Notitas";
