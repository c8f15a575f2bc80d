// src/application/preferences.rs
use thiserror::Error;

pub const KEY_LOGGED_IN: &str = "logged_in";
pub const KEY_USER_EMAIL: &str = "user_email";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Failed to write preferences: {0}")]
    Write(String),
}

/// Key-value store that survives process restarts.
///
/// `put_*` calls are staged and only become durable on `apply`.
pub trait PreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool>;

    fn get_string(&self, key: &str) -> Option<String>;

    fn put_bool(&mut self, key: &str, value: bool);

    fn put_string(&mut self, key: &str, value: &str);

    fn apply(&mut self) -> Result<(), PreferenceError>;
}
