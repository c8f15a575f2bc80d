// src/domain/error.rs
use thiserror::Error;

/// Login validation failures. Both are shown inline on the login screen
/// and the user corrects the input; neither is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}
