// src/domain/session.rs
use crate::domain::DomainError;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Full-string match, same shape as Android's Patterns.EMAIL_ADDRESS
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    LoggedOut,
    LoggedIn { email: String },
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && EMAIL_RE.is_match(email)
}

/// Check the login form. Terms are checked before the address.
pub fn validate_login(email: &str, accepted_terms: bool) -> Result<(), DomainError> {
    if !accepted_terms {
        return Err(DomainError::TermsNotAccepted);
    }
    if !is_valid_email(email) {
        return Err(DomainError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_empty_email_when_validating_then_returns_invalid_email() {
        assert_eq!(validate_login("", true), Err(DomainError::InvalidEmail));
    }

    #[test]
    fn given_terms_not_accepted_when_validating_then_returns_terms_error() {
        assert_eq!(validate_login("a@b.com", false), Err(DomainError::TermsNotAccepted));
    }

    #[test]
    fn given_bad_email_and_no_terms_when_validating_then_terms_error_wins() {
        assert_eq!(validate_login("nope", false), Err(DomainError::TermsNotAccepted));
    }

    #[test]
    fn given_valid_input_when_validating_then_succeeds() {
        assert_eq!(validate_login("a@b.com", true), Ok(()));
    }

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@mail.example.org")]
    #[case("x_y%z-1@sub-domain.co")]
    fn given_well_formed_address_when_checking_then_accepts(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("   ")]
    #[case("plainaddress")]
    #[case("user@localhost")]
    #[case("user @example.com")]
    #[case("user@example.com ")]
    #[case("@example.com")]
    #[case("user@.com")]
    #[case("user@example.")]
    fn given_malformed_address_when_checking_then_rejects(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }
}
