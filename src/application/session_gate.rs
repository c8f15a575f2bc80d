// src/application/session_gate.rs
use crate::application::preferences::{PreferenceStore, KEY_LOGGED_IN, KEY_USER_EMAIL};
use crate::domain::{validate_login, DomainError, Session};
use tracing::{info, instrument, warn};

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub email: String,
    /// False when the session could not be written and will be gone on
    /// the next start
    pub persisted: bool,
}

/// One-way gate in front of the notes screen: `LoggedOut` -> `LoggedIn`.
/// There is no logout.
pub struct SessionGate<P: PreferenceStore> {
    preferences: P,
}

impl<P: PreferenceStore> SessionGate<P> {
    pub fn new(preferences: P) -> Self {
        Self { preferences }
    }

    pub fn validate(&self, email: &str, accepted_terms: bool) -> Result<(), DomainError> {
        validate_login(email, accepted_terms)
    }

    /// Validate and, on success, persist the session.
    ///
    /// The preference write is fire-and-forget: a failure is logged and the
    /// login still succeeds for the running process.
    #[instrument(level = "debug", skip(self))]
    pub fn login(&mut self, email: &str, accepted_terms: bool) -> Result<LoginOutcome, DomainError> {
        self.validate(email, accepted_terms)?;

        self.preferences.put_bool(KEY_LOGGED_IN, true);
        self.preferences.put_string(KEY_USER_EMAIL, email);
        let persisted = match self.preferences.apply() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Could not persist session");
                false
            }
        };

        info!(email, persisted, "Logged in");
        Ok(LoginOutcome {
            email: email.to_string(),
            persisted,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.preferences.get_bool(KEY_LOGGED_IN).unwrap_or(false)
    }

    pub fn user_email(&self) -> Option<String> {
        self.preferences.get_string(KEY_USER_EMAIL)
    }

    pub fn session(&self) -> Session {
        if !self.is_logged_in() {
            return Session::LoggedOut;
        }
        Session::LoggedIn {
            email: self.user_email().unwrap_or_default(),
        }
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockPreferenceStore;

    #[test]
    fn given_fresh_store_when_checking_then_is_logged_out() {
        let gate = SessionGate::new(MockPreferenceStore::builder().build());

        assert!(!gate.is_logged_in());
        assert_eq!(gate.session(), Session::LoggedOut);
    }

    #[test]
    fn given_valid_input_when_logging_in_then_persists_flag_and_email() {
        // Arrange
        let mut gate = SessionGate::new(MockPreferenceStore::builder().build());

        // Act
        let outcome = gate.login("ana@example.com", true).expect("Login should succeed");

        // Assert
        assert!(outcome.persisted);
        assert_eq!(outcome.email, "ana@example.com");
        assert!(gate.is_logged_in());
        assert_eq!(gate.user_email().as_deref(), Some("ana@example.com"));
        assert_eq!(gate.preferences().apply_count(), 1);
    }

    #[test]
    fn given_terms_not_accepted_when_logging_in_then_nothing_is_persisted() {
        let mut gate = SessionGate::new(MockPreferenceStore::builder().build());

        let result = gate.login("ana@example.com", false);

        assert_eq!(result, Err(DomainError::TermsNotAccepted));
        assert!(!gate.is_logged_in());
        assert_eq!(gate.preferences().apply_count(), 0);
    }

    #[test]
    fn given_invalid_email_when_logging_in_then_returns_invalid_email() {
        let mut gate = SessionGate::new(MockPreferenceStore::builder().build());

        let result = gate.login("not-an-email", true);

        assert_eq!(result, Err(DomainError::InvalidEmail));
        assert!(gate.user_email().is_none());
    }

    #[test]
    fn given_failing_writes_when_logging_in_then_succeeds_but_reports_not_persisted() {
        let mut gate = SessionGate::new(MockPreferenceStore::builder().with_failing_apply().build());

        let outcome = gate.login("ana@example.com", true).expect("Login should succeed");

        assert!(!outcome.persisted);
        assert_eq!(gate.preferences().apply_count(), 0);
    }

    #[test]
    fn given_persisted_session_when_checking_then_reports_logged_in() {
        let prefs = MockPreferenceStore::builder()
            .with_bool(KEY_LOGGED_IN, true)
            .with_string(KEY_USER_EMAIL, "old@example.com")
            .build();
        let gate = SessionGate::new(prefs);

        assert_eq!(
            gate.session(),
            Session::LoggedIn {
                email: "old@example.com".to_string()
            }
        );
    }
}
