// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{PreferenceError, PreferenceStore};

#[derive(Debug, Clone, PartialEq)]
enum PrefValue {
    Bool(bool),
    Text(String),
}

/// In-memory preference store for tests of code that depends on
/// PreferenceStore
///
/// # Examples
///
/// ```
/// use notitas::application::PreferenceStore;
/// use notitas::util::testing::MockPreferenceStore;
///
/// let prefs = MockPreferenceStore::builder()
///     .with_bool("logged_in", true)
///     .with_string("user_email", "ana@example.com")
///     .build();
/// assert_eq!(prefs.get_bool("logged_in"), Some(true));
/// ```
#[derive(Debug)]
pub struct MockPreferenceStore {
    values: HashMap<String, PrefValue>,
    fail_apply: bool,
    apply_count: usize,
}

impl MockPreferenceStore {
    pub fn builder() -> MockPreferenceStoreBuilder {
        MockPreferenceStoreBuilder::new()
    }

    /// Number of successful `apply` calls
    pub fn apply_count(&self) -> usize {
        self.apply_count
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(PrefValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), PrefValue::Bool(value));
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), PrefValue::Text(value.to_string()));
    }

    fn apply(&mut self) -> Result<(), PreferenceError> {
        if self.fail_apply {
            return Err(PreferenceError::Write("disk full".to_string()));
        }
        self.apply_count += 1;
        Ok(())
    }
}

/// Builder for MockPreferenceStore
pub struct MockPreferenceStoreBuilder {
    values: HashMap<String, PrefValue>,
    fail_apply: bool,
}

impl MockPreferenceStoreBuilder {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            fail_apply: false,
        }
    }

    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_string(), PrefValue::Bool(value));
        self
    }

    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.values
            .insert(key.to_string(), PrefValue::Text(value.to_string()));
        self
    }

    /// Make every `apply` fail
    pub fn with_failing_apply(mut self) -> Self {
        self.fail_apply = true;
        self
    }

    pub fn build(self) -> MockPreferenceStore {
        MockPreferenceStore {
            values: self.values,
            fail_apply: self.fail_apply,
            apply_count: 0,
        }
    }
}

impl Default for MockPreferenceStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
