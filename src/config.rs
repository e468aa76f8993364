//! Process-wide default configuration.
//!
//! [`setup`] is meant to run once at process start, before any
//! [`Client`](crate::Client) is built from defaults. A field moved off its
//! default keeps its first value; later `setup` calls cannot override it.
//! [`reset`] exists for test isolation.

use std::sync::{LazyLock, Mutex, PoisonError};

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("nexmo v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account-level defaults applied when a [`Client`](crate::Client) is built
/// without explicit credentials.
pub struct Config {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

static DEFAULTS: LazyLock<Mutex<Config>> = LazyLock::new(|| Mutex::new(Config::default()));

/// Apply a one-time mutation to the process-wide defaults.
///
/// First-call-wins, per field: the mutation is only adopted for fields still
/// holding their default value.
pub fn setup(mutator: impl FnOnce(&mut Config)) {
    let mut current = DEFAULTS.lock().unwrap_or_else(PoisonError::into_inner);
    let mut proposed = current.clone();
    mutator(&mut proposed);

    let defaults = Config::default();
    if current.api_key == defaults.api_key {
        current.api_key = proposed.api_key;
    }
    if current.api_secret == defaults.api_secret {
        current.api_secret = proposed.api_secret;
    }
    if current.user_agent == defaults.user_agent {
        current.user_agent = proposed.user_agent;
    }
}

/// Restore the process-wide defaults, discarding anything [`setup`] applied.
pub fn reset() {
    *DEFAULTS.lock().unwrap_or_else(PoisonError::into_inner) = Config::default();
}

/// Snapshot of the current process-wide defaults.
pub fn current() -> Config {
    DEFAULTS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Serializes tests that touch the process-wide defaults.
#[cfg(test)]
pub(crate) static TEST_LOCK: Mutex<()> = Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    fn isolated() -> std::sync::MutexGuard<'static, ()> {
        let guard = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        reset();
        guard
    }

    #[test]
    fn reset_restores_defaults() {
        let _guard = isolated();
        setup(|c| {
            c.api_key = Some("test-api-key".to_owned());
            c.user_agent = "Test1245".to_owned();
        });
        reset();

        let config = current();
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_secret, None);
        assert_eq!(
            config.user_agent,
            format!("nexmo v{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn setup_applies_every_field_on_first_call() {
        let _guard = isolated();
        setup(|c| {
            c.api_key = Some("test-api-key".to_owned());
            c.api_secret = Some("test-api-secret".to_owned());
            c.user_agent = "Test1245".to_owned();
        });

        let config = current();
        assert_eq!(config.api_key.as_deref(), Some("test-api-key"));
        assert_eq!(config.api_secret.as_deref(), Some("test-api-secret"));
        assert_eq!(config.user_agent, "Test1245");
    }

    #[test]
    fn second_setup_cannot_override_set_fields() {
        let _guard = isolated();
        setup(|c| {
            c.api_key = Some("test-api-key".to_owned());
        });
        setup(|c| {
            c.api_key = Some("test-api-key2".to_owned());
        });

        assert_eq!(current().api_key.as_deref(), Some("test-api-key"));
    }

    #[test]
    fn second_setup_still_fills_untouched_fields() {
        let _guard = isolated();
        setup(|c| {
            c.api_key = Some("test-api-key".to_owned());
        });
        setup(|c| {
            c.api_secret = Some("test-api-secret".to_owned());
        });

        let config = current();
        assert_eq!(config.api_key.as_deref(), Some("test-api-key"));
        assert_eq!(config.api_secret.as_deref(), Some("test-api-secret"));
    }
}
