//! API credential resolution.
//!
//! The key is resolved once at startup and wrapped in a `SecretString` so it
//! never shows up in `Debug` output or logs.

use crate::error::ConfigError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// A non-empty API key.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Resolve a configured key (plain value or `${ENV_VAR}` template) against
    /// the process environment.
    pub fn resolve(configured: &str) -> Result<Self, ConfigError> {
        Self::resolve_with(configured, |var| std::env::var(var).ok())
    }

    /// Resolve using a custom variable lookup.
    pub fn resolve_with<F>(configured: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let template = template_var(configured);
        if template.is_some_and(|name| name.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "gemini.api_key template `{configured}` names no variable (expected ${{{API_KEY_ENV}}})"
            )));
        }

        let var = template.unwrap_or(API_KEY_ENV);
        let value = match template {
            Some(name) => lookup(name),
            None => Some(configured.to_string()),
        };

        match value {
            Some(v) if !v.trim().is_empty() => Ok(Self(SecretString::new(v.trim().to_string()))),
            _ => Err(ConfigError::MissingCredential {
                var: var.to_string(),
            }),
        }
    }

    /// Borrow the raw key for an outbound request header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Extract `NAME` from a `${NAME}` template.
fn template_var(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_passes_through() {
        let cred = Credential::resolve_with("plain-key", |_| None).unwrap();
        assert_eq!(cred.expose(), "plain-key");
    }

    #[test]
    fn test_empty_template_name_is_rejected() {
        let err = Credential::resolve_with("${}", |_| Some("unused".to_string())).unwrap_err();
        match err {
            ConfigError::ValidationError(message) => {
                assert!(message.contains("names no variable"));
                assert!(message.contains(API_KEY_ENV));
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_template_resolves_from_lookup() {
        let cred = Credential::resolve_with("${MY_KEY}", |var| {
            (var == "MY_KEY").then(|| "from-env".to_string())
        })
        .unwrap();
        assert_eq!(cred.expose(), "from-env");
    }

    #[test]
    fn test_unset_template_is_missing() {
        let err = Credential::resolve("${DEFINITELY_NOT_SET_MEDVISION_123}").unwrap_err();
        match err {
            ConfigError::MissingCredential { var } => {
                assert_eq!(var, "DEFINITELY_NOT_SET_MEDVISION_123")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_values_are_missing() {
        assert!(Credential::resolve_with("", |_| None).is_err());
        assert!(Credential::resolve_with("${K}", |_| Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_empty_plain_value_names_default_var() {
        let err = Credential::resolve_with("", |_| None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::resolve_with("super-secret", |_| None).unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
