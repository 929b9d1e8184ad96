//! Connection settings for the remote city document.
//!
//! The shell resolves these at start-up (bundled config, remote config,
//! keystore...) and hands them to the core with `Event::AppStarted`. Nothing
//! here is compiled into the binary.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::capabilities::ValidatedUrl;
use crate::error::ConfigError;

#[derive(Deserialize)]
pub struct StoreConfig {
    endpoint: ValidatedUrl,
    access_key: SecretString,
}

impl StoreConfig {
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = ValidatedUrl::new(endpoint)?;
        let access_key: String = access_key.into();
        if access_key.trim().is_empty() {
            return Err(ConfigError::EmptyAccessKey);
        }

        Ok(Self {
            endpoint,
            access_key: SecretString::new(access_key),
        })
    }

    /// Parses `{"endpoint": "...", "access_key": "..."}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.access_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::EmptyAccessKey);
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> &ValidatedUrl {
        &self.endpoint
    }

    pub fn access_key(&self) -> &str {
        self.access_key.expose_secret()
    }
}

impl Clone for StoreConfig {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            access_key: SecretString::new(self.access_key.expose_secret().clone()),
        }
    }
}

// Redact the key; the endpoint is not sensitive.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("access_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://api.jsonbin.io/v3/b/6779d9e0acd3cb34a8c43e88";

    #[test]
    fn test_new_valid() {
        let config = StoreConfig::new(ENDPOINT, "secret-key").unwrap();
        assert_eq!(config.endpoint().as_str(), ENDPOINT);
        assert_eq!(config.access_key(), "secret-key");
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert_eq!(
            StoreConfig::new(ENDPOINT, "  ").unwrap_err(),
            ConfigError::EmptyAccessKey
        );
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        assert!(matches!(
            StoreConfig::new("jsonbin", "k"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = format!(r#"{{"endpoint": "{ENDPOINT}", "access_key": "abc"}}"#);
        let config = StoreConfig::from_json(&json).unwrap();
        assert_eq!(config.endpoint().host(), "api.jsonbin.io");
        assert_eq!(config.access_key(), "abc");
    }

    #[test]
    fn test_from_json_rejects_missing_key() {
        let json = format!(r#"{{"endpoint": "{ENDPOINT}"}}"#);
        assert!(matches!(
            StoreConfig::from_json(&json),
            Err(ConfigError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_key() {
        let json = format!(r#"{{"endpoint": "{ENDPOINT}", "access_key": ""}}"#);
        assert_eq!(
            StoreConfig::from_json(&json).unwrap_err(),
            ConfigError::EmptyAccessKey
        );
    }

    #[test]
    fn test_from_json_rejects_bad_url() {
        let json = r#"{"endpoint": "ftp://example.com", "access_key": "abc"}"#;
        assert!(StoreConfig::from_json(json).is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = StoreConfig::new(ENDPOINT, "super-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
