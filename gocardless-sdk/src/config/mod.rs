//! Configuration types for the GoCardless client.
//!
//! The config is plain data: an access token, the base URL picked from an
//! [`Environment`], and the fixed API version. It is immutable once built,
//! so a single client can be shared freely across tasks.

mod environment;

pub use environment::{Environment, LIVE_BASE_URL, SANDBOX_BASE_URL};

use std::fmt;

use thiserror::Error;
use url::Url;

/// API version sent in the `GoCardless-Version` header of every request.
pub const API_VERSION: &str = "2015-07-06";

/// Environment variable holding the bearer token.
pub const ACCESS_TOKEN_VAR: &str = "GOCARDLESS_ACCESS_TOKEN";

/// Environment variable selecting `sandbox` or `live` (defaults to sandbox).
pub const ENVIRONMENT_VAR: &str = "GOCARDLESS_ENVIRONMENT";

/// Errors that can occur while building a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment {0:?}, use one of (sandbox, live)")]
    InvalidEnvironment(String),

    #[error("GOCARDLESS_ACCESS_TOKEN environment variable not set")]
    MissingAccessToken,

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Transport configuration shared by every request of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    access_token: String,
    base_url: String,
    api_version: &'static str,
}

impl ClientConfig {
    /// Create a config for `environment` authenticated with `access_token`.
    pub fn new(access_token: impl Into<String>, environment: Environment) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: environment.base_url().to_owned(),
            api_version: API_VERSION,
        }
    }

    /// Parse the environment from its string name first.
    ///
    /// An unknown name is returned as [`ConfigError::InvalidEnvironment`]
    /// rather than aborting, so the caller decides what to do with it.
    pub fn from_environment_name(
        access_token: impl Into<String>,
        environment: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(access_token, environment.parse()?))
    }

    /// Build a config from `GOCARDLESS_ACCESS_TOKEN` and the optional
    /// `GOCARDLESS_ENVIRONMENT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup(ACCESS_TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;
        let environment = match lookup(ENVIRONMENT_VAR) {
            Some(name) => name.parse()?,
            None => Environment::default(),
        };
        Ok(Self::new(token, environment))
    }

    /// Point the config at a different API root, e.g. a mock server or an
    /// egress proxy.
    ///
    /// The URL is only checked for being parseable. Paths are appended to it
    /// verbatim, so it should end with a `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;
        self.base_url = base_url;
        Ok(self)
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &'static str {
        self.api_version
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_new_config() {
        let config = ClientConfig::new("tok123", Environment::Sandbox);
        assert_eq!(config.access_token(), "tok123");
        assert_eq!(config.base_url(), SANDBOX_BASE_URL);
        assert_eq!(config.api_version(), "2015-07-06");
    }

    #[test]
    fn test_from_environment_name() {
        let config = ClientConfig::from_environment_name("tok", "live").unwrap();
        assert_eq!(config.base_url(), LIVE_BASE_URL);

        let err = ClientConfig::from_environment_name("tok", "production").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvironment(_)));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[(ACCESS_TOKEN_VAR, "tok")])).unwrap();
        assert_eq!(config.base_url(), SANDBOX_BASE_URL);

        let config = ClientConfig::from_lookup(lookup(&[
            (ACCESS_TOKEN_VAR, "tok"),
            (ENVIRONMENT_VAR, "live"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), LIVE_BASE_URL);
    }

    #[test]
    fn test_from_lookup_errors() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingAccessToken));

        let err = ClientConfig::from_lookup(lookup(&[(ACCESS_TOKEN_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingAccessToken));

        let err = ClientConfig::from_lookup(lookup(&[
            (ACCESS_TOKEN_VAR, "tok"),
            (ENVIRONMENT_VAR, "moon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvironment(_)));
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::new("tok", Environment::Live)
            .with_base_url("http://127.0.0.1:8080/")
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/");

        let err = ClientConfig::new("tok", Environment::Live)
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("super-secret", Environment::Sandbox);
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
