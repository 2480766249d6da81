//! API environment selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Base URL of the live API.
pub const LIVE_BASE_URL: &str = "https://api.gocardless.com/";

/// Base URL of the sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.gocardless.com/";

/// The GoCardless environment a client talks to.
///
/// Live accounts that are not approved whitelabel partners may only collect
/// payments on behalf of a single creditor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Live,
}

impl Environment {
    /// Root URL every relative endpoint path is appended to.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Live => LIVE_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Live => write!(f, "live"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "live" => Ok(Environment::Live),
            _ => Err(ConfigError::InvalidEnvironment(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("LIVE".parse::<Environment>().unwrap(), Environment::Live);
        assert_eq!(Environment::Live.to_string(), "live");
    }

    #[test]
    fn test_invalid_environment_is_an_error() {
        let err = "staging".parse::<Environment>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvironment(ref env) if env == "staging"));
    }

    #[test]
    fn test_base_urls() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://api-sandbox.gocardless.com/"
        );
        assert_eq!(Environment::Live.base_url(), "https://api.gocardless.com/");
    }
}
