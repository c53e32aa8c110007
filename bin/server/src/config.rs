//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! See [`AccessPolicy`](profiles_access::AccessPolicy) for which pages are
//! gated and where anonymous requests are sent.

use profiles_access::AccessPolicy;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Session lookup configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Gated pages and the authentication route.
    #[serde(default)]
    pub access: AccessPolicy,
}

/// Session lookup configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// URL of the authentication service's session endpoint.
    /// The endpoint answers `{}` for anonymous callers.
    #[serde(default = "default_session_endpoint")]
    pub endpoint: String,

    /// Timeout for a single session lookup, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_session_endpoint() -> String {
    "http://127.0.0.1:3100/api/auth/session".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_session_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Nested keys use `__` as separator (`SESSION__ENDPOINT`), and
    /// `ACCESS__GATED_PATHS` takes a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::default())
    }

    fn from_source(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                environment
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("access.gated_paths")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
