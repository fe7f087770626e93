//! Client configuration types.

use dnsdb_core::{DnsdbError, Result};
use std::time::Duration;

/// The public DNSDB API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.dnsdb.info/";

/// User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "go-dnsdb";

/// Default request timeout of the default transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "DNSDB_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "DNSDB_BASE_URL";

/// Connection settings for a [`DnsdbClient`](crate::DnsdbClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL lookup paths are resolved against. Must end with `/`.
    pub base_url: String,

    /// User-Agent header value
    pub user_agent: String,

    /// Request timeout of the default transport
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the base URL taken from `DNSDB_BASE_URL`, if set
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()) {
            config.base_url = url;
        }
        config
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header value
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Read the API key from `DNSDB_API_KEY`
pub fn api_key_from_env() -> Result<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DnsdbError::Config(format!("{API_KEY_ENV} is not set")))
}
