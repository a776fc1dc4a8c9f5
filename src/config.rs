//! Client configuration
//!
//! `FetchConfig` carries everything the request builder and the HTTP
//! transport need. It can be built in code, through the builder, or
//! loaded from a JSON file.

use crate::error::{Error, Result};
use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default `User-Agent` header value
pub const DEFAULT_USER_AGENT: &str = "fetch-gists";

/// Default `Accept` header value
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";

/// Largest page size the gists endpoint honours
pub const MAX_PER_PAGE: u32 = 100;

/// Configuration for fetching gists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// API root, without the `/gists` path
    pub base_url: String,
    /// User agent string
    pub user_agent: String,
    /// Accept header value
    pub accept: String,
    /// Number of gists requested per page
    pub per_page: u32,
    /// Where the credential is attached
    pub auth_location: Location,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            per_page: MAX_PER_PAGE,
            auth_location: Location::Header,
            timeout_secs: 30,
        }
    }
}

impl FetchConfig {
    /// Create a new config builder
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Full URL of the gists listing endpoint
    pub fn gists_url(&self) -> String {
        format!("{}/gists", self.base_url.trim_end_matches('/'))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(Error::config(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.per_page
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::config("user_agent must not be empty"));
        }
        Ok(())
    }
}

/// Builder for [`FetchConfig`]
#[derive(Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    /// Set the API root
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Set where the credential goes
    #[must_use]
    pub fn auth_location(mut self, location: Location) -> Self {
        self.config.auth_location = location;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs();
        self
    }

    /// Build the config
    pub fn build(self) -> FetchConfig {
        self.config
    }
}
