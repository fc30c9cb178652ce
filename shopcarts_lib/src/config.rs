//! Environment-driven client configuration.

use shopcarts_api::Client;

pub const BASE_URL_ENV: &str = "SHOPCARTS_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the shopcarts service lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `SHOPCARTS_BASE_URL`, falling back to `http://localhost:8080`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    /// Replaces the base URL when an override is given.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        self
    }

    pub fn client(&self) -> Client {
        Client::with_base_url(&self.base_url)
    }
}
