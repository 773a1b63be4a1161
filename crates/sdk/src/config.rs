//! Configuration types for the Tuesday SDK.

use std::time::Duration;
use tuesday_core::ApiKey;
use url::Url;

/// Production API address.
pub const DEFAULT_BASE_URL: &str = "https://api.tuesday.so/api/v1";

/// Configuration for the Tuesday client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: Url,
    /// Key sent in the `X-API-KEY` header.
    pub api_key: ApiKey,
    /// Request timeout. `None` keeps the HTTP client's own default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration for the production API.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: default_base_url(),
            api_key,
            timeout: None,
        }
    }
}

/// Parsed [`DEFAULT_BASE_URL`].
pub fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
