//! Main client for the Tuesday SDK.

use crate::api::{AuthApi, CompaniesApi, PeopleApi};
use crate::config::{default_base_url, ClientConfig};
use crate::error::{TuesdayError, TuesdayResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use tuesday_core::ApiKey;
use url::Url;

/// Main client for interacting with the Tuesday API.
///
/// A client is bound to a single API key. It is cheap to build, so callers
/// that receive a different key per request build one per request.
#[derive(Debug, Clone)]
pub struct TuesdayClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl TuesdayClient {
    /// Create a new client builder.
    pub fn builder() -> TuesdayClientBuilder {
        TuesdayClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> TuesdayResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the credential check API.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Get the people API.
    pub fn people(&self) -> PeopleApi<'_> {
        PeopleApi::new(self)
    }

    /// Get the companies API.
    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }
}

/// Builder for creating a TuesdayClient.
pub struct TuesdayClientBuilder {
    base_url: Option<Url>,
    api_key: Option<ApiKey>,
    timeout: Option<Duration>,
}

impl TuesdayClientBuilder {
    /// Create a new builder pointed at the production API.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Override the base URL.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key. A blank key is treated as missing.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    /// Set an already validated API key.
    pub fn credential(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> TuesdayResult<TuesdayClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| TuesdayError::Config("api_key is required".to_string()))?;

        let config = ClientConfig {
            base_url: self.base_url.unwrap_or_else(default_base_url),
            api_key,
            timeout: self.timeout,
        };

        TuesdayClient::from_config(config)
    }
}

impl Default for TuesdayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
