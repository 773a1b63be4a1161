//! HTTP transport layer for the Tuesday SDK.

use crate::config::ClientConfig;
use crate::error::{TuesdayError, TuesdayResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP transport for making API requests.
///
/// Every request is a single attempt; there is no retry layer.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> TuesdayResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut api_key = header::HeaderValue::from_str(config.api_key.expose())
            .map_err(|_| TuesdayError::Config("Invalid API key format".to_string()))?;
        api_key.set_sensitive(true);
        headers.insert(header::HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path, relative to the configured base URL.
    fn build_url(&self, path: &str) -> TuesdayResult<url::Url> {
        let mut base = self.config.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(TuesdayError::InvalidUrl)
    }

    /// Send a request once and turn non-success statuses into errors.
    async fn execute(&self, request: RequestBuilder) -> TuesdayResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // An unreadable error body still yields an error carrying the status text
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Tuesday API request failed");
        Err(TuesdayError::from_response(status, &body))
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> TuesdayResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.client.get(url)).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a GET request with query parameters, in field declaration order.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> TuesdayResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        let response = self.execute(self.client.get(url).query(query)).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> TuesdayResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self.execute(self.client.post(url).json(body)).await?;
        let body = response.json().await?;
        Ok(body)
    }
}
