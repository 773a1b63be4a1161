//! Credential check endpoint.

use super::Envelope;
use crate::client::TuesdayClient;
use crate::error::TuesdayResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Auth API for checking the configured key.
pub struct AuthApi<'a> {
    client: &'a TuesdayClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a TuesdayClient) -> Self {
        Self { client }
    }

    /// Check the key and return the workspace it belongs to.
    pub async fn check(&self) -> TuesdayResult<Envelope<Workspace>> {
        self.client.http.get("/public/auth").await
    }
}

/// Workspace owning an API key.
///
/// Fields are kept as raw JSON; missing ones decode as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub user_id: Value,
}
