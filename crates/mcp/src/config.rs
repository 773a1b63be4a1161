// Server configuration: defaults, optional TOML file, then CLI/env overrides

use crate::protocol::ServerInfo;
use crate::tools::DispatcherConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tuesday_core::ApiKey;
use tuesday_sdk::DEFAULT_BASE_URL;
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fallback key for calls that carry none. Never written back out.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds; unset means no client-side timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_server_version")]
    pub version: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_server_name() -> String {
    ServerInfo::default().name
}

fn default_server_version() -> String {
    ServerInfo::default().version
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
        }
    }
}

impl McpConfig {
    /// Load from `config_path` if given and present, otherwise use defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = config_path else {
            return Ok(Self::default());
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")
        } else {
            tracing::info!(
                path = %config_path.display(),
                "Configuration file not found, using defaults"
            );
            Ok(Self::default())
        }
    }

    /// Apply command-line or environment values on top of the loaded file.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        api_key: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(api_key) = api_key {
            self.api.api_key = Some(api_key);
        }
        if let Some(timeout_secs) = timeout_secs {
            self.api.timeout_secs = Some(timeout_secs);
        }
        self
    }

    pub fn dispatcher_config(&self) -> Result<DispatcherConfig> {
        let base_url = Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid base_url: {}", self.api.base_url))?;

        Ok(DispatcherConfig {
            base_url,
            fallback_api_key: self.api.api_key.clone().and_then(ApiKey::new),
            timeout: self.api.timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: self.server.name.clone(),
            version: self.server.version.clone(),
        }
    }
}
