//! Configuration module
//!
//! Connection and polling settings shared by every command.

use dispatch_client::OrchestratorClient;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the orchestration server
    pub server_url: String,

    /// API token, when the server requires one
    pub token: Option<String>,

    /// Delay between two polls of a running execution or export
    pub poll_interval: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_url.is_empty() {
            anyhow::bail!("server URL cannot be empty");
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server URL must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        Ok(())
    }

    /// Build an API client for this configuration
    pub fn client(&self) -> OrchestratorClient {
        let client = OrchestratorClient::new(&self.server_url);
        match &self.token {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:4440".to_string(),
            token: None,
            poll_interval: dispatch_client::poll::DEFAULT_POLL_INTERVAL,
        }
    }
}
