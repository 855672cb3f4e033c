//! Dispatch HTTP Client
//!
//! A small, type-safe HTTP client for the orchestration server's REST API,
//! together with the polling engine used to follow execution output and
//! asynchronous export jobs.
//!
//! # Example
//!
//! ```no_run
//! use dispatch_client::OrchestratorClient;
//! use dispatch_client::poll::{ExecutionOutput, IntervalWait, OutputSession};
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OrchestratorClient::new("http://localhost:4440").with_token("secret");
//!
//!     let fetcher = ExecutionOutput::new(client, "123");
//!     let wait = IntervalWait::new(Duration::from_secs(2), CancellationToken::new());
//!     let mut session = OutputSession::new(fetcher, wait);
//!
//!     let outcome = session
//!         .follow(&mut |entries: &[dispatch_core::domain::output::LogEntry]| {
//!             for entry in entries {
//!                 println!("{}", entry.log);
//!             }
//!         })
//!         .await?;
//!
//!     println!("succeeded: {}", outcome.is_success());
//!     Ok(())
//! }
//! ```

pub mod error;
mod executions;
pub mod poll;
mod projects;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// REST API version spoken by this client
pub const API_VERSION: u32 = 41;

/// HTTP client for the orchestration server API
///
/// Methods are grouped by resource:
/// - Executions (details, listing, console output)
/// - Project exports (start, status, download)
#[derive(Debug, Clone)]
pub struct OrchestratorClient {
    /// Base URL of the server (e.g., "http://localhost:4440")
    base_url: String,
    /// Optional API token sent as a bearer credential
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl OrchestratorClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use dispatch_client::OrchestratorClient;
    ///
    /// let client = OrchestratorClient::new("http://localhost:4440");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    /// Attach an API token to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a versioned API path
    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, API_VERSION, path)
    }

    /// Start a GET request, attaching credentials when configured
    fn get(&self, url: &str) -> RequestBuilder {
        debug!("GET {}", url);
        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Turn a non-success status into an API error
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = self.check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response carrying a binary body
    async fn handle_bytes_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = self.check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }
}
