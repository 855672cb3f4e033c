//! Client errors
//!
//! Every error ends a polling session; nothing here is retried.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure before any status was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Non-success status not covered by a more specific variant
    #[error("server answered {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Body did not match the expected shape
    #[error("unreadable response: {0}")]
    ParseError(String),

    /// The server does not know this execution
    #[error("execution {0} does not exist")]
    UnknownExecution(String),

    /// The export token was never issued or has expired
    #[error("export {token} of project {project} is unknown or expired")]
    UnknownExport { project: String, token: String },
}

impl ClientError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Attribute a 404 to the execution it was about
    pub(crate) fn for_execution(self, execution_id: &str) -> Self {
        match self {
            Self::ApiError { status: 404, .. } => Self::UnknownExecution(execution_id.to_string()),
            other => other,
        }
    }

    /// Attribute a 404 to the export token it was about
    pub(crate) fn for_export(self, project: &str, token: &str) -> Self {
        match self {
            Self::ApiError { status: 404, .. } => Self::UnknownExport {
                project: project.to_string(),
                token: token.to_string(),
            },
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ApiError { status: 404, .. }
                | Self::UnknownExecution(_)
                | Self::UnknownExport { .. }
        )
    }

    /// 4xx, including the resource-specific 404s
    pub fn is_client_error(&self) -> bool {
        self.is_not_found()
            || matches!(self, Self::ApiError { status, .. } if (400..500).contains(status))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
