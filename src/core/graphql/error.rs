//! Error types for GraphQL transport and response handling.

use thiserror::Error;

/// Unified error type for calls against the GraphQL endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure below HTTP.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Endpoint answered with a non-empty `errors` array.
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQL(Vec<String>),

    /// Response carried neither `errors` nor `data`.
    #[error("Response for {0} contained no data")]
    MissingData(&'static str),

    /// Response `data` did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Short, single-line message suitable for a notification.
    pub fn summary(&self) -> String {
        match self {
            ApiError::Transport(e) if e.is_timeout() => "request timed out".to_string(),
            ApiError::Transport(_) => "could not reach server".to_string(),
            ApiError::Status { status, .. } => format!("server returned HTTP {status}"),
            ApiError::GraphQL(messages) => messages
                .first()
                .cloned()
                .unwrap_or_else(|| "unknown GraphQL error".to_string()),
            ApiError::MissingData(op) => format!("{op}: empty response"),
            ApiError::Decode(_) => "unexpected response shape".to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
