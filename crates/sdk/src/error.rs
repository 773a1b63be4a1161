//! Error types for the Tuesday SDK.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Result type for SDK operations.
pub type TuesdayResult<T> = Result<T, TuesdayError>;

/// Error types that can occur when using the Tuesday SDK.
#[derive(Debug, thiserror::Error)]
pub enum TuesdayError {
    /// HTTP request failed before a response arrived, or the body could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("API request failed: {status} - {message}")]
    Api { status: u16, message: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl TuesdayError {
    /// Create an API error from a status code and response body.
    ///
    /// Uses the body's `message` field when the body is JSON and carries one,
    /// otherwise the status text. A body that fails to parse is not an error
    /// of its own.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.message.and_then(message_text))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Error body returned by the Tuesday API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<Value>,
}

// Validation failures come back with a list of messages
fn message_text(message: Value) -> Option<String> {
    let text = match message {
        Value::String(text) => text,
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!text.trim().is_empty()).then_some(text)
}
