// Errors raised while dispatching a tool call

use crate::protocol::JsonRpcError;
use tuesday_core::{UnknownTool, ValidationError};
use tuesday_sdk::TuesdayError;

/// Failure of a single tool invocation.
///
/// None of these are fatal to the server; each one becomes a JSON-RPC error
/// on the call that caused it.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    UnknownTool(#[from] UnknownTool),

    #[error(
        "API key is required. Set TUESDAY_API_KEY environment variable or provide api_key parameter."
    )]
    MissingCredential,

    #[error("api_key must be a string")]
    InvalidCredential,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TuesdayError),

    #[error("{0}")]
    Unexpected(String),
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(format!("Failed to format response: {}", err))
    }
}

impl DispatchError {
    /// Protocol error reported to the client.
    ///
    /// Only an unknown tool is "method not found"; everything else is an
    /// internal error whose message starts with `Error: `.
    pub fn into_rpc_error(self) -> JsonRpcError {
        match self {
            Self::UnknownTool(err) => JsonRpcError::method_not_found(err.to_string()),
            other => JsonRpcError::internal_error(format!("Error: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{INTERNAL_ERROR, METHOD_NOT_FOUND};

    #[test]
    fn test_unknown_tool_is_method_not_found() {
        let err = DispatchError::from(UnknownTool("bogus".to_string()));
        let rpc = err.into_rpc_error();

        assert_eq!(rpc.code, METHOD_NOT_FOUND);
        assert_eq!(rpc.message, "Unknown tool: bogus");
    }

    #[test]
    fn test_missing_credential_is_internal_error() {
        let rpc = DispatchError::MissingCredential.into_rpc_error();

        assert_eq!(rpc.code, INTERNAL_ERROR);
        assert_eq!(
            rpc.message,
            "Error: API key is required. Set TUESDAY_API_KEY environment variable or provide api_key parameter."
        );
    }

    #[test]
    fn test_transport_message_preserved() {
        let err = DispatchError::from(TuesdayError::Api {
            status: 404,
            message: "not found".to_string(),
        });
        let rpc = err.into_rpc_error();

        assert_eq!(rpc.code, INTERNAL_ERROR);
        assert_eq!(rpc.message, "Error: API request failed: 404 - not found");
    }
}
