//! Unified error types for curio.
//!
//! One variant per caller-facing failure category, so the entry point (and
//! tests) can tell "our storage is down" apart from "the search provider is
//! down" and from bad client input.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use tokio_rusqlite::rusqlite;

/// Unified error types for the curio backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty query).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// No cache row found for the given normalized query.
    #[error("CACHE_MISS: {0}")]
    CacheMiss(String),

    /// The durable store could not be reached or the operation failed.
    #[error("STORAGE_ERROR: {0}")]
    Database(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("STORAGE_ERROR: migration failed: {0}")]
    MigrationFailed(String),

    /// A stored results payload could not be encoded or decoded.
    #[error("STORAGE_ERROR: results payload: {0}")]
    Payload(String),

    /// Required configuration is absent (e.g., provider API key).
    #[error("MISCONFIGURED: {0}")]
    Misconfigured(String),

    /// The search provider could not be reached at the network level.
    #[error("PROVIDER_UNREACHABLE: {0}")]
    ProviderUnreachable(String),

    /// The search provider answered with a non-success response.
    #[error("PROVIDER_ERROR: {0}")]
    ProviderFailure(String),
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Database(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::CacheMiss(msg) => (-32001, msg.clone()),
            Error::Database(e) => (-32002, e.to_string()),
            Error::MigrationFailed(msg) => (-32002, msg.clone()),
            Error::Payload(msg) => (-32002, msg.clone()),
            Error::Misconfigured(msg) => (-32009, msg.clone()),
            Error::ProviderUnreachable(msg) => (-32010, msg.clone()),
            Error::ProviderFailure(msg) => (-32011, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CacheMiss("best pasta recipe".to_string());
        assert!(err.to_string().contains("CACHE_MISS"));
        assert!(err.to_string().contains("best pasta recipe"));

        let err = Error::ProviderUnreachable("connect refused".to_string());
        assert!(err.to_string().starts_with("PROVIDER_UNREACHABLE"));
    }

    #[test]
    fn test_error_to_mcp_error() {
        let err = Error::Misconfigured("brave_api_key not set".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32009);

        let err = Error::ProviderFailure("HTTP 500".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32011);
    }

    #[test]
    fn test_storage_and_provider_codes_differ() {
        let storage: McpError = Error::MigrationFailed("boom".into()).into();
        let provider: McpError = Error::ProviderUnreachable("boom".into()).into();
        assert_ne!(storage.code.0, provider.code.0);
    }
}
