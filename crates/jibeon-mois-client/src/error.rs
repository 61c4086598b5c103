//! Registry client error types.

use crate::config::ConfigError;
use crate::transport::TransportError;

/// Errors from registry client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP transport could not be constructed.
    #[error("failed to build HTTP transport: {0}")]
    Init(String),

    /// Every (scheme, attempt) combination failed; carries the last
    /// underlying error.
    #[error("registry fetch failed after {attempts} attempt(s) per scheme: {source}")]
    FetchExhausted {
        attempts: u32,
        #[source]
        source: FetchAttemptError,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Failure of a single fetch attempt against one endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchAttemptError {
    /// Transport-level failure (connect, timeout, non-success status).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not parse as the registry envelope.
    #[error("malformed registry envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}
