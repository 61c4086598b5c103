//! Transport abstraction over the registry endpoints.
//!
//! The [`Transport`] trait separates the fetch/retry pipeline from the
//! concrete HTTP stack, so tests can inject a scripted transport without
//! touching the network. Production deployments use [`HttpTransport`],
//! a thin wrapper over a blocking `reqwest` client.

use std::time::Duration;

use serde::Serialize;
use url::Url;

/// Which endpoint slot served (or failed to serve) a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// The secure endpoint, tried first.
    Https,
    /// The plain-HTTP fallback endpoint.
    Http,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Https => write!(f, "https"),
            Self::Http => write!(f, "http"),
        }
    }
}

/// Errors from a single transport request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be completed (connect failure, timeout,
    /// body read error).
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The endpoint answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// A blocking GET transport.
///
/// Implementations must be `Send + Sync` so a client can be shared
/// across threads; the trait is object-safe to support runtime
/// selection (scripted vs. live).
pub trait Transport: Send + Sync {
    /// Issue a blocking GET and return the response body on success.
    fn get(&self, url: &Url) -> Result<String, TransportError>;
}

/// Live transport backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("jibeon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request {
                url: "client_init".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String, TransportError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(|e| TransportError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_display() {
        assert_eq!(Scheme::Https.to_string(), "https");
        assert_eq!(Scheme::Http.to_string(), "http");
    }

    #[test]
    fn scheme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Scheme::Https).unwrap(), "\"https\"");
    }

    #[test]
    fn transport_trait_is_object_safe() {
        let transport = HttpTransport::new(Duration::from_secs(1)).unwrap();
        let _boxed: Box<dyn Transport> = Box::new(transport);
    }
}
