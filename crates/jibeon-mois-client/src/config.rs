//! Registry client configuration.
//!
//! Configures the StanReginCd endpoint pair and the service key issued
//! by the public-data portal. Defaults point to the production
//! endpoints. Override via environment variables or explicit
//! construction for testing.

use url::Url;

/// Default secure endpoint for the StanReginCd list operation.
pub const DEFAULT_HTTPS_ENDPOINT: &str =
    "https://apis.data.go.kr/1741000/StanReginCd/getStanReginCdList";

/// Default plain-HTTP fallback endpoint.
pub const DEFAULT_HTTP_ENDPOINT: &str =
    "http://apis.data.go.kr/1741000/StanReginCd/getStanReginCdList";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Configuration for connecting to the StanReginCd registry.
///
/// Custom `Debug` implementation redacts the `service_key` field to
/// prevent credential leakage in log output.
#[derive(Clone)]
pub struct RegistryConfig {
    /// Secure endpoint, tried first on every attempt.
    pub https_endpoint: Url,
    /// Plain-HTTP endpoint, tried as fallback within each attempt.
    pub http_endpoint: Url,
    /// Service key issued by the public-data portal. Accepted in both
    /// decoded and pre-encoded form; see [`RegistryConfig::encoded_service_key`].
    pub service_key: String,
    /// Per-request timeout ceiling in seconds, applied identically to
    /// every transport attempt.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("https_endpoint", &self.https_endpoint)
            .field("http_endpoint", &self.http_endpoint)
            .field("service_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RegistryConfig {
    /// Build a configuration with the production endpoints and the given
    /// service key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the key is empty after
    /// trimming.
    pub fn with_key(key: impl Into<String>) -> Result<Self, ConfigError> {
        let service_key = key.into().trim().to_string();
        if service_key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        Ok(Self {
            https_endpoint: parse_default(DEFAULT_HTTPS_ENDPOINT)?,
            http_endpoint: parse_default(DEFAULT_HTTP_ENDPOINT)?,
            service_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PUBLICDATA_KEY` (required) — portal service key
    /// - `JIBEON_REGISTRY_HTTPS_URL` (default: production endpoint)
    /// - `JIBEON_REGISTRY_HTTP_URL` (default: production endpoint)
    /// - `JIBEON_TIMEOUT_SECS` (default: 12)
    pub fn from_env() -> Result<Self, ConfigError> {
        let service_key = std::env::var("PUBLICDATA_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)?;

        Ok(Self {
            https_endpoint: env_url("JIBEON_REGISTRY_HTTPS_URL", DEFAULT_HTTPS_ENDPOINT)?,
            http_endpoint: env_url("JIBEON_REGISTRY_HTTP_URL", DEFAULT_HTTP_ENDPOINT)?,
            service_key,
            timeout_secs: std::env::var("JIBEON_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// The service key in percent-encoded form, as the registry expects
    /// it on the wire.
    ///
    /// Portal keys are handed out both decoded and pre-encoded; a key
    /// that already contains `%` is passed through untouched so it is
    /// never double-encoded.
    pub fn encoded_service_key(&self) -> String {
        if self.service_key.contains('%') {
            self.service_key.clone()
        } else {
            url::form_urlencoded::byte_serialize(self.service_key.as_bytes()).collect()
        }
    }
}

fn parse_default(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl("default".to_string(), e.to_string()))
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("service key is required — pass --key or set PUBLICDATA_KEY")]
    MissingKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
