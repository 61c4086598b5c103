//! Row fetching with scheme fallback and bounded retry.
//!
//! Every fetch walks the endpoint pair secure-first, retrying the whole
//! pair up to the plan's attempt count with a short increasing delay
//! between rounds to absorb transient failures. Success from any
//! (scheme, attempt) pair short-circuits; exhaustion surfaces the last
//! underlying error. An empty row set is a valid terminal result and is
//! never retried — escalation is the resolver's decision.

use std::time::Duration;

use url::Url;

use crate::config::RegistryConfig;
use crate::envelope::{Envelope, HeadRecord, RegistryRow};
use crate::error::{ClientError, FetchAttemptError};
use crate::transport::{HttpTransport, Scheme, Transport, TransportError};

/// Retry strategy for a fetch: how many rounds over the endpoint pair,
/// and the base delay that grows linearly between rounds.
#[derive(Debug, Clone, Copy)]
pub struct FetchPlan {
    /// Rounds over the endpoint pair. Each round tries secure then
    /// fallback.
    pub attempts: u32,
    /// Base delay; round `n` is followed by `backoff × n` before the
    /// next round.
    pub backoff: Duration,
}

impl Default for FetchPlan {
    fn default() -> Self {
        Self {
            attempts: 2,
            backoff: Duration::from_millis(400),
        }
    }
}

impl FetchPlan {
    fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff * attempt
    }
}

/// Result of a successful fetch: typed rows, response metadata, and the
/// endpoint slot that served them.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub rows: Vec<RegistryRow>,
    pub head: HeadRecord,
    pub scheme: Scheme,
}

/// Blocking client for the StanReginCd list operation.
#[derive(Debug, Clone)]
pub struct RegistryClient<T = HttpTransport> {
    transport: T,
    config: RegistryConfig,
    plan: FetchPlan,
}

impl RegistryClient<HttpTransport> {
    /// Create a client with the live HTTP transport, using the
    /// configured timeout.
    pub fn new(config: RegistryConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))
            .map_err(|e| ClientError::Init(e.to_string()))?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> RegistryClient<T> {
    /// Create a client over an arbitrary transport (scripted transports
    /// in tests).
    pub fn with_transport(transport: T, config: RegistryConfig) -> Self {
        Self {
            transport,
            config,
            plan: FetchPlan::default(),
        }
    }

    /// Override the retry plan.
    pub fn with_plan(mut self, plan: FetchPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Fetch the rows matching an address-fragment filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::FetchExhausted`] once every
    /// (scheme, attempt) combination has failed, carrying the last
    /// underlying error.
    pub fn fetch(&self, filter: &str, page: u32, rows: u32) -> Result<FetchOutcome, ClientError> {
        let mut last_err: Option<FetchAttemptError> = None;

        for attempt in 1..=self.plan.attempts {
            for (scheme, base) in [
                (Scheme::Https, &self.config.https_endpoint),
                (Scheme::Http, &self.config.http_endpoint),
            ] {
                let url = self.request_url(base, filter, page, rows);
                match self.attempt(&url) {
                    Ok((rows, head)) => {
                        tracing::debug!(%scheme, attempt, rows = rows.len(), "registry fetch ok");
                        return Ok(FetchOutcome { rows, head, scheme });
                    }
                    Err(err) => {
                        tracing::warn!(%scheme, attempt, "registry request failed: {err}");
                        last_err = Some(err);
                    }
                }
            }
            if attempt < self.plan.attempts {
                std::thread::sleep(self.plan.delay_after(attempt));
            }
        }

        let source = last_err.unwrap_or_else(|| {
            FetchAttemptError::Transport(TransportError::Request {
                url: self.config.https_endpoint.to_string(),
                reason: "no fetch attempts configured".to_string(),
            })
        });
        Err(ClientError::FetchExhausted {
            attempts: self.plan.attempts,
            source,
        })
    }

    fn attempt(&self, url: &Url) -> Result<(Vec<RegistryRow>, HeadRecord), FetchAttemptError> {
        let body = self.transport.get(url)?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        Ok(envelope.into_parts())
    }

    fn request_url(&self, base: &Url, filter: &str, page: u32, rows: u32) -> Url {
        let query = format!(
            "serviceKey={}&pageNo={}&numOfRows={}&type=JSON&locatadd_nm={}",
            self.config.encoded_service_key(),
            page,
            rows,
            encode_component(filter),
        );
        let mut url = base.clone();
        url.set_query(Some(&query));
        url
    }
}

/// Form-encode a query-string component.
fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
