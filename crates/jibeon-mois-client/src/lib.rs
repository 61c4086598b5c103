//! # jibeon-mois-client — Typed client for the MOIS StanReginCd registry
//!
//! Resolves free-text Korean administrative-region names into canonical
//! 10-digit region codes by querying the MOIS standard region-code list
//! operation.
//!
//! ## Pipeline
//!
//! - [`RegistryClient`] fetches rows for an address-fragment filter,
//!   trying the secure endpoint first with a plain-HTTP fallback, and
//!   retrying transient failures with a short increasing delay.
//! - [`filter_codes`] selects the rows whose address text contains every
//!   query token and extracts validated codes.
//! - [`Resolver`] composes both, degrading to a nationwide province scan
//!   when the direct lookup yields nothing.
//!
//! ## Blocking I/O
//!
//! The whole pipeline is synchronous and single-threaded; each call owns
//! its rows, trace, and derived codes, so concurrent callers need no
//! synchronization. Callers needing an overall deadline must wrap the
//! resolve call externally — the per-request timeout is the only ceiling
//! applied here.
//!
//! ## Testing
//!
//! [`Transport`] is the seam: tests inject a scripted transport (see
//! `tests/`) and a short province list instead of touching the network.

pub mod config;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod resolver;
pub mod transport;

pub use config::{ConfigError, RegistryConfig};
pub use envelope::{HeadRecord, RegistryRow, ResultRecord};
pub use error::{ClientError, FetchAttemptError};
pub use fetch::{FetchOutcome, FetchPlan, RegistryClient};
pub use filter::filter_codes;
pub use resolver::{
    Resolution, ResolveOptions, ResolveTrace, Resolver, DEFAULT_PROVINCES,
};
pub use transport::{HttpTransport, Scheme, Transport, TransportError};
