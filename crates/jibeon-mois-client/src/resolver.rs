//! Region resolution: direct lookup with nationwide-scan degradation.
//!
//! The resolver first fetches with the literal query. When that yields
//! nothing — or the fetch itself fails — it degrades to scanning every
//! configured top-level province name in order, applying the original
//! query's token filter to each province's rows and stopping at the
//! first non-empty match. Scan order is fixed and meaningful: for an
//! ambiguous fragment present in several provinces, the first configured
//! province wins. The scan never merges or ranks across provinces.

use std::collections::BTreeSet;

use serde::Serialize;

use jibeon_core::{Query, RegionCode};

use crate::config::RegistryConfig;
use crate::envelope::HeadRecord;
use crate::error::ClientError;
use crate::fetch::{FetchPlan, RegistryClient};
use crate::filter::filter_codes;
use crate::transport::{HttpTransport, Scheme, Transport};

/// The country's top-level province names, in scan order.
///
/// The order is a policy, not alphabetical: it decides which province's
/// match is returned for fragments that exist in several. Both current
/// and pre-renaming province names are listed so older registry data
/// still matches.
pub const DEFAULT_PROVINCES: [&str; 19] = [
    "서울특별시",
    "부산광역시",
    "대구광역시",
    "인천광역시",
    "광주광역시",
    "대전광역시",
    "울산광역시",
    "세종특별자치시",
    "경기도",
    "강원특별자치도",
    "강원도",
    "충청북도",
    "충청남도",
    "전북특별자치도",
    "전라북도",
    "전라남도",
    "경상북도",
    "경상남도",
    "제주특별자치도",
];

/// Per-call resolution options.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Page number passed to the direct-phase fetch.
    pub page: u32,
    /// Rows per page for every fetch.
    pub page_size: u32,
    /// Whether the nationwide scan runs when the direct phase yields
    /// nothing.
    pub scan: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 1000,
            scan: true,
        }
    }
}

/// Diagnostic trace accumulated across a resolution.
///
/// Distinguishes a not-found outcome from a transport failure: a direct
/// fetch failure recovered by the scan appears in `direct_error`, while
/// per-province outcomes land in `scanned` / `scan_errors`.
#[derive(Debug, Default, Serialize)]
pub struct ResolveTrace {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct: Option<PhaseTrace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scanned: Vec<ProvinceTrace>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scan_errors: Vec<ProvinceError>,
}

/// Outcome of the direct phase's fetch.
#[derive(Debug, Serialize)]
pub struct PhaseTrace {
    pub scheme: Scheme,
    pub rows: usize,
    #[serde(flatten)]
    pub head: HeadRecord,
}

/// Outcome of one province's scan fetch.
#[derive(Debug, Serialize)]
pub struct ProvinceTrace {
    pub province: String,
    pub rows: usize,
    pub scheme: Scheme,
}

/// A province whose scan fetch failed; the scan continues past it.
#[derive(Debug, Serialize)]
pub struct ProvinceError {
    pub province: String,
    pub error: String,
}

/// Result of a resolution: zero or more codes plus the trace.
///
/// An empty code set is a legitimate not-found terminal state, not an
/// error.
#[derive(Debug)]
pub struct Resolution {
    pub codes: BTreeSet<RegionCode>,
    pub trace: ResolveTrace,
}

impl Resolution {
    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The lexicographically first resolved code, if any.
    pub fn first(&self) -> Option<&RegionCode> {
        self.codes.iter().next()
    }
}

/// Orchestrates direct lookup plus the nationwide-scan fallback.
#[derive(Debug)]
pub struct Resolver<T = HttpTransport> {
    client: RegistryClient<T>,
    provinces: Vec<String>,
}

impl Resolver<HttpTransport> {
    /// Create a resolver with the live HTTP transport and the default
    /// province list.
    pub fn new(config: RegistryConfig) -> Result<Self, ClientError> {
        Ok(Self::with_client(RegistryClient::new(config)?))
    }
}

impl<T: Transport> Resolver<T> {
    /// Create a resolver over an existing client, with the default
    /// province list.
    pub fn with_client(client: RegistryClient<T>) -> Self {
        Self {
            client,
            provinces: DEFAULT_PROVINCES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the province scan list (order is the tie-break policy).
    pub fn with_provinces(mut self, provinces: Vec<String>) -> Self {
        self.provinces = provinces;
        self
    }

    /// Override the client's retry plan.
    pub fn with_plan(mut self, plan: FetchPlan) -> Self {
        self.client = self.client.with_plan(plan);
        self
    }

    /// Resolve a region-name query into codes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::FetchExhausted`] only when the direct
    /// fetch fails and the scan is disabled; with the scan enabled, a
    /// direct-phase failure is recorded in the trace and the scan is
    /// given the chance to recover it.
    pub fn resolve(
        &self,
        query: &Query,
        options: &ResolveOptions,
    ) -> Result<Resolution, ClientError> {
        let mut trace = ResolveTrace {
            query: query.as_str().to_string(),
            ..ResolveTrace::default()
        };

        match self.client.fetch(query.as_str(), options.page, options.page_size) {
            Ok(outcome) => {
                trace.direct = Some(PhaseTrace {
                    scheme: outcome.scheme,
                    rows: outcome.rows.len(),
                    head: outcome.head.clone(),
                });
                let codes = filter_codes(&outcome.rows, query);
                if !codes.is_empty() {
                    return Ok(Resolution { codes, trace });
                }
            }
            Err(err) => {
                if !options.scan {
                    return Err(err);
                }
                tracing::warn!("direct fetch failed, degrading to nationwide scan: {err}");
                trace.direct_error = Some(err.to_string());
            }
        }

        if !options.scan {
            return Ok(Resolution {
                codes: BTreeSet::new(),
                trace,
            });
        }

        for province in &self.provinces {
            match self.client.fetch(province, 1, options.page_size) {
                Ok(outcome) => {
                    trace.scanned.push(ProvinceTrace {
                        province: province.clone(),
                        rows: outcome.rows.len(),
                        scheme: outcome.scheme,
                    });
                    let codes = filter_codes(&outcome.rows, query);
                    if !codes.is_empty() {
                        tracing::debug!(
                            province = %province,
                            matches = codes.len(),
                            "nationwide scan matched"
                        );
                        return Ok(Resolution { codes, trace });
                    }
                }
                Err(err) => {
                    trace.scan_errors.push(ProvinceError {
                        province: province.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok(Resolution {
            codes: BTreeSet::new(),
            trace,
        })
    }
}
