//! # Region Resolution Endpoint
//!
//! `GET /v1/region?q=<name>` resolves a free-text region name into the
//! matching 10-digit codes. An empty match is a 200 with `count: 0` —
//! registry outages are the only 5xx here.

use axum::extract::{Query as Params, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use jibeon_core::{Query, RegionCode};
use jibeon_mois_client::{ResolveOptions, ResolveTrace};

use crate::error::AppError;
use crate::state::AppState;

fn default_page() -> u32 {
    1
}

fn default_rows() -> u32 {
    1000
}

fn default_scan() -> bool {
    true
}

/// Query parameters for region resolution.
#[derive(Debug, Deserialize)]
pub struct RegionParams {
    /// Region name fragment, e.g. "서울특별시 서초구 양재동".
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_rows")]
    pub rows: u32,
    /// Nationwide-scan fallback on empty direct results.
    #[serde(default = "default_scan")]
    pub scan: bool,
    /// Include the resolution trace in the response.
    #[serde(default)]
    pub debug: bool,
}

/// Resolution response body.
#[derive(Debug, Serialize)]
pub struct RegionResponse {
    pub ok: bool,
    pub query: String,
    pub count: usize,
    pub codes: Vec<RegionCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<ResolveTrace>,
}

/// Build the region router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/region", get(resolve_region))
}

async fn resolve_region(
    State(state): State<AppState>,
    Params(params): Params<RegionParams>,
) -> Result<Json<RegionResponse>, AppError> {
    let resolver = state.resolver()?;
    let query = Query::new(&params.q).map_err(|e| AppError::Validation(e.to_string()))?;
    let options = ResolveOptions {
        page: params.page,
        page_size: params.rows,
        scan: params.scan,
    };

    let normalized = query.as_str().to_string();
    let resolution =
        tokio::task::spawn_blocking(move || resolver.resolve(&query, &options))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(RegionResponse {
        ok: true,
        query: normalized,
        count: resolution.codes.len(),
        codes: resolution.codes.into_iter().collect(),
        trace: params.debug.then_some(resolution.trace),
    }))
}
