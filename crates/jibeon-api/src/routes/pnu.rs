//! # PNU Conversion Endpoint
//!
//! `GET /v1/pnu?q=<name>&lot=<lot>` resolves a region name and encodes
//! the 19-digit PNU. Ambiguous resolutions answer 409 with the candidate
//! codes unless `first=true` opts into taking the lexicographically
//! first one.

use axum::extract::{Query as Params, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use jibeon_core::{LotSpec, Pnu, Query, RegionCode};
use jibeon_mois_client::ResolveOptions;

use crate::error::AppError;
use crate::state::AppState;

fn default_rows() -> u32 {
    1000
}

fn default_scan() -> bool {
    true
}

/// Query parameters for PNU conversion.
#[derive(Debug, Deserialize)]
pub struct PnuParams {
    /// Region name fragment to resolve.
    #[serde(default)]
    pub q: String,
    /// Lot designation (지번), e.g. "2-14" or "산 176-18".
    #[serde(default)]
    pub lot: String,
    /// Take the first code when resolution is ambiguous.
    #[serde(default)]
    pub first: bool,
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default = "default_scan")]
    pub scan: bool,
}

/// PNU conversion response body.
#[derive(Debug, Serialize)]
pub struct PnuResponse {
    pub ok: bool,
    pub pnu: Pnu,
    pub region_cd: RegionCode,
    pub mountain: bool,
    pub main: u32,
    pub sub: u32,
}

/// Build the pnu router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/pnu", get(convert_pnu))
}

async fn convert_pnu(
    State(state): State<AppState>,
    Params(params): Params<PnuParams>,
) -> Result<Json<PnuResponse>, AppError> {
    let resolver = state.resolver()?;
    let query = Query::new(&params.q).map_err(|e| AppError::Validation(e.to_string()))?;
    let lot = LotSpec::parse(&params.lot).map_err(|e| AppError::Validation(e.to_string()))?;
    let options = ResolveOptions {
        page: 1,
        page_size: params.rows,
        scan: params.scan,
    };

    let normalized = query.as_str().to_string();
    let resolution =
        tokio::task::spawn_blocking(move || resolver.resolve(&query, &options))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .map_err(|e| AppError::Upstream(e.to_string()))?;

    let Some(code) = resolution.first() else {
        return Err(AppError::NotFound(normalized));
    };
    if resolution.codes.len() > 1 && !params.first {
        return Err(AppError::Ambiguous {
            count: resolution.codes.len(),
            candidates: resolution
                .codes
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        });
    }

    let region_cd = code.clone();
    let pnu = Pnu::from_parts(&region_cd, &lot);
    Ok(Json(PnuResponse {
        ok: true,
        pnu,
        region_cd,
        mountain: lot.mountain,
        main: lot.main,
        sub: lot.sub,
    }))
}
