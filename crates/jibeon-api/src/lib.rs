//! # jibeon-api — Axum API Service
//!
//! HTTP surface for the jibeon toolkit, built on Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `GET /v1/region` — resolve a region name into 10-digit codes
//! - `GET /v1/pnu` — resolve a region name and encode a 19-digit PNU
//! - `GET /healthz` — liveness probe (unauthenticated)
//!
//! ## Architecture
//!
//! No business logic in route handlers — they delegate to
//! `jibeon-mois-client` and `jibeon-core`. The resolver is blocking by
//! design, so handlers wrap it in `tokio::task::spawn_blocking`. All
//! errors map to structured JSON responses via [`AppError`]. CORS is
//! permissive: the endpoints serve public registry data to browser
//! clients.

pub mod error;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::region::router())
        .merge(routes::pnu::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Unauthenticated health probe.
    let health = Router::new().route("/healthz", axum::routing::get(healthz));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn healthz() -> &'static str {
    "ok"
}
