//! # jibeon-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the jibeon toolkit.
//! Binds to a configurable port (default 8080).

use std::sync::Arc;

use jibeon_api::AppState;
use jibeon_mois_client::{RegistryConfig, Resolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    // Attempt to create the registry resolver from environment. The
    // resolver's transport is blocking, so it is built off the async
    // workers.
    let resolver = match RegistryConfig::from_env() {
        Ok(config) => {
            tracing::info!("registry client configured");
            match tokio::task::spawn_blocking(move || Resolver::new(config)).await? {
                Ok(resolver) => Some(Arc::new(resolver)),
                Err(e) => {
                    tracing::error!("failed to create registry client: {e}");
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                "registry client not configured: {e}. Lookup endpoints will return 503."
            );
            None
        }
    };

    let app = jibeon_api::app(AppState::new(resolver));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("jibeon API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
