//! # Application State
//!
//! Shared state for the Axum application: the blocking region resolver
//! behind an `Arc`, or `None` when no registry key was configured at
//! startup (lookup endpoints then answer 503).

use std::sync::Arc;

use jibeon_mois_client::Resolver;

use crate::error::AppError;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: Option<Arc<Resolver>>,
}

impl AppState {
    /// Create application state around an optional resolver.
    pub fn new(resolver: Option<Arc<Resolver>>) -> Self {
        Self { resolver }
    }

    /// The configured resolver, or a 503-mapping error when absent.
    pub(crate) fn resolver(&self) -> Result<Arc<Resolver>, AppError> {
        self.resolver.clone().ok_or_else(|| {
            AppError::NotConfigured(
                "registry service key missing — set PUBLICDATA_KEY".to_string(),
            )
        })
    }
}
