use crate::models::Planet;
use crate::services::PlanetStore;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Planet {0} not found")]
    NotFound(i32),

    #[error("Planet lookup failed: {0}")]
    Store(#[source] AppError),
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(id) => {
                AppError::NotFound(anyhow::anyhow!("Planet {} not found", id))
            }
            LookupError::Store(AppError::DatabaseError(e)) => AppError::DatabaseError(e),
            LookupError::Store(e) => AppError::DatabaseError(anyhow::Error::new(e)),
        }
    }
}

/// Resolves a numeric identifier to exactly one planet record.
#[derive(Clone)]
pub struct PlanetLookup {
    store: Arc<dyn PlanetStore>,
}

impl PlanetLookup {
    pub fn new(store: Arc<dyn PlanetStore>) -> Self {
        Self { store }
    }

    pub async fn find(&self, id: i32) -> Result<Planet, LookupError> {
        tracing::debug!(planet_id = id, "Looking up planet");

        match self.store.find_by_identifier(id).await {
            Ok(Some(planet)) => Ok(planet),
            Ok(None) => {
                tracing::info!(planet_id = id, "Planet not found");
                Err(LookupError::NotFound(id))
            }
            Err(e) => {
                tracing::error!(planet_id = id, error = %e, "Planet lookup failed");
                Err(LookupError::Store(e))
            }
        }
    }

    /// Reachability of the underlying store.
    pub async fn store_reachable(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
