use crate::models::Planet;
use async_trait::async_trait;
use service_core::error::AppError;

/// Read access to the planet records.
#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// First record whose `id` equals `id`, or `None`.
    async fn find_by_identifier(&self, id: i32) -> Result<Option<Planet>, AppError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<(), AppError>;
}
