//! In-memory planet store for tests and running without a database.

use crate::models::Planet;
use crate::services::PlanetStore;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};

/// Seed records shipped with the service: the sun and nine planets.
pub const SEED_PLANETS_JSON: &str = include_str!("../../data/planets.json");

#[derive(Default)]
pub struct InMemoryPlanetStore {
    planets: Vec<Planet>,
    unavailable: AtomicBool,
}

impl InMemoryPlanetStore {
    pub fn new(planets: Vec<Planet>) -> Self {
        Self {
            planets,
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn seeded() -> Result<Self, AppError> {
        let planets: Vec<Planet> = serde_json::from_str(SEED_PLANETS_JSON)
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Invalid seed data: {}", e)))?;
        Ok(Self::new(planets))
    }

    /// While unavailable, every call fails as a lost database connection would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store is unavailable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PlanetStore for InMemoryPlanetStore {
    async fn find_by_identifier(&self, id: i32) -> Result<Option<Planet>, AppError> {
        self.check_available()?;
        Ok(self.planets.iter().find(|p| p.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_covers_sun_and_nine_planets() {
        let store = InMemoryPlanetStore::seeded().unwrap();
        for id in 0..=9 {
            let planet = store.find_by_identifier(id).await.unwrap().unwrap();
            assert_eq!(planet.id, id);
            assert!(!planet.name.is_empty());
        }
        assert!(store.find_by_identifier(10).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_identifiers_return_first_match() {
        let first = Planet {
            id: 1,
            name: "Mercury".to_string(),
            description: String::new(),
            image: String::new(),
            velocity: String::new(),
            distance: String::new(),
        };
        let second = Planet {
            name: "Impostor".to_string(),
            ..first.clone()
        };
        let store = InMemoryPlanetStore::new(vec![first, second]);

        let found = store.find_by_identifier(1).await.unwrap().unwrap();
        assert_eq!(found.name, "Mercury");
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = InMemoryPlanetStore::seeded().unwrap();
        store.set_unavailable(true);

        assert!(store.ping().await.is_err());
        assert!(store.find_by_identifier(3).await.is_err());

        store.set_unavailable(false);
        assert!(store.ping().await.is_ok());
    }
}
