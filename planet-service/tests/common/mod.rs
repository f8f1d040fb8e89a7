#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use planet_service::config::{MongoConfig, PlanetConfig, DEFAULT_COLLECTION};
use planet_service::services::InMemoryPlanetStore;
use planet_service::startup::{build_router, AppState};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_ENVIRONMENT: &str = "test";

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn test_config() -> PlanetConfig {
    PlanetConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        mongodb: MongoConfig {
            uri: Secret::new(
                std::env::var("TEST_MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            database: None,
            collection: DEFAULT_COLLECTION.to_string(),
        },
        environment: Some(TEST_ENVIRONMENT.to_string()),
        static_dir: static_dir(),
    }
}

/// Router wired to an in-memory store holding the seed data.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryPlanetStore>,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: PlanetConfig) -> Self {
        let store = InMemoryPlanetStore::seeded().expect("Failed to load seed data");
        Self::with_store(store, config)
    }

    pub fn with_store(store: InMemoryPlanetStore, config: PlanetConfig) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(store.clone(), &config);
        let router = build_router(state, &config.static_dir);

        TestApp { router, store }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Failed to parse JSON")
}
