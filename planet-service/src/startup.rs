//! Application startup and lifecycle management.
//!
//! Builds the HTTP router, owns the MongoDB client for the life of the
//! process and releases it once the server has drained.

use crate::config::PlanetConfig;
use crate::handlers;
use crate::services::{MongoDb, PlanetLookup, PlanetStore};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, RequestId,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub lookup: PlanetLookup,
    pub environment: Option<String>,
    pub ready_requires_store: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn PlanetStore>, config: &PlanetConfig) -> Self {
        Self {
            lookup: PlanetLookup::new(store),
            environment: config.environment.clone(),
            ready_requires_store: config.common.ready_requires_store,
        }
    }
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/planet", post(handlers::get_planet))
        .route("/os", get(handlers::os_info))
        .route("/live", get(handlers::live))
        .route("/ready", get(handlers::ready))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .fallback_service(ServeDir::new(static_dir))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .map(RequestId::as_str)
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Ping the store once at startup. Failure is logged, not fatal: the server
/// still starts and individual lookups report their own errors.
pub async fn verify_store(store: &dyn PlanetStore) -> bool {
    match store.ping().await {
        Ok(()) => {
            tracing::info!("Successfully connected to MongoDB");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "MongoDB is unreachable, continuing without it");
            false
        }
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    db: MongoDb,
}

impl Application {
    pub async fn build(config: PlanetConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb).await?;
        verify_store(&db).await;

        let state = AppState::new(Arc::new(db.clone()), &config);
        let router = build_router(state, &config.static_dir);

        // Port 0 picks a random port for tests
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server successfully running on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
            db,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, drain in-flight requests, then close the store.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let result = axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        if let Err(e) = &result {
            tracing::error!("Server error: {}", e);
        }

        self.db.shutdown().await;
        result
    }
}
