use crate::config::{MongoConfig, DEFAULT_DATABASE};
use crate::models::Planet;
use crate::services::PlanetStore;
use async_trait::async_trait;
use mongodb::{bson::doc, options::ClientOptions, Client as MongoClient, Collection, Database};
use secrecy::ExposeSecret;
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoDb {
    /// Builds the client. The driver connects lazily, so an unreachable server
    /// is not reported here; only an unusable URI is.
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(config.uri.expose_secret())
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse MongoDB connection string: {}", e);
                AppError::ConfigError(e.into())
            })?;
        client_options.app_name = Some("planet-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;

        let db = match &config.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        tracing::info!(
            database = %db.name(),
            collection = %config.collection,
            "MongoDB client created"
        );

        Ok(Self {
            client,
            db,
            collection: config.collection.clone(),
        })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn planets(&self) -> Collection<Planet> {
        self.db.collection(&self.collection)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Closes pooled connections. Clones of this handle become unusable.
    pub async fn shutdown(self) {
        tracing::info!("Closing MongoDB connections");
        self.client.shutdown().await;
    }
}

#[async_trait]
impl PlanetStore for MongoDb {
    async fn find_by_identifier(&self, id: i32) -> Result<Option<Planet>, AppError> {
        self.planets()
            .find_one(doc! { "id": id }, None)
            .await
            .map_err(AppError::from)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.health_check().await
    }
}
