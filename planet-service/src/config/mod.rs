use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "solar-system";
pub const DEFAULT_COLLECTION: &str = "planets";

#[derive(Debug, Clone)]
pub struct PlanetConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    /// Runtime environment name reported by `/os`.
    pub environment: Option<String>,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: Secret<String>,
    /// Falls back to the database named in the URI, then to [`DEFAULT_DATABASE`].
    pub database: Option<String>,
    pub collection: String,
}

impl PlanetConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(PlanetConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: Secret::new(required_env("MONGO_URI")?),
                database: optional_env("MONGO_DATABASE"),
                collection: optional_env("MONGO_COLLECTION")
                    .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            },
            environment: optional_env("ENVIRONMENT"),
            static_dir: optional_env("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
        })
    }
}

fn required_env(key: &str) -> Result<String, AppError> {
    optional_env(key).ok_or_else(|| {
        AppError::ConfigError(anyhow::anyhow!(format!("{} is required but not set", key)))
    })
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        env::set_var("PLANET_TEST_BLANK", "   ");
        assert_eq!(optional_env("PLANET_TEST_BLANK"), None);
    }

    #[test]
    fn required_reports_missing_key() {
        env::remove_var("PLANET_TEST_MISSING");
        let err = required_env("PLANET_TEST_MISSING").unwrap_err();
        assert!(err.to_string().contains("PLANET_TEST_MISSING is required"));
    }

    #[test]
    fn values_are_trimmed() {
        env::set_var("PLANET_TEST_TRIM", " production ");
        assert_eq!(
            optional_env("PLANET_TEST_TRIM").as_deref(),
            Some("production")
        );
    }
}
