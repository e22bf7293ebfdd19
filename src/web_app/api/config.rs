// web_app/api/config.rs - Server configuration from the environment
//
// Read once at startup (after `dotenv`), never reloaded.

use std::env;
use std::time::Duration;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("APPWRITE_ENDPOINT is set but {0} is not")]
    IncompleteAppwrite(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key; without it the collection must allow guest access
    pub api_key: Option<String>,
}

/// Where search counts are stored
#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsBackend {
    Appwrite(AppwriteConfig),
    Postgres { database_url: String },
    /// Process-local store, lost on restart
    Memory,
}

impl AnalyticsBackend {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsBackend::Appwrite(_) => "appwrite",
            AnalyticsBackend::Postgres { .. } => "postgres",
            AnalyticsBackend::Memory => "memory",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub analytics: AnalyticsBackend,
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get("TMDB_API_KEY").ok_or(ConfigError::Missing("TMDB_API_KEY"))?;
        let base_url = get("TMDB_BASE_URL").unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());
        let timeout_secs = match get("TMDB_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "TMDB_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TMDB_TIMEOUT_SECS,
        };

        let analytics = if let Some(endpoint) = get("APPWRITE_ENDPOINT") {
            let require = |key: &'static str| get(key).ok_or(ConfigError::IncompleteAppwrite(key));
            AnalyticsBackend::Appwrite(AppwriteConfig {
                endpoint,
                project_id: require("APPWRITE_PROJECT_ID")?,
                database_id: require("APPWRITE_DATABASE_ID")?,
                collection_id: require("APPWRITE_COLLECTION_ID")?,
                api_key: get("APPWRITE_API_KEY"),
            })
        } else if let Some(database_url) = get("DATABASE_URL") {
            AnalyticsBackend::Postgres { database_url }
        } else {
            AnalyticsBackend::Memory
        };

        Ok(AppConfig {
            tmdb: TmdbConfig {
                api_key,
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            analytics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_api_key_is_required() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TMDB_API_KEY"));
    }

    #[test]
    fn test_defaults_fall_back_to_memory_store() {
        let config = AppConfig::from_lookup(lookup(&[("TMDB_API_KEY", "secret")])).unwrap();
        assert_eq!(config.tmdb.api_key, "secret");
        assert_eq!(config.tmdb.base_url, DEFAULT_TMDB_BASE_URL);
        assert_eq!(config.tmdb.timeout, Duration::from_secs(10));
        assert_eq!(config.analytics, AnalyticsBackend::Memory);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "secret"),
            ("DATABASE_URL", "   "),
        ]))
        .unwrap();
        assert_eq!(config.analytics.name(), "memory");
    }

    #[test]
    fn test_invalid_timeout() {
        let err = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "secret"),
            ("TMDB_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "TMDB_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn test_appwrite_wins_over_postgres() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "secret"),
            ("DATABASE_URL", "postgres://localhost/movies"),
            ("APPWRITE_ENDPOINT", "https://cloud.appwrite.io/v1"),
            ("APPWRITE_PROJECT_ID", "proj"),
            ("APPWRITE_DATABASE_ID", "db"),
            ("APPWRITE_COLLECTION_ID", "metrics"),
        ]))
        .unwrap();

        match config.analytics {
            AnalyticsBackend::Appwrite(appwrite) => {
                assert_eq!(appwrite.project_id, "proj");
                assert_eq!(appwrite.collection_id, "metrics");
                assert!(appwrite.api_key.is_none());
            }
            other => panic!("expected appwrite backend, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_appwrite_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "secret"),
            ("APPWRITE_ENDPOINT", "https://cloud.appwrite.io/v1"),
            ("APPWRITE_PROJECT_ID", "proj"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::IncompleteAppwrite("APPWRITE_DATABASE_ID"));
    }

    #[test]
    fn test_postgres_backend() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "secret"),
            ("DATABASE_URL", "postgres://localhost/movies"),
        ]))
        .unwrap();
        assert_eq!(
            config.analytics,
            AnalyticsBackend::Postgres {
                database_url: "postgres://localhost/movies".to_string()
            }
        );
    }
}
