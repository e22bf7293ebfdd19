// web_app/api/services.rs - Shared server-side services
//
// The catalog client and the analytics store are built once at startup
// and registered globally so server functions can reach them. Tests swap
// in their own services through `set_test_services`.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::analytics::{
    AppwriteSearchAnalytics, MemorySearchAnalytics, PgSearchAnalytics, SearchAnalytics,
};
use super::catalog::{MovieCatalog, TmdbCatalog};
use super::config::{AnalyticsBackend, AppConfig};

#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn MovieCatalog>,
    pub analytics: Arc<dyn SearchAnalytics>,
}

impl Services {
    pub fn new(catalog: Arc<dyn MovieCatalog>, analytics: Arc<dyn SearchAnalytics>) -> Self {
        Self { catalog, analytics }
    }

    /// Build the TMDB client and the configured analytics backend
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = Arc::new(TmdbCatalog::new(&config.tmdb)?);

        let analytics: Arc<dyn SearchAnalytics> = match &config.analytics {
            AnalyticsBackend::Appwrite(appwrite) => {
                tracing::info!(endpoint = %appwrite.endpoint, "Using Appwrite for search analytics");
                Arc::new(AppwriteSearchAnalytics::new(appwrite.clone())?)
            }
            AnalyticsBackend::Postgres { database_url } => {
                tracing::info!("Using PostgreSQL for search analytics");
                Arc::new(PgSearchAnalytics::connect(database_url).await?)
            }
            AnalyticsBackend::Memory => {
                tracing::warn!("No analytics database configured, search counts stay in memory");
                Arc::new(MemorySearchAnalytics::new())
            }
        };

        Ok(Self::new(catalog, analytics))
    }
}

static SERVICES: OnceLock<Services> = OnceLock::new();
static TEST_SERVICES_OVERRIDE: Mutex<Option<Services>> = Mutex::new(None);

/// Register the global services
pub fn init_services(services: Services) {
    if SERVICES.set(services).is_err() {
        tracing::warn!("Services already initialized");
    } else {
        tracing::info!("Global services initialized");
    }
}

/// Set a services override for testing
pub fn set_test_services(services: Services) {
    let mut guard = TEST_SERVICES_OVERRIDE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(services);
}

/// Get the global services, preferring a test override
pub fn get_services() -> Option<Services> {
    {
        let guard = TEST_SERVICES_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(ref services) = *guard {
            return Some(services.clone());
        }
    }

    let services = SERVICES.get().cloned();
    if services.is_none() {
        tracing::warn!("Global services are not initialized");
    }
    services
}
