// common/mod.rs - Shared test utilities
//
// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use movie_finder::fixtures::TestTable;
use movie_finder::web_app::api::analytics::{AnalyticsError, SearchAnalytics};
use movie_finder::web_app::api::catalog::{CatalogError, CatalogQuery, MovieCatalog};
use movie_finder::web_app::model::{Movie, SearchCountRecord, SearchHit};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a database connection pool for testing
///
/// Returns `Ok(None)` when DATABASE_URL is not set so database suites can
/// skip on machines without Postgres.
pub async fn create_test_pool() -> anyhow::Result<Option<PgPool>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .connect(&database_url)
        .await?;

    Ok(Some(pool))
}

/// Run a fixture's setup statements in order
pub async fn setup_table<T: TestTable>(pool: &PgPool) -> anyhow::Result<()> {
    for statement in T::setup_sql() {
        sqlx::query(*statement).execute(pool).await?;
    }
    Ok(())
}

/// Drop everything a fixture created
pub async fn teardown_table<T: TestTable>(pool: &PgPool) -> anyhow::Result<()> {
    for statement in T::teardown_sql() {
        sqlx::query(*statement).execute(pool).await?;
    }
    Ok(())
}

pub fn movie(id: i64, title: &str, poster_path: Option<&str>) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: poster_path.map(str::to_string),
        popularity: 50.0,
        vote_average: 7.5,
        release_date: Some("1999-03-31".to_string()),
        original_language: "en".to_string(),
        overview: String::new(),
    }
}

pub fn hit(term: &str, movie_id: i64) -> SearchHit {
    SearchHit {
        search_term: term.to_string(),
        movie_id,
        poster_url: format!("https://image.tmdb.org/t/p/w500/{movie_id}.jpg"),
    }
}

/// Catalog that answers every query the same way and remembers what it was asked
pub struct FakeCatalog {
    response: Result<Vec<Movie>, u16>,
    queries: Mutex<Vec<CatalogQuery>>,
}

impl FakeCatalog {
    pub fn returning(movies: Vec<Movie>) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(movies),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// Every fetch fails with the given HTTP status
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            response: Err(status),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Movie>, CatalogError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.response {
            Ok(movies) => Ok(movies.clone()),
            Err(status) => Err(CatalogError::Status(*status)),
        }
    }
}

/// Analytics store whose backend is always down
pub struct FailingAnalytics;

#[async_trait]
impl SearchAnalytics for FailingAnalytics {
    fn name(&self) -> &str {
        "failing"
    }

    async fn record_search(&self, _hit: &SearchHit) -> Result<SearchCountRecord, AnalyticsError> {
        Err(AnalyticsError::Transport("store offline".to_string()))
    }

    async fn top_trending(&self, _limit: usize) -> Result<Vec<SearchCountRecord>, AnalyticsError> {
        Err(AnalyticsError::Transport("store offline".to_string()))
    }
}
