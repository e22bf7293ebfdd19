// web_app/api/catalog.rs - TMDB movie catalog client
//
// One GET per search, no retries. An empty term asks for the popularity
// listing, anything else goes through the text search endpoint.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::config::TmdbConfig;
use crate::web_app::model::{Movie, API_FAILURE_MESSAGE, GENERIC_FETCH_ERROR};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog returned HTTP {0}")]
    Status(u16),

    #[error("catalog response is not valid JSON: {0}")]
    Decode(String),

    #[error("catalog reported an error: {0}")]
    Api(String),
}

impl CatalogError {
    /// Text shown to the user for this failure
    ///
    /// Only an explicit API error carries its own message; every other
    /// failure maps to the generic one.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Api(message) => message.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

/// The two request shapes the catalog understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Popular movies, used while the search box is empty
    Discover,
    Search(String),
}

impl CatalogQuery {
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() {
            CatalogQuery::Discover
        } else {
            CatalogQuery::Search(term.to_string())
        }
    }

    /// Path and query string relative to the API base URL
    pub fn endpoint(&self) -> String {
        match self {
            CatalogQuery::Discover => "/discover/movie?sort_by=popularity.desc".to_string(),
            CatalogQuery::Search(term) => {
                format!("/search/movie?query={}", urlencoding::encode(term))
            }
        }
    }

    /// The user's search term, `None` for discovery
    pub fn term(&self) -> Option<&str> {
        match self {
            CatalogQuery::Discover => None,
            CatalogQuery::Search(term) => Some(term),
        }
    }
}

/// Source of movie listings
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Movie>, CatalogError>;
}

/// Parse a catalog response body
///
/// - not JSON at all is a decode error
/// - `"Response": "False"` is an explicit API error
/// - a missing or non-array `results` is an empty list
/// - entries without a usable `id` are dropped
pub fn parse_movies(body: &str) -> Result<Vec<Movie>, CatalogError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    if value.get("Response").and_then(Value::as_str) == Some("False") {
        let message = value
            .get("Error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(API_FAILURE_MESSAGE);
        return Err(CatalogError::Api(message.to_string()));
    }

    let Some(results) = value.get("results").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(results
        .iter()
        .filter_map(|entry| serde_json::from_value::<Movie>(entry.clone()).ok())
        .collect())
}

/// TMDB v3 client authenticated with a bearer token
pub struct TmdbCatalog {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbCatalog {
    pub fn new(config: &TmdbConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url_for(&self, query: &CatalogQuery) -> String {
        format!("{}{}", self.base_url, query.endpoint())
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Movie>, CatalogError> {
        let url = self.url_for(query);
        debug!(url = %url, "Fetching movies from TMDB");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let movies = parse_movies(&body)?;
        debug!(results = movies.len(), "TMDB request complete");
        Ok(movies)
    }
}
