// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the WASM client and the server functions,
// so everything here must stay free of server-only dependencies.

use serde::{Deserialize, Deserializer, Serialize};

/// Base URL for TMDB poster images (w500 rendition)
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Placeholder shown when a movie has no poster
pub const NO_POSTER_PLACEHOLDER: &str = "/no-movie.svg";

/// Message shown for transport, status and decode failures
pub const GENERIC_FETCH_ERROR: &str = "Error fetching movies. Please try again later...";

/// Fallback message when the catalog flags an error without describing it
pub const API_FAILURE_MESSAGE: &str = "Failed to fetch movies";

/// How many trending search terms the home page shows
pub const TRENDING_LIMIT: usize = 4;

/// Movie as returned by the TMDB list endpoints
///
/// Only `id` is mandatory; every other field falls back to a default when
/// it is missing or `null`, so a sparse entry still renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
}

impl Movie {
    /// Absolute poster URL, if TMDB knows a poster for this movie
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(poster_url_for)
    }

    /// Image source for cards: the poster or the local placeholder
    pub fn poster_src(&self) -> String {
        self.poster_url()
            .unwrap_or_else(|| NO_POSTER_PLACEHOLDER.to_string())
    }

    /// Vote average with one decimal, "N/A" when unrated
    pub fn rating_label(&self) -> String {
        if self.vote_average > 0.0 {
            format!("{:.1}", self.vote_average)
        } else {
            "N/A".to_string()
        }
    }

    /// Year part of the release date, "N/A" when unknown
    pub fn release_year(&self) -> String {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
            .unwrap_or("N/A")
            .to_string()
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Build the poster URL for a TMDB poster path such as `/abc.jpg`
pub fn poster_url_for(poster_path: &str) -> String {
    format!("{}{}", POSTER_BASE_URL, poster_path)
}

/// Aggregated search count for one search term
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct SearchCountRecord {
    pub id: String,
    pub search_term: String,
    pub count: i64,
    pub movie_id: i64,
    pub poster_url: String,
}

/// What a single successful search contributes to the analytics store
///
/// Built from the first result of a text search. Discovery listings never
/// produce a hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub search_term: String,
    pub movie_id: i64,
    pub poster_url: String,
}

impl SearchHit {
    /// Derive the hit for `search_term` from a result list
    ///
    /// Returns `None` for an empty term or an empty result list.
    pub fn from_results(search_term: &str, movies: &[Movie]) -> Option<Self> {
        if search_term.is_empty() {
            return None;
        }
        let first = movies.first()?;
        Some(SearchHit {
            search_term: search_term.to_string(),
            movie_id: first.id,
            poster_url: first.poster_src(),
        })
    }
}
