// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn resolve_services() -> Option<crate::web_app::api::services::Services> {
    use crate::web_app::api::services::{get_services, Services};

    // Context first (tests or a per-request override), then the global registry
    use_context::<Services>().or_else(get_services)
}

/// Search the catalog; an empty query returns the popularity listing
///
/// A text search with at least one result also records the first result
/// in the analytics store. Recording runs in the background and never
/// delays or fails the search itself.
#[server(SearchMovies, "/api")]
pub async fn search_movies(query: String) -> Result<Vec<Movie>, ServerFnError> {
    use crate::web_app::api::analytics::record_search_logged;
    use crate::web_app::api::catalog::CatalogQuery;

    tracing::info!("Search request: query='{}'", query);

    let Some(services) = resolve_services() else {
        tracing::error!("Search services are not available");
        return Err(ServerFnError::new(GENERIC_FETCH_ERROR));
    };

    let catalog_query = CatalogQuery::from_term(&query);
    let movies = match services.catalog.fetch(&catalog_query).await {
        Ok(movies) => movies,
        Err(e) => {
            tracing::error!("Error fetching movies: {}", e);
            return Err(ServerFnError::new(e.user_message()));
        }
    };

    tracing::info!("Search successful: found {} movies", movies.len());

    if let Some(hit) = catalog_query
        .term()
        .and_then(|term| SearchHit::from_results(term, &movies))
    {
        let analytics = services.analytics.clone();
        tokio::spawn(async move {
            record_search_logged(analytics.as_ref(), &hit).await;
        });
    }

    Ok(movies)
}

/// Most searched terms, highest count first
///
/// Store failures are logged and reported as an empty list.
#[server(GetTrending, "/api")]
pub async fn get_trending() -> Result<Vec<SearchCountRecord>, ServerFnError> {
    use crate::web_app::api::analytics::trending_or_empty;

    let Some(services) = resolve_services() else {
        tracing::error!("Analytics services are not available");
        return Ok(Vec::new());
    };

    Ok(trending_or_empty(services.analytics.as_ref(), TRENDING_LIMIT).await)
}
