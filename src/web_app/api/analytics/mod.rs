// web_app/api/analytics/mod.rs - Search count storage
//
// Every backend implements the same increment-or-insert contract:
// recording a hit for a known term bumps its count by exactly one, an
// unknown term gets a fresh record with count 1. Backends do the upsert
// atomically so concurrent identical searches are never undercounted.
//
// Callers outside this module use `record_search_logged` and
// `trending_or_empty`, which swallow failures after logging them.

pub mod appwrite;
pub mod memory;
pub mod postgres;

pub use appwrite::AppwriteSearchAnalytics;
pub use memory::MemorySearchAnalytics;
pub use postgres::PgSearchAnalytics;

use async_trait::async_trait;

use crate::web_app::model::{SearchCountRecord, SearchHit};

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics backend unreachable: {0}")]
    Transport(String),

    #[error("analytics backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("analytics response could not be decoded: {0}")]
    Decode(String),

    #[error("analytics database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait SearchAnalytics: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// Increment the count for `hit.search_term`, creating the record if needed
    async fn record_search(&self, hit: &SearchHit) -> Result<SearchCountRecord, AnalyticsError>;

    /// Up to `limit` records, highest count first
    async fn top_trending(&self, limit: usize) -> Result<Vec<SearchCountRecord>, AnalyticsError>;
}

/// Record a hit, logging instead of returning any failure
pub async fn record_search_logged(store: &dyn SearchAnalytics, hit: &SearchHit) {
    match store.record_search(hit).await {
        Ok(record) => tracing::info!(
            backend = store.name(),
            term = %record.search_term,
            count = record.count,
            "Recorded search"
        ),
        Err(e) => tracing::error!(
            backend = store.name(),
            term = %hit.search_term,
            "Search logging error: {}",
            e
        ),
    }
}

/// Trending records, or an empty list when the store fails
pub async fn trending_or_empty(store: &dyn SearchAnalytics, limit: usize) -> Vec<SearchCountRecord> {
    match store.top_trending(limit).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(backend = store.name(), "Failed to load trending searches: {}", e);
            Vec::new()
        }
    }
}

/// Order records by descending count (ties by term) and keep `limit`
pub fn rank_trending(mut records: Vec<SearchCountRecord>, limit: usize) -> Vec<SearchCountRecord> {
    records.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.search_term.cmp(&b.search_term))
    });
    records.truncate(limit);
    records
}
