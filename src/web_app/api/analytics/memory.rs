// web_app/api/analytics/memory.rs - Process-local search counts
//
// Used when no database is configured and as the store in tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use super::{rank_trending, AnalyticsError, SearchAnalytics};
use crate::web_app::model::{SearchCountRecord, SearchHit};

#[derive(Default)]
pub struct MemorySearchAnalytics {
    records: Mutex<HashMap<String, SearchCountRecord>>,
}

impl MemorySearchAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct search terms recorded
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, search_term: &str) -> Option<SearchCountRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(search_term)
            .cloned()
    }
}

#[async_trait]
impl SearchAnalytics for MemorySearchAnalytics {
    fn name(&self) -> &str {
        "memory"
    }

    async fn record_search(&self, hit: &SearchHit) -> Result<SearchCountRecord, AnalyticsError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let record = records
            .entry(hit.search_term.clone())
            .and_modify(|record| record.count += 1)
            .or_insert_with(|| SearchCountRecord {
                id: Uuid::new_v4().to_string(),
                search_term: hit.search_term.clone(),
                count: 1,
                movie_id: hit.movie_id,
                poster_url: hit.poster_url.clone(),
            });
        Ok(record.clone())
    }

    async fn top_trending(&self, limit: usize) -> Result<Vec<SearchCountRecord>, AnalyticsError> {
        let snapshot: Vec<SearchCountRecord> = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        Ok(rank_trending(snapshot, limit))
    }
}
