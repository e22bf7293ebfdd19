// web_app/api/analytics/postgres.rs - Search counts in PostgreSQL
//
// The upsert is a single `INSERT ... ON CONFLICT` statement, so two
// concurrent searches for the same term both land as increments.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{AnalyticsError, SearchAnalytics};
use crate::web_app::model::{SearchCountRecord, SearchHit};

/// Statements that create the analytics schema, safe to run repeatedly
pub const SCHEMA_SQL: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS analytics",
    r#"
    CREATE TABLE IF NOT EXISTS analytics.search_counts (
        id TEXT PRIMARY KEY,
        search_term TEXT NOT NULL UNIQUE,
        count BIGINT NOT NULL DEFAULT 1,
        movie_id BIGINT NOT NULL,
        poster_url TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS search_counts_count_idx
        ON analytics.search_counts (count DESC)
    "#,
];

pub struct PgSearchAnalytics {
    pool: PgPool,
}

impl PgSearchAnalytics {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect with a small pool and make sure the schema exists
    pub async fn connect(database_url: &str) -> Result<Self, AnalyticsError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), AnalyticsError> {
        for statement in SCHEMA_SQL {
            sqlx::query(*statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SearchAnalytics for PgSearchAnalytics {
    fn name(&self) -> &str {
        "postgres"
    }

    async fn record_search(&self, hit: &SearchHit) -> Result<SearchCountRecord, AnalyticsError> {
        // movie_id and poster_url keep the values of the first search
        let record = sqlx::query_as::<_, SearchCountRecord>(
            r#"
            INSERT INTO analytics.search_counts (id, search_term, count, movie_id, poster_url)
            VALUES ($1, $2, 1, $3, $4)
            ON CONFLICT (search_term) DO UPDATE
                SET count = analytics.search_counts.count + 1,
                    updated_at = now()
            RETURNING id, search_term, count, movie_id, poster_url
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&hit.search_term)
        .bind(hit.movie_id)
        .bind(&hit.poster_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn top_trending(&self, limit: usize) -> Result<Vec<SearchCountRecord>, AnalyticsError> {
        let records = sqlx::query_as::<_, SearchCountRecord>(
            r#"
            SELECT id, search_term, count, movie_id, poster_url
            FROM analytics.search_counts
            ORDER BY count DESC, search_term ASC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
