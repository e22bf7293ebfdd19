// fixtures/tables/search_counts.rs
//
// The analytics.search_counts table with three known search terms.
// Counts are distinct so trending order is unambiguous:
//   batman (5) > inception (3) > alien (1)

use crate::fixtures::TestTable;
use crate::web_app::api::analytics::postgres::SCHEMA_SQL;

pub struct SearchCountsTable;

impl SearchCountsTable {
    /// Terms seeded by `setup_sql`, highest count first
    pub const SEEDED: &'static [(&'static str, i64)] =
        &[("batman", 5), ("inception", 3), ("alien", 1)];
}

impl TestTable for SearchCountsTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            "DROP SCHEMA IF EXISTS analytics CASCADE",
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
            INSERT INTO analytics.search_counts (id, search_term, count, movie_id, poster_url)
            VALUES
                ('fixture-batman', 'batman', 5, 268, 'https://image.tmdb.org/t/p/w500/batman.jpg'),
                ('fixture-inception', 'inception', 3, 27205, 'https://image.tmdb.org/t/p/w500/inception.jpg'),
                ('fixture-alien', 'alien', 1, 348, 'https://image.tmdb.org/t/p/w500/alien.jpg')
            "#,
        ]
    }

    fn teardown_sql() -> &'static [&'static str] {
        &["DROP SCHEMA IF EXISTS analytics CASCADE"]
    }
}
