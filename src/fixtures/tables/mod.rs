// fixtures/tables/mod.rs
//
// Each test table is a struct that implements the TestTable trait.

pub mod search_counts;

pub use search_counts::SearchCountsTable;
