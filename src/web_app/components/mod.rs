// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Loading, error and empty states
// - search.rs: The search box
// - movie.rs: Movie cards, result list and the trending strip

pub mod common;
pub mod movie;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use movie::*;
pub use search::*;
