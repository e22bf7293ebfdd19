// web_app/pages/mod.rs - Page components module
//
// - SearchPage: search box, trending strip and results

pub mod search;

// Re-export page components
pub use search::SearchPage;
