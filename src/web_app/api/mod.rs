// web_app/api/mod.rs - Server-side logic (SSR only)
//
// - config: environment configuration
// - catalog: TMDB client
// - analytics: search count stores
// - services: the registry server functions read from

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod services;
