//! Agoda Search Proxy
//!
//! A request-translation proxy: simplified hotel-search parameters in,
//! one upstream Agoda GraphQL query out, flat hotel records back.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
