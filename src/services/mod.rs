//! Business logic services

pub mod agoda;
pub mod query_builder;
pub mod search;
pub mod shaper;
pub mod validation;

use std::sync::Arc;

use crate::config::AppConfig;
use agoda::AgodaClient;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub search: search::SearchService,
}

impl Services {
    /// Create all services with the given upstream client
    pub fn new(config: &AppConfig, client: Arc<dyn AgodaClient>) -> Self {
        Self {
            search: search::SearchService::new(
                client,
                config.agoda.clone(),
                config.defaults.clone(),
            ),
        }
    }
}
