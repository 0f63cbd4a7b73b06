//! Hotel search orchestration: normalize, build, call upstream, shape.

use chrono::Utc;
use std::sync::Arc;

use crate::{
    config::{AgodaConstants, SearchDefaults},
    error::AppResult,
    models::{HotelSearchQuery, SearchResponse},
    services::{agoda::AgodaClient, query_builder, shaper, validation},
};

/// Stateless per-request pipeline over an injected upstream client.
#[derive(Clone)]
pub struct SearchService {
    client: Arc<dyn AgodaClient>,
    constants: AgodaConstants,
    defaults: SearchDefaults,
}

impl SearchService {
    pub fn new(
        client: Arc<dyn AgodaClient>,
        constants: AgodaConstants,
        defaults: SearchDefaults,
    ) -> Self {
        Self {
            client,
            constants,
            defaults,
        }
    }

    /// Run one search. Validation failures surface before any upstream call.
    pub async fn search(&self, query: &HotelSearchQuery) -> AppResult<SearchResponse> {
        let params = validation::normalize(query, &self.defaults)?;

        tracing::info!(
            "Hotel search: city={} checkin={} checkout={} adults={} rooms={}",
            params.city,
            params.checkin,
            params.checkout,
            params.adults,
            params.rooms
        );

        let payload = query_builder::build_payload(&params, &self.constants, Utc::now());
        let response = self.client.property_search(&payload).await?;
        let hotels = shaper::shape(&response, &params, Utc::now().date_naive())?;

        tracing::info!("Search returned {} hotels", hotels.len());

        Ok(SearchResponse {
            success: true,
            count: hotels.len(),
            search_params: params,
            hotels,
        })
    }
}
