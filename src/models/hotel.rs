//! Hotel search models: inbound query, normalized parameters and the flat
//! output record derived from one upstream property item.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw inbound query parameters.
///
/// All fields arrive as optional strings; defaults and numeric parsing are
/// applied during normalization, not here.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct HotelSearchQuery {
    /// Agoda city identifier
    pub city: Option<String>,
    /// Check-in date (YYYY-MM-DD)
    pub checkin: Option<String>,
    /// Check-out date (YYYY-MM-DD)
    pub checkout: Option<String>,
    /// Number of adults (minimum 1)
    pub adults: Option<String>,
    /// Number of rooms (minimum 1)
    pub rooms: Option<String>,
}

/// Normalized search parameters after defaults and validation.
/// Echoed back to the caller in the success response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchParams {
    pub city: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub adults: u32,
    pub rooms: u32,
}

/// One flat record per upstream property item.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct HotelSummary {
    pub property_id: String,
    pub hotel_name: String,
    pub star_rating: Option<f64>,
    pub accommodation_type: Option<String>,
    pub city_name: String,
    pub area_name: String,
    pub review_count: Option<i64>,
    pub review_score: Option<f64>,
    pub is_available: bool,
    /// Per-night display price, exclusive of taxes and fees,
    /// taken from the first room offer only
    pub price_per_night: Option<String>,
    pub currency: String,
    /// Date the search was performed, not any upstream field
    pub search_date: NaiveDate,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

/// Success envelope for a hotel search
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    #[serde(rename = "searchParams")]
    pub search_params: SearchParams,
    pub hotels: Vec<HotelSummary>,
}
