//! Upstream response shaping.
//!
//! The upstream response is optional at every level of nesting, so every
//! field is read through a null-tolerant JSON-pointer navigation that
//! degrades to a documented default instead of failing. The only hard
//! precondition is the presence of the property list itself.

use chrono::NaiveDate;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{HotelSummary, SearchParams},
};

const PROPERTIES_PATH: &str = "/data/citySearch/properties";

/// Fallback hotel name when the upstream record has no display name
const UNKNOWN_HOTEL: &str = "Unknown Hotel";

/// Safe navigation: follow a JSON pointer, treating explicit nulls the same
/// as absent intermediate objects.
fn nav<'a>(value: &'a Value, pointer: &str) -> Option<&'a Value> {
    value.pointer(pointer).filter(|v| !v.is_null())
}

fn nav_str(value: &Value, pointer: &str) -> Option<String> {
    nav(value, pointer).and_then(Value::as_str).map(str::to_string)
}

fn nav_f64(value: &Value, pointer: &str) -> Option<f64> {
    nav(value, pointer).and_then(Value::as_f64)
}

fn nav_i64(value: &Value, pointer: &str) -> Option<i64> {
    nav(value, pointer).and_then(Value::as_i64)
}

fn nav_bool(value: &Value, pointer: &str) -> Option<bool> {
    nav(value, pointer).and_then(Value::as_bool)
}

/// Property IDs arrive as numbers or strings depending on the upstream
/// schema version; normalize both to a string.
fn property_id(item: &Value) -> String {
    match nav(item, "/propertyId") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Flatten one upstream property item. Never fails: absent leaves map to
/// their documented defaults.
fn shape_item(item: &Value, params: &SearchParams, search_date: NaiveDate) -> HotelSummary {
    // Only the first offer's first room offer is consulted for pricing
    let room_pricing = "/pricing/offers/0/roomOffers/0/room/pricing/0";

    HotelSummary {
        property_id: property_id(item),
        hotel_name: nav_str(item, "/content/informationSummary/displayName")
            .unwrap_or_else(|| UNKNOWN_HOTEL.to_string()),
        star_rating: nav_f64(item, "/content/informationSummary/rating"),
        accommodation_type: nav_str(item, "/content/informationSummary/accommodationType"),
        city_name: nav_str(item, "/content/informationSummary/address/city/name")
            .unwrap_or_default(),
        area_name: nav_str(item, "/content/informationSummary/address/area/name")
            .unwrap_or_default(),
        review_count: nav_i64(item, "/content/reviews/cumulative/reviewCount"),
        review_score: nav_f64(item, "/content/reviews/cumulative/score"),
        is_available: nav_bool(item, "/pricing/isAvailable").unwrap_or(false),
        price_per_night: nav_str(
            item,
            &format!("{}/price/perNight/exclusive/display", room_pricing),
        ),
        currency: nav_str(item, &format!("{}/currency", room_pricing))
            .unwrap_or_else(|| "INR".to_string()),
        search_date,
        check_in_date: params.checkin,
        check_out_date: params.checkout,
    }
}

/// Shape the full upstream response into flat records, one per property
/// item, preserving upstream order.
///
/// Fails with [`AppError::UpstreamDataMissing`] when the property list is
/// absent or null; everything below that level degrades to defaults.
pub fn shape(
    response: &Value,
    params: &SearchParams,
    search_date: NaiveDate,
) -> AppResult<Vec<HotelSummary>> {
    let properties = nav(response, PROPERTIES_PATH)
        .and_then(Value::as_array)
        .ok_or(AppError::UpstreamDataMissing)?;

    tracing::debug!("Shaping {} upstream property items", properties.len());

    Ok(properties
        .iter()
        .map(|item| shape_item(item, params, search_date))
        .collect())
}
