//! Hotel search endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{HotelSearchQuery, SearchResponse},
};

/// Search hotels for a city and date range
#[utoipa::path(
    get,
    path = "/hotels/search",
    tag = "hotels",
    params(HotelSearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Invalid date or parameter", body = crate::error::ErrorResponse),
        (status = 502, description = "Upstream Agoda failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn search(
    State(state): State<crate::AppState>,
    Query(query): Query<HotelSearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let response = state.services.search.search(&query).await?;
    Ok(Json(response))
}

/// Fallback for every verb other than GET on the search route. OPTIONS
/// preflight is answered by the CORS layer before reaching the router.
pub async fn method_not_allowed() -> AppError {
    AppError::UnsupportedMethod
}
