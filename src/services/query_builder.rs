//! Upstream query construction.
//!
//! Translates the small flat [`SearchParams`] set into the deeply nested
//! variable structure Agoda's `citySearch` GraphQL operation expects. The
//! query document and operation name are fixed; everything that varies comes
//! from the parameters, the injected [`AgodaConstants`] and the wall clock.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::{config::AgodaConstants, models::SearchParams};

pub const OPERATION_NAME: &str = "citySearch";

/// Fixed query document: property identity, content/info summary, reviews
/// and pricing/offers. Selections must stay in sync with the paths the
/// response shaper navigates.
pub const SEARCH_QUERY: &str = r#"
query citySearch($CitySearchRequest: CitySearchRequest!, $ContentSummaryRequest: ContentSummaryRequest!, $PricingSummaryRequest: PricingRequestParameters, $PriceStreamMetaLabRequest: PriceStreamMetaLabRequest) {
  citySearch(CitySearchRequest: $CitySearchRequest) {
    searchResult {
      searchInfo {
        totalFilteredHotels
      }
    }
    properties(ContentSummaryRequest: $ContentSummaryRequest, PricingSummaryRequest: $PricingSummaryRequest, PriceStreamMetaLabRequest: $PriceStreamMetaLabRequest) {
      propertyId
      content {
        informationSummary {
          displayName
          rating
          accommodationType
          address {
            city {
              name
            }
            area {
              name
            }
          }
        }
        reviews {
          cumulative {
            reviewCount
            score
          }
        }
      }
      pricing {
        isAvailable
        offers {
          roomOffers {
            room {
              pricing {
                currency
                price {
                  perNight {
                    exclusive {
                      display
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Build the GraphQL variables for one search.
///
/// Deterministic given the parameters, constants and `booking_time`.
pub fn build_variables(
    params: &SearchParams,
    constants: &AgodaConstants,
    booking_time: DateTime<Utc>,
) -> Value {
    let checkin = params.checkin.format("%Y-%m-%d").to_string();
    let checkout = params.checkout.format("%Y-%m-%d").to_string();
    let booking_date = booking_time.to_rfc3339_opts(SecondsFormat::Millis, true);

    json!({
        "CitySearchRequest": {
            "cityId": params.city,
            "searchRequest": {
                "searchCriteria": {
                    "isRtl": false,
                    "searchType": "CITY_SEARCH",
                    "bookingDate": booking_date,
                    "checkInDate": checkin,
                    "checkOutDate": checkout,
                    "localCheckInDate": checkin,
                    "localCheckOutDate": checkout,
                    "occupancy": {
                        "numberOfAdults": params.adults,
                        "numberOfChildren": 0,
                        "numberOfRooms": params.rooms,
                        "childAges": []
                    },
                    "cityId": params.city
                },
                "searchContext": {
                    "userId": Value::Null,
                    "memberId": 0,
                    "locale": constants.locale,
                    "cid": -1,
                    "origin": constants.origin_country,
                    "platform": {
                        "id": constants.platform_id
                    },
                    "storeFrontId": constants.storefront_id,
                    "deviceTypeId": constants.device_type_id,
                    "currency": constants.currency,
                    "whiteLabelKey": Value::Null,
                    "endpointSearchType": "CitySearch",
                    "isAllowBookOnRequest": true
                },
                "sorting": {
                    "sortField": constants.sort_field,
                    "sortOrder": constants.sort_order
                },
                "page": {
                    "pageSize": constants.page_size,
                    "pageNumber": 1,
                    "pageToken": Value::Null
                },
                "requiredBasis": "PRPN",
                "requiredPrice": "Exclusive"
            }
        },
        "ContentSummaryRequest": {
            "context": {
                "rawUserId": Value::Null,
                "memberId": 0,
                "userOrigin": constants.origin_country,
                "locale": constants.locale,
                "forceExperimentsByIdNew": []
            },
            "summary": true,
            "reviews": {
                "commentary": Value::Null,
                "demographics": {
                    "providerIds": Value::Null,
                    "filter": {
                        "defaultProviderOnly": true
                    }
                },
                "summaries": {
                    "providerIds": Value::Null,
                    "apo": true,
                    "limit": 1,
                    "travellerType": Value::Null
                }
            }
        },
        "PricingSummaryRequest": {
            "cheapestOnly": true,
            "context": {
                "isAllowBookOnRequest": true,
                "occupancy": {
                    "adults": params.adults,
                    "children": 0,
                    "rooms": params.rooms
                },
                "checkIn": checkin,
                "rateplan": Value::Null,
                "userContext": {
                    "memberLevel": 1,
                    "origin": constants.origin_country,
                    "platform": constants.platform_id,
                    "storefrontId": constants.storefront_id,
                    "currency": constants.currency
                }
            },
            "pricing": {
                "checkIn": checkin,
                "checkout": checkout,
                "localCheckInDate": checkin,
                "localCheckoutDate": checkout,
                "currency": constants.currency,
                "details": {
                    "cheapestPriceOnly": true,
                    "itemBreakdown": false,
                    "priceBreakdown": false
                },
                "occupancy": {
                    "adults": params.adults,
                    "children": 0,
                    "childAges": [],
                    "rooms": params.rooms
                }
            }
        },
        "PriceStreamMetaLabRequest": {
            "attributesId": constants.price_attribute_ids
        }
    })
}

/// Build the complete GraphQL request body (operation name + variables +
/// fixed query document).
pub fn build_payload(
    params: &SearchParams,
    constants: &AgodaConstants,
    booking_time: DateTime<Utc>,
) -> Value {
    json!({
        "operationName": OPERATION_NAME,
        "variables": build_variables(params, constants, booking_time),
        "query": SEARCH_QUERY
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchDefaults;
    use crate::services::validation::normalize;
    use crate::models::HotelSearchQuery;
    use chrono::TimeZone;

    fn default_params() -> SearchParams {
        normalize(&HotelSearchQuery::default(), &SearchDefaults::default()).unwrap()
    }

    fn booking_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_default_variables() {
        let vars = build_variables(&default_params(), &AgodaConstants::default(), booking_time());

        assert_eq!(
            vars.pointer("/CitySearchRequest/cityId").and_then(Value::as_i64),
            Some(9395)
        );
        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchCriteria/occupancy/numberOfAdults")
                .and_then(Value::as_i64),
            Some(2)
        );
        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchCriteria/occupancy/numberOfRooms")
                .and_then(Value::as_i64),
            Some(1)
        );
        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchCriteria/checkInDate")
                .and_then(Value::as_str),
            Some("2025-11-19")
        );
        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchCriteria/checkOutDate")
                .and_then(Value::as_str),
            Some("2025-11-20")
        );
    }

    #[test]
    fn test_constants_are_injected_not_hardcoded() {
        let mut constants = AgodaConstants::default();
        constants.currency = "USD".to_string();
        constants.origin_country = "US".to_string();
        constants.platform_id = 2000;

        let vars = build_variables(&default_params(), &constants, booking_time());

        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchContext/currency")
                .and_then(Value::as_str),
            Some("USD")
        );
        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchContext/origin")
                .and_then(Value::as_str),
            Some("US")
        );
        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchContext/platform/id")
                .and_then(Value::as_i64),
            Some(2000)
        );
    }

    #[test]
    fn test_booking_date_comes_from_clock() {
        let vars = build_variables(&default_params(), &AgodaConstants::default(), booking_time());
        assert_eq!(
            vars.pointer("/CitySearchRequest/searchRequest/searchCriteria/bookingDate")
                .and_then(Value::as_str),
            Some("2025-11-01T12:00:00.000Z")
        );
    }

    #[test]
    fn test_payload_is_deterministic() {
        let params = default_params();
        let constants = AgodaConstants::default();
        let a = build_payload(&params, &constants, booking_time());
        let b = build_payload(&params, &constants, booking_time());
        assert_eq!(a, b);

        assert_eq!(a["operationName"], "citySearch");
        assert!(a["query"].as_str().unwrap().contains("citySearch"));
        assert_eq!(
            a.pointer("/variables/PriceStreamMetaLabRequest/attributesId"),
            Some(&json!([8, 1, 18, 7, 11, 2, 3]))
        );
    }
}
