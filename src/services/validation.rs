//! Parameter validation and normalization.
//!
//! Inbound parameters are string-typed and optional. Normalization applies
//! the configured defaults, then rejects anything that does not parse: dates
//! must match the fixed-width `YYYY-MM-DD` pattern and be real calendar
//! dates, counts must be integers >= 1, and checkout must fall after checkin.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::SearchDefaults,
    error::{AppError, AppResult},
    models::{HotelSearchQuery, SearchParams},
};

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// A date string is valid when it matches the fixed-width numeric pattern
/// AND parses to a real calendar date (`2025-02-30` fails the second check).
pub fn is_valid_date(s: &str) -> bool {
    DATE_PATTERN.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    if !is_valid_date(s) {
        return Err(AppError::InvalidDateFormat);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDateFormat)
}

fn parse_count(name: &str, s: &str) -> AppResult<u32> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidParameter(format!("{} must be a positive integer", name)))?;
    if value < 1 {
        return Err(AppError::InvalidParameter(format!("{} must be at least 1", name)));
    }
    Ok(value)
}

fn parse_city(s: &str) -> AppResult<i64> {
    s.trim()
        .parse()
        .map_err(|_| AppError::InvalidParameter("city must be a numeric Agoda city ID".to_string()))
}

/// Apply defaults and validate the inbound query into [`SearchParams`].
pub fn normalize(query: &HotelSearchQuery, defaults: &SearchDefaults) -> AppResult<SearchParams> {
    let city = match &query.city {
        Some(s) => parse_city(s)?,
        None => defaults.city_id,
    };

    let checkin_raw = query.checkin.as_deref().unwrap_or(&defaults.checkin);
    let checkout_raw = query.checkout.as_deref().unwrap_or(&defaults.checkout);
    let checkin = parse_date(checkin_raw)?;
    let checkout = parse_date(checkout_raw)?;

    if checkout <= checkin {
        return Err(AppError::InvalidParameter(
            "checkout must be after checkin".to_string(),
        ));
    }

    let adults = match &query.adults {
        Some(s) => parse_count("adults", s)?,
        None => defaults.adults,
    };
    let rooms = match &query.rooms {
        Some(s) => parse_count("rooms", s)?,
        None => defaults.rooms,
    };

    Ok(SearchParams {
        city,
        checkin,
        checkout,
        adults,
        rooms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> SearchDefaults {
        SearchDefaults::default()
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2025-11-19"));
        assert!(is_valid_date("2024-02-29"));

        // real pattern but impossible calendar date
        assert!(!is_valid_date("2025-02-30"));
        assert!(!is_valid_date("2025-13-40"));
        // wrong shape
        assert!(!is_valid_date("2025/11/19"));
        assert!(!is_valid_date("19-11-2025"));
        assert!(!is_valid_date("2025-1-9"));
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("2025-11-19T00:00:00"));
    }

    #[test]
    fn test_normalize_applies_defaults() {
        let params = normalize(&HotelSearchQuery::default(), &defaults()).unwrap();
        assert_eq!(params.city, 9395);
        assert_eq!(params.checkin.to_string(), "2025-11-19");
        assert_eq!(params.checkout.to_string(), "2025-11-20");
        assert_eq!(params.adults, 2);
        assert_eq!(params.rooms, 1);
    }

    #[test]
    fn test_normalize_rejects_bad_dates() {
        let query = HotelSearchQuery {
            checkin: Some("2025-13-40".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&query, &defaults()),
            Err(AppError::InvalidDateFormat)
        ));

        let query = HotelSearchQuery {
            checkout: Some("not-a-date".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&query, &defaults()),
            Err(AppError::InvalidDateFormat)
        ));
    }

    #[test]
    fn test_normalize_rejects_inverted_range() {
        let query = HotelSearchQuery {
            checkin: Some("2025-11-20".to_string()),
            checkout: Some("2025-11-19".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&query, &defaults()),
            Err(AppError::InvalidParameter(_))
        ));

        // equal dates are also rejected
        let query = HotelSearchQuery {
            checkin: Some("2025-11-20".to_string()),
            checkout: Some("2025-11-20".to_string()),
            ..Default::default()
        };
        assert!(normalize(&query, &defaults()).is_err());
    }

    #[test]
    fn test_normalize_rejects_non_numeric_counts() {
        let query = HotelSearchQuery {
            adults: Some("two".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&query, &defaults()),
            Err(AppError::InvalidParameter(_))
        ));

        let query = HotelSearchQuery {
            rooms: Some("0".to_string()),
            ..Default::default()
        };
        assert!(normalize(&query, &defaults()).is_err());
    }

    #[test]
    fn test_normalize_accepts_explicit_values() {
        let query = HotelSearchQuery {
            city: Some("14552".to_string()),
            checkin: Some("2026-01-10".to_string()),
            checkout: Some("2026-01-12".to_string()),
            adults: Some("3".to_string()),
            rooms: Some("2".to_string()),
        };
        let params = normalize(&query, &defaults()).unwrap();
        assert_eq!(params.city, 14552);
        assert_eq!(params.adults, 3);
        assert_eq!(params.rooms, 2);
    }
}
