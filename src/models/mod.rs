//! Data models for the search proxy

pub mod hotel;

// Re-export commonly used types
pub use hotel::{HotelSearchQuery, HotelSummary, SearchParams, SearchResponse};
