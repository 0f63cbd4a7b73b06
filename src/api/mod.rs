//! API handlers for the search proxy endpoints

pub mod health;
pub mod hotels;
pub mod openapi;
