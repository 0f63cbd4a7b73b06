//! Error types for the search proxy

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDateFormat,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Method not allowed")]
    UnsupportedMethod,

    #[error("Agoda API returned status {0}")]
    UpstreamHttp(u16),

    #[error("No hotel data received from Agoda")]
    UpstreamDataMissing,

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidDateFormat => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: self.to_string(),
                    message: None,
                    suggestion: None,
                },
            ),
            AppError::InvalidParameter(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg.clone(),
                    message: None,
                    suggestion: None,
                },
            ),
            AppError::UnsupportedMethod => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse {
                    error: self.to_string(),
                    message: None,
                    suggestion: None,
                },
            ),
            AppError::UpstreamHttp(code) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse {
                    error: "Failed to fetch hotels".to_string(),
                    message: Some(format!("Agoda API returned status {}", code)),
                    suggestion: None,
                },
            ),
            AppError::UpstreamDataMissing => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse {
                    error: self.to_string(),
                    message: Some("The upstream response did not contain a property list".to_string()),
                    suggestion: Some(
                        "Agoda may be rate limiting requests or the search API schema may have changed"
                            .to_string(),
                    ),
                },
            ),
            AppError::Unexpected(msg) => {
                tracing::error!("Unexpected failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Failed to fetch hotels".to_string(),
                        message: Some(msg.clone()),
                        suggestion: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
