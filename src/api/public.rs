//! Public API types

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::records::ValidationError;

// Errors

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub enum ApiError {
    /// Bad input, or a write the spreadsheet refused
    BadRequest(String),
    Unauthorized(String),
    /// The spreadsheet could not be reached or misbehaved
    Upstream { message: String, details: String },
}

impl ApiError {
    pub fn upstream(message: impl Into<String>, details: impl ToString) -> Self {
        Self::Upstream {
            message: message.into(),
            details: details.to_string(),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(error) => {
                tracing::warn!("Rejected request: {}", error);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error,
                        details: None,
                    },
                )
            }
            Self::Unauthorized(error) => {
                tracing::warn!("Unauthorized: {}", error);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error,
                        details: None,
                    },
                )
            }
            Self::Upstream { message, details } => {
                tracing::error!("{}: {}", message, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: message,
                        details: Some(details),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Enables using `?` on a `Result<Json<_>, JsonRejection>` extractor so
/// a missing content type or unparseable body still gets a JSON error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

// Re-export public types from each route

pub mod dashboard {
    pub use crate::api::routes::dashboard::public::*;
}
