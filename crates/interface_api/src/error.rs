//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use core_kernel::CoreError;
use domain_fund::FundError;
use domain_goal::GoalError;
use domain_rates::RateError;
use domain_tax::TaxError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    /// The input was well formed but the calculator rejected it
    #[error("Calculation rejected: {0}")]
    Calculation(String),

    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Calculation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "calculation_error"),
            ApiError::InvalidGoal(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_goal"),
            ApiError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable"),
        };

        let (message, details) = match self {
            ApiError::BadRequest(msg)
            | ApiError::Calculation(msg)
            | ApiError::InvalidGoal(msg)
            | ApiError::Unavailable(msg) => (msg, None),
            ApiError::Validation { message, details } => (message, Some(details)),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| format!("{}: {}", field, error.code))
            })
            .collect();
        details.sort();

        ApiError::Validation {
            message: "Request failed validation".to_string(),
            details,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Calculation(err.to_string())
    }
}

impl From<TaxError> for ApiError {
    fn from(err: TaxError) -> Self {
        ApiError::Calculation(err.to_string())
    }
}

impl From<FundError> for ApiError {
    fn from(err: FundError) -> Self {
        ApiError::Calculation(err.to_string())
    }
}

impl From<GoalError> for ApiError {
    fn from(err: GoalError) -> Self {
        match err {
            GoalError::InvalidGoal(msg) => ApiError::InvalidGoal(msg),
            other => ApiError::Calculation(other.to_string()),
        }
    }
}

impl From<RateError> for ApiError {
    fn from(err: RateError) -> Self {
        ApiError::Unavailable(err.to_string())
    }
}
