//! Response types for the HotelWizard API.
//!
//! This module defines the estimate response body, the error response
//! structures and the mapping from [`WizardError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::models::EstimateResult;

/// Response body for the `/estimate` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    /// The estimate figures.
    #[serde(flatten)]
    pub result: EstimateResult,
    /// The calculator summary line.
    pub summary: String,
}

impl From<EstimateResult> for EstimateResponse {
    fn from(result: EstimateResult) -> Self {
        let summary = result.summary();
        Self { result, summary }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<WizardError> for ApiErrorResponse {
    fn from(error: WizardError) -> Self {
        let message = error.to_string();
        match error {
            WizardError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("'{}' must be a positive number", field),
                ),
            },
            WizardError::ChartNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "CHART_NOT_FOUND",
                    message,
                    format!("The dashboard has no chart with id '{}'", id),
                ),
            },
            WizardError::ConfigNotFound { .. }
            | WizardError::ConfigParseError { .. }
            | WizardError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            WizardError::DatasetNotFound { .. } | WizardError::DatasetParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("DATASET_ERROR", "Dataset error", message),
                }
            }
        }
    }
}
