//! HTTP request handlers for the HotelWizard API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::estimate_with_config;

use super::request::EstimateForm;
use super::response::{ApiError, ApiErrorResponse, EstimateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/charts/:id", get(chart_handler))
        .route("/estimate", post(estimate_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Handler for GET /dashboard.
///
/// Returns the page heading, every chart and the calculator form.
async fn dashboard_handler(State(state): State<AppState>) -> Response {
    debug!("Serving dashboard");
    json_response(StatusCode::OK, state.dashboard())
}

/// Handler for GET /charts/:id.
async fn chart_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.dashboard().chart(&id) {
        Ok(chart) => json_response(StatusCode::OK, chart),
        Err(err) => {
            warn!(chart_id = %id, "Chart not found");
            error_response(err.into())
        }
    }
}

/// Handler for POST /estimate.
///
/// Validates the two calculator fields and returns the monthly budget
/// estimate. One estimate is produced per request.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateForm>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let request = match form.into_request() {
        Ok(request) => request,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid estimate input"
            );
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    match estimate_with_config(&request, state.budget()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                room_count = request.room_count(),
                tier = %result.tier,
                total_spending = %result.total_spending,
                duration_us = start_time.elapsed().as_micros(),
                "Estimate completed successfully"
            );
            json_response(StatusCode::OK, EstimateResponse::from(result))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate failed"
            );
            error_response(err.into())
        }
    }
}
