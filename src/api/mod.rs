//! HTTP API module for HotelWizard.
//!
//! This module serves the dashboard views and the budget calculator over
//! HTTP.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EstimateForm, FormValue};
pub use response::{ApiError, ApiErrorResponse, EstimateResponse};
pub use state::AppState;
