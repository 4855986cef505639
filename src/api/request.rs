//! Request types for the HotelWizard API.
//!
//! This module defines the JSON request structure for the `/estimate` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{WizardError, WizardResult};
use crate::models::{EstimateRequest, NIGHTLY_RATE_FIELD, ROOM_COUNT_FIELD};

/// A calculator form field, sent either as the raw text the user typed or
/// as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Raw text from an input box.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
    /// Any other JSON value (boolean, array, object). Never a valid input.
    Other(serde_json::Value),
}

impl FormValue {
    /// Returns the value as text for parsing, or `None` for values that
    /// are neither text nor a number.
    pub fn to_text(&self) -> Option<String> {
        match self {
            FormValue::Text(text) => Some(text.clone()),
            FormValue::Number(number) => Some(number.to_string()),
            FormValue::Other(_) => None,
        }
    }
}

fn field_text(field: &str, value: Option<FormValue>) -> WizardResult<String> {
    let value = value.ok_or_else(|| WizardError::invalid_input(field, "is required"))?;
    value
        .to_text()
        .ok_or_else(|| WizardError::invalid_input(field, "must be a number"))
}

/// Request body for the `/estimate` endpoint.
///
/// Both fields may be absent or `null` so that an unfilled form reports
/// `InvalidInput` on the field rather than a body error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateForm {
    /// Number of rooms.
    #[serde(default)]
    pub room_count: Option<FormValue>,
    /// Price of one room for one night.
    #[serde(default)]
    pub nightly_rate: Option<FormValue>,
}

impl EstimateForm {
    /// Validates the form into an [`EstimateRequest`].
    pub fn into_request(self) -> WizardResult<EstimateRequest> {
        let room_count = field_text(ROOM_COUNT_FIELD, self.room_count)?;
        let nightly_rate = field_text(NIGHTLY_RATE_FIELD, self.nightly_rate)?;
        EstimateRequest::parse(&room_count, &nightly_rate)
    }
}
