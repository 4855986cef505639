//! HotelWizard: hotel booking dashboard and budget estimator.
//!
//! This crate loads a hotel booking dataset, derives the dashboard's
//! aggregate views, and estimates a hotel's recommended monthly spending
//! from its room count and nightly rate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod views;
