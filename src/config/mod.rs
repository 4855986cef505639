//! Configuration loading and management for HotelWizard.
//!
//! This module provides the budget tables (built in or loaded from YAML) and
//! the dashboard settings.
//!
//! # Example
//!
//! ```no_run
//! use hotel_wizard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Dashboard: {}", config.dashboard().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BudgetConfig, DashboardSettings, DataFiles, TiersFile, WageTable, WagesFile};
