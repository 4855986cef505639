//! Application state for the HotelWizard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::BudgetConfig;
use crate::views::Dashboard;

/// Shared application state.
///
/// Holds the budget tables and the dashboard built at startup. Both are
/// read-only for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    budget: Arc<BudgetConfig>,
    dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(budget: BudgetConfig, dashboard: Dashboard) -> Self {
        Self {
            budget: Arc::new(budget),
            dashboard: Arc::new(dashboard),
        }
    }

    /// Returns the budget tables.
    pub fn budget(&self) -> &BudgetConfig {
        &self.budget
    }

    /// Returns the prebuilt dashboard.
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }
}
