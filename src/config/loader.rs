//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the budget
//! tables and dashboard settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{WizardError, WizardResult};

use super::types::{BudgetConfig, DashboardSettings, TiersFile, WagesFile};

/// Loads and provides access to HotelWizard configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── dashboard.yaml      # Dashboard settings (optional)
/// └── budget/
///     ├── wages.yaml      # Hourly wage per labor category
///     └── tiers.yaml      # Staffing tiers ordered by room count
/// ```
///
/// # Example
///
/// ```no_run
/// use hotel_wizard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("{} staffing tiers", loader.budget().tiers().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    budget: BudgetConfig,
    dashboard: DashboardSettings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `budget/wages.yaml` or `budget/tiers.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The tiers do not partition the room counts or a value is negative
    ///
    /// A missing `dashboard.yaml` falls back to the default settings.
    pub fn load<P: AsRef<Path>>(path: P) -> WizardResult<Self> {
        let path = path.as_ref();

        let budget = Self::load_budget(&path.join("budget"))?;

        let dashboard_path = path.join("dashboard.yaml");
        let dashboard = if dashboard_path.exists() {
            Self::load_yaml::<DashboardSettings>(&dashboard_path)?
        } else {
            debug!(path = %dashboard_path.display(), "No dashboard settings, using defaults");
            DashboardSettings::default()
        };
        dashboard.validate()?;

        info!(
            path = %path.display(),
            tiers = budget.tiers().len(),
            "Configuration loaded"
        );

        Ok(Self { budget, dashboard })
    }

    /// Loads only the budget tables from a `budget/` directory.
    pub fn load_budget<P: AsRef<Path>>(path: P) -> WizardResult<BudgetConfig> {
        let path = path.as_ref();
        let wages = Self::load_yaml::<WagesFile>(&path.join("wages.yaml"))?;
        let tiers = Self::load_yaml::<TiersFile>(&path.join("tiers.yaml"))?;
        BudgetConfig::new(wages.wages, tiers.tiers)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> WizardResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| WizardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| WizardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the budget tables.
    pub fn budget(&self) -> &BudgetConfig {
        &self.budget
    }

    /// Returns the dashboard settings.
    pub fn dashboard(&self) -> &DashboardSettings {
        &self.dashboard
    }

    /// Splits the loader into its parts.
    pub fn into_parts(self) -> (BudgetConfig, DashboardSettings) {
        (self.budget, self.dashboard)
    }
}
