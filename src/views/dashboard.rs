//! Dashboard page layout.
//!
//! The [`Dashboard`] is built once from the loaded [`Dataset`] and holds the
//! page heading, the five charts and the budget calculator form, in page
//! order.

use serde::{Deserialize, Serialize};

use crate::config::DashboardSettings;
use crate::dataset::Dataset;
use crate::error::{WizardError, WizardResult};

use super::chart::Chart;
use super::charts::{
    country_chart, lead_time_chart, market_segment_chart, party_size_chart, people_by_date_chart,
};

/// Labels of the budget calculator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorForm {
    /// Section heading.
    pub heading: String,
    /// Label of the room count field.
    pub room_count_label: String,
    /// Label of the nightly rate field.
    pub nightly_rate_label: String,
    /// Placeholder shown in both fields.
    pub placeholder: String,
    /// Label of the submit button.
    pub submit_label: String,
    /// Label shown before the estimate summary.
    pub output_label: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            heading: "Budget Calculator".to_string(),
            room_count_label: "Enter number of rooms: ".to_string(),
            nightly_rate_label: "Enter the nightly fee: ".to_string(),
            placeholder: "Enter a number".to_string(),
            submit_label: "Submit".to_string(),
            output_label: "Recommended spending (per month): ".to_string(),
        }
    }
}

/// A block on the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// A chart.
    Chart(Chart),
    /// The budget calculator form.
    BudgetCalculator(CalculatorForm),
}

/// The complete dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Page heading.
    pub title: String,
    /// Page sections, top to bottom.
    pub sections: Vec<Section>,
}

impl Dashboard {
    /// Derives every chart from `dataset` and lays out the page.
    pub fn build(dataset: &Dataset, settings: &DashboardSettings) -> Self {
        let charts = [
            people_by_date_chart(dataset.daily_headcount()),
            market_segment_chart(dataset.market_segments()),
            country_chart(dataset.bookings()),
            party_size_chart(dataset.bookings()),
            lead_time_chart(dataset.bookings(), settings.lead_time_bin_days),
        ];

        let mut sections: Vec<Section> = charts.into_iter().map(Section::Chart).collect();
        sections.push(Section::BudgetCalculator(CalculatorForm::default()));

        Self {
            title: settings.title.clone(),
            sections,
        }
    }

    /// Iterates over the charts in page order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.sections.iter().filter_map(|section| match section {
            Section::Chart(chart) => Some(chart),
            Section::BudgetCalculator(_) => None,
        })
    }

    /// Looks up a chart by id.
    pub fn chart(&self, id: &str) -> WizardResult<&Chart> {
        self.charts()
            .find(|chart| chart.id == id)
            .ok_or_else(|| WizardError::ChartNotFound { id: id.to_string() })
    }
}
