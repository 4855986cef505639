//! Dashboard views derived from the booking dataset.
//!
//! This module turns a loaded [`Dataset`](crate::dataset::Dataset) into
//! front-end agnostic chart descriptions and lays them out on the page
//! together with the budget calculator.

mod chart;
mod charts;
mod dashboard;

pub use chart::{
    Chart, ChartData, HistogramBar, HistogramSeries, LinePoint, PieSlice, pie_slices,
};
pub use charts::{
    COUNTRY_CHART_ID, LEAD_TIME_CHART_ID, MARKET_SEGMENT_CHART_ID, PARTY_SIZE_CHART_ID,
    PEOPLE_BY_DATE_CHART_ID, country_chart, lead_time_chart, market_segment_chart,
    party_size_chart, people_by_date_chart,
};
pub use dashboard::{CalculatorForm, Dashboard, Section};
