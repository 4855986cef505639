//! Chart description types.
//!
//! A [`Chart`] carries everything a front end needs to draw one dashboard
//! figure: titles, axis labels and the aggregated data points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dashboard chart.
///
/// # Example
///
/// ```
/// use hotel_wizard::views::{Chart, ChartData, LinePoint};
///
/// let chart = Chart {
///     id: "linechart".to_string(),
///     title: "Number of people booking by date".to_string(),
///     x_axis_title: Some("date".to_string()),
///     y_axis_title: Some("adults".to_string()),
///     legend_title: None,
///     data: ChartData::Line {
///         points: vec![LinePoint { x: "2015-07-01".to_string(), y: 250 }],
///     },
/// };
/// let json = serde_json::to_value(&chart).unwrap();
/// assert_eq!(json["data"]["kind"], "line");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Stable identifier used in URLs.
    pub id: String,
    /// Chart title.
    pub title: String,
    /// Title of the x axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_title: Option<String>,
    /// Title of the y axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_title: Option<String>,
    /// Title shown above the legend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    /// The aggregated data.
    pub data: ChartData,
}

/// The data behind a chart, tagged by chart kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    /// A line through ordered points.
    Line {
        /// Points in drawing order.
        points: Vec<LinePoint>,
    },
    /// A pie split into labelled slices.
    Pie {
        /// Slices in drawing order.
        slices: Vec<PieSlice>,
    },
    /// Bar counts, one or more series sharing the same buckets.
    Histogram {
        /// One series per colour group.
        series: Vec<HistogramSeries>,
    },
}

/// A point on a line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePoint {
    /// The x value.
    pub x: String,
    /// The y value.
    pub y: u64,
}

/// A slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Slice label.
    pub label: String,
    /// Absolute value.
    pub value: u64,
    /// Share of the whole pie, in percent rounded to two decimals.
    pub percent: Decimal,
}

/// One colour group of a histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramSeries {
    /// Series name shown in the legend.
    pub name: String,
    /// Bars in bucket order.
    pub bars: Vec<HistogramBar>,
}

/// A single histogram bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBar {
    /// Bucket label.
    pub label: String,
    /// Number of items in the bucket.
    pub count: u64,
}

/// Builds pie slices with their percentage share.
///
/// An empty or all-zero input yields slices with a 0% share.
pub fn pie_slices<I>(values: I) -> Vec<PieSlice>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let values: Vec<(String, u64)> = values.into_iter().collect();
    let total: u64 = values.iter().map(|(_, v)| v).sum();

    values
        .into_iter()
        .map(|(label, value)| {
            let percent = if total == 0 {
                Decimal::ZERO
            } else {
                (Decimal::from(value) * Decimal::ONE_HUNDRED / Decimal::from(total)).round_dp(2)
            };
            PieSlice {
                label,
                value,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pie_slices_round_to_two_decimals() {
        let slices = pie_slices(vec![
            ("one".to_string(), 2),
            ("two".to_string(), 6),
            ("three".to_string(), 3),
        ]);
        assert_eq!(slices[0].percent, Decimal::from_str("18.18").unwrap());
        assert_eq!(slices[1].percent, Decimal::from_str("54.55").unwrap());
        assert_eq!(slices[2].percent, Decimal::from_str("27.27").unwrap());
    }

    #[test]
    fn test_pie_slices_with_zero_total() {
        let slices = pie_slices(vec![("none".to_string(), 0)]);
        assert_eq!(slices[0].percent, Decimal::ZERO);
    }

    #[test]
    fn test_chart_data_tagged_by_kind() {
        let data = ChartData::Histogram { series: vec![] };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["kind"], "histogram");
        assert!(json["series"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_optional_titles_skipped_when_absent() {
        let chart = Chart {
            id: "piechart".to_string(),
            title: "Market Segment Pie Chart".to_string(),
            x_axis_title: None,
            y_axis_title: None,
            legend_title: None,
            data: ChartData::Pie { slices: vec![] },
        };
        let json = serde_json::to_string(&chart).unwrap();
        assert!(!json.contains("x_axis_title"));
        assert!(!json.contains("legend_title"));
    }
}
