//! Chart builders for the five dashboard figures.
//!
//! Each builder makes a single pass over the dataset and aggregates it into
//! a [`Chart`].

use std::collections::{BTreeMap, HashMap};

use crate::models::{
    Booking, CancellationStatus, DailyHeadcount, MAX_LEAD_TIME_DAYS, MarketSegmentCount,
};

use super::chart::{Chart, ChartData, HistogramBar, HistogramSeries, LinePoint, pie_slices};

/// Id of the people-by-date line chart.
pub const PEOPLE_BY_DATE_CHART_ID: &str = "linechart";
/// Id of the market segment pie chart.
pub const MARKET_SEGMENT_CHART_ID: &str = "piechart";
/// Id of the visitors-by-country histogram.
pub const COUNTRY_CHART_ID: &str = "histogram";
/// Id of the party size pie chart.
pub const PARTY_SIZE_CHART_ID: &str = "piechart2";
/// Id of the lead time histogram.
pub const LEAD_TIME_CHART_ID: &str = "histogram2";

/// Line chart of adults booking per date, in file order.
pub fn people_by_date_chart(rows: &[DailyHeadcount]) -> Chart {
    let points = rows
        .iter()
        .map(|row| LinePoint {
            x: row.date.format("%Y-%m-%d").to_string(),
            y: row.adults,
        })
        .collect();

    Chart {
        id: PEOPLE_BY_DATE_CHART_ID.to_string(),
        title: "Number of people booking by date".to_string(),
        x_axis_title: Some("date".to_string()),
        y_axis_title: Some("adults".to_string()),
        legend_title: None,
        data: ChartData::Line { points },
    }
}

/// Pie chart of bookings per market segment, in file order.
pub fn market_segment_chart(rows: &[MarketSegmentCount]) -> Chart {
    let slices = pie_slices(
        rows.iter()
            .map(|row| (row.market_segment.clone(), row.count)),
    );

    Chart {
        id: MARKET_SEGMENT_CHART_ID.to_string(),
        title: "Market Segment Pie Chart".to_string(),
        x_axis_title: None,
        y_axis_title: None,
        legend_title: None,
        data: ChartData::Pie { slices },
    }
}

/// Histogram of bookings per country name.
///
/// Countries are ordered by booking count, most frequent first, with ties
/// broken by name. Bookings with an unknown country code are counted under
/// an empty label.
pub fn country_chart(bookings: &[Booking]) -> Chart {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for booking in bookings {
        *counts.entry(booking.country_name.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(&str, u64)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let bars = counts
        .into_iter()
        .map(|(country, count)| HistogramBar {
            label: country.to_string(),
            count,
        })
        .collect();

    Chart {
        id: COUNTRY_CHART_ID.to_string(),
        title: "Visitors from each Country".to_string(),
        x_axis_title: Some("Country".to_string()),
        y_axis_title: Some("Number of bookings".to_string()),
        legend_title: None,
        data: ChartData::Histogram {
            series: vec![HistogramSeries {
                name: "country".to_string(),
                bars,
            }],
        },
    }
}

/// Pie chart of bookings per party size (adults + children + babies).
pub fn party_size_chart(bookings: &[Booking]) -> Chart {
    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    for booking in bookings {
        *counts.entry(booking.party_size()).or_insert(0) += 1;
    }

    let slices = pie_slices(
        counts
            .into_iter()
            .map(|(size, count)| (size.to_string(), count)),
    );

    Chart {
        id: PARTY_SIZE_CHART_ID.to_string(),
        title: "Percentage of number of visitants in bookings".to_string(),
        x_axis_title: None,
        y_axis_title: None,
        legend_title: Some("# of People".to_string()),
        data: ChartData::Pie { slices },
    }
}

/// Histogram of lead times split by cancellation status.
///
/// Lead times are bucketed into `[k * bin_days, (k + 1) * bin_days)` from 0
/// up to the longest lead time; empty buckets are kept so both series share
/// the same bars. Lead times over [`MAX_LEAD_TIME_DAYS`] fall into the last
/// bucket. Callers passing a `bin_days` of 0 get one-day buckets.
pub fn lead_time_chart(bookings: &[Booking], bin_days: u32) -> Chart {
    let bin_days = bin_days.max(1);
    let bucket_of =
        |booking: &Booking| (booking.lead_time.min(MAX_LEAD_TIME_DAYS) / bin_days) as usize;
    let bucket_count = bookings.iter().map(|b| bucket_of(b) + 1).max().unwrap_or(0);

    let statuses = [CancellationStatus::NotCancelled, CancellationStatus::Cancelled];
    let mut counts = vec![[0u64; 2]; bucket_count];
    for booking in bookings {
        let bucket = bucket_of(booking);
        let column = match booking.status {
            CancellationStatus::NotCancelled => 0,
            CancellationStatus::Cancelled => 1,
        };
        counts[bucket][column] += 1;
    }

    let labels: Vec<String> = (0..bucket_count)
        .map(|bucket| {
            let start = bucket as u64 * u64::from(bin_days);
            format!("{}-{}", start, start + u64::from(bin_days) - 1)
        })
        .collect();

    let series = statuses
        .iter()
        .enumerate()
        .map(|(column, status)| HistogramSeries {
            name: status.label().to_string(),
            bars: labels
                .iter()
                .zip(&counts)
                .map(|(label, bucket)| HistogramBar {
                    label: label.clone(),
                    count: bucket[column],
                })
                .collect(),
        })
        .collect();

    Chart {
        id: LEAD_TIME_CHART_ID.to_string(),
        title: "Lead Time Histogram".to_string(),
        x_axis_title: Some("Lead Time (days)".to_string()),
        y_axis_title: Some("Number of visitors".to_string()),
        legend_title: None,
        data: ChartData::Histogram { series },
    }
}
