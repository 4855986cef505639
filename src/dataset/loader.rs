//! CSV loading for the booking dataset.
//!
//! This module reads the three CSV files behind the dashboard, cleans each
//! row into a model type and reports how many rows had to be skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::{Month, NaiveDate};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::DataFiles;
use crate::error::{WizardError, WizardResult};
use crate::models::{
    Booking, CancellationStatus, DailyHeadcount, MAX_LEAD_TIME_DAYS, MarketSegmentCount,
};

use super::country::country_name;

/// Row counts from reading one CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Name of the file (or other source) that was read.
    pub source: String,
    /// Data rows found, excluding the header.
    pub total_rows: usize,
    /// Rows turned into records.
    pub loaded_rows: usize,
    /// Rows dropped because they could not be parsed.
    pub skipped_rows: usize,
}

/// A `hotel_bookings.csv` row. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct BookingRow {
    is_canceled: u8,
    lead_time: u32,
    arrival_date_year: i32,
    arrival_date_month: String,
    arrival_date_day_of_month: u32,
    adults: u32,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    children: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    babies: Option<u32>,
    #[serde(default)]
    country: String,
    #[serde(default)]
    market_segment: String,
}

/// A `hotelgrouped.csv` row.
#[derive(Debug, Deserialize)]
struct DailyHeadcountRow {
    date: String,
    adults: u64,
}

/// A `hotelgroupedMarketSegment.csv` row.
#[derive(Debug, Deserialize)]
struct MarketSegmentRow {
    market_segment: String,
    count: u64,
}

fn parse_arrival_date(year: i32, month: &str, day: u32) -> Option<NaiveDate> {
    let month = Month::from_str(month.trim()).ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}

impl BookingRow {
    fn into_booking(self) -> Option<Booking> {
        if self.lead_time > MAX_LEAD_TIME_DAYS {
            return None;
        }
        let date = parse_arrival_date(
            self.arrival_date_year,
            &self.arrival_date_month,
            self.arrival_date_day_of_month,
        )?;
        let country_code = self.country.trim().to_string();
        let country_name = country_name(&country_code).unwrap_or_default().to_string();

        Some(Booking {
            date,
            lead_time: self.lead_time,
            status: CancellationStatus::from_flag(self.is_canceled != 0),
            country_code,
            country_name,
            market_segment: self.market_segment.trim().to_string(),
            adults: self.adults,
            children: self.children.unwrap_or(0),
            babies: self.babies.unwrap_or(0),
        })
    }
}

impl DailyHeadcountRow {
    fn into_daily_headcount(self) -> Option<DailyHeadcount> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        Some(DailyHeadcount {
            date,
            adults: self.adults,
        })
    }
}

impl MarketSegmentRow {
    fn into_market_segment(self) -> Option<MarketSegmentCount> {
        let market_segment = self.market_segment.trim().to_string();
        if market_segment.is_empty() {
            return None;
        }
        Some(MarketSegmentCount {
            market_segment,
            count: self.count,
        })
    }
}

/// Deserializes every row of `reader`, keeping the ones `convert` accepts.
fn read_rows<R, Row, T>(
    reader: R,
    source: &str,
    mut convert: impl FnMut(Row) -> Option<T>,
) -> WizardResult<(Vec<T>, LoadReport)>
where
    R: Read,
    Row: DeserializeOwned,
{
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    rdr.headers()
        .map_err(|e| WizardError::DatasetParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;

    let mut records = Vec::new();
    let mut total_rows = 0usize;
    let mut skipped_rows = 0usize;

    for (index, result) in rdr.deserialize::<Row>().enumerate() {
        total_rows += 1;
        match result.ok().and_then(&mut convert) {
            Some(record) => records.push(record),
            None => {
                skipped_rows += 1;
                // +2: one for the header, one for 1-based line numbers
                debug!(source, line = index + 2, "Skipping malformed row");
            }
        }
    }

    if skipped_rows > 0 {
        warn!(source, skipped_rows, total_rows, "Skipped malformed rows");
    }

    let report = LoadReport {
        source: source.to_string(),
        total_rows,
        loaded_rows: records.len(),
        skipped_rows,
    };
    Ok((records, report))
}

/// Parses booking rows from CSV.
///
/// Rows with an unparseable number, an invalid arrival date or a lead time
/// over [`MAX_LEAD_TIME_DAYS`] are skipped.
/// Unknown country codes are kept with an empty country name.
pub fn parse_bookings<R: Read>(reader: R, source: &str) -> WizardResult<(Vec<Booking>, LoadReport)> {
    read_rows(reader, source, BookingRow::into_booking)
}

/// Parses `date,adults` rows from CSV. Dates use the `YYYY-MM-DD` format.
pub fn parse_daily_headcount<R: Read>(
    reader: R,
    source: &str,
) -> WizardResult<(Vec<DailyHeadcount>, LoadReport)> {
    read_rows(reader, source, DailyHeadcountRow::into_daily_headcount)
}

/// Parses `market_segment,count` rows from CSV.
pub fn parse_market_segments<R: Read>(
    reader: R,
    source: &str,
) -> WizardResult<(Vec<MarketSegmentCount>, LoadReport)> {
    read_rows(reader, source, MarketSegmentRow::into_market_segment)
}

fn open(path: &Path) -> WizardResult<File> {
    File::open(path).map_err(|_| WizardError::DatasetNotFound {
        path: path.display().to_string(),
    })
}

/// The loaded booking dataset.
///
/// Owns every record the dashboard views are derived from. Load it once
/// with [`Dataset::load`], build the views, then drop it.
///
/// # Example
///
/// ```no_run
/// use hotel_wizard::config::DataFiles;
/// use hotel_wizard::dataset::Dataset;
///
/// let dataset = Dataset::load("./data", &DataFiles::default()).unwrap();
/// println!("{} bookings", dataset.bookings().len());
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    bookings: Vec<Booking>,
    daily_headcount: Vec<DailyHeadcount>,
    market_segments: Vec<MarketSegmentCount>,
    reports: Vec<LoadReport>,
}

impl Dataset {
    /// Loads the three CSV files named in `files` from directory `dir`.
    ///
    /// # Errors
    ///
    /// - `DatasetNotFound` if a file cannot be opened
    /// - `DatasetParseError` if a file has no readable header row
    pub fn load<P: AsRef<Path>>(dir: P, files: &DataFiles) -> WizardResult<Self> {
        let dir = dir.as_ref();

        let bookings_path = dir.join(&files.bookings);
        let (bookings, bookings_report) =
            parse_bookings(open(&bookings_path)?, &bookings_path.display().to_string())?;

        let daily_path = dir.join(&files.daily_headcount);
        let (daily_headcount, daily_report) =
            parse_daily_headcount(open(&daily_path)?, &daily_path.display().to_string())?;

        let segments_path = dir.join(&files.market_segments);
        let (market_segments, segments_report) =
            parse_market_segments(open(&segments_path)?, &segments_path.display().to_string())?;

        let mut dataset = Self::from_parts(bookings, daily_headcount, market_segments);
        dataset.reports = vec![bookings_report, daily_report, segments_report];

        info!(
            dir = %dir.display(),
            bookings = dataset.bookings.len(),
            dates = dataset.daily_headcount.len(),
            market_segments = dataset.market_segments.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Builds a dataset from already-parsed records.
    ///
    /// Bookings are ordered by lead time (stable, shortest first).
    pub fn from_parts(
        mut bookings: Vec<Booking>,
        daily_headcount: Vec<DailyHeadcount>,
        market_segments: Vec<MarketSegmentCount>,
    ) -> Self {
        bookings.sort_by_key(|b| b.lead_time);
        Self {
            bookings,
            daily_headcount,
            market_segments,
            reports: Vec::new(),
        }
    }

    /// Bookings ordered by lead time.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Adults booking per date, in file order.
    pub fn daily_headcount(&self) -> &[DailyHeadcount] {
        &self.daily_headcount
    }

    /// Bookings per market segment, in file order.
    pub fn market_segments(&self) -> &[MarketSegmentCount] {
        &self.market_segments
    }

    /// Per-file load reports (empty for datasets built with `from_parts`).
    pub fn reports(&self) -> &[LoadReport] {
        &self.reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "hotel,is_canceled,lead_time,arrival_date_year,arrival_date_month,\
arrival_date_week_number,arrival_date_day_of_month,adults,children,babies,country,market_segment";

    fn bookings_csv(rows: &[&str]) -> String {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv
    }

    #[test]
    fn test_parse_booking_derives_fields() {
        let csv = bookings_csv(&["Resort Hotel,1,342,2015,July,27,1,2,1,1,PRT,Direct"]);
        let (bookings, report) = parse_bookings(csv.as_bytes(), "inline").unwrap();

        assert_eq!(report.total_rows, 1);
        assert_eq!(report.loaded_rows, 1);
        let b = &bookings[0];
        assert_eq!(b.date, NaiveDate::from_ymd_opt(2015, 7, 1).unwrap());
        assert_eq!(b.status, CancellationStatus::Cancelled);
        assert_eq!(b.country_name, "Portugal");
        assert_eq!(b.party_size(), 4);
        assert_eq!(b.market_segment, "Direct");
    }

    #[test]
    fn test_missing_children_count_as_zero() {
        let csv = bookings_csv(&["City Hotel,0,2,2015,August,32,3,2,NA,0,PRT,Online TA"]);
        let (bookings, _) = parse_bookings(csv.as_bytes(), "inline").unwrap();
        assert_eq!(bookings[0].children, 0);
        assert_eq!(bookings[0].party_size(), 2);
    }

    #[test]
    fn test_implausible_lead_time_is_skipped() {
        let csv = bookings_csv(&[
            "City Hotel,0,4294967295,2015,August,32,3,2,0,0,PRT,Direct",
            "City Hotel,0,3650,2015,August,32,3,2,0,0,PRT,Direct",
        ]);
        let (bookings, report) = parse_bookings(csv.as_bytes(), "inline").unwrap();
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].lead_time, MAX_LEAD_TIME_DAYS);
    }

    #[test]
    fn test_huge_party_is_loaded_without_overflow() {
        let csv = bookings_csv(&["City Hotel,0,2,2015,August,32,3,4294967295,1,0,PRT,Direct"]);
        let (bookings, report) = parse_bookings(csv.as_bytes(), "inline").unwrap();
        assert_eq!(report.loaded_rows, 1);
        assert_eq!(bookings[0].party_size(), 4_294_967_296);
    }

    #[test]
    fn test_unknown_country_keeps_empty_name() {
        let csv = bookings_csv(&["City Hotel,0,2,2015,August,32,3,2,0,0,NULL,Groups"]);
        let (bookings, _) = parse_bookings(csv.as_bytes(), "inline").unwrap();
        assert_eq!(bookings[0].country_code, "NULL");
        assert_eq!(bookings[0].country_name, "");
    }

    #[test]
    fn test_malformed_rows_are_skipped_and_counted() {
        let csv = bookings_csv(&[
            "Resort Hotel,0,10,2016,March,10,5,2,0,0,GBR,Direct",
            "Resort Hotel,0,abc,2016,March,10,5,2,0,0,GBR,Direct",
            "Resort Hotel,0,10,2016,Smarch,10,5,2,0,0,GBR,Direct",
            "Resort Hotel,0,10,2016,February,8,30,2,0,0,GBR,Direct",
        ]);
        let (bookings, report) = parse_bookings(csv.as_bytes(), "inline").unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(
            report,
            LoadReport {
                source: "inline".to_string(),
                total_rows: 4,
                loaded_rows: 1,
                skipped_rows: 3,
            }
        );
    }

    #[test]
    fn test_parse_daily_headcount() {
        let csv = "date,adults\n2015-07-01,250\n2015-07-02,198\nnot-a-date,3\n";
        let (rows, report) = parse_daily_headcount(csv.as_bytes(), "inline").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2015, 7, 2).unwrap());
        assert_eq!(rows[1].adults, 198);
        assert_eq!(report.skipped_rows, 1);
    }

    #[test]
    fn test_parse_market_segments_ignores_extra_columns() {
        let csv = "id,market_segment,count\n0,Online TA,56477\n1,Groups,19811\n";
        let (rows, _) = parse_market_segments(csv.as_bytes(), "inline").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].market_segment, "Online TA");
        assert_eq!(rows[0].count, 56477);
    }

    #[test]
    fn test_from_parts_sorts_by_lead_time_stably() {
        let csv = bookings_csv(&[
            "Resort Hotel,0,30,2016,March,10,5,2,0,0,GBR,Direct",
            "Resort Hotel,0,5,2016,March,10,5,2,0,0,FRA,Direct",
            "Resort Hotel,0,30,2016,March,10,5,2,0,0,ESP,Direct",
        ]);
        let (bookings, _) = parse_bookings(csv.as_bytes(), "inline").unwrap();
        let dataset = Dataset::from_parts(bookings, vec![], vec![]);

        let codes: Vec<&str> = dataset
            .bookings()
            .iter()
            .map(|b| b.country_code.as_str())
            .collect();
        assert_eq!(codes, vec!["FRA", "GBR", "ESP"]);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = Dataset::load("/nonexistent/data", &DataFiles::default());
        match result {
            Err(WizardError::DatasetNotFound { path }) => {
                assert!(path.ends_with("hotel_bookings.csv"));
            }
            other => panic!("Expected DatasetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_fixture_directory() {
        let dataset = Dataset::load("./tests/fixtures/data", &DataFiles::default()).unwrap();
        assert_eq!(dataset.reports().len(), 3);
        assert!(!dataset.bookings().is_empty());
        assert!(dataset
            .bookings()
            .windows(2)
            .all(|pair| pair[0].lead_time <= pair[1].lead_time));
    }
}
