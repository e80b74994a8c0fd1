use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info};

use crate::data::{csv_reader, require_columns, DataError};
use crate::domain::hourly::HourlySample;
use crate::domain::traffic::TrafficSample;

pub const TRAFFIC_COLUMNS: [&str; 3] = ["Date", "Business Corridor", "Foot Traffic Volume"];
pub const HOURLY_COLUMNS: [&str; 3] = ["Business Corridor", "Hour", "Foot Traffic Volume"];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Largest count a single row may carry. Anything above is a data error.
pub const MAX_VOLUME: u64 = 1_000_000_000;

// Raw string columns so one bad cell drops one row, not the file.
#[derive(Debug, Deserialize)]
struct TrafficRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Business Corridor")]
    corridor: String,
    #[serde(rename = "Foot Traffic Volume")]
    volume: String,
}

#[derive(Debug, Deserialize)]
struct HourlyRow {
    #[serde(rename = "Business Corridor")]
    corridor: String,
    #[serde(rename = "Hour")]
    hour: String,
    #[serde(rename = "Foot Traffic Volume")]
    volume: String,
}

/// Daily foot-traffic samples for every corridor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficTable {
    samples: Vec<TrafficSample>,
}

impl TrafficTable {
    pub fn new(samples: Vec<TrafficSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[TrafficSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Optional hour-of-day breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyTable {
    samples: Vec<HourlySample>,
}

impl HourlyTable {
    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Whole non-negative counts up to [`MAX_VOLUME`]; "1200.0" is accepted,
/// "-3", "12.5", "1e300" and "n/a" are not.
pub fn parse_volume(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let volume = match raw.parse::<u64>() {
        Ok(v) => v,
        Err(_) => match raw.parse::<f64>() {
            Ok(v) if v >= 0.0 && v <= MAX_VOLUME as f64 && v.fract() == 0.0 => v as u64,
            _ => return None,
        },
    };
    (volume <= MAX_VOLUME).then_some(volume)
}

pub fn load_traffic(path: &Path) -> Result<TrafficTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_traffic(file)?;
    info!(path = %path.display(), samples = table.len(), "traffic table loaded");
    Ok(table)
}

/// Rows with a malformed date or count are dropped silently.
pub fn read_traffic<R: Read>(source: R) -> Result<TrafficTable, DataError> {
    let mut reader = csv_reader(source);
    require_columns(reader.headers()?, &TRAFFIC_COLUMNS, "traffic")?;

    let mut samples = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize::<TrafficRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                dropped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match (parse_date(&row.date), parse_volume(&row.volume)) {
            (Some(date), Some(volume)) => samples.push(TrafficSample {
                date,
                corridor: row.corridor,
                volume,
            }),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped malformed traffic rows");
    }
    Ok(TrafficTable::new(samples))
}

pub fn load_hourly(path: &Path) -> Result<HourlyTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_hourly(file)
}

pub fn read_hourly<R: Read>(source: R) -> Result<HourlyTable, DataError> {
    let mut reader = csv_reader(source);
    require_columns(reader.headers()?, &HOURLY_COLUMNS, "hourly traffic")?;

    let mut samples = Vec::new();
    for row in reader.deserialize::<HourlyRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => continue,
            Err(e) => return Err(e.into()),
        };
        if let Some(volume) = parse_volume(&row.volume) {
            samples.push(HourlySample {
                corridor: row.corridor,
                hour: row.hour,
                volume,
            });
        }
    }

    Ok(HourlyTable { samples })
}
