// src/domain/traffic.rs

//! Foot-traffic aggregates for a single corridor.
//!
//! Every function here accepts an empty slice and answers with an empty
//! series or `None`; a plaza without traffic history is not an error.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

/// One day's visit count for a corridor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficSample {
    pub date: NaiveDate,
    pub corridor: String,
    pub volume: u64,
}

/// A labelled value in an aggregate series. Series are returned in their
/// canonical order (Monday first, Week 1 first, January first).
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub value: f64,
}

impl Bucket {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKS_PER_MONTH: u32 = 4;

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Week-of-month bucket in 1..=4. Days 29 and later fold into week 4.
pub fn week_of_month(date: NaiveDate) -> u32 {
    (((date.day() - 1) / 7) + 1).min(WEEKS_PER_MONTH)
}

/// Mean sample volume per weekday, Monday through Sunday.
/// Weekdays without samples are left out.
pub fn by_weekday(samples: &[TrafficSample]) -> Vec<Bucket> {
    let mut totals = [(0u64, 0u64); 7];
    for sample in samples {
        let idx = sample.date.weekday().num_days_from_monday() as usize;
        totals[idx].0 = totals[idx].0.saturating_add(sample.volume);
        totals[idx].1 += 1;
    }

    WEEKDAYS
        .iter()
        .zip(totals)
        .filter(|(_, (_, count))| *count > 0)
        .map(|(day, (sum, count))| Bucket::new(weekday_name(*day), sum as f64 / count as f64))
        .collect()
}

/// Total volume per week-of-month bucket. Always four buckets; weeks without
/// samples are zero.
pub fn by_week_of_month(samples: &[TrafficSample]) -> Vec<Bucket> {
    let mut totals = [0u64; WEEKS_PER_MONTH as usize];
    for sample in samples {
        let slot = &mut totals[(week_of_month(sample.date) - 1) as usize];
        *slot = slot.saturating_add(sample.volume);
    }

    totals
        .iter()
        .enumerate()
        .map(|(i, total)| Bucket::new(format!("Week {}", i + 1), *total as f64))
        .collect()
}

/// Total volume per calendar month (months from every year are merged),
/// January first. Months without samples are left out.
pub fn by_month(samples: &[TrafficSample]) -> Vec<Bucket> {
    let mut totals = [None::<u64>; 12];
    for sample in samples {
        let slot = &mut totals[sample.date.month0() as usize];
        *slot = Some(slot.unwrap_or(0).saturating_add(sample.volume));
    }

    MONTH_NAMES
        .iter()
        .zip(totals)
        .filter_map(|(name, total)| total.map(|t| Bucket::new(*name, t as f64)))
        .collect()
}

/// Total volume per calendar year, oldest first.
pub fn by_year(samples: &[TrafficSample]) -> Vec<Bucket> {
    let mut totals: BTreeMap<i32, u64> = BTreeMap::new();
    for sample in samples {
        let total = totals.entry(sample.date.year()).or_default();
        *total = total.saturating_add(sample.volume);
    }

    totals
        .into_iter()
        .map(|(year, total)| Bucket::new(year.to_string(), total as f64))
        .collect()
}

/// Sum of every volume in the slice.
pub fn total_volume(samples: &[TrafficSample]) -> u64 {
    samples.iter().fold(0u64, |acc, s| acc.saturating_add(s.volume))
}

/// Mean of the per-date totals. Several samples on one date count as one day.
pub fn average_per_day(samples: &[TrafficSample]) -> Option<f64> {
    let mut daily: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for sample in samples {
        let total = daily.entry(sample.date).or_default();
        *total = total.saturating_add(sample.volume);
    }
    if daily.is_empty() {
        return None;
    }
    let sum = daily.values().fold(0u64, |acc, v| acc.saturating_add(*v));
    Some(sum as f64 / daily.len() as f64)
}

/// Seven times the daily average.
pub fn average_per_week(samples: &[TrafficSample]) -> Option<f64> {
    average_per_day(samples).map(|per_day| per_day * 7.0)
}

/// Highest and lowest buckets of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub busiest: Bucket,
    pub quietest: Bucket,
}

/// Argmax / argmin over a series. On ties the earlier bucket wins.
pub fn extremes(series: &[Bucket]) -> Option<Extremes> {
    let first = series.first()?;
    let mut busiest = first;
    let mut quietest = first;

    for bucket in &series[1..] {
        if bucket.value > busiest.value {
            busiest = bucket;
        }
        if bucket.value < quietest.value {
            quietest = bucket;
        }
    }

    Some(Extremes {
        busiest: busiest.clone(),
        quietest: quietest.clone(),
    })
}

/// All aggregates for a corridor that has at least one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficInsights {
    pub corridor: String,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub by_weekday: Vec<Bucket>,
    pub by_week_of_month: Vec<Bucket>,
    pub by_month: Vec<Bucket>,
    pub by_year: Vec<Bucket>,
    pub average_per_day: f64,
    pub average_per_week: f64,
    pub total_per_year: u64,
}

impl TrafficInsights {
    pub fn weekday_extremes(&self) -> Option<Extremes> {
        extremes(&self.by_weekday)
    }

    pub fn week_extremes(&self) -> Option<Extremes> {
        extremes(&self.by_week_of_month)
    }

    pub fn month_extremes(&self) -> Option<Extremes> {
        extremes(&self.by_month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorridorTraffic {
    NoData { corridor: String },
    Available(Box<TrafficInsights>),
}

/// Aggregate the samples of `corridor` (exact name match).
pub fn analyze_corridor(samples: &[TrafficSample], corridor: &str) -> CorridorTraffic {
    let slice: Vec<TrafficSample> = samples
        .iter()
        .filter(|s| s.corridor == corridor)
        .cloned()
        .collect();

    let (Some(first_date), Some(last_date), Some(average_per_day)) = (
        slice.iter().map(|s| s.date).min(),
        slice.iter().map(|s| s.date).max(),
        average_per_day(&slice),
    ) else {
        return CorridorTraffic::NoData {
            corridor: corridor.to_string(),
        };
    };

    CorridorTraffic::Available(Box::new(TrafficInsights {
        corridor: corridor.to_string(),
        first_date,
        last_date,
        by_weekday: by_weekday(&slice),
        by_week_of_month: by_week_of_month(&slice),
        by_month: by_month(&slice),
        by_year: by_year(&slice),
        average_per_day,
        average_per_week: average_per_day * 7.0,
        total_per_year: total_volume(&slice),
    }))
}
