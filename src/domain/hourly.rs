use crate::domain::traffic::Bucket;

/// One hour-of-day visit count for a corridor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlySample {
    pub corridor: String,
    pub hour: String,
    pub volume: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourlySource {
    Recorded,
    /// Stand-in shape used when no hourly breakdown exists for the corridor.
    /// Not real data; the UI labels it as an estimate.
    SyntheticFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyProfile {
    pub buckets: Vec<Bucket>,
    pub source: HourlySource,
}

impl HourlyProfile {
    pub fn is_estimate(&self) -> bool {
        self.source == HourlySource::SyntheticFallback
    }
}

/// Typical lunch/dinner shaped curve for a suburban plaza.
pub const FALLBACK_HOURLY: [(&str, u64); 16] = [
    ("7 AM", 120),
    ("8 AM", 210),
    ("9 AM", 260),
    ("10 AM", 310),
    ("11 AM", 480),
    ("12 PM", 720),
    ("1 PM", 650),
    ("2 PM", 420),
    ("3 PM", 360),
    ("4 PM", 410),
    ("5 PM", 560),
    ("6 PM", 740),
    ("7 PM", 690),
    ("8 PM", 520),
    ("9 PM", 330),
    ("10 PM", 170),
];

/// Hourly volumes for `corridor` in file order, summing repeated hour labels.
/// Falls back to [`FALLBACK_HOURLY`] when there is no table or no row for it.
pub fn hourly_profile(samples: Option<&[HourlySample]>, corridor: &str) -> HourlyProfile {
    let mut buckets: Vec<Bucket> = Vec::new();

    for sample in samples.unwrap_or_default().iter().filter(|s| s.corridor == corridor) {
        match buckets.iter_mut().find(|b| b.label == sample.hour) {
            Some(bucket) => bucket.value += sample.volume as f64,
            None => buckets.push(Bucket {
                label: sample.hour.clone(),
                value: sample.volume as f64,
            }),
        }
    }

    if !buckets.is_empty() {
        return HourlyProfile {
            buckets,
            source: HourlySource::Recorded,
        };
    }

    HourlyProfile {
        buckets: FALLBACK_HOURLY
            .iter()
            .map(|(label, value)| Bucket {
                label: label.to_string(),
                value: *value as f64,
            })
            .collect(),
        source: HourlySource::SyntheticFallback,
    }
}
