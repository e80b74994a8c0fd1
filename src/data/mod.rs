//! Flat-file tables behind the dashboard and the cache that holds them.

pub mod cache;
pub mod catalog;
pub mod traffic;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

pub use cache::TableCache;
pub use catalog::{load_catalog, Catalog};
pub use traffic::{load_hourly, load_traffic, HourlyTable, TrafficTable};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("{table} dataset is missing required columns: {}", missing.join(", "))]
    Schema {
        table: &'static str,
        missing: Vec<String>,
    },
}

pub(crate) fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source)
}

pub(crate) fn require_columns(
    headers: &csv::StringRecord,
    required: &[&str],
    table: &'static str,
) -> Result<(), DataError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataError::Schema { table, missing })
    }
}

/// The three dataset paths and their caches.
pub struct Tables {
    catalog_path: PathBuf,
    traffic_path: PathBuf,
    hourly_path: Option<PathBuf>,
    catalogs: TableCache<Catalog>,
    traffic: TableCache<TrafficTable>,
    hourly: TableCache<HourlyTable>,
}

impl Tables {
    pub fn new(catalog_path: PathBuf, traffic_path: PathBuf, hourly_path: Option<PathBuf>) -> Self {
        Self {
            catalog_path,
            traffic_path,
            hourly_path,
            catalogs: TableCache::new(),
            traffic: TableCache::new(),
            hourly: TableCache::new(),
        }
    }

    pub fn catalog(&self) -> Result<Arc<Catalog>, DataError> {
        self.catalogs.get_or_load(&self.catalog_path, load_catalog)
    }

    pub fn traffic(&self) -> Result<Arc<TrafficTable>, DataError> {
        self.traffic.get_or_load(&self.traffic_path, load_traffic)
    }

    /// The hourly breakdown is optional: an unset path, a missing file or a
    /// broken file all mean "no hourly data".
    pub fn hourly(&self) -> Option<Arc<HourlyTable>> {
        let path = self.hourly_path.as_deref()?;
        if !path.exists() {
            return None;
        }
        match self.hourly.get_or_load(path, load_hourly) {
            Ok(table) => Some(table),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "hourly traffic unavailable");
                None
            }
        }
    }

    /// Forget every cached table; the next request re-reads the files.
    pub fn reload(&self) {
        self.catalogs.invalidate(&self.catalog_path);
        self.traffic.invalidate(&self.traffic_path);
        if let Some(path) = self.hourly_path.as_deref() {
            self.hourly.invalidate(path);
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }
}
