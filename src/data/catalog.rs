use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::data::{csv_reader, require_columns, DataError};
use crate::domain::listing::Listing;

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Location Name",
    "Address",
    "Cuisine Compatibility",
    "Image URL",
    "Average Store Size (sq ft)",
    "Average Lease Rate ($/sq ft)",
    "Price Range",
    "Vacancy Status",
];

/// The listing table, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = read_catalog(file)?;
    info!(path = %path.display(), listings = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse a catalog from any CSV source.
/// Rows with unparseable numbers are skipped; blank tags load as `None`.
pub fn read_catalog<R: Read>(source: R) -> Result<Catalog, DataError> {
    let mut reader = csv_reader(source);
    require_columns(reader.headers()?, &REQUIRED_COLUMNS, "catalog")?;

    let mut listings = Vec::new();
    for (i, row) in reader.deserialize::<Listing>().enumerate() {
        match row {
            Ok(listing) => listings.push(listing),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                // +2: header line, 1-based numbering
                warn!(line = i + 2, error = %e, "skipping catalog row");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(Catalog::new(listings))
}
