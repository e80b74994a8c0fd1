use serde::{Deserialize, Serialize};

use crate::domain::options::SquareFootage;

/// One candidate plaza, as it appears in the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Location Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    /// Free-text tags such as "Italian, Casual". Blank cells load as `None`.
    #[serde(rename = "Cuisine Compatibility")]
    pub cuisine_compatibility: Option<String>,
    #[serde(rename = "Image URL")]
    pub image_url: String,
    #[serde(rename = "Average Store Size (sq ft)")]
    pub avg_store_size_sq_ft: f64,
    #[serde(rename = "Average Lease Rate ($/sq ft)")]
    pub avg_lease_rate_per_sq_ft: f64,
    #[serde(rename = "Price Range")]
    pub price_range: String,
    #[serde(rename = "Vacancy Status")]
    pub vacancy_status: String,
}

/// Lease cost for a listing at the desired floor space. Never rounded here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaseProjection {
    pub monthly: f64,
    pub yearly: f64,
}

impl LeaseProjection {
    pub fn new(rate_per_sq_ft: f64, square_footage: SquareFootage) -> Self {
        let monthly = rate_per_sq_ft * square_footage.value();
        Self {
            monthly,
            yearly: monthly * 12.0,
        }
    }
}

/// A listing that survived filtering, with its lease projection attached.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedListing {
    pub listing: Listing,
    pub lease: LeaseProjection,
}

impl PricedListing {
    pub fn new(listing: Listing, square_footage: SquareFootage) -> Self {
        let lease = LeaseProjection::new(listing.avg_lease_rate_per_sq_ft, square_footage);
        Self { listing, lease }
    }

    pub fn name(&self) -> &str {
        &self.listing.name
    }
}
