// src/domain/filter.rs

use std::collections::HashSet;

use crate::domain::listing::{Listing, PricedListing};
use crate::domain::options::{CuisineType, RestaurantType, SquareFootage, StartupCostBracket};

/// Everything the user picked on the insights form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub restaurant_type: RestaurantType,
    pub cuisines: Vec<CuisineType>,
    /// Shown back to the user; it does not narrow the result set.
    pub startup_costs: StartupCostBracket,
    pub square_footage: SquareFootage,
}

impl FilterCriteria {
    /// Plain substring containment, case-insensitive.
    /// "Italian" matches "Casual, Italian Bistro", and so would any tag that
    /// merely shares the characters.
    pub fn matches(&self, listing: &Listing) -> bool {
        let Some(tags) = listing.cuisine_compatibility.as_deref() else {
            return false;
        };
        let tags = tags.to_lowercase();

        if tags.contains(&self.restaurant_type.label().to_lowercase()) {
            return true;
        }
        self.cuisines
            .iter()
            .any(|cuisine| tags.contains(&cuisine.label().to_lowercase()))
    }
}

/// Narrow the catalog to matching listings, priced at the desired floor space.
/// Duplicate names keep their first occurrence; source order is preserved.
pub fn filter_listings<'a, I>(listings: I, criteria: &FilterCriteria) -> Vec<PricedListing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut seen = HashSet::new();

    listings
        .into_iter()
        .filter(|listing| criteria.matches(listing))
        .filter(|listing| seen.insert(listing.name.clone()))
        .map(|listing| PricedListing::new(listing.clone(), criteria.square_footage))
        .collect()
}
