pub mod filter;
pub mod hourly;
pub mod listing;
pub mod options;
pub mod traffic;

pub use filter::{filter_listings, FilterCriteria};
pub use hourly::{hourly_profile, HourlyProfile, HourlySample};
pub use listing::{LeaseProjection, Listing, PricedListing};
pub use options::{CuisineType, RestaurantType, SquareFootage, SquareFootageRange, StartupCostBracket};
pub use traffic::{analyze_corridor, Bucket, CorridorTraffic, TrafficInsights, TrafficSample};
