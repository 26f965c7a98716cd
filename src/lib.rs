//! `TravelGuide` - destination browsing and budget trip planning
//!
//! This library provides the travel catalog (destinations, hotels,
//! attractions, transportation and phrases), the trip planner, currency
//! conversion and the HTTP API that exposes them.

pub mod api;
pub mod config;
pub mod currency;
pub mod error;
pub mod logging;
pub mod models;
pub mod planner;
pub mod seed;
pub mod store;
pub mod web;

// Re-export core types for public API
pub use api::{AppState, router};
pub use config::TravelGuideConfig;
pub use currency::{Conversion, Currency};
pub use error::TravelGuideError;
pub use models::{
    Attraction, CreateTripPlan, Destination, Hotel, ItineraryDay, Phrase, Transportation, TripPlan,
};
pub use planner::TripPlanner;
pub use store::{Catalog, FjallStore, MemoryStore, TravelStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelGuideError>;
