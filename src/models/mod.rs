//! Data models for the TravelGuide service
//!
//! This module contains the domain records organized by concern:
//! - Destination: the place being visited
//! - Hotel, Attraction, Transportation, Phrase: per-destination reference data
//! - TripPlan: a generated, immutable plan with its day-by-day itinerary

pub mod attraction;
pub mod destination;
pub mod hotel;
pub mod phrase;
pub mod transportation;
pub mod trip_plan;

// Re-export all public types for convenient access
pub use attraction::{Attraction, AttractionCategory};
pub use destination::Destination;
pub use hotel::Hotel;
pub use phrase::Phrase;
pub use transportation::{TransportKind, Transportation};
pub use trip_plan::{CreateTripPlan, ItineraryDay, NewTripPlan, TripPlan, TripRequest};
