//! Storage for the travel catalog and generated trip plans
//!
//! Handlers and the planner only talk to [`TravelStore`]. Two backends exist:
//! [`FjallStore`] persists to disk, [`MemoryStore`] keeps everything in process.
//! Both share the filtering and ordering rules in [`ordering`], so query
//! results are identical regardless of backend.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Result, TravelGuideError};
use crate::models::{Attraction, Destination, Hotel, NewTripPlan, Phrase, Transportation, TripPlan};

pub mod disk;
pub mod memory;
pub mod ordering;

pub use disk::FjallStore;
pub use memory::MemoryStore;

/// Reference data for all destinations, as imported from a seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub transportation: Vec<Transportation>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
}

impl Catalog {
    /// Every record must reference a destination of this catalog, and
    /// destination ids must be unique
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for destination in &self.destinations {
            if !ids.insert(destination.id) {
                return Err(TravelGuideError::validation(format!(
                    "duplicate destination id {}",
                    destination.id
                )));
            }
        }

        let check = |kind: &str, name: &str, destination_id: i64| {
            if ids.contains(&destination_id) {
                Ok(())
            } else {
                Err(TravelGuideError::validation(format!(
                    "{kind} '{name}' references unknown destination {destination_id}"
                )))
            }
        };

        for hotel in &self.hotels {
            check("hotel", &hotel.name, hotel.destination_id)?;
        }
        for attraction in &self.attractions {
            check("attraction", &attraction.name, attraction.destination_id)?;
        }
        for transport in &self.transportation {
            check("transportation", &transport.name, transport.destination_id)?;
        }
        for phrase in &self.phrases {
            check("phrase", &phrase.english_text, phrase.destination_id)?;
        }
        Ok(())
    }

    /// Number of records across all tables
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.destinations.len()
            + self.hotels.len()
            + self.attractions.len()
            + self.transportation.len()
            + self.phrases.len()
    }
}

/// Query and persistence operations backing the HTTP API
#[async_trait]
pub trait TravelStore: Send + Sync {
    /// All destinations, ordered by name
    async fn destinations(&self) -> Result<Vec<Destination>>;

    async fn destination(&self, id: i64) -> Result<Option<Destination>>;

    /// Hotels at a destination priced at or below `max_price` (when given),
    /// best rated first, cheaper first among equal ratings
    async fn hotels(&self, destination_id: i64, max_price: Option<f64>) -> Result<Vec<Hotel>>;

    /// Attractions at a destination, best rated first
    async fn attractions(&self, destination_id: i64) -> Result<Vec<Attraction>>;

    /// Transport options ordered by type, then price
    async fn transportation(&self, destination_id: i64) -> Result<Vec<Transportation>>;

    /// Phrasebook ordered by category, then English text
    async fn phrases(&self, destination_id: i64) -> Result<Vec<Phrase>>;

    /// Persist a new plan under a fresh id
    async fn insert_trip_plan(&self, plan: NewTripPlan) -> Result<TripPlan>;

    async fn trip_plan(&self, id: i64) -> Result<Option<TripPlan>>;

    /// Replace the reference data with `catalog`
    async fn import_catalog(&self, catalog: Catalog) -> Result<()>;

    /// True when no destinations are stored
    async fn is_empty(&self) -> Result<bool>;
}
