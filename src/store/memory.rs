//! In-process store, used for ephemeral runs and tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Catalog, TravelStore, ordering};
use crate::Result;
use crate::models::{Attraction, Destination, Hotel, NewTripPlan, Phrase, Transportation, TripPlan};

#[derive(Default)]
struct State {
    catalog: Catalog,
    trip_plans: BTreeMap<i64, TripPlan>,
    last_trip_plan_id: i64,
}

/// Keeps the catalog and trip plans in memory; contents are lost on drop
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `catalog`
    pub async fn with_catalog(catalog: Catalog) -> Result<Self> {
        let store = Self::new();
        store.import_catalog(catalog).await?;
        Ok(store)
    }
}

#[async_trait]
impl TravelStore for MemoryStore {
    async fn destinations(&self) -> Result<Vec<Destination>> {
        let state = self.state.read().await;
        Ok(ordering::order_destinations(state.catalog.destinations.clone()))
    }

    async fn destination(&self, id: i64) -> Result<Option<Destination>> {
        let state = self.state.read().await;
        Ok(state.catalog.destinations.iter().find(|d| d.id == id).cloned())
    }

    async fn hotels(&self, destination_id: i64, max_price: Option<f64>) -> Result<Vec<Hotel>> {
        let state = self.state.read().await;
        let hotels = state
            .catalog
            .hotels
            .iter()
            .filter(|h| h.destination_id == destination_id)
            .cloned()
            .collect();
        Ok(ordering::order_hotels(hotels, max_price))
    }

    async fn attractions(&self, destination_id: i64) -> Result<Vec<Attraction>> {
        let state = self.state.read().await;
        let attractions = state
            .catalog
            .attractions
            .iter()
            .filter(|a| a.destination_id == destination_id)
            .cloned()
            .collect();
        Ok(ordering::order_attractions(attractions))
    }

    async fn transportation(&self, destination_id: i64) -> Result<Vec<Transportation>> {
        let state = self.state.read().await;
        let transportation = state
            .catalog
            .transportation
            .iter()
            .filter(|t| t.destination_id == destination_id)
            .cloned()
            .collect();
        Ok(ordering::order_transportation(transportation))
    }

    async fn phrases(&self, destination_id: i64) -> Result<Vec<Phrase>> {
        let state = self.state.read().await;
        let phrases = state
            .catalog
            .phrases
            .iter()
            .filter(|p| p.destination_id == destination_id)
            .cloned()
            .collect();
        Ok(ordering::order_phrases(phrases))
    }

    async fn insert_trip_plan(&self, plan: NewTripPlan) -> Result<TripPlan> {
        let mut state = self.state.write().await;
        state.last_trip_plan_id += 1;
        let id = state.last_trip_plan_id;

        let trip_plan = TripPlan::from_new(id, plan, Utc::now());
        state.trip_plans.insert(id, trip_plan.clone());
        debug!(id, "Stored trip plan in memory");
        Ok(trip_plan)
    }

    async fn trip_plan(&self, id: i64) -> Result<Option<TripPlan>> {
        let state = self.state.read().await;
        Ok(state.trip_plans.get(&id).cloned())
    }

    async fn import_catalog(&self, catalog: Catalog) -> Result<()> {
        catalog.validate()?;
        let mut state = self.state.write().await;
        state.catalog = catalog;
        Ok(())
    }

    async fn is_empty(&self) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state.catalog.destinations.is_empty())
    }
}
