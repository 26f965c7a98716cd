//! Trip planning
//!
//! Turns a validated request into a persisted [`TripPlan`]:
//! - `budget`: daily budget, lodging ceiling and discretionary spend
//! - `itinerary`: even distribution of top attractions over the trip days
//! - `cost`: estimated total cost from the affordable hotels

use std::sync::Arc;

use tracing::{info, instrument};

use crate::config::PlannerConfig;
use crate::models::{CreateTripPlan, NewTripPlan, TripPlan};
use crate::store::TravelStore;
use crate::{Result, TravelGuideError};

pub mod budget;
pub mod cost;
pub mod itinerary;

pub use budget::BudgetAllocation;
pub use cost::{average_hotel_cost, estimate_total_cost};
pub use itinerary::generate_itinerary;

/// Creates trip plans against a [`TravelStore`]
pub struct TripPlanner {
    store: Arc<dyn TravelStore>,
    settings: PlannerConfig,
}

impl TripPlanner {
    #[must_use]
    pub fn new(store: Arc<dyn TravelStore>, settings: PlannerConfig) -> Self {
        Self { store, settings }
    }

    /// Validate, plan and persist a trip.
    ///
    /// Fails with `NotFound` for an unknown destination and with `Validation`
    /// when budget or duration are out of range.
    #[instrument(skip(self), fields(destination_id = request.destination_id))]
    pub async fn create_trip_plan(&self, request: CreateTripPlan) -> Result<TripPlan> {
        let request = request.validate()?;

        let destination = self
            .store
            .destination(request.destination_id)
            .await?
            .ok_or_else(|| TravelGuideError::not_found("Destination"))?;

        let allocation = BudgetAllocation::new(request.budget, request.duration);

        let mut hotels = self
            .store
            .hotels(destination.id, Some(allocation.lodging_ceiling))
            .await?;
        hotels.truncate(self.settings.hotel_candidates);

        let mut attractions = self.store.attractions(destination.id).await?;
        attractions.truncate(self.settings.attraction_limit);

        let accommodation = hotels
            .first()
            .map_or(self.settings.fallback_accommodation.as_str(), |h| h.name.as_str());
        let itinerary = generate_itinerary(request.duration, &attractions, accommodation);
        let total_estimated_cost = estimate_total_cost(&hotels, &allocation, request.duration);

        let plan = self
            .store
            .insert_trip_plan(NewTripPlan {
                destination_id: destination.id,
                budget: request.budget,
                duration_days: request.duration.get(),
                total_estimated_cost,
                itinerary,
            })
            .await?;

        info!(
            "Created trip plan {} for {}: {} days, budget {:.2}, estimated {:.2} ({} hotels, {} attractions)",
            plan.id,
            destination.display_name(),
            plan.duration_days,
            plan.budget,
            plan.total_estimated_cost,
            hotels.len(),
            attractions.len()
        );

        Ok(plan)
    }
}
