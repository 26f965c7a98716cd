//! Budget allocation: splits a trip budget into daily, lodging and discretionary parts

use std::num::NonZeroU32;

use serde::Serialize;

/// Share of the daily budget reserved for the nightly hotel price
pub const LODGING_SHARE: f64 = 0.4;

/// Share of the daily budget left for food, sights and transport
pub const DISCRETIONARY_SHARE: f64 = 0.6;

/// Derived spending thresholds for a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetAllocation {
    pub daily_budget: f64,
    /// Highest nightly price considered affordable
    pub lodging_ceiling: f64,
    /// Non-lodging budget for the whole trip
    pub discretionary_total: f64,
}

impl BudgetAllocation {
    #[must_use]
    pub fn new(budget: f64, duration: NonZeroU32) -> Self {
        let days = f64::from(duration.get());
        let daily_budget = budget / days;

        Self {
            daily_budget,
            lodging_ceiling: daily_budget * LODGING_SHARE,
            discretionary_total: daily_budget * DISCRETIONARY_SHARE * days,
        }
    }
}
