//! Estimated trip cost

use std::num::NonZeroU32;

use super::budget::BudgetAllocation;
use crate::models::Hotel;

/// Mean nightly price of the qualifying hotels, or the lodging ceiling when none qualified
#[must_use]
pub fn average_hotel_cost(hotels: &[Hotel], allocation: &BudgetAllocation) -> f64 {
    if hotels.is_empty() {
        return allocation.lodging_ceiling;
    }
    let total: f64 = hotels.iter().map(|h| h.price_per_night).sum();
    total / hotels.len() as f64
}

/// Lodging for every night plus the discretionary budget for the whole trip
#[must_use]
pub fn estimate_total_cost(
    hotels: &[Hotel],
    allocation: &BudgetAllocation,
    duration: NonZeroU32,
) -> f64 {
    average_hotel_cost(hotels, allocation) * f64::from(duration.get())
        + allocation.discretionary_total
}
