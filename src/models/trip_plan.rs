//! Trip plan models: the creation request, its validated form and the stored plan

use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Result, TravelGuideError};

/// Longest trip the planner accepts, in days
pub const MAX_TRIP_DAYS: u32 = 30;

/// Smallest accepted total budget
pub const MIN_BUDGET: f64 = 1.0;

/// One day of a generated itinerary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    pub activities: Vec<String>,
    pub accommodation: String,
}

/// Body of `POST /api/trip-plans`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateTripPlan {
    pub destination_id: i64,
    pub budget: f64,
    pub duration_days: u32,
}

/// A creation request that passed boundary validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRequest {
    pub destination_id: i64,
    pub budget: f64,
    pub duration: NonZeroU32,
}

impl CreateTripPlan {
    /// Enforce `budget >= 1` and `1 <= duration_days <= 30`
    pub fn validate(&self) -> Result<TripRequest> {
        if !self.budget.is_finite() || self.budget < MIN_BUDGET {
            return Err(TravelGuideError::validation(format!(
                "budget must be a number of at least {MIN_BUDGET}, got: {}",
                self.budget
            )));
        }

        let duration = NonZeroU32::new(self.duration_days)
            .filter(|d| d.get() <= MAX_TRIP_DAYS)
            .ok_or_else(|| {
                TravelGuideError::validation(format!(
                    "duration_days must be between 1 and {MAX_TRIP_DAYS}, got: {}",
                    self.duration_days
                ))
            })?;

        Ok(TripRequest {
            destination_id: self.destination_id,
            budget: self.budget,
            duration,
        })
    }
}

/// Everything the planner computes; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct NewTripPlan {
    pub destination_id: i64,
    pub budget: f64,
    pub duration_days: u32,
    pub total_estimated_cost: f64,
    pub itinerary: Vec<ItineraryDay>,
}

/// A persisted trip plan. Plans are never updated after creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripPlan {
    pub id: i64,
    pub destination_id: i64,
    pub budget: f64,
    pub duration_days: u32,
    pub total_estimated_cost: f64,
    pub itinerary: Vec<ItineraryDay>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TripPlan {
    #[must_use]
    pub fn from_new(id: i64, plan: NewTripPlan, now: DateTime<Utc>) -> Self {
        Self {
            id,
            destination_id: plan.destination_id,
            budget: plan.budget,
            duration_days: plan.duration_days,
            total_estimated_cost: plan.total_estimated_cost,
            itinerary: plan.itinerary,
            created_at: now,
            updated_at: now,
        }
    }

    /// The itinerary as the JSON array text stored in the `itinerary` column
    pub fn itinerary_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.itinerary)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(budget: f64, duration_days: u32) -> CreateTripPlan {
        CreateTripPlan {
            destination_id: 1,
            budget,
            duration_days,
        }
    }

    #[rstest]
    #[case(1.0, 1)]
    #[case(2000.0, 5)]
    #[case(10_000.0, 30)]
    fn test_validate_accepts(#[case] budget: f64, #[case] days: u32) {
        let validated = request(budget, days).validate().unwrap();
        assert_eq!(validated.duration.get(), days);
        assert_eq!(validated.budget, budget);
    }

    #[rstest]
    #[case(0.5, 5)]
    #[case(-10.0, 5)]
    #[case(f64::NAN, 5)]
    #[case(f64::INFINITY, 5)]
    #[case(100.0, 0)]
    #[case(100.0, 31)]
    fn test_validate_rejects(#[case] budget: f64, #[case] days: u32) {
        let err = request(budget, days).validate().unwrap_err();
        assert!(matches!(err, TravelGuideError::Validation { .. }));
    }

    #[test]
    fn test_itinerary_json_shape() {
        let plan = TripPlan::from_new(
            7,
            NewTripPlan {
                destination_id: 1,
                budget: 500.0,
                duration_days: 1,
                total_estimated_cost: 480.0,
                itinerary: vec![ItineraryDay {
                    day: 1,
                    activities: vec!["Morning: Breakfast at hotel".to_string()],
                    accommodation: "Hotel Lutetia".to_string(),
                }],
            },
            Utc::now(),
        );

        let json = plan.itinerary_json().unwrap();
        assert_eq!(
            json,
            r#"[{"day":1,"activities":["Morning: Breakfast at hotel"],"accommodation":"Hotel Lutetia"}]"#
        );
    }

    #[test]
    fn test_fractional_duration_is_rejected_by_the_decoder() {
        let parsed = serde_json::from_str::<CreateTripPlan>(
            r#"{"destination_id": 1, "budget": 100, "duration_days": 2.5}"#,
        );
        assert!(parsed.is_err());
    }
}
