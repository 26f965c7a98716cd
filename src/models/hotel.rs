//! Hotel model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A hotel at a destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub destination_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_per_night: f64,
    /// Guest rating, 0-5
    pub rating: Option<f64>,
    /// Comma-delimited free text, e.g. "WiFi, Pool, Spa"
    pub amenities: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    #[must_use]
    pub fn new(id: i64, destination_id: i64, name: impl Into<String>, price_per_night: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            destination_id,
            name: name.into(),
            description: None,
            price_per_night,
            rating: None,
            amenities: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style rating setter
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Split the amenity text into individual entries
    #[must_use]
    pub fn amenity_list(&self) -> Vec<String> {
        self.amenities
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whether the nightly price fits under `ceiling`
    #[must_use]
    pub fn is_affordable(&self, ceiling: f64) -> bool {
        self.price_per_night <= ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenity_list() {
        let mut hotel = Hotel::new(1, 1, "Le Marais Inn", 120.0);
        hotel.amenities = Some("WiFi, Restaurant,Bar , ,Spa".to_string());
        assert_eq!(hotel.amenity_list(), vec!["WiFi", "Restaurant", "Bar", "Spa"]);
    }

    #[test]
    fn test_amenity_list_empty() {
        let hotel = Hotel::new(1, 1, "Plain", 50.0);
        assert!(hotel.amenity_list().is_empty());
    }

    #[test]
    fn test_is_affordable_inclusive() {
        let hotel = Hotel::new(1, 1, "Edge", 160.0);
        assert!(hotel.is_affordable(160.0));
        assert!(!hotel.is_affordable(159.99));
    }
}
