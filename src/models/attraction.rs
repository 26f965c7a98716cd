//! Attraction model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display grouping for the free-text attraction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttractionCategory {
    Museum,
    Landmark,
    Religious,
    Tour,
    Other,
}

impl AttractionCategory {
    /// Map a stored category label; unknown and missing labels become `Other`
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Museum") => Self::Museum,
            Some("Landmark") => Self::Landmark,
            Some("Religious") => Self::Religious,
            Some("Tour") => Self::Tour,
            _ => Self::Other,
        }
    }
}

/// A sight or activity at a destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    pub id: i64,
    pub destination_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub opening_hours: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Attraction {
    #[must_use]
    pub fn new(id: i64, destination_id: i64, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            destination_id,
            name: name.into(),
            description: None,
            category: None,
            price: None,
            rating: None,
            opening_hours: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn category_kind(&self) -> AttractionCategory {
        AttractionCategory::from_label(self.category.as_deref())
    }

    /// Free admission is an explicit price of zero, not a missing price
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == Some(0.0)
    }
}
