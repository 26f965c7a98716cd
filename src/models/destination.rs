//! Destination model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A travel destination; every other catalog record hangs off one of these
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    /// ISO 4217 code used by the currency converter UI
    pub currency_code: Option<String>,
    /// IANA timezone name
    pub timezone: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Destination {
    /// Create a destination with only the required columns populated
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, country: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            country: country.into(),
            description: None,
            currency_code: None,
            timezone: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// "Name, Country" label used in logs
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let destination = Destination::new(1, "Kyoto", "Japan");
        assert_eq!(destination.display_name(), "Kyoto, Japan");
    }

    #[test]
    fn test_timestamps_default_when_absent() {
        let json = r#"{"id": 3, "name": "Lisbon", "country": "Portugal",
            "description": null, "currency_code": "EUR", "timezone": null, "image_url": null}"#;
        let destination: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(destination.currency_code.as_deref(), Some("EUR"));
        assert!(destination.created_at <= Utc::now());
    }
}
