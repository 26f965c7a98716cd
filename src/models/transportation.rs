//! Transportation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical transport type used for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Flight,
    Train,
    Metro,
    Subway,
    Taxi,
    Other,
}

impl TransportKind {
    /// Canonicalize a free-text type, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_type(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "flight" => Self::Flight,
            "train" => Self::Train,
            "metro" => Self::Metro,
            "subway" => Self::Subway,
            "taxi" => Self::Taxi,
            _ => Self::Other,
        }
    }
}

/// A way of getting to or around a destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Transportation {
    pub id: i64,
    pub destination_id: i64,
    /// Free text, e.g. "Flight", "metro"
    #[serde(rename = "type")]
    pub transport_type: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Human readable, e.g. "45 min"
    pub duration: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Transportation {
    #[must_use]
    pub fn new(
        id: i64,
        destination_id: i64,
        transport_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            destination_id,
            transport_type: transport_type.into(),
            name: name.into(),
            description: None,
            price: None,
            duration: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransportKind {
        TransportKind::from_type(&self.transport_type)
    }
}
