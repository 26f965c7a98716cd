//! Phrasebook entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A phrasebook entry for a destination's local language
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Phrase {
    pub id: i64,
    pub destination_id: i64,
    /// Grouping such as "Greetings" or "Dining"
    pub category: String,
    pub english_text: String,
    pub local_text: String,
    pub pronunciation: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Phrase {
    #[must_use]
    pub fn new(
        id: i64,
        destination_id: i64,
        category: impl Into<String>,
        english_text: impl Into<String>,
        local_text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            destination_id,
            category: category.into(),
            english_text: english_text.into(),
            local_text: local_text.into(),
            pronunciation: None,
            created_at: now,
            updated_at: now,
        }
    }
}
