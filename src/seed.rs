//! Catalog seeding
//!
//! The reference data (destinations and everything attached to them) ships
//! embedded in the binary. A JSON file with the same shape can replace it.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::store::{Catalog, TravelStore};
use crate::{Result, TravelGuideError};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Parse and validate the catalog bundled with the binary
pub fn embedded_catalog() -> Result<Catalog> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Parse and validate a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(json)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Read a catalog JSON file from disk
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| {
        TravelGuideError::config(format!("Cannot read catalog {}: {e}", path.display()))
    })?;
    parse_catalog(&json)
}

/// Import the catalog when the store has no destinations yet.
///
/// Returns whether an import happened.
pub async fn seed_if_empty(store: &dyn TravelStore, seed_file: Option<&str>) -> Result<bool> {
    if !store.is_empty().await? {
        debug!("Store already holds a catalog, skipping seed");
        return Ok(false);
    }

    let catalog = match seed_file {
        Some(path) => load_catalog_file(path)?,
        None => embedded_catalog()?,
    };

    info!(
        "Seeding store with {} destinations ({} records)",
        catalog.destinations.len(),
        catalog.record_count()
    );
    store.import_catalog(catalog).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportKind;
    use crate::store::MemoryStore;
    use std::io::Write;

    #[test]
    fn test_embedded_catalog_is_consistent() {
        let catalog = embedded_catalog().unwrap();
        assert!(!catalog.destinations.is_empty());
        assert!(!catalog.hotels.is_empty());
        assert!(!catalog.attractions.is_empty());
        assert!(!catalog.phrases.is_empty());
        assert!(catalog.transportation.iter().any(|t| t.kind() != TransportKind::Other));
    }

    #[test]
    fn test_duplicate_destination_rejected() {
        let json = r#"{"destinations": [
            {"id": 1, "name": "Paris", "country": "France", "description": null,
             "currency_code": "EUR", "timezone": null, "image_url": null},
            {"id": 1, "name": "Lyon", "country": "France", "description": null,
             "currency_code": "EUR", "timezone": null, "image_url": null}
        ]}"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(err.to_string().contains("duplicate destination id 1"));
    }

    #[test]
    fn test_dangling_phrase_rejected() {
        let json = r#"{"destinations": [
            {"id": 1, "name": "Paris", "country": "France", "description": null,
             "currency_code": "EUR", "timezone": null, "image_url": null}
        ], "phrases": [
            {"id": 1, "destination_id": 2, "category": "Greetings",
             "english_text": "Hello", "local_text": "Hallo", "pronunciation": null}
        ]}"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, TravelGuideError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let store = MemoryStore::new();
        assert!(seed_if_empty(&store, None).await.unwrap());
        assert!(!seed_if_empty(&store, None).await.unwrap());
        assert!(!store.destinations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"destinations": [{{"id": 5, "name": "Oslo", "country": "Norway",
                "description": null, "currency_code": "NOK", "timezone": null, "image_url": null}}]}}"#
        )
        .unwrap();

        let store = MemoryStore::new();
        let path = file.path().to_string_lossy().into_owned();
        assert!(seed_if_empty(&store, Some(&path)).await.unwrap());
        assert_eq!(store.destinations().await.unwrap()[0].name, "Oslo");
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_config_error() {
        let store = MemoryStore::new();
        let err = seed_if_empty(&store, Some("/nonexistent/catalog.json")).await.unwrap_err();
        assert!(matches!(err, TravelGuideError::Config { .. }));
    }
}
