use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use fjall::Keyspace;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::task;
use tracing::{debug, info, instrument};

use super::{Catalog, TravelStore, ordering};
use crate::models::{Attraction, Destination, Hotel, NewTripPlan, Phrase, Transportation, TripPlan};
use crate::Result;

const DESTINATIONS_KEY: &str = "destinations";
const LAST_TRIP_PLAN_ID_KEY: &str = "trip_plans/last_id";

/// Catalog tables stored as one postcard-encoded list per destination
const PER_DESTINATION_TABLES: [&str; 4] = ["hotels", "attractions", "transportation", "phrases"];

fn table_key(table: &str, destination_id: i64) -> String {
    format!("{table}/{destination_id}")
}

fn get_from_store(store: Keyspace, key: Vec<u8>) -> Result<Option<Vec<u8>>> {
    Ok(store.get(key)?.map(|v| v.to_vec()))
}

/// Disk-backed store on top of fjall.
///
/// `catalog` holds the reference data, `trip_plans` holds one entry per plan
/// keyed by big-endian id, `meta` holds the id counter. The counter lock is
/// held until both the counter and the plan are written, so the persisted
/// counter never falls behind an issued id.
pub struct FjallStore {
    catalog: Keyspace,
    trip_plans: Keyspace,
    meta: Keyspace,
    last_trip_plan_id: Mutex<i64>,
}

impl FjallStore {
    /// Open (or create) the store rooted at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = fjall::Database::builder(&path).open()?;
        let catalog = db.keyspace("catalog", fjall::KeyspaceCreateOptions::default)?;
        let trip_plans = db.keyspace("trip_plans", fjall::KeyspaceCreateOptions::default)?;
        let meta = db.keyspace("meta", fjall::KeyspaceCreateOptions::default)?;

        let last_id = match get_from_store(meta.clone(), LAST_TRIP_PLAN_ID_KEY.as_bytes().to_vec())? {
            Some(bytes) => postcard::from_bytes::<i64>(&bytes)?,
            None => 0,
        };

        info!(
            "Opened travel store at {} (last trip plan id {})",
            path.as_ref().display(),
            last_id
        );

        Ok(Self {
            catalog,
            trip_plans,
            meta,
            last_trip_plan_id: Mutex::new(last_id),
        })
    }

    async fn read<T: DeserializeOwned + Send + 'static>(
        store: &Keyspace,
        key: Vec<u8>,
    ) -> Result<Option<T>> {
        let store = store.clone();
        let maybe_bytes = task::spawn_blocking(move || get_from_store(store, key)).await??;

        match maybe_bytes {
            Some(bytes) => Ok(Some(postcard::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn write<T: Serialize>(store: &Keyspace, key: Vec<u8>, value: &T) -> Result<()> {
        let store = store.clone();
        let bytes = postcard::to_stdvec(value)?;
        task::spawn_blocking(move || store.insert(key, bytes)).await??;
        Ok(())
    }

    async fn remove(store: &Keyspace, key: Vec<u8>) -> Result<()> {
        let store = store.clone();
        task::spawn_blocking(move || store.remove(key)).await??;
        Ok(())
    }

    async fn read_table<T: DeserializeOwned + Send + 'static>(
        &self,
        table: &str,
        destination_id: i64,
    ) -> Result<Vec<T>> {
        let key = table_key(table, destination_id).into_bytes();
        Ok(Self::read::<Vec<T>>(&self.catalog, key).await?.unwrap_or_default())
    }

    async fn write_table<T: Serialize>(
        &self,
        table: &str,
        destination_id: i64,
        rows: &[T],
    ) -> Result<()> {
        let key = table_key(table, destination_id).into_bytes();
        Self::write(&self.catalog, key, &rows).await
    }

    async fn stored_destinations(&self) -> Result<Vec<Destination>> {
        Ok(
            Self::read::<Vec<Destination>>(&self.catalog, DESTINATIONS_KEY.as_bytes().to_vec())
                .await?
                .unwrap_or_default(),
        )
    }
}

/// Group rows by destination, keeping an entry for every destination so
/// stale lists from an earlier import get overwritten
fn group_by_destination<T: Clone>(
    destinations: &[Destination],
    rows: &[T],
    destination_of: impl Fn(&T) -> i64,
) -> Vec<(i64, Vec<T>)> {
    destinations
        .iter()
        .map(|d| {
            let matching = rows.iter().filter(|r| destination_of(r) == d.id).cloned().collect();
            (d.id, matching)
        })
        .collect()
}

#[async_trait]
impl TravelStore for FjallStore {
    async fn destinations(&self) -> Result<Vec<Destination>> {
        Ok(ordering::order_destinations(self.stored_destinations().await?))
    }

    async fn destination(&self, id: i64) -> Result<Option<Destination>> {
        Ok(self.stored_destinations().await?.into_iter().find(|d| d.id == id))
    }

    #[instrument(name = "query_hotels", level = "debug", skip(self))]
    async fn hotels(&self, destination_id: i64, max_price: Option<f64>) -> Result<Vec<Hotel>> {
        let hotels = self.read_table("hotels", destination_id).await?;
        Ok(ordering::order_hotels(hotels, max_price))
    }

    #[instrument(name = "query_attractions", level = "debug", skip(self))]
    async fn attractions(&self, destination_id: i64) -> Result<Vec<Attraction>> {
        let attractions = self.read_table("attractions", destination_id).await?;
        Ok(ordering::order_attractions(attractions))
    }

    async fn transportation(&self, destination_id: i64) -> Result<Vec<Transportation>> {
        let transportation = self.read_table("transportation", destination_id).await?;
        Ok(ordering::order_transportation(transportation))
    }

    async fn phrases(&self, destination_id: i64) -> Result<Vec<Phrase>> {
        let phrases = self.read_table("phrases", destination_id).await?;
        Ok(ordering::order_phrases(phrases))
    }

    #[instrument(name = "insert_trip_plan", level = "debug", skip(self, plan), fields(destination_id = plan.destination_id))]
    async fn insert_trip_plan(&self, plan: NewTripPlan) -> Result<TripPlan> {
        let mut last_id = self.last_trip_plan_id.lock().await;
        let id = *last_id + 1;
        let trip_plan = TripPlan::from_new(id, plan, Utc::now());

        // counter first, so a crash between the writes never reuses an id
        Self::write(&self.meta, LAST_TRIP_PLAN_ID_KEY.as_bytes().to_vec(), &id).await?;
        *last_id = id;
        Self::write(&self.trip_plans, id.to_be_bytes().to_vec(), &trip_plan).await?;
        drop(last_id);

        debug!(id, "Stored trip plan");
        Ok(trip_plan)
    }

    async fn trip_plan(&self, id: i64) -> Result<Option<TripPlan>> {
        Self::read(&self.trip_plans, id.to_be_bytes().to_vec()).await
    }

    #[instrument(name = "import_catalog", skip(self, catalog), fields(records = catalog.record_count()))]
    async fn import_catalog(&self, catalog: Catalog) -> Result<()> {
        catalog.validate()?;

        for previous in self.stored_destinations().await? {
            for table in PER_DESTINATION_TABLES {
                Self::remove(&self.catalog, table_key(table, previous.id).into_bytes()).await?;
            }
        }

        let destinations = &catalog.destinations;
        for (id, rows) in group_by_destination(destinations, &catalog.hotels, |h| h.destination_id) {
            self.write_table("hotels", id, &rows).await?;
        }
        for (id, rows) in group_by_destination(destinations, &catalog.attractions, |a| a.destination_id) {
            self.write_table("attractions", id, &rows).await?;
        }
        for (id, rows) in
            group_by_destination(destinations, &catalog.transportation, |t| t.destination_id)
        {
            self.write_table("transportation", id, &rows).await?;
        }
        for (id, rows) in group_by_destination(destinations, &catalog.phrases, |p| p.destination_id) {
            self.write_table("phrases", id, &rows).await?;
        }

        Self::write(&self.catalog, DESTINATIONS_KEY.as_bytes().to_vec(), destinations).await?;
        info!("Imported {} destinations", destinations.len());
        Ok(())
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.stored_destinations().await?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::models::ItineraryDay;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        let mut louvre = Attraction::new(1, 1, "Louvre").with_rating(4.7);
        louvre.category = Some("Museum".to_string());
        let tower = Attraction::new(2, 1, "Eiffel Tower").with_rating(4.8);

        Catalog {
            destinations: vec![Destination::new(1, "Paris", "France")],
            hotels: vec![Hotel::new(1, 1, "Hotel Lutetia", 150.0).with_rating(4.6)],
            attractions: vec![louvre, tower],
            transportation: vec![Transportation::new(1, 1, "Metro", "RATP Metro")],
            phrases: vec![Phrase::new(1, 1, "Greetings", "Hello", "Bonjour")],
        }
    }

    fn new_plan() -> NewTripPlan {
        NewTripPlan {
            destination_id: 1,
            budget: 2000.0,
            duration_days: 1,
            total_estimated_cost: 1950.0,
            itinerary: vec![ItineraryDay {
                day: 1,
                activities: vec!["Morning: Breakfast at hotel".to_string()],
                accommodation: "Hotel Lutetia".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_import_and_query_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();
        assert!(store.is_empty().await.unwrap());

        store.import_catalog(catalog()).await.unwrap();
        assert!(!store.is_empty().await.unwrap());

        let attractions = store.attractions(1).await.unwrap();
        assert_eq!(attractions[0].name, "Eiffel Tower");
        assert_eq!(attractions[1].category.as_deref(), Some("Museum"));

        assert_eq!(store.hotels(1, Some(100.0)).await.unwrap().len(), 0);
        assert_eq!(store.hotels(1, Some(150.0)).await.unwrap().len(), 1);
        assert_eq!(store.phrases(1).await.unwrap()[0].local_text, "Bonjour");
        assert_eq!(store.transportation(1).await.unwrap().len(), 1);
        assert_eq!(store.destination(1).await.unwrap().map(|d| d.name).as_deref(), Some("Paris"));
        assert!(store.destination(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reimport_drops_previous_rows() {
        let dir = TempDir::new().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();
        store.import_catalog(catalog()).await.unwrap();

        let mut replacement = catalog();
        replacement.hotels.clear();
        store.import_catalog(replacement).await.unwrap();

        assert!(store.hotels(1, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trip_plans_get_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();

        let first = store.insert_trip_plan(new_plan()).await.unwrap();
        let second = store.insert_trip_plan(new_plan()).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let loaded = store.trip_plan(1).await.unwrap().unwrap();
        assert_eq!(loaded.itinerary, first.itinerary);
        assert_eq!(loaded.total_estimated_cost, 1950.0);
        assert!(store.trip_plan(3).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_trip_plan_ids_survive_reopen_after_concurrent_inserts() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FjallStore::open(dir.path()).unwrap());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_trip_plan(new_plan()).await.unwrap().id })
            })
            .collect();
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        let unique: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 32);
        let highest = *ids.iter().max().unwrap();
        assert_eq!(highest, 32);

        drop(Arc::try_unwrap(store).ok().unwrap());

        let reopened = FjallStore::open(dir.path()).unwrap();
        let next = reopened.insert_trip_plan(new_plan()).await.unwrap();
        assert_eq!(next.id, highest + 1);
        for id in ids {
            let stored = reopened.trip_plan(id).await.unwrap().unwrap();
            assert_eq!(stored.id, id);
        }
    }
}
