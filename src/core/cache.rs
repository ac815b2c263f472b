use crate::domain::model::{Cached, Location, ShabbatTime, CACHE_SCHEMA_VERSION};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const SCHEDULE_KEY: &str = "shabbat_times";
pub const LOCATION_KEY: &str = "location";

/// Cached schedules older than this are recomputed.
pub const SCHEDULE_TTL_DAYS: i64 = 2;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// True while the entry is no older than the schedule TTL.
pub fn is_fresh<T>(entry: &Cached<T>, now_ms: i64) -> bool {
    now_ms - entry.timestamp <= SCHEDULE_TTL_DAYS * MILLIS_PER_DAY
}

/// Schedule and location persistence over the key-value contract. Anything
/// unreadable on the way out is treated as absent; the caller recomputes.
pub struct ScheduleCache<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> ScheduleCache<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub async fn load_schedule(&self) -> Option<Cached<Vec<ShabbatTime>>> {
        self.load(SCHEDULE_KEY).await
    }

    pub async fn store_schedule(&self, schedule: &[ShabbatTime], now_ms: i64) -> Result<()> {
        self.store_entry(SCHEDULE_KEY, &Cached::new(schedule, now_ms))
            .await
    }

    pub async fn clear_schedule(&self) -> Result<()> {
        self.store.remove(SCHEDULE_KEY).await
    }

    pub async fn load_location(&self) -> Option<Cached<Location>> {
        self.load(LOCATION_KEY).await
    }

    pub async fn store_location(&self, location: &Location, now_ms: i64) -> Result<()> {
        self.store_entry(LOCATION_KEY, &Cached::new(location, now_ms))
            .await
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Cached<T>> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("Failed to read cache key {}: {}", key, err);
                return None;
            }
        };

        let entry: Cached<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Discarding corrupt cache entry {}: {}", key, err);
                return None;
            }
        };

        if entry.version != CACHE_SCHEMA_VERSION {
            tracing::warn!(
                "Discarding cache entry {} with schema version {}",
                key,
                entry.version
            );
            return None;
        }
        Some(entry)
    }

    async fn store_entry<T: Serialize>(&self, key: &str, entry: &Cached<T>) -> Result<()> {
        let raw = serde_json::to_string(entry)?;
        self.store.set(key, &raw).await
    }
}
