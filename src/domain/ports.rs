use crate::domain::model::{Language, Location};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Generic string key-value store, the only persistence contract the
/// calculator relies on. Payloads are JSON-serialized envelopes.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str)
        -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Resolves the device position. Implementations fail over to the Jerusalem
/// default instead of erroring, so `resolve` is infallible by contract.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn resolve(&self) -> Location;
}

/// Sunset instant for a calendar day at a coordinate, in UTC. Must be
/// deterministic for a given (date, latitude, longitude) triple. `None`
/// means the sun does not set that day (polar day or night).
pub trait SunsetTimes: Send + Sync {
    fn sunset_utc(&self, date: NaiveDate, latitude: f64, longitude: f64)
        -> Option<DateTime<Utc>>;
}

pub trait ConfigProvider: Send + Sync {
    fn geoip_endpoint(&self) -> &str;
    fn store_dir(&self) -> &str;
    fn language(&self) -> Language;
    fn force_refresh(&self) -> bool;
}
