use crate::core::cache::{is_fresh, ScheduleCache};
use crate::core::calendar::select_upcoming;
use crate::core::schedule::ScheduleCalculator;
use crate::domain::model::{Location, ShabbatTime};
use crate::domain::ports::{KeyValueStore, LocationSource, SunsetTimes};
use crate::utils::error::Result;
use chrono::{Local, NaiveDate, Utc};

/// Where the returned schedule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    Cache,
    Computed,
}

#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    pub schedule: Vec<ShabbatTime>,
    pub current: Option<ShabbatTime>,
    pub location: Location,
    pub source: ScheduleSource,
}

/// Single-shot run of the whole pipeline: consult the cache, otherwise
/// resolve a coordinate, compute the schedule, persist it, and select the
/// current entry. One run per process start; nothing here is reentrant.
pub struct ScheduleEngine<L, K, S>
where
    L: LocationSource,
    K: KeyValueStore,
    S: SunsetTimes,
{
    locator: L,
    cache: ScheduleCache<K>,
    calculator: ScheduleCalculator<S>,
    force_refresh: bool,
}

impl<L, K, S> ScheduleEngine<L, K, S>
where
    L: LocationSource,
    K: KeyValueStore,
    S: SunsetTimes,
{
    pub fn new(locator: L, store: K, calculator: ScheduleCalculator<S>) -> Self {
        Self {
            locator,
            cache: ScheduleCache::new(store),
            calculator,
            force_refresh: false,
        }
    }

    pub fn with_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }

    /// Always produces a best-effort schedule: external failures fall back
    /// to the default coordinate or to recomputation, and cache writes are
    /// not allowed to sink the result.
    pub async fn run(&self) -> Result<ScheduleOutcome> {
        let today = Local::now().date_naive();
        let now_ms = Utc::now().timestamp_millis();

        if !self.force_refresh {
            if let Some(outcome) = self.try_cached(today, now_ms).await {
                return Ok(outcome);
            }
        }

        tracing::info!("Resolving location...");
        let mut location = self.locator.resolve().await;
        if !location.coordinate.is_resolved() {
            tracing::warn!(
                "Resolved coordinate ({}, {}) failed the validity check, using default",
                location.coordinate.latitude,
                location.coordinate.longitude
            );
            location = Location::jerusalem();
        }
        tracing::info!(
            "Using location {} ({}, {})",
            location.city,
            location.coordinate.latitude,
            location.coordinate.longitude
        );
        if let Err(err) = self.cache.store_location(&location, now_ms).await {
            tracing::warn!("Failed to persist location: {}", err);
        }

        tracing::info!("Computing Shabbat times...");
        let schedule = self.calculator.compute(location.coordinate, today);
        tracing::info!("Computed {} weekends", schedule.len());

        if let Err(err) = self.cache.store_schedule(&schedule, now_ms).await {
            tracing::warn!("Failed to persist schedule: {}", err);
        }

        let current = select_upcoming(&schedule, today).cloned();
        Ok(ScheduleOutcome {
            schedule,
            current,
            location,
            source: ScheduleSource::Computed,
        })
    }

    /// Cached path: requires a stored location that passes the coordinate
    /// sentinel and a stored schedule that parses and is within the TTL.
    async fn try_cached(&self, today: NaiveDate, now_ms: i64) -> Option<ScheduleOutcome> {
        let location = self.cache.load_location().await?;
        if !location.data.coordinate.is_resolved() {
            tracing::info!("Cached location is unresolved, discarding cached schedule");
            if let Err(err) = self.cache.clear_schedule().await {
                tracing::warn!("Failed to clear stale schedule: {}", err);
            }
            return None;
        }

        let entry = self.cache.load_schedule().await?;
        if !is_fresh(&entry, now_ms) {
            tracing::info!("Cached schedule expired, recomputing");
            return None;
        }

        tracing::info!("Using cached schedule ({} weekends)", entry.data.len());
        let current = select_upcoming(&entry.data, today).cloned();
        Some(ScheduleOutcome {
            schedule: entry.data,
            current,
            location: location.data,
            source: ScheduleSource::Cache,
        })
    }
}
