use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Version stamped into every stored payload. Readers treat any other
/// version as a cache miss and recompute.
pub const CACHE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Fallback position when resolution fails: Jerusalem.
    pub const JERUSALEM: Coordinate = Coordinate {
        latitude: 31.7683,
        longitude: 35.2137,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Resolvers report "no position yet" as values at or below 1 (e.g. 0,0).
    /// Such sentinels must never reach the calculator or be trusted in the
    /// cache.
    pub fn is_resolved(&self) -> bool {
        self.latitude > 1.0 && self.longitude > 1.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub city: String,
}

impl Location {
    pub fn new(coordinate: Coordinate, city: impl Into<String>) -> Self {
        Self {
            coordinate,
            city: city.into(),
        }
    }

    pub fn jerusalem() -> Self {
        Self::new(Coordinate::JERUSALEM, "Jerusalem")
    }
}

/// One week of the schedule. `date` is the Saturday; the clock fields are
/// `HH:MM` strings in the process-local timezone, empty when the underlying
/// sunset or portion is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShabbatTime {
    pub date: NaiveDate,
    pub candle_lighting: String,
    pub havdalah: String,
    pub torah_en: String,
    pub torah_hw: String,
}

/// A row of the weekly reading table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorahPortion {
    pub date: NaiveDate,
    pub torah_hw: String,
    pub torah_en: String,
}

/// Envelope for everything written to the key-value store: schema version
/// plus creation time in epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cached<T> {
    pub version: u32,
    pub data: T,
    pub timestamp: i64,
}

impl<T> Cached<T> {
    pub fn new(data: T, timestamp: i64) -> Self {
        Self {
            version: CACHE_SCHEMA_VERSION,
            data,
            timestamp,
        }
    }
}

/// Display language for user-facing output. Kept as explicit configuration
/// rather than ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}
