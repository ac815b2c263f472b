pub mod cache;
pub mod calendar;
pub mod engine;
pub mod parasha;
pub mod schedule;

pub use crate::domain::model::{Cached, Coordinate, Language, Location, ShabbatTime, TorahPortion};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, LocationSource, SunsetTimes};
pub use crate::utils::error::Result;
