pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::geoip::{FixedLocator, IpLocator, DEFAULT_GEOIP_ENDPOINT};
pub use adapters::solar::SpaSunsets;
pub use adapters::storage::DirStore;
pub use core::engine::{ScheduleEngine, ScheduleOutcome, ScheduleSource};
pub use core::parasha::ParashaTable;
pub use core::schedule::ScheduleCalculator;
pub use utils::error::{Result, ShabbatError};
