use crate::adapters::geoip::DEFAULT_GEOIP_ENDPOINT;
use crate::config::settings::Settings;
use crate::domain::model::{Coordinate, Language};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ShabbatError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use clap::Parser;

pub const DEFAULT_STORE_DIR: &str = "./.shabbat-times";

const DEFAULT_DISPLAY_WEEKS: usize = 4;

#[derive(Debug, Clone, Parser)]
#[command(name = "shabbat-times")]
#[command(about = "Candle-lighting and Havdalah times for the coming weeks")]
pub struct CliConfig {
    #[arg(long, help = "Latitude of a fixed location, skips geolocation")]
    pub latitude: Option<f64>,

    #[arg(long, help = "Longitude of a fixed location, skips geolocation")]
    pub longitude: Option<f64>,

    #[arg(long, help = "City label for a fixed location")]
    pub city: Option<String>,

    #[arg(long, help = "Geolocation endpoint (ipapi-style JSON)")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Directory for cached schedules")]
    pub store_dir: Option<String>,

    #[arg(long, help = "Torah-portion table overriding the bundled one")]
    pub portions_file: Option<String>,

    #[arg(long, value_enum, help = "Display language")]
    pub language: Option<Language>,

    #[arg(long, help = "Number of upcoming weekends to print")]
    pub weeks: Option<usize>,

    #[arg(long, help = "Ignore cached results and recompute")]
    pub refresh: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<String>,
}

impl CliConfig {
    /// Fill unset flags from the settings file; explicit flags win.
    pub fn merge_settings(mut self, settings: Settings) -> Self {
        if let Some(location) = settings.location {
            self.latitude = self.latitude.or(location.latitude);
            self.longitude = self.longitude.or(location.longitude);
            self.city = self.city.or(location.city);
        }
        if let Some(display) = settings.display {
            self.language = self.language.or(display.language);
            self.weeks = self.weeks.or(display.weeks);
        }
        if let Some(storage) = settings.storage {
            self.store_dir = self.store_dir.or(storage.store_dir);
            self.portions_file = self.portions_file.or(storage.portions_file);
        }
        if let Some(geoip) = settings.geoip {
            self.endpoint = self.endpoint.or(geoip.endpoint);
        }
        self
    }

    pub fn fixed_coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn portions_file(&self) -> Option<&str> {
        self.portions_file.as_deref()
    }

    pub fn display_weeks(&self) -> usize {
        self.weeks.unwrap_or(DEFAULT_DISPLAY_WEEKS)
    }
}

impl ConfigProvider for CliConfig {
    fn geoip_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_GEOIP_ENDPOINT)
    }

    fn store_dir(&self) -> &str {
        self.store_dir.as_deref().unwrap_or(DEFAULT_STORE_DIR)
    }

    fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    fn force_refresh(&self) -> bool {
        self.refresh
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", self.geoip_endpoint())?;
        validate_non_empty_string("store_dir", self.store_dir())?;

        if self.latitude.is_some() != self.longitude.is_some() {
            return Err(ShabbatError::ConfigError {
                message: "latitude and longitude must be provided together".to_string(),
            });
        }
        if let Some(latitude) = self.latitude {
            validate_range("latitude", latitude, -90.0, 90.0)?;
        }
        if let Some(longitude) = self.longitude {
            validate_range("longitude", longitude, -180.0, 180.0)?;
        }
        Ok(())
    }
}
