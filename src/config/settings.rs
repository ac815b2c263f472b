use crate::domain::model::Language;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML settings file. Every field has a CLI counterpart and
/// explicit flags win over file values. The offsets and the cache expiry
/// are deliberately absent: they are policy constants, not settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub location: Option<LocationSettings>,
    pub display: Option<DisplaySettings>,
    pub storage: Option<StorageSettings>,
    pub geoip: Option<GeoIpSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSettings {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub language: Option<Language>,
    pub weeks: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub store_dir: Option<String>,
    pub portions_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoIpSettings {
    pub endpoint: Option<String>,
}

impl Settings {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let settings: Settings = toml::from_str(
            r#"
            [location]
            latitude = 32.0853
            longitude = 34.7818
            city = "Tel Aviv"

            [display]
            language = "he"
            weeks = 8

            [storage]
            store_dir = "/tmp/shabbat"

            [geoip]
            endpoint = "http://localhost:9000/json/"
            "#,
        )
        .unwrap();

        let location = settings.location.unwrap();
        assert_eq!(location.latitude, Some(32.0853));
        assert_eq!(location.city.as_deref(), Some("Tel Aviv"));

        let display = settings.display.unwrap();
        assert_eq!(display.language, Some(Language::He));
        assert_eq!(display.weeks, Some(8));

        assert_eq!(
            settings.storage.unwrap().store_dir.as_deref(),
            Some("/tmp/shabbat")
        );
        assert_eq!(
            settings.geoip.unwrap().endpoint.as_deref(),
            Some("http://localhost:9000/json/")
        );
    }

    #[test]
    fn test_parse_partial_settings() {
        let settings: Settings = toml::from_str(
            r#"
            [display]
            language = "en"
            "#,
        )
        .unwrap();

        assert!(settings.location.is_none());
        assert_eq!(settings.display.unwrap().language, Some(Language::En));
    }

    #[test]
    fn test_parse_empty_settings() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.location.is_none());
        assert!(settings.geoip.is_none());
    }
}
