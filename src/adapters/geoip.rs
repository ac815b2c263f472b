use crate::domain::model::{Coordinate, Location};
use crate::domain::ports::LocationSource;
use crate::utils::error::{Result, ShabbatError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_GEOIP_ENDPOINT: &str = "https://ipapi.co/json/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves the device position from an ipapi-style JSON endpoint. Any
/// failure on the way (network, HTTP status, payload shape, coordinate
/// sentinel) falls back to the Jerusalem default instead of surfacing an
/// error.
pub struct IpLocator {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,
}

impl IpLocator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn fetch(&self) -> Result<Location> {
        tracing::debug!("Requesting location from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        tracing::debug!("Geolocation response status: {}", response.status());
        let response = response.error_for_status()?;

        let body: GeoIpResponse = response.json().await?;
        match (body.latitude, body.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Location::new(
                Coordinate::new(latitude, longitude),
                body.city.unwrap_or_else(|| "Unknown".to_string()),
            )),
            _ => Err(ShabbatError::LocationError {
                message: "response carries no coordinates".to_string(),
            }),
        }
    }
}

#[async_trait]
impl LocationSource for IpLocator {
    async fn resolve(&self) -> Location {
        match self.fetch().await {
            Ok(location) if location.coordinate.is_resolved() => location,
            Ok(location) => {
                tracing::warn!(
                    "Geolocation returned an unresolved coordinate ({}, {}), using Jerusalem",
                    location.coordinate.latitude,
                    location.coordinate.longitude
                );
                Location::jerusalem()
            }
            Err(err) => {
                tracing::warn!("Geolocation failed ({}), using Jerusalem", err);
                Location::jerusalem()
            }
        }
    }
}

/// Fixed position from configuration; no network round trip.
pub struct FixedLocator {
    location: Location,
}

impl FixedLocator {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

#[async_trait]
impl LocationSource for FixedLocator {
    async fn resolve(&self) -> Location {
        self.location.clone()
    }
}
