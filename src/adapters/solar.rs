use crate::domain::ports::SunsetTimes;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use solar_positioning::{spa, time::DeltaT, Horizon, SunriseResult};

/// NREL SPA sunset times: estimated ΔT for the date and the standard
/// sunrise/sunset horizon (atmospheric refraction included).
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaSunsets;

impl SunsetTimes for SpaSunsets {
    fn sunset_utc(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Option<DateTime<Utc>> {
        let delta_t = DeltaT::estimate_from_date(date.year(), date.month()).ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
        let result = spa::sunrise_sunset_for_horizon(
            midnight,
            latitude,
            longitude,
            delta_t,
            Horizon::SunriseSunset,
        )
        .ok()?;

        match result {
            SunriseResult::RegularDay { sunset, .. } => Some(sunset),
            // Polar day or night: no sunset instant on this calendar day.
            SunriseResult::AllDay { .. } | SunriseResult::AllNight { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_jerusalem_summer_sunset_is_plausible() {
        let sunset = SpaSunsets
            .sunset_utc(
                NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
                31.7683,
                35.2137,
            )
            .unwrap();

        // Jerusalem sets around 19:45 local in late June, i.e. ~16:45 UTC.
        assert_eq!(sunset.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 20).unwrap());
        assert!((15..=18).contains(&sunset.hour()), "sunset at {}", sunset);
    }

    #[test]
    fn test_winter_sunset_is_earlier_than_summer() {
        let summer = SpaSunsets
            .sunset_utc(
                NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
                31.7683,
                35.2137,
            )
            .unwrap();
        let winter = SpaSunsets
            .sunset_utc(
                NaiveDate::from_ymd_opt(2025, 12, 19).unwrap(),
                31.7683,
                35.2137,
            )
            .unwrap();

        assert!(winter.time() < summer.time());
    }

    #[test]
    fn test_polar_summer_has_no_sunset() {
        let sunset = SpaSunsets.sunset_utc(
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            89.5,
            100.0,
        );
        assert!(sunset.is_none());
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let first = SpaSunsets.sunset_utc(date, 31.7683, 35.2137);
        let second = SpaSunsets.sunset_utc(date, 31.7683, 35.2137);
        assert_eq!(first, second);
    }
}
