use crate::core::calendar::weekend_pairs;
use crate::core::parasha::ParashaTable;
use crate::domain::model::{Coordinate, ShabbatTime};
use crate::domain::ports::SunsetTimes;
use chrono::{Duration, Local, NaiveDate};

/// Candle lighting leads the Friday sunset by 24 minutes; Havdalah trails
/// the Saturday sunset by 37 minutes. Both encode a fixed halachic custom
/// and are not configurable.
pub const CANDLE_LIGHTING_OFFSET_MIN: i64 = -24;
pub const HAVDALAH_OFFSET_MIN: i64 = 37;

/// Weekends precomputed per run.
pub const DEFAULT_HORIZON_WEEKS: u32 = 216;

pub struct ScheduleCalculator<S: SunsetTimes> {
    sunsets: S,
    portions: ParashaTable,
    horizon_weeks: u32,
}

impl<S: SunsetTimes> ScheduleCalculator<S> {
    pub fn new(sunsets: S, portions: ParashaTable) -> Self {
        Self {
            sunsets,
            portions,
            horizon_weeks: DEFAULT_HORIZON_WEEKS,
        }
    }

    pub fn with_horizon(mut self, weeks: u32) -> Self {
        self.horizon_weeks = weeks;
        self
    }

    /// Candle-lighting/Havdalah times for every weekend in the horizon,
    /// ascending by Saturday date, one entry per Saturday. A missing portion
    /// or a day without a sunset degrades to empty strings rather than
    /// failing the run.
    pub fn compute(&self, coordinate: Coordinate, today: NaiveDate) -> Vec<ShabbatTime> {
        weekend_pairs(today, self.horizon_weeks)
            .into_iter()
            .map(|(friday, saturday)| {
                let candle_lighting =
                    self.clock_time(friday, coordinate, CANDLE_LIGHTING_OFFSET_MIN);
                let havdalah = self.clock_time(saturday, coordinate, HAVDALAH_OFFSET_MIN);
                let (torah_en, torah_hw) = match self.portions.lookup(saturday) {
                    Some(portion) => (portion.torah_en.clone(), portion.torah_hw.clone()),
                    None => (String::new(), String::new()),
                };

                ShabbatTime {
                    date: saturday,
                    candle_lighting,
                    havdalah,
                    torah_en,
                    torah_hw,
                }
            })
            .collect()
    }

    fn clock_time(&self, date: NaiveDate, coordinate: Coordinate, offset_min: i64) -> String {
        match self
            .sunsets
            .sunset_utc(date, coordinate.latitude, coordinate.longitude)
        {
            Some(sunset) => (sunset + Duration::minutes(offset_min))
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            None => String::new(),
        }
    }
}
