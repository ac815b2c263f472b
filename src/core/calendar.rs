use crate::domain::model::ShabbatTime;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Days from `weekday` to the next Friday, counting a Friday as 0 so the
/// current weekend is included. Weekday numbering follows Sunday = 0.
pub fn days_until_friday(weekday: Weekday) -> u32 {
    (5 + 7 - weekday.num_days_from_sunday()) % 7
}

/// (Friday, Saturday) pairs covering `weeks` weekends, starting from the
/// first Friday on or after `from`.
pub fn weekend_pairs(from: NaiveDate, weeks: u32) -> Vec<(NaiveDate, NaiveDate)> {
    let mut friday = from + Duration::days(i64::from(days_until_friday(from.weekday())));
    let mut pairs = Vec::with_capacity(weeks as usize);
    for _ in 0..weeks {
        pairs.push((friday, friday + Duration::days(1)));
        friday += Duration::days(7);
    }
    pairs
}

/// Friday or Saturday: the window in which an entry dated "this Saturday"
/// still counts as the current Shabbat. Both schedule selection and display
/// go through this one predicate.
pub fn is_shabbat_window(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Fri | Weekday::Sat)
}

/// First entry dated today or later. An entry dated exactly today is kept
/// only inside the Friday/Saturday window, so a stray row dated some past
/// weekday is not resurrected.
pub fn select_upcoming(entries: &[ShabbatTime], today: NaiveDate) -> Option<&ShabbatTime> {
    entries.iter().find(|entry| {
        if entry.date == today {
            is_shabbat_window(today.weekday())
        } else {
            entry.date > today
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: NaiveDate) -> ShabbatTime {
        ShabbatTime {
            date,
            candle_lighting: String::new(),
            havdalah: String::new(),
            torah_en: String::new(),
            torah_hw: String::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_friday() {
        assert_eq!(days_until_friday(Weekday::Sun), 5);
        assert_eq!(days_until_friday(Weekday::Mon), 4);
        assert_eq!(days_until_friday(Weekday::Wed), 2);
        assert_eq!(days_until_friday(Weekday::Fri), 0);
        assert_eq!(days_until_friday(Weekday::Sat), 6);
    }

    #[test]
    fn test_weekend_pairs_shape() {
        // 2025-06-11 is a Wednesday; the next Friday is 2025-06-13.
        let pairs = weekend_pairs(date(2025, 6, 11), 216);
        assert_eq!(pairs.len(), 216);
        assert_eq!(pairs[0].0, date(2025, 6, 13));

        for (friday, saturday) in &pairs {
            assert_eq!(friday.weekday(), Weekday::Fri);
            assert_eq!(*saturday, *friday + Duration::days(1));
        }
        for window in pairs.windows(2) {
            assert_eq!(window[1].0 - window[0].0, Duration::days(7));
        }
    }

    #[test]
    fn test_weekend_pairs_single_week() {
        let pairs = weekend_pairs(date(2025, 6, 9), 1);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0], (date(2025, 6, 13), date(2025, 6, 14)));
    }

    #[test]
    fn test_weekend_pairs_friday_is_inclusive() {
        // Starting on a Friday keeps that Friday as the first pair.
        let pairs = weekend_pairs(date(2025, 6, 13), 2);
        assert_eq!(pairs[0].0, date(2025, 6, 13));
        assert_eq!(pairs[1].0, date(2025, 6, 20));
    }

    #[test]
    fn test_weekend_pairs_saturday_skips_to_next_week() {
        let pairs = weekend_pairs(date(2025, 6, 14), 1);
        assert_eq!(pairs[0].0, date(2025, 6, 20));
    }

    #[test]
    fn test_is_shabbat_window() {
        assert!(is_shabbat_window(Weekday::Fri));
        assert!(is_shabbat_window(Weekday::Sat));
        assert!(!is_shabbat_window(Weekday::Sun));
        assert!(!is_shabbat_window(Weekday::Thu));
    }

    #[test]
    fn test_select_upcoming_midweek_picks_nearest_saturday() {
        let entries = vec![entry(date(2025, 6, 7)), entry(date(2025, 6, 14))];
        // 2025-06-11 is a Wednesday.
        let picked = select_upcoming(&entries, date(2025, 6, 11)).unwrap();
        assert_eq!(picked.date, date(2025, 6, 14));
    }

    #[test]
    fn test_select_upcoming_on_friday_keeps_tomorrow() {
        let entries = vec![entry(date(2025, 6, 14)), entry(date(2025, 6, 21))];
        let picked = select_upcoming(&entries, date(2025, 6, 13)).unwrap();
        assert_eq!(picked.date, date(2025, 6, 14));
    }

    #[test]
    fn test_select_upcoming_on_saturday_keeps_today() {
        let entries = vec![entry(date(2025, 6, 14)), entry(date(2025, 6, 21))];
        let picked = select_upcoming(&entries, date(2025, 6, 14)).unwrap();
        assert_eq!(picked.date, date(2025, 6, 14));
    }

    #[test]
    fn test_select_upcoming_on_sunday_moves_on() {
        let entries = vec![entry(date(2025, 6, 14)), entry(date(2025, 6, 21))];
        // 2025-06-15 is a Sunday; yesterday's Shabbat is over.
        let picked = select_upcoming(&entries, date(2025, 6, 15)).unwrap();
        assert_eq!(picked.date, date(2025, 6, 21));
    }

    #[test]
    fn test_select_upcoming_skips_same_day_entry_outside_window() {
        // A row dated a Wednesday only matches while strictly in the future.
        let entries = vec![entry(date(2025, 6, 11)), entry(date(2025, 6, 14))];
        let picked = select_upcoming(&entries, date(2025, 6, 11)).unwrap();
        assert_eq!(picked.date, date(2025, 6, 14));
    }

    #[test]
    fn test_select_upcoming_exhausted_horizon() {
        let entries = vec![entry(date(2025, 6, 7))];
        assert!(select_upcoming(&entries, date(2025, 6, 16)).is_none());
    }
}
