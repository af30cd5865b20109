//! Whole-minute time-of-day handling.
//!
//! Slot times arrive as `HH:MM` strings (or `HH:MM:SS` when read straight from a
//! SQL `time` column). The engine works in minutes since midnight; seconds are
//! dropped on the way in and never emitted on the way out.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// First minute of the representable day (`00:00`).
pub const DAY_START_MINUTE: u32 = 0;

/// Last representable minute of the day (`23:59`). An all-day slot covers
/// `[DAY_START_MINUTE, DAY_END_MINUTE)`.
pub const DAY_END_MINUTE: u32 = 23 * 60 + 59;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// English weekday name for `date`, numbered from Sunday (day 0).
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

/// Inverse of [`minute_of_day`]. Values past the end of the day wrap.
pub fn time_from_minutes(minutes: u32) -> NaiveTime {
    NaiveTime::MIN + Duration::minutes(i64::from(minutes))
}

/// Parse `HH:MM` or `HH:MM:SS`, truncating to the minute.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
        .map(|t| time_from_minutes(minute_of_day(t)))
}

/// Format as zero-padded `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `#[serde(with = "...")]` adapter for a required `HH:MM` field.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day '{}', expected HH:MM", raw)))
    }
}

/// `#[serde(with = "...")]` adapter for an optional `HH:MM` field. `null` and
/// empty strings both deserialize to `None`.
pub mod hhmm_option {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&super::format_time(*t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_time(&raw).map(Some).ok_or_else(|| {
                de::Error::custom(format!("invalid time of day '{}', expected HH:MM", raw))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds_forms() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("09:30:45"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time(" 17:00 "), NaiveTime::from_hms_opt(17, 0, 0));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn minute_conversion_roundtrips() {
        let t = NaiveTime::from_hms_opt(13, 45, 0).unwrap();
        assert_eq!(minute_of_day(t), 825);
        assert_eq!(time_from_minutes(825), t);
        assert_eq!(format_time(time_from_minutes(DAY_END_MINUTE)), "23:59");
    }

    #[test]
    fn day_names_start_on_sunday() {
        // 2024-06-09 was a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(day_name(sunday), "Sunday");
        assert_eq!(day_name(sunday.succ_opt().unwrap()), "Monday");
        assert_eq!(day_name(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), "Saturday");
    }
}
