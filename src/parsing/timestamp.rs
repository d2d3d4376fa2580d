//! Conversion between the service's compact `YYYYMMDDHHmmss` timestamps, epoch
//! milliseconds and zoned instants.
//!
//! All forecast timestamps are interpreted as local wall-clock times in the
//! location's time zone, falling back to [`HOME_TIMEZONE`] when none is given.

use crate::parsing::error::ParseError;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// The zone the service reports in when a document does not name one.
pub const HOME_TIMEZONE: Tz = chrono_tz::Europe::Copenhagen;

const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";
const HOUR_KEY_FORMAT: &str = "%Y%m%d%H%M%S";
const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Parses a 14-digit compact timestamp (`YYYYMMDDHHmmss`) as a local time in `tz`.
///
/// Local times that fall into a DST gap are moved forward by one hour, ambiguous
/// local times (the repeated hour when clocks go back) resolve to the earliest instant.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTimestamp`] if `value` is not exactly 14 ASCII digits
/// or does not describe a valid calendar date and time.
///
/// # Examples
///
/// ```
/// use chrono::Timelike;
/// use dmi::parsing::timestamp::{parse_compact, HOME_TIMEZONE};
///
/// let dt = parse_compact("20240115120000", HOME_TIMEZONE).unwrap();
/// assert_eq!(dt.hour(), 12);
/// ```
pub fn parse_compact(value: &str, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    if value.len() != 14 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidTimestamp {
            value: value.to_string(),
            reason: "expected exactly 14 digits".to_string(),
        });
    }

    let naive = NaiveDateTime::parse_from_str(value, COMPACT_FORMAT).map_err(|e| {
        ParseError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    resolve_local(naive, tz).ok_or_else(|| ParseError::InvalidTimestamp {
        value: value.to_string(),
        reason: format!("local time does not exist in {}", tz.name()),
    })
}

/// Same as [`parse_compact`], using the service's home zone.
pub fn parse_compact_default(value: &str) -> Result<DateTime<Tz>, ParseError> {
    parse_compact(value, HOME_TIMEZONE)
}

/// Converts epoch milliseconds into an instant in `tz`.
pub fn from_epoch_millis(millis: i64, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&tz))
        .ok_or(ParseError::InvalidEpochMillis(millis))
}

/// Formats an instant as the 14-digit key used by the hourly series.
pub fn hour_key<T: TimeZone>(datetime: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    datetime.format(HOUR_KEY_FORMAT).to_string()
}

/// Formats the local calendar date of an instant as an 8-digit `YYYYMMDD` key.
pub fn date_key<T: TimeZone>(datetime: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    datetime.format(DATE_KEY_FORMAT).to_string()
}

/// Formats a calendar date as an 8-digit `YYYYMMDD` key.
pub fn date_key_of(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Returns 12:00 local time on `date` in `tz`.
pub fn local_noon(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).ok_or(ParseError::InvalidLocalNoon(date))?;
    resolve_local(date.and_time(noon), tz).ok_or(ParseError::InvalidLocalNoon(date))
}

fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};

    #[test]
    fn test_parse_compact_in_home_zone() {
        let dt = parse_compact("20240115123000", HOME_TIMEZONE).unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 30);
        // Copenhagen is UTC+1 in winter
        assert_eq!(dt.with_timezone(&Utc).hour(), 11);
    }

    #[test]
    fn test_parse_compact_in_other_zone() {
        let dt = parse_compact("20240701000000", chrono_tz::America::New_York).unwrap();
        assert_eq!(dt.with_timezone(&Utc).hour(), 4);
    }

    #[test]
    fn test_parse_compact_rejects_malformed_input() {
        for value in ["2024011512000", "202401151200000", "2024-01-15T12", "2024011512000a", ""] {
            assert!(
                matches!(
                    parse_compact(value, HOME_TIMEZONE),
                    Err(ParseError::InvalidTimestamp { .. })
                ),
                "Expected '{}' to be rejected",
                value
            );
        }
    }

    #[test]
    fn test_parse_compact_rejects_impossible_date() {
        assert!(parse_compact("20240230120000", HOME_TIMEZONE).is_err());
        assert!(parse_compact("20240115250000", HOME_TIMEZONE).is_err());
    }

    #[test]
    fn test_parse_compact_dst_gap_moves_forward() {
        // 2024-03-31 02:30 does not exist in Copenhagen
        let dt = parse_compact("20240331023000", HOME_TIMEZONE).unwrap();
        assert_eq!(dt.hour(), 3);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_compact_ambiguous_takes_earliest() {
        // 2024-10-27 02:30 happens twice in Copenhagen; the first is still CEST (UTC+2)
        let dt = parse_compact("20241027023000", HOME_TIMEZONE).unwrap();
        assert_eq!(dt.with_timezone(&Utc).hour(), 0);
    }

    #[test]
    fn test_keys_round_trip_through_formatting() {
        let dt = parse_compact("20240115120000", HOME_TIMEZONE).unwrap();
        assert_eq!(hour_key(&dt), "20240115120000");
        assert_eq!(date_key(&dt), "20240115");
        assert_eq!(date_key_of(dt.date_naive()), "20240115");
    }

    #[test]
    fn test_from_epoch_millis_uses_target_zone() {
        // 2024-01-15T23:30:00Z is already the 16th in Copenhagen
        let dt = from_epoch_millis(1_705_361_400_000, HOME_TIMEZONE).unwrap();
        assert_eq!(date_key(&dt), "20240116");
        assert_eq!(dt.timestamp_millis(), 1_705_361_400_000);
    }

    #[test]
    fn test_local_noon() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let noon = local_noon(date, HOME_TIMEZONE).unwrap();
        assert_eq!(noon.hour(), 12);
        assert_eq!(noon.date_naive(), date);
        assert_eq!(noon.with_timezone(&Utc).hour(), 10);
    }
}
