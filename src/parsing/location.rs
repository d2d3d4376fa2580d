//! Turns a raw location document into a [`Location`] with hourly and daily series.

use crate::aggregation::daily::aggregate_daily;
use crate::parsing::error::ParseError;
use crate::parsing::timestamp::{hour_key, parse_compact, HOME_TIMEZONE};
use crate::types::location::{HourlyForecast, Location};
use crate::types::measurement::{Measurement, MeasurementKind};
use crate::types::precipitation::{Precipitation, PrecipitationType};
use crate::types::raw::{RawHour, RawLocation};
use crate::types::weather_condition::icon_for_symbol;
use crate::types::weather_data::hourly::Hour;
use crate::types::wind::Wind;
use chrono::DateTime;
use chrono_tz::Tz;
use log::{debug, warn};

/// Resolves the document's IANA zone name, falling back to [`HOME_TIMEZONE`] when it
/// is absent, empty or unknown.
pub fn resolve_timezone(name: Option<&str>) -> Tz {
    match name.map(str::trim) {
        None | Some("") => HOME_TIMEZONE,
        Some(name) => match name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!(
                    "Unknown time zone '{}', using {}",
                    name,
                    HOME_TIMEZONE.name()
                );
                HOME_TIMEZONE
            }
        },
    }
}

/// Builds one [`Hour`] from the timeserie entry at `index`.
///
/// # Errors
///
/// [`ParseError::MissingField`] when the entry has no `time`, or
/// [`ParseError::InvalidTimestamp`] when it is malformed.
pub fn parse_hour(raw: &RawHour, index: usize, tz: Tz) -> Result<Hour, ParseError> {
    let time = raw
        .time
        .as_deref()
        .ok_or(ParseError::MissingField {
            field: "time",
            index,
        })?;
    let mut hour = Hour::new(parse_compact(time, tz)?);

    let measurement = |kind: MeasurementKind| {
        let (value, low, high) = raw.triplet(kind);
        Measurement::from_parts(value, low, high, kind.unit())
    };

    hour.temperature = measurement(MeasurementKind::Temperature);
    hour.precipitation = measurement(MeasurementKind::Precipitation).map(|amount| Precipitation {
        amount,
        kind: raw
            .precip_type
            .as_deref()
            .and_then(PrecipitationType::parse),
    });
    hour.wind = measurement(MeasurementKind::WindSpeed).map(|speed| Wind {
        speed,
        gust: measurement(MeasurementKind::WindGust),
        direction: raw.wind_degree,
    });
    hour.humidity = measurement(MeasurementKind::Humidity);
    hour.pressure = measurement(MeasurementKind::Pressure);
    hour.visibility = measurement(MeasurementKind::Visibility);

    hour.icon = raw.symbol.and_then(|code| {
        let icon = icon_for_symbol(code);
        if icon.is_none() {
            debug!("Unknown weather symbol {} at {}", code, time);
        }
        icon
    });

    Ok(hour)
}

fn parse_optional(value: Option<&str>, tz: Tz) -> Result<Option<DateTime<Tz>>, ParseError> {
    value.map(|value| parse_compact(value, tz)).transpose()
}

impl Location {
    /// Parses a location document.
    ///
    /// # Examples
    ///
    /// ```
    /// use dmi::Location;
    ///
    /// let json = r#"{
    ///     "city": "Aarhus",
    ///     "timeserie": [
    ///         {"time": "20240115120000", "temp": 4.0},
    ///         {"time": "20240115130000", "temp": 6.0}
    ///     ]
    /// }"#;
    /// let location = Location::from_json(json).unwrap();
    /// assert_eq!(location.hourly_forecast().len(), 2);
    /// assert_eq!(location.daily_forecast().get("20240115").unwrap().temperature.value, 5.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let raw: RawLocation = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Builds the hourly series, the current conditions and the daily summaries from
    /// an already decoded document.
    ///
    /// # Errors
    ///
    /// Any malformed timeserie entry aborts the whole parse, see [`ParseError`].
    pub fn from_raw(raw: RawLocation) -> Result<Self, ParseError> {
        let timezone = resolve_timezone(raw.timezone.as_deref());

        let mut hourly = HourlyForecast::new();
        for (index, raw_hour) in raw.timeserie.iter().enumerate() {
            let hour = parse_hour(raw_hour, index, timezone)?;
            if hourly.insert(hour_key(&hour.timestamp), hour).is_some() {
                debug!("Duplicate timeserie entry {} replaced an earlier hour", index);
            }
        }

        let currently = hourly.first().map(|(_, hour)| hour.clone());
        let daily = aggregate_daily(hourly.values(), timezone)?;

        debug!(
            "Parsed location {:?}: {} hours, {} days",
            raw.city,
            hourly.len(),
            daily.len()
        );

        Ok(Location {
            id: raw.id,
            name: raw.city,
            country: raw.country,
            latitude: raw.latitude,
            longitude: raw.longitude,
            timezone,
            last_update: parse_optional(raw.last_update.as_deref(), timezone)?,
            sunrise: parse_optional(raw.sunrise.as_deref(), timezone)?,
            sunset: parse_optional(raw.sunset.as_deref(), timezone)?,
            currently,
            hourly,
            daily,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::Unit;
    use chrono::Timelike;

    fn sample_document() -> serde_json::Value {
        serde_json::json!({
            "id": 2618425,
            "city": "København",
            "country": "DK",
            "latitude": 55.67594,
            "longitude": 12.56553,
            "timezone": "Europe/Copenhagen",
            "lastupdate": "20240115100000",
            "sunrise": "20240115083000",
            "sunset": "20240115160500",
            "timeserie": [
                {
                    "time": "20240115220000",
                    "temp": 3.0, "tempLow": 2.0, "tempHigh": 4.0,
                    "precip": 0.2, "precipType": "rain",
                    "windSpeed": 5.0, "windGust": 9.0, "windDegree": 350.0,
                    "humidity": 90.0, "pressure": 1010.0, "visibility": 20000.0,
                    "symbol": 160
                },
                {
                    "time": "20240115230000",
                    "temp": 1.0, "tempLow": 0.0, "tempHigh": 2.0,
                    "precip": 0.4, "precipType": "rain",
                    "windSpeed": 7.0, "windDegree": 10.0,
                    "humidity": 92.0, "pressure": 1008.0,
                    "symbol": 163
                },
                {
                    "time": "20240116000000",
                    "temp": -1.0,
                    "precip": 1.0, "precipType": "snow",
                    "symbol": 170
                }
            ]
        })
    }

    fn parse(document: serde_json::Value) -> Result<Location, ParseError> {
        Location::from_json(&document.to_string())
    }

    #[test]
    fn test_parse_location_metadata() {
        let location = parse(sample_document()).unwrap();
        assert_eq!(location.id(), Some(2618425));
        assert_eq!(location.name(), Some("København"));
        assert_eq!(location.country(), Some("DK"));
        assert_eq!(location.coordinates(), Some((55.67594, 12.56553)));
        assert_eq!(location.timezone(), chrono_tz::Europe::Copenhagen);
        assert_eq!(location.sunrise().unwrap().hour(), 8);
        assert_eq!(location.sunset().unwrap().minute(), 5);
        assert_eq!(location.last_update().unwrap().hour(), 10);
    }

    #[test]
    fn test_parse_hourly_series() {
        let location = parse(sample_document()).unwrap();
        let hourly = location.hourly_forecast();
        assert_eq!(
            hourly.keys().collect::<Vec<_>>(),
            vec!["20240115220000", "20240115230000", "20240116000000"]
        );

        let hour = hourly.get("20240115220000").unwrap();
        let temperature = hour.temperature.unwrap();
        assert_eq!(temperature.value, 3.0);
        assert_eq!(temperature.low, Some(2.0));
        assert_eq!(temperature.unit, Unit::Celsius);
        let wind = hour.wind.unwrap();
        assert_eq!(wind.gust.map(|g| g.value), Some(9.0));
        assert_eq!(wind.compass(), "N");
        assert_eq!(
            hour.precipitation.as_ref().and_then(|p| p.kind.clone()),
            Some(PrecipitationType::Rain)
        );
        assert_eq!(hour.icon.as_deref(), Some("light-rain-night"));
        assert!(hour.warnings().is_none());

        let last = hourly.get("20240116000000").unwrap();
        assert!(last.wind.is_none());
        assert!(last.humidity.is_none());
        assert_eq!(last.icon.as_deref(), Some("snow-night"));
    }

    #[test]
    fn test_currently_is_first_hour() {
        let location = parse(sample_document()).unwrap();
        let currently = location.currently_forecast().unwrap();
        assert_eq!(hour_key(&currently.timestamp), "20240115220000");
        assert_eq!(currently.temperature.unwrap().value, 3.0);
    }

    #[test]
    fn test_parse_daily_series() {
        let location = parse(sample_document()).unwrap();
        let daily = location.daily_forecast();
        assert_eq!(daily.keys().collect::<Vec<_>>(), vec!["20240115", "20240116"]);

        let first = daily.get("20240115").unwrap();
        assert_eq!(first.hour_count, 2);
        assert_eq!(first.temperature.value, 2.0);
        assert_eq!(first.temperature.low, Some(1.0));
        assert!((first.precipitation.amount.value - 0.3).abs() < 1e-12);
        assert_eq!(first.precipitation.kind, Some(PrecipitationType::Rain));
        assert_eq!(first.wind.speed.value, 6.0);
        assert_eq!(first.wind.gust.map(|g| g.value), Some(9.0));
        assert_eq!(first.humidity.value, 91.0);
        assert_eq!(first.visibility.value, 20000.0);
        // light-rain and rain tie at one each, the later icon wins
        assert_eq!(first.icon.as_deref(), Some("rain"));
        assert_eq!(first.timestamp.hour(), 12);

        let second = daily.get("20240116").unwrap();
        assert_eq!(second.hour_count, 1);
        assert_eq!(second.temperature.value, -1.0);
        assert_eq!(second.temperature.low, Some(0.0));
        assert_eq!(second.wind.speed.value, 0.0);
        assert_eq!(second.wind.direction, Some(0.0));
        assert_eq!(second.precipitation.kind, Some(PrecipitationType::Snow));
    }

    #[test]
    fn test_missing_time_is_fatal() {
        let mut document = sample_document();
        document["timeserie"][1]
            .as_object_mut()
            .unwrap()
            .remove("time");
        match parse(document) {
            Err(ParseError::MissingField { field, index }) => {
                assert_eq!(field, "time");
                assert_eq!(index, 1);
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_type_is_fatal() {
        let mut document = sample_document();
        document["timeserie"][0]["temp"] = serde_json::json!("warm");
        assert!(matches!(parse(document), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_malformed_time_is_fatal() {
        let mut document = sample_document();
        document["timeserie"][2]["time"] = serde_json::json!("2024-01-16");
        assert!(matches!(
            parse(document),
            Err(ParseError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_empty_feed_is_not_an_error() {
        let location = parse(serde_json::json!({ "timeserie": [] })).unwrap();
        assert!(location.hourly_forecast().is_empty());
        assert!(location.daily_forecast().is_empty());
        assert!(location.currently_forecast().is_none());

        let location = parse(serde_json::json!({})).unwrap();
        assert!(location.daily_forecast().is_empty());
    }

    #[test]
    fn test_duplicate_timestamps_are_rekeyed() {
        let location = parse(serde_json::json!({
            "timeserie": [
                {"time": "20240115120000", "temp": 1.0},
                {"time": "20240115130000", "temp": 2.0},
                {"time": "20240115120000", "temp": 3.0}
            ]
        }))
        .unwrap();
        let hourly = location.hourly_forecast();
        assert_eq!(hourly.len(), 2);
        assert_eq!(hourly.get("20240115120000").unwrap().temperature.unwrap().value, 3.0);
        let day = location.daily_forecast().get("20240115").unwrap();
        assert_eq!(day.hour_count, 2);
        assert_eq!(day.temperature.value, 2.5);
    }

    #[test]
    fn test_timezone_fallback() {
        assert_eq!(resolve_timezone(None), HOME_TIMEZONE);
        assert_eq!(resolve_timezone(Some("")), HOME_TIMEZONE);
        assert_eq!(resolve_timezone(Some("Mars/Olympus_Mons")), HOME_TIMEZONE);
        assert_eq!(
            resolve_timezone(Some("Atlantic/Faroe")),
            chrono_tz::Atlantic::Faroe
        );

        let location = parse(serde_json::json!({
            "timezone": "Not/AZone",
            "timeserie": [{"time": "20240115120000"}]
        }))
        .unwrap();
        assert_eq!(location.timezone(), HOME_TIMEZONE);
    }
}
