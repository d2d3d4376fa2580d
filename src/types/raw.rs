//! Serde mirrors of the service's JSON documents, before any validation.
//!
//! Optional keys deserialize to `None` whether missing or `null`. A value of the wrong
//! JSON type fails deserialization of the whole document.

use crate::types::measurement::MeasurementKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A location forecast document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, rename = "lastupdate")]
    pub last_update: Option<String>,
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
    #[serde(default)]
    pub timeserie: Vec<RawHour>,
}

/// One entry of the `timeserie` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHour {
    /// Required; `None` here is rejected during parsing.
    #[serde(default)]
    pub time: Option<String>,

    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub temp_low: Option<f64>,
    #[serde(default)]
    pub temp_high: Option<f64>,

    #[serde(default)]
    pub precip: Option<f64>,
    #[serde(default)]
    pub precip_low: Option<f64>,
    #[serde(default)]
    pub precip_high: Option<f64>,
    #[serde(default)]
    pub precip_type: Option<String>,

    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_speed_low: Option<f64>,
    #[serde(default)]
    pub wind_speed_high: Option<f64>,
    #[serde(default)]
    pub wind_gust: Option<f64>,
    #[serde(default)]
    pub wind_gust_low: Option<f64>,
    #[serde(default)]
    pub wind_gust_high: Option<f64>,
    #[serde(default)]
    pub wind_degree: Option<f64>,

    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub humidity_low: Option<f64>,
    #[serde(default)]
    pub humidity_high: Option<f64>,

    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub pressure_low: Option<f64>,
    #[serde(default)]
    pub pressure_high: Option<f64>,

    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub visibility_low: Option<f64>,
    #[serde(default)]
    pub visibility_high: Option<f64>,

    #[serde(default)]
    pub symbol: Option<i64>,
}

impl RawHour {
    /// The raw `(value, low, high)` triplet for a measurement kind.
    pub fn triplet(&self, kind: MeasurementKind) -> (Option<f64>, Option<f64>, Option<f64>) {
        match kind {
            MeasurementKind::Temperature => (self.temp, self.temp_low, self.temp_high),
            MeasurementKind::Precipitation => (self.precip, self.precip_low, self.precip_high),
            MeasurementKind::WindSpeed => {
                (self.wind_speed, self.wind_speed_low, self.wind_speed_high)
            }
            MeasurementKind::WindGust => (self.wind_gust, self.wind_gust_low, self.wind_gust_high),
            MeasurementKind::Humidity => (self.humidity, self.humidity_low, self.humidity_high),
            MeasurementKind::Pressure => (self.pressure, self.pressure_low, self.pressure_high),
            MeasurementKind::Visibility => {
                (self.visibility, self.visibility_low, self.visibility_high)
            }
        }
    }
}

/// A warning as delivered by the warnings document. Instants are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWarning {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub severity: Option<i64>,
    #[serde(default)]
    pub issued_at: Option<i64>,
    #[serde(default)]
    pub valid_from: Option<i64>,
    #[serde(default)]
    pub valid_to: Option<i64>,
}

impl RawWarning {
    /// Decodes a single warnings-document entry.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        RawWarning::deserialize(value)
    }
}

/// The warnings document fetched next to a location forecast.
///
/// Entries are kept as undecoded JSON and decoded one by one with
/// [`RawWarning::from_value`] when the overlay runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningsFeed {
    /// Hour-scoped warnings, keyed by the epoch-millisecond timestamp they apply to.
    #[serde(default)]
    pub warnings: BTreeMap<String, Vec<serde_json::Value>>,
    /// Day-scoped warnings, matched by their validity window.
    #[serde(default)]
    pub location_warnings: Vec<serde_json::Value>,
}

impl WarningsFeed {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.location_warnings.is_empty()
    }
}
