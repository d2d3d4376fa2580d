//! Measurement value objects: a point estimate with optional uncertainty bounds and a unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a [`Measurement`]. Only exposes a display abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Millimetres,
    MetresPerSecond,
    Percent,
    Hectopascal,
    Metres,
}

impl Unit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Millimetres => "mm",
            Unit::MetresPerSecond => "m/s",
            Unit::Percent => "%",
            Unit::Hectopascal => "hPa",
            Unit::Metres => "m",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// One forecasted quantity: the point value and the optional low/high bounds of the
/// forecast's uncertainty band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, low: Option<f64>, high: Option<f64>, unit: Unit) -> Self {
        Self {
            value,
            low,
            high,
            unit,
        }
    }

    /// Builds a measurement from a raw `(value, low, high)` triplet.
    ///
    /// Returns `None` when the point value is absent; bounds without a point value are
    /// dropped.
    pub fn from_parts(
        value: Option<f64>,
        low: Option<f64>,
        high: Option<f64>,
        unit: Unit,
    ) -> Option<Self> {
        value.map(|value| Self::new(value, low, high, unit))
    }
}

/// Formats the point value followed by the unit abbreviation, e.g. `5.5 °C`.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// The continuous quantities carried by hourly and daily records.
///
/// Aggregation walks this list and reads each kind through a statically known accessor
/// on [`crate::Hour`], so adding a kind means adding a match arm, never a string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    Temperature,
    Precipitation,
    WindSpeed,
    WindGust,
    Humidity,
    Pressure,
    Visibility,
}

impl MeasurementKind {
    pub const ALL: [MeasurementKind; 7] = [
        MeasurementKind::Temperature,
        MeasurementKind::Precipitation,
        MeasurementKind::WindSpeed,
        MeasurementKind::WindGust,
        MeasurementKind::Humidity,
        MeasurementKind::Pressure,
        MeasurementKind::Visibility,
    ];

    pub fn unit(&self) -> Unit {
        match self {
            MeasurementKind::Temperature => Unit::Celsius,
            MeasurementKind::Precipitation => Unit::Millimetres,
            MeasurementKind::WindSpeed | MeasurementKind::WindGust => Unit::MetresPerSecond,
            MeasurementKind::Humidity => Unit::Percent,
            MeasurementKind::Pressure => Unit::Hectopascal,
            MeasurementKind::Visibility => Unit::Metres,
        }
    }
}
