use crate::types::measurement::{Measurement, MeasurementKind};
use crate::types::precipitation::Precipitation;
use crate::types::warning::Warning;
use crate::types::wind::Wind;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use std::sync::Arc;

/// One calendar day, reduced from the hours that fall on it.
///
/// Every continuous measurement is always present: a day without samples for a
/// quantity reports `0.0` for its value and bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub date: NaiveDate,
    /// Local noon of [`Day::date`].
    pub timestamp: DateTime<Tz>,
    /// Number of hourly records that fell on this date.
    pub hour_count: usize,
    pub temperature: Measurement,
    pub precipitation: Precipitation,
    /// Mean speed and gust; `direction` is the circular mean of the hourly bearings.
    pub wind: Wind,
    pub humidity: Measurement,
    pub pressure: Measurement,
    pub visibility: Measurement,
    /// Most frequent hourly icon, without day/night variant.
    pub icon: Option<String>,
    pub(crate) warnings: Option<Vec<Arc<Warning>>>,
}

impl Day {
    /// Returns the reduced measurement of the given kind.
    pub fn measurement(&self, kind: MeasurementKind) -> Option<&Measurement> {
        match kind {
            MeasurementKind::Temperature => Some(&self.temperature),
            MeasurementKind::Precipitation => Some(&self.precipitation.amount),
            MeasurementKind::WindSpeed => Some(&self.wind.speed),
            MeasurementKind::WindGust => self.wind.gust.as_ref(),
            MeasurementKind::Humidity => Some(&self.humidity),
            MeasurementKind::Pressure => Some(&self.pressure),
            MeasurementKind::Visibility => Some(&self.visibility),
        }
    }

    /// Warnings attached by the overlay step, see [`crate::Hour::warnings`].
    pub fn warnings(&self) -> Option<&[Arc<Warning>]> {
        self.warnings.as_deref()
    }

    pub(crate) fn attach_warnings(&mut self, warnings: &[Arc<Warning>]) {
        self.warnings
            .get_or_insert_with(Vec::new)
            .extend(warnings.iter().cloned());
    }
}
