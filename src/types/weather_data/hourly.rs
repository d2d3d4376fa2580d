use crate::types::measurement::{Measurement, MeasurementKind};
use crate::types::precipitation::Precipitation;
use crate::types::warning::Warning;
use crate::types::wind::Wind;
use chrono::DateTime;
use chrono_tz::Tz;
use std::sync::Arc;

/// One forecasted hour.
///
/// Built once per timeserie entry. The only field that changes afterwards is the
/// warning set, which the overlay step attaches.
#[derive(Debug, Clone, PartialEq)]
pub struct Hour {
    pub timestamp: DateTime<Tz>,
    pub temperature: Option<Measurement>,
    pub precipitation: Option<Precipitation>,
    pub wind: Option<Wind>,
    pub humidity: Option<Measurement>,
    pub pressure: Option<Measurement>,
    pub visibility: Option<Measurement>,
    /// Weather icon, possibly carrying a `-night` variant suffix.
    pub icon: Option<String>,
    pub(crate) warnings: Option<Vec<Arc<Warning>>>,
}

impl Hour {
    pub fn new(timestamp: DateTime<Tz>) -> Self {
        Self {
            timestamp,
            temperature: None,
            precipitation: None,
            wind: None,
            humidity: None,
            pressure: None,
            visibility: None,
            icon: None,
            warnings: None,
        }
    }

    /// Returns the measurement of the given kind, if this hour carries one.
    pub fn measurement(&self, kind: MeasurementKind) -> Option<&Measurement> {
        match kind {
            MeasurementKind::Temperature => self.temperature.as_ref(),
            MeasurementKind::Precipitation => self.precipitation.as_ref().map(|p| &p.amount),
            MeasurementKind::WindSpeed => self.wind.as_ref().map(|w| &w.speed),
            MeasurementKind::WindGust => self.wind.as_ref().and_then(|w| w.gust.as_ref()),
            MeasurementKind::Humidity => self.humidity.as_ref(),
            MeasurementKind::Pressure => self.pressure.as_ref(),
            MeasurementKind::Visibility => self.visibility.as_ref(),
        }
    }

    /// Warnings attached by the overlay step.
    ///
    /// `None` means no warning matched (or the overlay never ran), which is distinct
    /// from an attached empty set.
    pub fn warnings(&self) -> Option<&[Arc<Warning>]> {
        self.warnings.as_deref()
    }

    /// Appends warnings to this hour. Calling it twice with the same warnings
    /// duplicates them.
    pub(crate) fn attach_warnings(&mut self, warnings: &[Arc<Warning>]) {
        self.warnings
            .get_or_insert_with(Vec::new)
            .extend(warnings.iter().cloned());
    }
}
