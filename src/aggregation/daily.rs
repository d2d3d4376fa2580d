//! Reduces an hourly series into calendar-day summaries.
//!
//! The reduction runs in two phases. [`DayCollection::collect`] gathers each hour's
//! samples into plain per-measurement lists and frequency counters, then
//! [`DayCollection::reduce`] turns those lists into a [`Day`]. Neither phase depends on
//! the order hours arrive in, except for which day is emitted first.

use crate::aggregation::circular::circular_mean;
use crate::aggregation::mode::FrequencyCounter;
use crate::parsing::error::ParseError;
use crate::parsing::timestamp::{date_key_of, local_noon};
use crate::types::measurement::{Measurement, MeasurementKind, Unit};
use crate::types::precipitation::{Precipitation, PrecipitationType};
use crate::types::series::Series;
use crate::types::weather_condition::strip_variant;
use crate::types::weather_data::daily::Day;
use crate::types::weather_data::hourly::Hour;
use crate::types::wind::Wind;
use chrono::NaiveDate;
use chrono_tz::Tz;
use log::debug;
use std::collections::HashMap;

/// Arithmetic mean, with `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Collected point values and bounds of one measurement kind for one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleLists {
    pub values: Vec<f64>,
    pub lows: Vec<f64>,
    pub highs: Vec<f64>,
}

impl SampleLists {
    fn push(&mut self, measurement: &Measurement) {
        self.values.push(measurement.value);
        if let Some(low) = measurement.low {
            self.lows.push(low);
        }
        if let Some(high) = measurement.high {
            self.highs.push(high);
        }
    }

    /// Means of the three lists. Bounds are always set on the result.
    fn reduce(&self, unit: Unit) -> Measurement {
        Measurement::new(
            mean(&self.values),
            Some(mean(&self.lows)),
            Some(mean(&self.highs)),
            unit,
        )
    }
}

/// Everything collected for one calendar day before reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCollection {
    pub date: NaiveDate,
    pub hour_count: usize,
    pub temperature: SampleLists,
    pub precipitation: SampleLists,
    pub wind_speed: SampleLists,
    pub wind_gust: SampleLists,
    pub humidity: SampleLists,
    pub pressure: SampleLists,
    pub visibility: SampleLists,
    pub wind_directions: Vec<f64>,
    pub icons: FrequencyCounter,
    pub precipitation_types: FrequencyCounter,
}

impl DayCollection {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            hour_count: 0,
            temperature: SampleLists::default(),
            precipitation: SampleLists::default(),
            wind_speed: SampleLists::default(),
            wind_gust: SampleLists::default(),
            humidity: SampleLists::default(),
            pressure: SampleLists::default(),
            visibility: SampleLists::default(),
            wind_directions: Vec::new(),
            icons: FrequencyCounter::new(),
            precipitation_types: FrequencyCounter::new(),
        }
    }

    pub fn samples(&self, kind: MeasurementKind) -> &SampleLists {
        match kind {
            MeasurementKind::Temperature => &self.temperature,
            MeasurementKind::Precipitation => &self.precipitation,
            MeasurementKind::WindSpeed => &self.wind_speed,
            MeasurementKind::WindGust => &self.wind_gust,
            MeasurementKind::Humidity => &self.humidity,
            MeasurementKind::Pressure => &self.pressure,
            MeasurementKind::Visibility => &self.visibility,
        }
    }

    fn samples_mut(&mut self, kind: MeasurementKind) -> &mut SampleLists {
        match kind {
            MeasurementKind::Temperature => &mut self.temperature,
            MeasurementKind::Precipitation => &mut self.precipitation,
            MeasurementKind::WindSpeed => &mut self.wind_speed,
            MeasurementKind::WindGust => &mut self.wind_gust,
            MeasurementKind::Humidity => &mut self.humidity,
            MeasurementKind::Pressure => &mut self.pressure,
            MeasurementKind::Visibility => &mut self.visibility,
        }
    }

    /// Phase 1: adds one hour's samples. Absent measurements add nothing.
    pub fn collect(&mut self, hour: &Hour) {
        self.hour_count += 1;

        for kind in MeasurementKind::ALL {
            if let Some(measurement) = hour.measurement(kind) {
                self.samples_mut(kind).push(measurement);
            }
        }

        if let Some(direction) = hour.wind.as_ref().and_then(|wind| wind.direction) {
            self.wind_directions.push(direction);
        }

        if let Some(icon) = hour.icon.as_deref() {
            let cleaned = strip_variant(icon);
            if !cleaned.is_empty() {
                self.icons.increment(cleaned);
            }
        }

        if let Some(kind) = hour
            .precipitation
            .as_ref()
            .and_then(|precipitation| precipitation.kind.as_ref())
        {
            self.precipitation_types.increment(kind.as_str());
        }
    }

    /// Phase 2: reduces the collected samples into a [`Day`] stamped at local noon.
    pub fn reduce(&self, tz: Tz) -> Result<Day, ParseError> {
        let reduce = |kind: MeasurementKind| self.samples(kind).reduce(kind.unit());

        Ok(Day {
            date: self.date,
            timestamp: local_noon(self.date, tz)?,
            hour_count: self.hour_count,
            temperature: reduce(MeasurementKind::Temperature),
            precipitation: Precipitation {
                amount: reduce(MeasurementKind::Precipitation),
                kind: self
                    .precipitation_types
                    .mode()
                    .and_then(PrecipitationType::parse),
            },
            wind: Wind {
                speed: reduce(MeasurementKind::WindSpeed),
                gust: Some(reduce(MeasurementKind::WindGust)),
                direction: Some(circular_mean(&self.wind_directions)),
            },
            humidity: reduce(MeasurementKind::Humidity),
            pressure: reduce(MeasurementKind::Pressure),
            visibility: reduce(MeasurementKind::Visibility),
            icon: self.icons.mode().map(str::to_string),
            warnings: None,
        })
    }
}

/// Buckets `hours` by their calendar date in `tz` and reduces each bucket to a [`Day`].
///
/// Days are keyed `YYYYMMDD` and appear in the order their first hour was seen.
/// An empty input gives an empty series.
///
/// # Errors
///
/// Returns [`ParseError::InvalidLocalNoon`] if a date has no representable local noon
/// in `tz`.
pub fn aggregate_daily<'a, I>(hours: I, tz: Tz) -> Result<Series<Day>, ParseError>
where
    I: IntoIterator<Item = &'a Hour>,
{
    let mut buckets: Vec<DayCollection> = Vec::new();
    let mut positions: HashMap<NaiveDate, usize> = HashMap::new();

    for hour in hours {
        let date = hour.timestamp.with_timezone(&tz).date_naive();
        let position = *positions.entry(date).or_insert_with(|| {
            buckets.push(DayCollection::new(date));
            buckets.len() - 1
        });
        buckets[position].collect(hour);
    }

    debug!("Reducing {} day buckets", buckets.len());

    buckets
        .iter()
        .map(|bucket| Ok((date_key_of(bucket.date), bucket.reduce(tz)?)))
        .collect()
}
