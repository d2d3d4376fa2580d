//! The fully parsed forecast for one location.

use crate::types::series::Series;
use crate::types::weather_data::daily::Day;
use crate::types::weather_data::hourly::Hour;
use chrono::DateTime;
use chrono_tz::Tz;

/// Hourly records keyed by their 14-digit `YYYYMMDDHHmmss` timestamp.
pub type HourlyForecast = Series<Hour>;
/// Daily records keyed by their 8-digit `YYYYMMDD` date.
pub type DailyForecast = Series<Day>;

/// A location's forecast: the current conditions, the hourly series and the
/// daily summaries reduced from it.
///
/// Build one with [`Location::from_json`] or fetch it through [`crate::Dmi::forecast`].
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub(crate) id: Option<i64>,
    pub(crate) name: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
    pub(crate) timezone: Tz,
    pub(crate) last_update: Option<DateTime<Tz>>,
    pub(crate) sunrise: Option<DateTime<Tz>>,
    pub(crate) sunset: Option<DateTime<Tz>>,
    pub(crate) currently: Option<Hour>,
    pub(crate) hourly: HourlyForecast,
    pub(crate) daily: DailyForecast,
}

impl Location {
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// `(latitude, longitude)` when both are reported.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Time zone all timestamps of this location are expressed in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn last_update(&self) -> Option<&DateTime<Tz>> {
        self.last_update.as_ref()
    }

    pub fn sunrise(&self) -> Option<&DateTime<Tz>> {
        self.sunrise.as_ref()
    }

    pub fn sunset(&self) -> Option<&DateTime<Tz>> {
        self.sunset.as_ref()
    }

    /// The current conditions: the first hour of the feed. `None` for an empty feed.
    pub fn currently_forecast(&self) -> Option<&Hour> {
        self.currently.as_ref()
    }

    pub fn hourly_forecast(&self) -> &HourlyForecast {
        &self.hourly
    }

    pub fn daily_forecast(&self) -> &DailyForecast {
        &self.daily
    }
}
