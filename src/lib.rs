pub mod aggregation;
mod clients;
mod dmi;
mod error;
pub mod overlay;
pub mod parsing;
mod types;
mod weather_data;

pub use dmi::*;
pub use error::DmiError;

pub use clients::forecast_client::*;

pub use overlay::{apply_warnings, OverlayReport};

pub use types::location::{DailyForecast, HourlyForecast, Location};
pub use types::measurement::{Measurement, MeasurementKind, Unit};
pub use types::precipitation::{Precipitation, PrecipitationType};
pub use types::raw::{RawHour, RawLocation, RawWarning, WarningsFeed};
pub use types::series::Series;
pub use types::warning::{Severity, Warning, WarningType};
pub use types::weather_condition::WeatherCondition;
pub use types::weather_data::daily::Day;
pub use types::weather_data::hourly::Hour;
pub use types::wind::Wind;

pub use parsing::error::ParseError;
pub use weather_data::error::FetchError;
pub use weather_data::fetcher::DEFAULT_BASE_URL;
