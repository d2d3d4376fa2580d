//! Provides the `ForecastClient` for requesting a parsed location forecast.
//!
//! This client acts as an intermediate builder, obtained via [`Dmi::forecast()`],
//! allowing the caller to pick the location and whether warnings are overlaid before
//! executing the request.

use crate::{Dmi, DmiError, Location};
use bon::bon;
use log::info;

/// A client builder for fetching location forecasts.
///
/// Calling `.location(id).call()` downloads the location document, parses it into
/// hourly and daily series and, unless disabled, overlays the location's warnings.
pub struct ForecastClient<'a> {
    client: &'a Dmi,
}

#[bon]
impl<'a> ForecastClient<'a> {
    pub(crate) fn new(client: &'a Dmi) -> Self {
        Self { client }
    }

    /// Initiates a builder to fetch the forecast of a location by its geoname id.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.with_warnings(bool)`: Whether the warnings document is fetched and attached
    ///   to the hours and days. Defaults to `true`.
    ///
    /// # Errors
    ///
    /// * [`DmiError::Fetch`] if either document cannot be downloaded or decoded.
    /// * [`DmiError::Parse`] if the location document is structurally invalid.
    ///
    /// Individual malformed warnings are skipped and do not fail the request.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use dmi::{Dmi, DmiError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DmiError> {
    /// let client = Dmi::new()?;
    /// let copenhagen = client.forecast().location(2618425).call().await?;
    ///
    /// for (date, day) in copenhagen.daily_forecast().iter() {
    ///     println!("{}: {}", date, day.temperature);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] id: u64,
        with_warnings: Option<bool>,
    ) -> Result<Location, DmiError> {
        let fetcher = &self.client.fetcher;

        if !with_warnings.unwrap_or(true) {
            return Ok(Location::from_raw(fetcher.location(id).await?)?);
        }

        let (raw, feed) = tokio::join!(fetcher.location(id), fetcher.warnings(id));
        let mut location = Location::from_raw(raw?)?;
        let report = location.apply_warnings(&feed?);
        info!(
            "Location {}: warnings on {} hours and {} days",
            id, report.hours, report.days
        );
        Ok(location)
    }
}
