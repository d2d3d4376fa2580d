//! This module provides the main entry point for fetching DMI location forecasts.
//! A [`Dmi`] holds the HTTP client and the service base URL; requests are started
//! through the per-resource clients it hands out.

use crate::clients::forecast_client::ForecastClient;
use crate::error::DmiError;
use crate::weather_data::error::FetchError;
use crate::weather_data::fetcher::{LocationFetcher, DEFAULT_BASE_URL};
use bon::bon;
use reqwest::Client;
use std::time::Duration;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client struct for accessing DMI forecasts.
///
/// Create an instance with [`Dmi::new()`] for the public service, or through
/// [`Dmi::builder()`] to point it at another host or change the timeout.
///
/// # Examples
///
/// ```rust
/// # use dmi::{Dmi, DmiError};
/// # use std::time::Duration;
/// # fn run() -> Result<(), DmiError> {
/// let client = Dmi::new()?;
///
/// let local = Dmi::builder()
///     .base_url("http://localhost:8080")
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct Dmi {
    pub(crate) fetcher: LocationFetcher,
}

#[bon]
impl Dmi {
    /// Creates a client for the public DMI service with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] (wrapped in [`DmiError::Fetch`]) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, DmiError> {
        Self::builder().build()
    }

    /// Builder for a configured client.
    ///
    /// * `.base_url(impl Into<String>)`: Optional. Scheme and host of the service,
    ///   defaults to `https://www.dmi.dk`.
    /// * `.timeout(Duration)`: Optional. Per-request timeout, defaults to 30 seconds.
    #[builder(start_fn = builder, finish_fn = build)]
    pub fn configured(
        #[builder(into, default = DEFAULT_BASE_URL.to_string())] base_url: String,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
    ) -> Result<Self, DmiError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self {
            fetcher: LocationFetcher::new(client, &base_url),
        })
    }

    /// Starts a forecast request, see [`ForecastClient`].
    pub fn forecast(&self) -> ForecastClient<'_> {
        ForecastClient::new(self)
    }
}
