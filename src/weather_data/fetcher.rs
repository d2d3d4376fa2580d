use crate::types::raw::{RawLocation, WarningsFeed};
use crate::weather_data::error::FetchError;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://www.dmi.dk";

const LOCATION_PATH: &str = "/NinJo2DmiDk/ninjo2dmidk";
const WARNINGS_PATH: &str = "/dmidk_byvejrWS/rest/texts/varsler/geonameid";

/// Downloads the raw location and warnings documents. Decoding stops at the serde
/// mirrors; turning them into typed records is left to the parsing layer.
pub struct LocationFetcher {
    client: Client,
    base_url: String,
}

impl LocationFetcher {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn location_url(&self, id: u64) -> String {
        format!("{}{}?cmd=llj&id={}", self.base_url, LOCATION_PATH, id)
    }

    pub fn warnings_url(&self, id: u64) -> String {
        format!("{}{}/{}", self.base_url, WARNINGS_PATH, id)
    }

    pub async fn location(&self, id: u64) -> Result<RawLocation, FetchError> {
        let raw: RawLocation = self.get_json(self.location_url(id)).await?;
        info!(
            "Fetched location {} with {} timeserie entries",
            id,
            raw.timeserie.len()
        );
        Ok(raw)
    }

    pub async fn warnings(&self, id: u64) -> Result<WarningsFeed, FetchError> {
        let feed: WarningsFeed = self.get_json(self.warnings_url(id)).await?;
        info!(
            "Fetched {} hour-scoped and {} day-scoped warning groups for location {}",
            feed.warnings.len(),
            feed.location_warnings.len(),
            id
        );
        Ok(feed)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        info!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(url.clone(), e))?;

        serde_json::from_str(&body).map_err(|source| {
            warn!("Undecodable document from {}: {}", url, source);
            FetchError::Decode { url, source }
        })
    }
}
