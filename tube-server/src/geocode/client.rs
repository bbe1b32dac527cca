//! Nominatim HTTP client.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use serde::Deserialize;
use tracing::debug;

use crate::domain::Location;
use crate::planner::GeocodeProvider;

use super::error::GeocodeError;

/// Default base URL for the Nominatim search API.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Identifying User-Agent, required by the Nominatim usage policy.
const USER_AGENT: &str = "tube-server/0.1 (tube journey planner)";

/// Configuration for the geocoder client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API (defaults to the public Nominatim instance)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// A single Nominatim search candidate.
///
/// Nominatim encodes coordinates as strings, not numbers.
#[derive(Debug, Clone, Deserialize)]
struct PlaceDto {
    lat: String,
    lon: String,
    display_name: String,
}

/// Nominatim geocoding client.
///
/// Resolves a free-text address to a [`Location`]. Repeated calls with
/// the same address always re-query: there is no caching and no retry.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new geocoder client with the given configuration.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Resolve a free-text address to a location.
    ///
    /// Sends a single search request restricted to Great Britain and
    /// limited to one candidate. Returns [`GeocodeError::NotFound`]
    /// (carrying the original input) when there are no candidates.
    pub async fn geocode(&self, address: &str) -> Result<Location, GeocodeError> {
        let query = search_query(address);
        let url = format!("{}/search", self.base_url);

        debug!(%address, %query, "geocoding address");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("limit", "1"),
                ("countrycodes", "gb"),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let places: Vec<PlaceDto> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let Some(place) = places.first() else {
            return Err(GeocodeError::NotFound {
                address: address.to_string(),
            });
        };

        let latitude: f64 = place.lat.parse().map_err(|_| GeocodeError::Json {
            message: format!("invalid latitude: {}", place.lat),
        })?;
        let longitude: f64 = place.lon.parse().map_err(|_| GeocodeError::Json {
            message: format!("invalid longitude: {}", place.lon),
        })?;

        let location = Location::new(latitude, longitude, place.display_name.clone())
            .map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        debug!(
            latitude = location.latitude(),
            longitude = location.longitude(),
            "geocoded address"
        );

        Ok(location)
    }
}

impl GeocodeProvider for NominatimClient {
    async fn geocode(&self, address: &str) -> Result<Location, GeocodeError> {
        NominatimClient::geocode(self, address).await
    }
}

/// Build the search query for an address.
///
/// Appends a ", London, UK" qualifier to bias results towards London,
/// unless the address already mentions London.
fn search_query(address: &str) -> String {
    if address.to_lowercase().contains("london") {
        address.to_string()
    } else {
        format!("{address}, London, UK")
    }
}
