//! TfL Journey Planner HTTP client.

use tracing::debug;

use crate::domain::{Journey, Location};
use crate::planner::JourneyProvider;

use super::convert::convert_journey;
use super::error::TflError;
use super::types::ItineraryResponse;

/// Default base URL for the TfL unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Base URL for the API (defaults to the public TfL instance)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
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

impl Default for TflConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

/// TfL journey planner client.
///
/// Queries the journey planner for the fastest tube/walking itinerary
/// between two resolved locations. The service's own ranking is
/// trusted: the first journey in the response is the one returned.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Find the fastest journey between two locations.
    ///
    /// Issues a single request restricted to tube and walking modes,
    /// with national search disabled. Returns [`TflError::NoJourney`]
    /// when the response's journey list is empty or absent.
    pub async fn plan_journey(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Journey, TflError> {
        let url = format!(
            "{}/Journey/JourneyResults/{},{}/to/{},{}",
            self.base_url,
            from.latitude(),
            from.longitude(),
            to.latitude(),
            to.longitude()
        );

        debug!(from = %from, to = %to, "querying TfL journey planner");

        let response = self
            .http
            .get(&url)
            .query(&[("mode", "tube,walking"), ("nationalSearch", "false")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let itinerary: ItineraryResponse =
            serde_json::from_str(&body).map_err(|e| TflError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let Some(fastest) = itinerary.journeys.as_deref().unwrap_or(&[]).first() else {
            return Err(TflError::NoJourney);
        };

        let journey = convert_journey(fastest);

        debug!(
            duration_minutes = journey.duration_minutes,
            legs = journey.legs.len(),
            "journey found"
        );

        Ok(journey)
    }
}

impl JourneyProvider for TflClient {
    async fn plan_journey(&self, from: &Location, to: &Location) -> Result<Journey, TflError> {
        TflClient::plan_journey(self, from, to).await
    }
}
