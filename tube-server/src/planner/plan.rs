//! The calculation attempt itself.

use std::future::Future;

use tracing::{debug, info};

use crate::domain::{Journey, Location};
use crate::geocode::GeocodeError;
use crate::tfl::TflError;

use super::error::{Phase, PlanError};

/// Something that can resolve a free-text address to a location.
///
/// Implemented by the real Nominatim client and by the counting mock.
pub trait GeocodeProvider {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Location, GeocodeError>> + Send;
}

/// Something that can find the fastest journey between two locations.
///
/// Implemented by the real TfL client and by the counting mock.
pub trait JourneyProvider {
    fn plan_journey(
        &self,
        from: &Location,
        to: &Location,
    ) -> impl Future<Output = Result<Journey, TflError>> + Send;
}

/// The two free-text inputs for one calculation attempt.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Origin address as typed by the user.
    pub from: String,

    /// Destination address as typed by the user.
    pub to: String,
}

impl PlanRequest {
    /// Create a request from the raw form inputs.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A completed calculation: both resolved endpoints plus the fastest
/// journey between them.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Resolved origin.
    pub origin: Location,

    /// Resolved destination.
    pub destination: Location,

    /// The fastest journey, as ranked by the service.
    pub journey: Journey,
}

/// Runs one calculation attempt against the two providers.
///
/// The two geocoding calls run sequentially; total latency is dominated
/// by network round-trips and there is only one user waiting, so there
/// is nothing to gain from overlapping them.
#[derive(Debug)]
pub struct Planner<'a, G, J> {
    geocoder: &'a G,
    journeys: &'a J,
}

impl<'a, G, J> Planner<'a, G, J>
where
    G: GeocodeProvider,
    J: JourneyProvider,
{
    /// Create a planner over the given providers.
    pub fn new(geocoder: &'a G, journeys: &'a J) -> Self {
        Self { geocoder, journeys }
    }

    /// Run one calculation attempt to completion.
    ///
    /// Empty input fails fast with [`PlanError::MissingInput`] before
    /// any service call is made.
    pub async fn plan(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        let from = request.from.trim();
        let to = request.to.trim();

        if from.is_empty() || to.is_empty() {
            return Err(PlanError::MissingInput);
        }

        debug!(%from, %to, "starting journey calculation");

        let origin = self
            .geocoder
            .geocode(from)
            .await
            .map_err(|e| PlanError::from_geocode(Phase::GeocodingOrigin, e))?;

        let destination = self
            .geocoder
            .geocode(to)
            .await
            .map_err(|e| PlanError::from_geocode(Phase::GeocodingDestination, e))?;

        let journey = self
            .journeys
            .plan_journey(&origin, &destination)
            .await
            .map_err(|e| PlanError::from_journey(Phase::QueryingJourney, e))?;

        info!(
            origin = %origin.display_name(),
            destination = %destination.display_name(),
            duration_minutes = journey.duration_minutes,
            legs = journey.legs.len(),
            "journey calculated"
        );

        Ok(Plan {
            origin,
            destination,
            journey,
        })
    }
}
