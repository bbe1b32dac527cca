//! Mock journey API for testing without network access.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Journey, Location};
use crate::planner::JourneyProvider;

use super::error::TflError;

/// What the mock returns for every call.
#[derive(Debug, Clone)]
pub enum MockJourneyResponse {
    /// Return this journey.
    Journey(Journey),
    /// The journey list was empty.
    Empty,
    /// The API failed with this HTTP status.
    ApiError(u16),
}

/// Mock journey API that returns a canned response and counts calls.
#[derive(Debug)]
pub struct MockJourneyApi {
    response: MockJourneyResponse,
    calls: AtomicUsize,
}

impl MockJourneyApi {
    /// Create a mock that returns the given journey.
    pub fn returning(journey: Journey) -> Self {
        Self {
            response: MockJourneyResponse::Journey(journey),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose journey list is always empty.
    pub fn empty() -> Self {
        Self {
            response: MockJourneyResponse::Empty,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that fails every call with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            response: MockJourneyResponse::ApiError(status),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of journey requests made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl JourneyProvider for MockJourneyApi {
    async fn plan_journey(&self, _from: &Location, _to: &Location) -> Result<Journey, TflError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.response {
            MockJourneyResponse::Journey(journey) => Ok(journey.clone()),
            MockJourneyResponse::Empty => Err(TflError::NoJourney),
            MockJourneyResponse::ApiError(status) => Err(TflError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JourneyLeg, Mode};

    fn locations() -> (Location, Location) {
        (
            Location::new(51.5226, -0.1571, "Baker Street").unwrap(),
            Location::new(51.5054, -0.0235, "Canary Wharf").unwrap(),
        )
    }

    #[tokio::test]
    async fn returns_canned_journey() {
        let journey = Journey::new(45, vec![JourneyLeg::new(Mode::Tube, "Jubilee line")]);
        let mock = MockJourneyApi::returning(journey.clone());
        let (from, to) = locations();

        let result = JourneyProvider::plan_journey(&mock, &from, &to).await.unwrap();
        assert_eq!(result, journey);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_mock_reports_no_journey() {
        let mock = MockJourneyApi::empty();
        let (from, to) = locations();

        let err = JourneyProvider::plan_journey(&mock, &from, &to).await.unwrap_err();
        assert!(matches!(err, TflError::NoJourney));
    }
}
