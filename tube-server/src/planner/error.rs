//! Calculation error taxonomy.
//!
//! Every failure a calculation attempt can hit is folded into
//! [`PlanError`], so the presentation layer has exactly one error type
//! to render. Client errors are mapped here rather than bubbled up raw,
//! because the user-facing distinction (bad input vs. nothing found vs.
//! service trouble) does not line up one-to-one with the client enums.

use std::fmt;

use crate::geocode::GeocodeError;
use crate::tfl::TflError;

/// The stage a calculation attempt was in when it failed.
///
/// Attempts progress `Validating` → `GeocodingOrigin` →
/// `GeocodingDestination` → `QueryingJourney`; a failure in any stage
/// aborts the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Validating,
    GeocodingOrigin,
    GeocodingDestination,
    QueryingJourney,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Validating => "validating input",
            Phase::GeocodingOrigin => "looking up your location",
            Phase::GeocodingDestination => "looking up the office location",
            Phase::QueryingJourney => "fetching the TfL journey",
        };
        f.write_str(name)
    }
}

/// A failed calculation attempt.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// One or both inputs were empty. A warning, not an error: no
    /// service calls are made.
    #[error("please enter both locations")]
    MissingInput,

    /// The geocoder had no candidates for this address.
    #[error("could not find location: \"{address}\". Try a more specific address.")]
    LocationNotFound { address: String },

    /// Both locations resolved but the journey list was empty.
    #[error(
        "no tube journey found; the locations may be outside the TfL network or too close together"
    )]
    NoJourneyFound,

    /// An HTTP-layer failure from either external service.
    #[error("API error while {phase}: {message}")]
    Transport {
        phase: Phase,
        status: Option<u16>,
        message: String,
    },

    /// Anything else, reported generically.
    #[error("something went wrong: {message}")]
    Unexpected { message: String },
}

impl PlanError {
    /// True for conditions shown as a non-blocking warning rather than
    /// an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, PlanError::MissingInput)
    }

    /// Fold a geocoder failure into the taxonomy.
    pub(super) fn from_geocode(phase: Phase, err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound { address } => PlanError::LocationNotFound { address },
            GeocodeError::Api { status, message } => PlanError::Transport {
                phase,
                status: Some(status),
                message,
            },
            GeocodeError::Http(e) => PlanError::Transport {
                phase,
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            },
            GeocodeError::Json { message } => PlanError::Unexpected { message },
        }
    }

    /// Fold a journey service failure into the taxonomy.
    pub(super) fn from_journey(phase: Phase, err: TflError) -> Self {
        match err {
            TflError::NoJourney => PlanError::NoJourneyFound,
            TflError::Api { status, message } => PlanError::Transport {
                phase,
                status: Some(status),
                message,
            },
            TflError::Http(e) => PlanError::Transport {
                phase,
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            },
            TflError::Json { message, .. } => PlanError::Unexpected { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_a_warning() {
        assert!(PlanError::MissingInput.is_warning());
        assert!(!PlanError::NoJourneyFound.is_warning());
    }

    #[test]
    fn not_found_keeps_address() {
        let err = PlanError::from_geocode(
            Phase::GeocodingOrigin,
            GeocodeError::NotFound {
                address: "Bakre Street".into(),
            },
        );
        assert!(matches!(
            err,
            PlanError::LocationNotFound { address } if address == "Bakre Street"
        ));
    }

    #[test]
    fn geocoder_api_error_becomes_transport() {
        let err = PlanError::from_geocode(
            Phase::GeocodingDestination,
            GeocodeError::Api {
                status: 503,
                message: "unavailable".into(),
            },
        );
        match err {
            PlanError::Transport {
                phase,
                status,
                message,
            } => {
                assert_eq!(phase, Phase::GeocodingDestination);
                assert_eq!(status, Some(503));
                assert_eq!(message, "unavailable");
            }
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn empty_journey_list_becomes_no_journey_found() {
        let err = PlanError::from_journey(Phase::QueryingJourney, TflError::NoJourney);
        assert!(matches!(err, PlanError::NoJourneyFound));
    }

    #[test]
    fn parse_failure_becomes_unexpected() {
        let err = PlanError::from_journey(
            Phase::QueryingJourney,
            TflError::Json {
                message: "expected value".into(),
                body: None,
            },
        );
        assert!(matches!(err, PlanError::Unexpected { .. }));
    }

    #[test]
    fn transport_error_display_names_the_phase() {
        let err = PlanError::Transport {
            phase: Phase::QueryingJourney,
            status: Some(500),
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "API error while fetching the TfL journey: boom");
    }
}
