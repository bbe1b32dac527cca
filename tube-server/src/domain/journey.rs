//! Journey types.
//!
//! A `Journey` is the single best itinerary returned by the journey
//! service: a total duration plus an ordered sequence of legs.

use super::Mode;

/// One contiguous segment of a journey using a single mode of transport.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyLeg {
    /// Mode of transport for this leg.
    pub mode: Mode,

    /// Human-readable instruction for this leg
    /// (e.g. "Jubilee line towards Stratford").
    pub instruction: String,
}

impl JourneyLeg {
    /// Create a leg.
    pub fn new(mode: Mode, instruction: impl Into<String>) -> Self {
        Self {
            mode,
            instruction: instruction.into(),
        }
    }
}

/// A complete itinerary from origin to destination.
///
/// Only constructed when the journey service returned at least one
/// candidate; "no journey found" is an error condition, never an empty
/// `Journey`. Leg order is meaningful: legs are sequential travel steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    /// Total journey time in minutes.
    pub duration_minutes: u32,

    /// Ordered travel steps.
    pub legs: Vec<JourneyLeg>,
}

impl Journey {
    /// Create a journey from a duration and its ordered legs.
    pub fn new(duration_minutes: u32, legs: Vec<JourneyLeg>) -> Self {
        Self {
            duration_minutes,
            legs,
        }
    }

    /// The duration formatted for display (see [`super::format_duration`]).
    pub fn duration_text(&self) -> String {
        super::format_duration(self.duration_minutes)
    }
}
