//! TfL Journey API response DTOs.
//!
//! These types map directly to the journey planner JSON responses.
//! They use `Option` liberally because the API omits fields rather
//! than sending null values in many cases.

use serde::Deserialize;

/// Response from `Journey/JourneyResults/{from}/to/{to}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponse {
    /// Candidate journeys, ranked by the service (fastest first).
    /// Absent entirely when the planner found nothing.
    pub journeys: Option<Vec<JourneyOptionDto>>,
}

/// One candidate journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyOptionDto {
    /// Total journey time in minutes.
    pub duration: u32,

    /// Ordered travel steps.
    pub legs: Option<Vec<JourneyLegDto>>,
}

/// One leg of a candidate journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyLegDto {
    /// Mode of transport for this leg.
    pub mode: Option<ModeDto>,

    /// Human-readable instruction for this leg.
    pub instruction: Option<InstructionDto>,
}

/// Mode descriptor on a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeDto {
    /// Mode identifier (e.g. "tube", "walking").
    pub name: Option<String>,
}

/// Instruction text on a leg. The summary is the short form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionDto {
    /// Short instruction (e.g. "Jubilee line to Canary Wharf").
    pub summary: Option<String>,

    /// Longer instruction with walking directions etc.
    pub detailed: Option<String>,
}
