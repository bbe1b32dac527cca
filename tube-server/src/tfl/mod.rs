//! TfL Journey Planner client.
//!
//! This module provides an HTTP client for the Transport for London
//! unified API's journey planner, which returns candidate itineraries
//! between two coordinate pairs.
//!
//! Key characteristics of the journey endpoint:
//! - The from/to coordinates are path parameters
//!   (`/Journey/JourneyResults/{lat},{lon}/to/{lat},{lon}`)
//! - Journeys come back ranked; the first entry is the fastest
//! - Legs carry a mode name plus a summary and/or detailed instruction,
//!   any of which may be missing

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{TflClient, TflConfig};
pub use convert::convert_journey;
pub use error::TflError;
pub use mock::{MockJourneyApi, MockJourneyResponse};
pub use types::{InstructionDto, ItineraryResponse, JourneyLegDto, JourneyOptionDto, ModeDto};
