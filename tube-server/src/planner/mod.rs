//! Journey calculation orchestration.
//!
//! This module drives one calculation attempt end to end: validate the
//! two inputs, geocode origin and destination, query the journey
//! service, and hand back a complete [`Plan`]. Every error along the
//! way is folded into the [`PlanError`] taxonomy so the presentation
//! layer can show a single inline message.
//!
//! Each attempt is isolated: nothing from a failed attempt is kept,
//! and a new attempt always starts from scratch.

mod error;
mod plan;

pub use error::{Phase, PlanError};
pub use plan::{GeocodeProvider, JourneyProvider, Plan, PlanRequest, Planner};
