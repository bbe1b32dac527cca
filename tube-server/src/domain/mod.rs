//! Domain types for the tube journey planner.
//!
//! This module contains the core domain model types that represent
//! validated journey data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod duration;
mod journey;
mod location;
mod mode;

pub use duration::format_duration;
pub use journey::{Journey, JourneyLeg};
pub use location::{InvalidCoordinate, Location};
pub use mode::Mode;
