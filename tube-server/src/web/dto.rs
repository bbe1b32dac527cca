//! Form input and view models for the templates.

use serde::Deserialize;

use crate::domain::JourneyLeg;
use crate::planner::{Plan, PlanError};

/// The journey form as submitted by the browser.
///
/// Fields default to empty strings so a half-filled form still parses;
/// input validation happens in the planner, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyForm {
    /// Origin address ("Your Location")
    #[serde(default)]
    pub from: String,

    /// Destination address ("Office Location")
    #[serde(default)]
    pub to: String,
}

/// One itinerary step, styled for display.
#[derive(Debug, Clone)]
pub struct LegView {
    /// Badge text (e.g. "Tube", "Walk")
    pub label: String,

    /// Badge background colour
    pub colour: String,

    /// Instruction text shown next to the badge
    pub instruction: String,
}

impl LegView {
    /// Build the styled view for one leg.
    pub fn from_leg(leg: &JourneyLeg) -> Self {
        Self {
            label: leg.mode.label().to_string(),
            colour: leg.mode.colour().to_string(),
            instruction: leg.instruction.clone(),
        }
    }
}

/// A successful calculation, ready for the results panel.
#[derive(Debug, Clone)]
pub struct JourneyView {
    /// Formatted total duration (e.g. "45 min", "1h 30min")
    pub duration_text: String,

    /// Resolved origin name
    pub from_name: String,

    /// Resolved destination name
    pub to_name: String,

    /// Styled steps, in travel order
    pub legs: Vec<LegView>,
}

impl JourneyView {
    /// Build the results view from a completed plan.
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            duration_text: plan.journey.duration_text(),
            from_name: plan.origin.display_name().to_string(),
            to_name: plan.destination.display_name().to_string(),
            legs: plan.journey.legs.iter().map(LegView::from_leg).collect(),
        }
    }
}

/// What the results panel shows after a calculation attempt.
#[derive(Debug, Clone)]
pub enum OutcomeView {
    /// The itinerary for a successful calculation.
    Journey(JourneyView),

    /// A non-blocking warning (missing input).
    Warning(String),

    /// An inline error message.
    Error(String),
}

impl OutcomeView {
    /// Render a failed attempt as its inline message.
    pub fn from_error(err: &PlanError) -> Self {
        if err.is_warning() {
            OutcomeView::Warning(err.to_string())
        } else {
            OutcomeView::Error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Journey, Location, Mode};
    use crate::planner::Phase;

    fn sample_plan() -> Plan {
        Plan {
            origin: Location::new(51.5226, -0.1571, "Baker Street, London").unwrap(),
            destination: Location::new(51.5054, -0.0235, "Canary Wharf, London").unwrap(),
            journey: Journey::new(
                45,
                vec![
                    JourneyLeg::new(Mode::Walking, "Walk to Baker Street station"),
                    JourneyLeg::new(Mode::Tube, "Jubilee line towards Stratford"),
                ],
            ),
        }
    }

    #[test]
    fn journey_view_formats_duration_and_styles_legs() {
        let view = JourneyView::from_plan(&sample_plan());

        assert_eq!(view.duration_text, "45 min");
        assert_eq!(view.from_name, "Baker Street, London");
        assert_eq!(view.to_name, "Canary Wharf, London");

        assert_eq!(view.legs.len(), 2);
        assert_eq!(view.legs[0].label, "Walk");
        assert_eq!(view.legs[0].colour, "#6b7280");
        assert_eq!(view.legs[0].instruction, "Walk to Baker Street station");
        assert_eq!(view.legs[1].label, "Tube");
        assert_eq!(view.legs[1].colour, "#0019a8");
    }

    #[test]
    fn missing_input_renders_as_warning() {
        let outcome = OutcomeView::from_error(&PlanError::MissingInput);
        assert!(matches!(
            outcome,
            OutcomeView::Warning(message) if message == "please enter both locations"
        ));
    }

    #[test]
    fn transport_failure_renders_as_error() {
        let outcome = OutcomeView::from_error(&PlanError::Transport {
            phase: Phase::QueryingJourney,
            status: Some(500),
            message: "boom".into(),
        });
        assert!(matches!(outcome, OutcomeView::Error(_)));
    }

    #[test]
    fn form_defaults_to_empty_fields() {
        let form: JourneyForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.from, "");
        assert_eq!(form.to, "");
    }
}
