//! Conversion from TfL DTOs to domain types.

use crate::domain::{Journey, JourneyLeg, Mode};

use super::types::{JourneyLegDto, JourneyOptionDto};

/// Convert one candidate journey to the domain type.
pub fn convert_journey(option: &JourneyOptionDto) -> Journey {
    let legs = option
        .legs
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(convert_leg)
        .collect();

    Journey::new(option.duration, legs)
}

/// Convert a single leg.
///
/// The mode defaults to walking when absent. The instruction prefers
/// the short summary, falls back to the detailed text, and as a last
/// resort uses the mode's display label.
fn convert_leg(leg: &JourneyLegDto) -> JourneyLeg {
    let mode = leg
        .mode
        .as_ref()
        .and_then(|m| m.name.as_deref())
        .map(Mode::from_name)
        .unwrap_or(Mode::Walking);

    let instruction = leg
        .instruction
        .as_ref()
        .and_then(|i| i.summary.clone().or_else(|| i.detailed.clone()))
        .unwrap_or_else(|| mode.label().to_string());

    JourneyLeg::new(mode, instruction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfl::types::{InstructionDto, ModeDto};

    fn leg(mode: Option<&str>, summary: Option<&str>, detailed: Option<&str>) -> JourneyLegDto {
        JourneyLegDto {
            mode: mode.map(|name| ModeDto {
                name: Some(name.to_string()),
            }),
            instruction: if summary.is_none() && detailed.is_none() {
                None
            } else {
                Some(InstructionDto {
                    summary: summary.map(str::to_string),
                    detailed: detailed.map(str::to_string),
                })
            },
        }
    }

    #[test]
    fn prefers_summary_instruction() {
        let converted = convert_journey(&JourneyOptionDto {
            duration: 10,
            legs: Some(vec![leg(Some("tube"), Some("short"), Some("long"))]),
        });

        assert_eq!(converted.legs[0].instruction, "short");
    }

    #[test]
    fn falls_back_to_detailed_instruction() {
        let converted = convert_journey(&JourneyOptionDto {
            duration: 10,
            legs: Some(vec![leg(Some("tube"), None, Some("long"))]),
        });

        assert_eq!(converted.legs[0].instruction, "long");
    }

    #[test]
    fn falls_back_to_mode_label() {
        let converted = convert_journey(&JourneyOptionDto {
            duration: 10,
            legs: Some(vec![leg(Some("tube"), None, None)]),
        });

        assert_eq!(converted.legs[0].instruction, "Tube");
    }

    #[test]
    fn missing_mode_defaults_to_walking() {
        let converted = convert_journey(&JourneyOptionDto {
            duration: 5,
            legs: Some(vec![leg(None, None, None)]),
        });

        assert_eq!(converted.legs[0].mode, Mode::Walking);
        assert_eq!(converted.legs[0].instruction, "Walk");
    }

    #[test]
    fn preserves_leg_order_and_duration() {
        let converted = convert_journey(&JourneyOptionDto {
            duration: 45,
            legs: Some(vec![
                leg(Some("walking"), Some("Walk to Baker Street"), None),
                leg(Some("tube"), Some("Jubilee line"), None),
            ]),
        });

        assert_eq!(converted.duration_minutes, 45);
        assert_eq!(converted.legs[0].mode, Mode::Walking);
        assert_eq!(converted.legs[1].mode, Mode::Tube);
    }

    #[test]
    fn absent_leg_list_converts_to_empty() {
        let converted = convert_journey(&JourneyOptionDto {
            duration: 1,
            legs: None,
        });

        assert!(converted.legs.is_empty());
    }
}
