//! Transit modes and their display styling.

use std::fmt;

/// A mode of transport on a journey leg.
///
/// Parsed from the journey service's mode name. Unrecognized names are
/// preserved in `Other` so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Tube,
    Walking,
    Bus,
    NationalRail,
    Overground,
    ElizabethLine,
    Dlr,
    Other(String),
}

impl Mode {
    /// Parse a mode from the service's mode name (e.g. "tube", "walking").
    pub fn from_name(name: &str) -> Self {
        match name {
            "tube" => Mode::Tube,
            "walking" => Mode::Walking,
            "bus" => Mode::Bus,
            "national-rail" => Mode::NationalRail,
            "overground" => Mode::Overground,
            "elizabeth-line" => Mode::ElizabethLine,
            "dlr" => Mode::Dlr,
            other => Mode::Other(other.to_string()),
        }
    }

    /// Badge background colour for this mode.
    ///
    /// Known modes use TfL-ish brand colours; anything else falls back
    /// to a neutral grey.
    pub fn colour(&self) -> &'static str {
        match self {
            Mode::Tube => "#0019a8",
            Mode::Walking => "#6b7280",
            Mode::Bus => "#e53e3e",
            Mode::NationalRail => "#1e7e34",
            Mode::Overground => "#e87722",
            Mode::ElizabethLine => "#6950a1",
            Mode::Dlr => "#009999",
            Mode::Other(_) => "#374151",
        }
    }

    /// Short badge label for this mode. Unrecognized modes show their
    /// raw service name.
    pub fn label(&self) -> &str {
        match self {
            Mode::Tube => "Tube",
            Mode::Walking => "Walk",
            Mode::Bus => "Bus",
            Mode::NationalRail => "Rail",
            Mode::Overground => "Overground",
            Mode::ElizabethLine => "Elizabeth",
            Mode::Dlr => "DLR",
            Mode::Other(name) => name,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
