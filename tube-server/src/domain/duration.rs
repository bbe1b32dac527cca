//! Duration formatting for display.

/// Format a duration in minutes for display.
///
/// Durations under an hour render as `"45 min"`. Longer durations render
/// as `"1h 30min"`, omitting the minutes component when it is zero
/// (`"2h"`, not `"2h 0min"`).
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}min")
    }
}
