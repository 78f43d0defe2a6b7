//! Small formatting helpers.

/// Format a duration in whole seconds as `M:SS`, or `H:MM:SS` from one hour
/// up.
pub fn format_time(seconds: u64) -> String {
    let (hours, minutes, secs) = (seconds / 3600, seconds / 60 % 60, seconds % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
