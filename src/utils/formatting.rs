//! Formatting utilities used for CLI outputs.

/// Seconds as a human-readable duration, e.g. `08h 20m 47s` or `08:20:47`.
pub fn secs2readable(secs: i64, short: bool) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs_s = secs.abs();
    let hours = abs_s / 3600;
    let minutes = (abs_s % 3600) / 60;
    let seconds = abs_s % 60;

    if short {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    } else {
        format!("{}{:02}h {:02}m {:02}s", sign, hours, minutes, seconds)
    }
}
