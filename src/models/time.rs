//! Logical simulation clock.
//!
//! Landing times are whole minutes relative to a scheduling epoch (t=0).
//! The consumer defines what t=0 means (e.g., start of the session, midnight).
//! This clock is independent of the arrival counter used for tie-breaking.

/// A point on the simulated timeline (minutes since epoch).
pub type SimTime = i64;

/// A span of simulated time in minutes.
pub type Minutes = i64;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Renders a point in time as a wall-clock `HH:MM` string.
///
/// Times wrap at 24h; negative times count back from midnight.
///
/// # Example
/// ```
/// use runway_schedule::models::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(8 * 60 + 5), "08:05");
/// assert_eq!(format_clock(25 * 60), "01:00");
/// ```
pub fn format_clock(time: SimTime) -> String {
    let of_day = time.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", of_day / 60, of_day % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_wraps() {
        assert_eq!(format_clock(23 * 60 + 59), "23:59");
        assert_eq!(format_clock(24 * 60), "00:00");
        assert_eq!(format_clock(-1), "23:59");
    }
}
