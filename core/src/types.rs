//! Shared primitive types used across the entire simulation.

/// A point on the simulation clock, in simulated seconds.
/// One simulated day is 86 400 seconds.
pub type SimTime = f64;

/// A building floor, 1-based. Floor 1 is the ground floor.
pub type Floor = i32;

/// An hour of day, 0..24.
pub type Hour = usize;

/// Seconds in one simulated day.
pub const SECONDS_PER_DAY: SimTime = 86_400.0;

/// Seconds in one simulated hour.
pub const SECONDS_PER_HOUR: SimTime = 3_600.0;

/// Convert an hours-of-day timestamp (e.g. 7.5 = 07:30) to sim seconds.
pub fn hours_to_seconds(hours: f64) -> SimTime {
    hours * SECONDS_PER_HOUR
}

/// The hour-of-day bucket for a clock value in sim seconds.
pub fn hour_of_day(time: SimTime) -> Hour {
    ((time / SECONDS_PER_HOUR) as i64).rem_euclid(24) as Hour
}
