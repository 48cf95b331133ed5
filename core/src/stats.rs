//! Aggregate usage statistics.
//!
//! Counters are bumped at request submission (floor/hourly/total) and every
//! tick (occupancy, activity, wait time, timeouts). They measure demand and
//! activity, not eventual service outcomes.

use crate::{
    config::FLOOR_COUNT,
    types::{Floor, Hour, SimTime},
};
use serde::{Deserialize, Serialize};

/// The four named peak windows, as (label, start hour, end hour).
pub const PEAK_PERIODS: [(&str, Hour, Hour); 4] = [
    ("morning", 6, 8),
    ("late_morning", 11, 12),
    ("lunch", 13, 14),
    ("evening", 17, 18),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    /// Request/occupancy count per floor, index 0 = floor 1.
    pub floor_requests: Vec<u64>,
    /// Request/activity count per hour of day.
    pub hourly_requests: Vec<u64>,
    pub total_requests: u64,
    pub timeout_requests: u64,
    /// Accumulated queue-head waiting time, in sim seconds.
    pub total_wait_time: SimTime,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            floor_requests:   vec![0; FLOOR_COUNT as usize],
            hourly_requests:  vec![0; 24],
            total_requests:   0,
            timeout_requests: 0,
            total_wait_time:  0.0,
        }
    }
}

impl Statistics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_submission(&mut self, from: Floor, to: Floor, count: u32, hour: Hour) {
        self.hourly_requests[hour % 24] += u64::from(count);
        self.floor_requests[(from - 1) as usize] += u64::from(count);
        self.floor_requests[(to - 1) as usize] += u64::from(count);
        self.total_requests += u64::from(count);
    }

    /// Share of all requests that fell in `hour`, as a percentage.
    pub fn hourly_share(&self, hour: Hour) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        self.hourly_requests[hour % 24] as f64 / self.total_requests as f64 * 100.0
    }

    /// Share of all requests inside one named peak window.
    pub fn peak_share(&self, start: Hour, end: Hour) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        let in_window: u64 = (start..end).map(|h| self.hourly_requests[h % 24]).sum();
        in_window as f64 / self.total_requests as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_counts_both_floors_and_the_hour() {
        let mut stats = Statistics::default();
        stats.record_submission(1, 5, 3, 7);
        assert_eq!(stats.total_requests, 3);
        assert_eq!(stats.floor_requests[0], 3);
        assert_eq!(stats.floor_requests[4], 3);
        assert_eq!(stats.hourly_requests[7], 3);
    }

    #[test]
    fn shares_are_zero_without_requests() {
        let stats = Statistics::default();
        assert_eq!(stats.hourly_share(7), 0.0);
        assert_eq!(stats.peak_share(6, 8), 0.0);
    }

    #[test]
    fn peak_share_sums_window_hours() {
        let mut stats = Statistics::default();
        stats.record_submission(1, 5, 1, 6);
        stats.record_submission(1, 5, 1, 7);
        stats.record_submission(1, 5, 2, 12);
        assert!((stats.peak_share(6, 8) - 50.0).abs() < 1e-9);
    }
}
