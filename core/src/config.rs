//! Simulation configuration.
//!
//! The original system kept these as process-wide mutable globals; here they
//! live in a `SimConfig` value owned by the dispatcher and mutated only
//! through its setters. The permissive contract stays: any positive value is
//! accepted at runtime, non-positive values are silently ignored.

use crate::types::SimTime;
use serde::{Deserialize, Serialize};

/// Floors in the building, 1..=FLOOR_COUNT.
pub const FLOOR_COUNT: i32 = 14;

/// Fleet size, fixed for the lifetime of the system.
pub const ELEVATOR_COUNT: usize = 4;

/// Riders one car can hold.
pub const MAX_CAPACITY: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seconds of accumulated tick time per one-floor move.
    pub floor_time: SimTime,
    /// Seconds an elevator may sit idle before returning to the ground floor.
    pub idle_max_time: SimTime,
    /// Seconds a passenger waits before being evicted from the queue.
    pub max_wait_time: SimTime,
    /// Length of the simulated day, in hours of day covered (scale knob).
    pub day_simulation_time: f64,
    /// Requests generated per peak window.
    pub peak_requests: u32,
    /// Requests generated across the normal windows.
    pub normal_requests: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floor_time:          5.0,
            idle_max_time:       10.0,
            max_wait_time:       60.0,
            day_simulation_time: 24.0,
            peak_requests:       100,
            normal_requests:     50,
        }
    }
}

impl SimConfig {
    pub fn set_floor_time(&mut self, time: SimTime) {
        if time > 0.0 {
            self.floor_time = time;
        }
    }

    pub fn set_idle_max_time(&mut self, time: SimTime) {
        if time > 0.0 {
            self.idle_max_time = time;
        }
    }

    pub fn set_max_wait_time(&mut self, time: SimTime) {
        if time > 0.0 {
            self.max_wait_time = time;
        }
    }

    pub fn set_day_simulation_time(&mut self, hours: f64) {
        if hours > 0.0 {
            self.day_simulation_time = hours;
        }
    }

    /// Update request volumes. Each count is applied independently and only
    /// when positive.
    pub fn set_request_counts(&mut self, peak: i64, normal: i64) {
        if peak > 0 {
            self.peak_requests = peak as u32;
        }
        if normal > 0 {
            self.normal_requests = normal as u32;
        }
    }
}
