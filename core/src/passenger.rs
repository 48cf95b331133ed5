//! A single travel request. Immutable once created.

use crate::types::{Floor, SimTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub source_floor: Floor,
    pub target_floor: Floor,
    /// Clock value at which the request was made, in sim seconds.
    pub request_time: SimTime,
    /// Absolute eviction deadline, captured at creation from the max-wait
    /// window in force at that moment. Later config changes do not apply
    /// retroactively to passengers already queued.
    pub deadline: SimTime,
}

impl Passenger {
    pub fn new(source_floor: Floor, target_floor: Floor, request_time: SimTime, max_wait: SimTime) -> Self {
        Self {
            source_floor,
            target_floor,
            request_time,
            deadline: request_time + max_wait,
        }
    }

    /// Whether the passenger has waited past the deadline at `now`.
    pub fn timed_out(&self, now: SimTime) -> bool {
        now > self.deadline
    }

    /// True when the ride goes up from where it starts.
    pub fn going_up(&self) -> bool {
        self.target_floor > self.source_floor
    }
}
