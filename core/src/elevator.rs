//! The elevator state machine.
//!
//! Each car owns its full physical state: floor, direction, onboard
//! passengers and the two timers (idle and per-floor movement). The movement
//! accumulator is per car — cars advance on independent cadences from the
//! moment they start moving.
//!
//! Only the dispatcher calls the mutating methods.

use crate::{
    config::{FLOOR_COUNT, MAX_CAPACITY, SimConfig},
    passenger::Passenger,
    types::{Floor, SimTime},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevatorState {
    Idle,
    MovingUp,
    MovingDown,
    /// Doors open after a delivery. Not advanced by elapsed time; returns to
    /// Idle at the start of the car's next update.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Elevator {
    current_floor: Floor,
    capacity:      usize,
    onboard:       Vec<Passenger>,
    state:         ElevatorState,
    idle_timer:    SimTime,
    move_timer:    SimTime,
}

impl Default for Elevator {
    fn default() -> Self {
        Self::new()
    }
}

impl Elevator {
    pub fn new() -> Self {
        Self {
            current_floor: 1,
            capacity:      MAX_CAPACITY,
            onboard:       Vec::new(),
            state:         ElevatorState::Idle,
            idle_timer:    0.0,
            move_timer:    0.0,
        }
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn load(&self) -> usize {
        self.onboard.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn state(&self) -> ElevatorState {
        self.state
    }

    /// Set the travel state. Any transition to a non-Idle state resets the
    /// idle timer.
    pub fn set_state(&mut self, new_state: ElevatorState) {
        self.state = new_state;
        if self.state != ElevatorState::Idle {
            self.idle_timer = 0.0;
        }
    }

    /// Take a passenger onboard. Fails (returns false) at capacity; the
    /// caller must not advance the queue past the passenger on failure.
    pub fn board(&mut self, passenger: Passenger) -> bool {
        if self.onboard.len() >= self.capacity {
            return false;
        }
        self.onboard.push(passenger);
        true
    }

    /// Remove every onboard passenger whose target is `floor`. Returns how
    /// many got off.
    pub fn disembark(&mut self, floor: Floor) -> usize {
        let before = self.onboard.len();
        self.onboard.retain(|p| p.target_floor != floor);
        before - self.onboard.len()
    }

    /// Whether any onboard passenger wants out at `floor`.
    pub fn has_stop_request(&self, floor: Floor) -> bool {
        self.onboard.iter().any(|p| p.target_floor == floor)
    }

    /// Advance the idle/stopped bookkeeping by `delta` seconds.
    ///
    /// A Stopped car returns to Idle here (doors closed since last tick).
    /// An Idle car accumulates idle time; crossing the idle threshold away
    /// from the ground floor sends it down. The idle timer resets at the
    /// threshold whether or not the car moves.
    pub fn update(&mut self, delta: SimTime, config: &SimConfig) {
        if self.state == ElevatorState::Stopped {
            self.set_state(ElevatorState::Idle);
        }
        if self.state == ElevatorState::Idle {
            self.idle_timer += delta;
            if self.idle_timer >= config.idle_max_time {
                if self.current_floor != 1 {
                    self.set_state(ElevatorState::MovingDown);
                }
                self.idle_timer = 0.0;
            }
        }
    }

    /// Advance physical movement by `delta` seconds: one floor per
    /// `floor_time` of accumulated moving time, clamped to the building.
    /// Arriving at a floor some onboard passenger wants stops the car and
    /// lets them off in the same tick.
    pub fn update_movement(&mut self, delta: SimTime, config: &SimConfig) -> Option<(Floor, usize)> {
        match self.state {
            ElevatorState::MovingUp | ElevatorState::MovingDown => {}
            _ => {
                self.move_timer = 0.0;
                return None;
            }
        }

        self.move_timer += delta;
        if self.move_timer < config.floor_time {
            return None;
        }
        self.move_timer = 0.0;
        self.step();

        if self.has_stop_request(self.current_floor) {
            self.set_state(ElevatorState::Stopped);
            let floor = self.current_floor;
            let delivered = self.disembark(floor);
            log::debug!("car stopped at floor {floor}, {delivered} out");
            return Some((floor, delivered));
        }

        // An empty car pinned against a boundary has nowhere left to go;
        // settle to Idle so it can be matched again.
        let at_boundary = (self.state == ElevatorState::MovingDown && self.current_floor == 1)
            || (self.state == ElevatorState::MovingUp && self.current_floor == FLOOR_COUNT);
        if at_boundary && self.onboard.is_empty() {
            self.set_state(ElevatorState::Idle);
        }
        None
    }

    /// Move one floor in the current direction, never past the building
    /// bounds.
    fn step(&mut self) {
        match self.state {
            ElevatorState::MovingUp => {
                if self.current_floor < FLOOR_COUNT {
                    self.current_floor += 1;
                }
            }
            ElevatorState::MovingDown => {
                if self.current_floor > 1 {
                    self.current_floor -= 1;
                }
            }
            _ => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn place_at(floor: Floor, state: ElevatorState) -> Self {
        let mut car = Self::new();
        car.current_floor = floor;
        car.state = state;
        car
    }
}
