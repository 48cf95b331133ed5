//! Point-in-time status capture for reporting collaborators.

use crate::{
    elevator::{Elevator, ElevatorState},
    types::{Floor, SimTime},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevatorStatus {
    pub floor: Floor,
    pub load: usize,
    pub state: ElevatorState,
}

impl From<&Elevator> for ElevatorStatus {
    fn from(car: &Elevator) -> Self {
        Self {
            floor: car.current_floor(),
            load: car.load(),
            state: car.state(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    /// Simulation clock, sim seconds.
    pub time: SimTime,
    pub elevators: Vec<ElevatorStatus>,
}

impl SystemStatus {
    /// Clock rendered as HH:MM:SS of the simulated day.
    pub fn clock_display(&self) -> String {
        let total = self.time.max(0.0) as u64;
        let hours = (total / 3600) % 24;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
