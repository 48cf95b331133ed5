//! Dispatch strategies: which car serves which passenger.
//!
//! Selection is a pure function of (passenger, fleet state) → fleet index,
//! switchable at runtime. All strategies share the same eligibility filter
//! and the same distance metric; SCAN and LOOK only narrow the candidate set
//! and fall back to NEAREST_FIRST when the narrowing leaves nothing.
//!
//! `None` means "no assignment possible right now" — the caller keeps the
//! passenger queued. It is a sentinel, not an error.

use crate::{
    elevator::{Elevator, ElevatorState},
    passenger::Passenger,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    NearestFirst,
    Scan,
    Look,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NearestFirst => "nearest_first",
            Self::Scan => "scan",
            Self::Look => "look",
        }
    }

    /// Pick the fleet index that should serve `passenger`, if any.
    pub fn select(&self, fleet: &[Elevator], passenger: &Passenger) -> Option<usize> {
        match self {
            Self::NearestFirst => find_nearest(fleet, passenger),
            Self::Scan => find_scan(fleet, passenger),
            Self::Look => find_look(fleet, passenger),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" | "nearest_first" => Ok(Self::NearestFirst),
            "scan" => Ok(Self::Scan),
            "look" => Ok(Self::Look),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// Capacity and directional-compatibility filter shared by all strategies.
pub fn is_available(car: &Elevator, passenger: &Passenger) -> bool {
    if car.load() >= car.capacity() {
        return false;
    }
    match car.state() {
        ElevatorState::Idle => true,
        ElevatorState::MovingUp => passenger.target_floor > car.current_floor(),
        ElevatorState::MovingDown => passenger.target_floor < car.current_floor(),
        ElevatorState::Stopped => false,
    }
}

fn distance(car: &Elevator, passenger: &Passenger) -> i32 {
    (car.current_floor() - passenger.source_floor).abs()
}

/// Nearest eligible car by floor distance; ties go to the lower fleet index.
fn find_nearest(fleet: &[Elevator], passenger: &Passenger) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, car) in fleet.iter().enumerate() {
        if !is_available(car, passenger) {
            continue;
        }
        let dist = distance(car, passenger);
        if best.map_or(true, |(_, b)| dist < b) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| index)
}

/// SCAN: prefer cars already sweeping toward the passenger's target floor;
/// fall back to nearest-first over all eligible cars.
fn find_scan(fleet: &[Elevator], passenger: &Passenger) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, car) in fleet.iter().enumerate() {
        if !is_available(car, passenger) {
            continue;
        }
        let sweeping = match car.state() {
            ElevatorState::MovingUp => passenger.target_floor > car.current_floor(),
            ElevatorState::MovingDown => passenger.target_floor < car.current_floor(),
            _ => false,
        };
        if !sweeping {
            continue;
        }
        let dist = distance(car, passenger);
        if best.map_or(true, |(_, b)| dist < b) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| index)
        .or_else(|| find_nearest(fleet, passenger))
}

/// LOOK: prefer cars whose direction of travel will pass the passenger's
/// source floor before reversing; same nearest-first fallback.
fn find_look(fleet: &[Elevator], passenger: &Passenger) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, car) in fleet.iter().enumerate() {
        if !is_available(car, passenger) {
            continue;
        }
        let passes_source = match car.state() {
            ElevatorState::MovingUp => passenger.source_floor >= car.current_floor(),
            ElevatorState::MovingDown => passenger.source_floor <= car.current_floor(),
            _ => false,
        };
        if !passes_source {
            continue;
        }
        let dist = distance(car, passenger);
        if best.map_or(true, |(_, b)| dist < b) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| index)
        .or_else(|| find_nearest(fleet, passenger))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider(from: i32, to: i32) -> Passenger {
        Passenger::new(from, to, 0.0, 60.0)
    }

    #[test]
    fn stopped_cars_are_never_eligible() {
        let car = Elevator::place_at(5, ElevatorState::Stopped);
        assert!(!is_available(&car, &rider(5, 9)));
    }

    #[test]
    fn moving_cars_filter_on_target_floor() {
        let up = Elevator::place_at(4, ElevatorState::MovingUp);
        assert!(is_available(&up, &rider(5, 9)));
        assert!(!is_available(&up, &rider(5, 2)));

        let down = Elevator::place_at(8, ElevatorState::MovingDown);
        assert!(is_available(&down, &rider(5, 2)));
        assert!(!is_available(&down, &rider(5, 9)));
    }

    #[test]
    fn nearest_breaks_ties_on_lower_index() {
        // Both cars sit 2 floors away from the source at floor 5.
        let fleet = vec![
            Elevator::place_at(3, ElevatorState::Idle),
            Elevator::place_at(7, ElevatorState::Idle),
        ];
        assert_eq!(Strategy::NearestFirst.select(&fleet, &rider(5, 9)), Some(0));
    }

    #[test]
    fn scan_and_look_fall_back_to_nearest_on_idle_fleet() {
        let fleet = vec![
            Elevator::place_at(10, ElevatorState::Idle),
            Elevator::place_at(4, ElevatorState::Idle),
            Elevator::place_at(6, ElevatorState::Idle),
        ];
        let passenger = rider(5, 12);
        let nearest = Strategy::NearestFirst.select(&fleet, &passenger);
        assert_eq!(nearest, Some(1));
        assert_eq!(Strategy::Scan.select(&fleet, &passenger), nearest);
        assert_eq!(Strategy::Look.select(&fleet, &passenger), nearest);
    }

    #[test]
    fn scan_prefers_a_sweeping_car_over_a_closer_idle_one() {
        let fleet = vec![
            Elevator::place_at(5, ElevatorState::Idle),
            Elevator::place_at(2, ElevatorState::MovingUp),
        ];
        // Target 9 is above car 1; SCAN takes the sweeper despite distance.
        assert_eq!(Strategy::Scan.select(&fleet, &rider(5, 9)), Some(1));
        // NEAREST_FIRST would take the co-located idle car.
        assert_eq!(Strategy::NearestFirst.select(&fleet, &rider(5, 9)), Some(0));
    }

    #[test]
    fn look_requires_the_source_to_lie_ahead() {
        let fleet = vec![
            // Moving up from 7: already past source floor 5.
            Elevator::place_at(7, ElevatorState::MovingUp),
            // Moving up from 3: will pass floor 5.
            Elevator::place_at(3, ElevatorState::MovingUp),
        ];
        assert_eq!(Strategy::Look.select(&fleet, &rider(5, 9)), Some(1));
    }

    #[test]
    fn no_eligible_car_yields_no_assignment() {
        let fleet = vec![
            Elevator::place_at(5, ElevatorState::Stopped),
            Elevator::place_at(2, ElevatorState::Stopped),
        ];
        let passenger = rider(5, 9);
        assert_eq!(Strategy::NearestFirst.select(&fleet, &passenger), None);
        assert_eq!(Strategy::Scan.select(&fleet, &passenger), None);
        assert_eq!(Strategy::Look.select(&fleet, &passenger), None);
    }
}
