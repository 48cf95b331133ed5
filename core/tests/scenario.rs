//! The canonical single-delivery scenario and accessor guarantees.

use autolift_core::{ElevatorState, ElevatorSystem, SimConfig};

#[test]
fn one_request_is_delivered_by_exactly_one_car() {
    let mut system = ElevatorSystem::new(SimConfig::default());

    // 07:00, one rider from the ground floor to floor 5.
    system.add_manual_request(1, 5, 1, 7.0);
    assert_eq!(
        system.stats().total_requests, 1,
        "demand is counted at submission, not at service"
    );

    // Tick 1 boards the rider onto the first idle car at floor 1; four
    // floors at 5 s each follow.
    for _ in 0..21 {
        system.update(1.0);
    }

    let status = system.status();
    let arrived: Vec<_> = status
        .elevators
        .iter()
        .filter(|car| car.floor == 5)
        .collect();
    assert_eq!(arrived.len(), 1, "exactly one car serves the request");
    assert_eq!(arrived[0].state, ElevatorState::Stopped);
    assert_eq!(arrived[0].load, 0, "the rider disembarked on arrival");

    for car in status.elevators.iter().filter(|car| car.floor != 5) {
        assert_eq!(car.floor, 1);
        assert_eq!(car.state, ElevatorState::Idle);
    }

    assert_eq!(system.waiting_count(), 0);
    assert_eq!(system.stats().total_requests, 1);
}

#[test]
fn capacity_never_exceeded_and_floors_stay_in_bounds() {
    let mut system = ElevatorSystem::new(SimConfig::default());
    // Far more riders at the ground floor than one car can hold.
    system.add_manual_request(1, 14, 30, 0.0);

    for _ in 0..600 {
        system.update(1.0);
        for car in system.elevators() {
            assert!(car.load() <= car.capacity());
            assert!((1..=14).contains(&car.current_floor()));
        }
    }
}

#[test]
fn read_accessors_are_idempotent_between_updates() {
    let mut system = ElevatorSystem::new(SimConfig::default());
    system.add_manual_request(1, 9, 2, 6.0);
    for _ in 0..7 {
        system.update(1.0);
    }

    let status_a = system.status();
    let status_b = system.status();
    assert_eq!(status_a, status_b);

    let (total_a, timeout_a, time_a) = (
        system.stats().total_requests,
        system.stats().timeout_requests,
        system.current_time(),
    );
    let (total_b, timeout_b, time_b) = (
        system.stats().total_requests,
        system.stats().timeout_requests,
        system.current_time(),
    );
    assert_eq!(total_a, total_b);
    assert_eq!(timeout_a, timeout_b);
    assert_eq!(time_a, time_b);
}

#[test]
fn start_drains_the_queue_but_keeps_the_fleet() {
    let mut system = ElevatorSystem::new(SimConfig::default());
    system.add_manual_request(1, 5, 1, 0.0);
    // Board and move the car off the ground floor.
    for _ in 0..8 {
        system.update(1.0);
    }
    system.add_manual_request(2, 6, 1, 0.0);
    let floors_before: Vec<_> = system.elevators().iter().map(|c| c.current_floor()).collect();

    system.start();
    assert_eq!(system.current_time(), 0.0);
    assert_eq!(system.waiting_count(), 0);
    let floors_after: Vec<_> = system.elevators().iter().map(|c| c.current_floor()).collect();
    assert_eq!(floors_before, floors_after, "start() must not rebuild the fleet");

    system.reset();
    assert!(system.elevators().iter().all(|c| c.current_floor() == 1));
    assert!(system.elevators().iter().all(|c| c.state() == ElevatorState::Idle));
    assert_eq!(system.stats().total_requests, 0);
}
