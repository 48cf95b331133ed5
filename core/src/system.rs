//! The dispatcher — owns the fleet, the waiting queue, the clock, the
//! statistics and the active strategy.
//!
//! TICK ORDER (fixed, never reordered):
//!   1. Advance every car (idle bookkeeping, then movement).
//!   2. One queue pass: head-only timeout eviction, then head-only matching
//!      against idle cars.
//!   3. Statistics update.
//!
//! RULES:
//!   - No other component mutates cars, the queue or the counters.
//!   - Timeout eviction and idle matching only ever inspect the queue head.
//!     A timed-out passenger buried behind a valid head stays queued until
//!     it becomes the head.

use crate::{
    config::{ELEVATOR_COUNT, FLOOR_COUNT, SimConfig},
    dispatch::Strategy,
    elevator::{Elevator, ElevatorState},
    error::SimResult,
    event::{EventSink, LogSink, SimEvent},
    generator::{Request, RequestGenerator},
    passenger::Passenger,
    script,
    stats::Statistics,
    status::{ElevatorStatus, SystemStatus},
    types::{self, Floor, SimTime},
};
use std::collections::VecDeque;
use std::path::Path;

pub struct ElevatorSystem {
    elevators:          Vec<Elevator>,
    waiting_passengers: VecDeque<Passenger>,
    current_time:       SimTime,
    config:             SimConfig,
    stats:              Statistics,
    strategy:           Strategy,
    sink:               Box<dyn EventSink>,
}

impl Default for ElevatorSystem {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl ElevatorSystem {
    /// A system with the default fleet, recording events through the log
    /// facade.
    pub fn new(config: SimConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: SimConfig, sink: Box<dyn EventSink>) -> Self {
        Self {
            elevators: (0..ELEVATOR_COUNT).map(|_| Elevator::new()).collect(),
            waiting_passengers: VecDeque::new(),
            current_time: 0.0,
            config,
            stats: Statistics::default(),
            strategy: Strategy::NearestFirst,
            sink,
        }
    }

    /// Reset the clock and drain the queue. The fleet keeps its positions —
    /// this is the light restart, `reset()` is the full one.
    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.waiting_passengers.clear();
        self.sink.record(&SimEvent::SimulationStarted);
    }

    /// Rebuild the fleet at floor 1/Idle and clear every counter, the queue
    /// and the clock.
    pub fn reset(&mut self) {
        self.elevators = (0..ELEVATOR_COUNT).map(|_| Elevator::new()).collect();
        self.waiting_passengers.clear();
        self.current_time = 0.0;
        self.stats.reset();
        self.sink.record(&SimEvent::SystemReset);
    }

    /// Advance the simulation by `delta` simulated seconds. Must be called
    /// with non-negative deltas.
    pub fn update(&mut self, delta: SimTime) {
        self.current_time += delta;

        for (index, car) in self.elevators.iter_mut().enumerate() {
            car.update(delta, &self.config);
            if let Some((floor, count)) = car.update_movement(delta, &self.config) {
                self.sink.record(&SimEvent::PassengersDelivered {
                    elevator: index,
                    floor,
                    count,
                });
            }
        }

        self.process_waiting_passengers();
        self.update_statistics();
    }

    /// Enqueue `count` identical passengers travelling `from` → `to` at
    /// `time_hours` (hours of day). Demand counters reflect submission, not
    /// eventual service.
    pub fn add_manual_request(&mut self, from: Floor, to: Floor, count: u32, time_hours: f64) {
        if !(1..=FLOOR_COUNT).contains(&from) || !(1..=FLOOR_COUNT).contains(&to) {
            log::warn!("request outside the building ignored: {from} -> {to}");
            return;
        }

        let hour = (time_hours as i64).rem_euclid(24) as usize;
        self.stats.record_submission(from, to, count, hour);

        let request_time = types::hours_to_seconds(time_hours);
        for _ in 0..count {
            self.waiting_passengers.push_back(Passenger::new(
                from,
                to,
                request_time,
                self.config.max_wait_time,
            ));
        }

        self.sink.record(&SimEvent::RequestSubmitted {
            from,
            to,
            count,
            time: request_time,
        });
    }

    /// Generate and enqueue one simulated day of weighted random requests.
    pub fn load_random_requests(&mut self, seed: u64) {
        let requests = RequestGenerator::new(seed).generate(&self.config);
        self.apply_requests(&requests);
    }

    /// Load a request script (`HH:MM:SS FROM TO COUNT` per line). Malformed
    /// lines are skipped with a diagnostic. Returns how many requests were
    /// applied.
    pub fn load_file_requests(&mut self, path: &Path) -> SimResult<usize> {
        let parsed = script::parse_script_file(path)?;
        if parsed.skipped_lines > 0 {
            log::warn!(
                "{} malformed line(s) skipped in {}",
                parsed.skipped_lines,
                path.display()
            );
        }
        self.apply_requests(&parsed.requests);
        Ok(parsed.requests.len())
    }

    fn apply_requests(&mut self, requests: &[Request]) {
        for request in requests {
            self.add_manual_request(request.from, request.to, request.count, request.time_hours);
        }
    }

    /// Secondary dispatch entry point: pick a car for `passenger` under the
    /// active strategy and board it. `None` means no eligible car right now;
    /// the caller keeps the passenger unassigned.
    pub fn assign_elevator(&mut self, passenger: &Passenger) -> Option<usize> {
        let index = self.strategy.select(&self.elevators, passenger)?;
        let car = &mut self.elevators[index];
        if !car.board(passenger.clone()) {
            return None;
        }
        if car.state() == ElevatorState::Idle {
            let direction = if passenger.target_floor > car.current_floor() {
                ElevatorState::MovingUp
            } else {
                ElevatorState::MovingDown
            };
            car.set_state(direction);
        }
        self.sink.record(&SimEvent::PassengerBoarded {
            elevator: index,
            floor: passenger.source_floor,
            target: passenger.target_floor,
        });
        Some(index)
    }

    /// One queue pass. Head-only by contract — see the module header.
    fn process_waiting_passengers(&mut self) {
        // Evict timed-out heads, then charge the surviving head's wait time.
        while let Some(head) = self.waiting_passengers.front() {
            if !head.timed_out(self.current_time) {
                self.stats.total_wait_time += self.current_time - head.request_time;
                break;
            }
            if let Some(expired) = self.waiting_passengers.pop_front() {
                self.stats.timeout_requests += 1;
                self.sink.record(&SimEvent::PassengerTimedOut {
                    from: expired.source_floor,
                    to: expired.target_floor,
                    waited: self.current_time - expired.request_time,
                });
            }
        }

        // Idle cars co-located with the head pick it up. One head per pass;
        // an idle car elsewhere stays idle this tick even if a buried
        // passenger could board it.
        for (index, car) in self.elevators.iter_mut().enumerate() {
            if car.state() != ElevatorState::Idle {
                continue;
            }
            let Some(head) = self.waiting_passengers.front() else {
                break;
            };
            if car.current_floor() != head.source_floor {
                continue;
            }
            if !car.board(head.clone()) {
                continue;
            }
            if let Some(boarded) = self.waiting_passengers.pop_front() {
                let direction = if boarded.target_floor > car.current_floor() {
                    ElevatorState::MovingUp
                } else {
                    ElevatorState::MovingDown
                };
                car.set_state(direction);
                self.sink.record(&SimEvent::PassengerBoarded {
                    elevator: index,
                    floor: boarded.source_floor,
                    target: boarded.target_floor,
                });
            }
        }
    }

    fn update_statistics(&mut self) {
        let mut active = 0;
        for car in &self.elevators {
            if car.state() != ElevatorState::Idle {
                self.stats.floor_requests[(car.current_floor() - 1) as usize] += 1;
                active += 1;
            }
        }
        if active > 0 {
            self.stats.hourly_requests[types::hour_of_day(self.current_time)] += 1;
        }
    }

    // ── Configuration ──────────────────────────────────────────────

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        log::info!("dispatch strategy changed to {}", strategy.name());
        self.sink.record(&SimEvent::StrategyChanged { strategy });
    }

    pub fn set_floor_time(&mut self, time: SimTime) {
        self.config.set_floor_time(time);
    }

    pub fn set_idle_max_time(&mut self, time: SimTime) {
        self.config.set_idle_max_time(time);
    }

    pub fn set_max_wait_time(&mut self, time: SimTime) {
        self.config.set_max_wait_time(time);
    }

    pub fn set_day_simulation_time(&mut self, hours: f64) {
        self.config.set_day_simulation_time(hours);
    }

    pub fn set_request_counts(&mut self, peak: i64, normal: i64) {
        self.config.set_request_counts(peak, normal);
    }

    // ── Read accessors (pure) ──────────────────────────────────────

    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting_passengers.len()
    }

    pub fn status(&self) -> SystemStatus {
        SystemStatus {
            time: self.current_time,
            elevators: self.elevators.iter().map(ElevatorStatus::from).collect(),
        }
    }
}
