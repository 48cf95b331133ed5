//! autolift-core: discrete-time multi-elevator dispatch simulation.
//!
//! One `ElevatorSystem` owns the whole simulation: the fleet, the waiting
//! queue, the clock, the statistics and the active dispatch strategy.
//! External drivers push requests in (`add_manual_request`, the loaders)
//! and call `update(delta)` repeatedly; everything else is read-only
//! accessors.
//!
//! RULES:
//!   - Only the dispatcher mutates elevators, the queue and the counters.
//!   - All randomness flows through a seeded generator — no platform RNG.
//!   - Domain happenings are recorded through the injected EventSink.

pub mod config;
pub mod dispatch;
pub mod elevator;
pub mod error;
pub mod event;
pub mod generator;
pub mod passenger;
pub mod script;
pub mod stats;
pub mod status;
pub mod system;
pub mod types;

pub use config::SimConfig;
pub use dispatch::Strategy;
pub use elevator::{Elevator, ElevatorState};
pub use error::{SimError, SimResult};
pub use event::{EventSink, LogSink, MemorySink, SimEvent};
pub use passenger::Passenger;
pub use system::ElevatorSystem;
