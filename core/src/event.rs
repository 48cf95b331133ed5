//! Domain events and the sink they flow through.
//!
//! The original wrote diagnostics through a lazily-initialized process-wide
//! logger. Here the dispatcher owns an injected `EventSink` instead; the
//! contract is the same minimal "record this happening". Variants are added
//! over time — never removed or reordered.

use crate::{
    dispatch::Strategy,
    types::{Floor, SimTime},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    SimulationStarted,
    SystemReset,
    RequestSubmitted {
        from: Floor,
        to: Floor,
        count: u32,
        time: SimTime,
    },
    PassengerBoarded {
        elevator: usize,
        floor: Floor,
        target: Floor,
    },
    PassengersDelivered {
        elevator: usize,
        floor: Floor,
        count: usize,
    },
    PassengerTimedOut {
        from: Floor,
        to: Floor,
        waited: SimTime,
    },
    StrategyChanged {
        strategy: Strategy,
    },
}

/// Where the dispatcher records domain events. Implementations must not
/// panic; a sink failure is not a simulation failure.
pub trait EventSink: Send {
    fn record(&mut self, event: &SimEvent);
}

/// Sink that forwards every event to the `log` facade as one JSON line.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: &SimEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => log::info!("{payload}"),
            Err(err) => log::warn!("unserializable event {event:?}: {err}"),
        }
    }
}

/// Sink that retains events in memory behind a shared handle. Used by tests
/// and by drivers that render event feeds.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<SimEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle onto the recorded events, valid after the sink itself has
    /// been moved into the dispatcher.
    pub fn handle(&self) -> Arc<Mutex<Vec<SimEvent>>> {
        Arc::clone(&self.events)
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &SimEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
