//! Weighted random request generation for one simulated day.
//!
//! RULE: nothing in the simulation calls a platform RNG. The generator is
//! seeded explicitly, so a (seed, config) pair always produces the same
//! request set — request generation is reproducible in isolation.
//!
//! Four peak windows are directionally biased: morning and late-morning
//! traffic rises from the ground floor, lunch and evening traffic drains
//! back to it. Everything else is uniform background traffic across five
//! normal windows.

use crate::{
    config::{FLOOR_COUNT, SimConfig},
    types::Floor,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A bulk travel request: `count` riders from `from` to `to` at `time_hours`
/// (hours of day, fractional).
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub from: Floor,
    pub to: Floor,
    pub count: u32,
    pub time_hours: f64,
}

/// (start hour, end hour, up-peak) — up-peaks leave the ground floor,
/// down-peaks return to it.
const PEAK_WINDOWS: [(f64, f64, bool); 4] = [
    (6.0, 8.0, true),    // morning
    (11.0, 12.0, true),  // late morning
    (13.0, 14.0, false), // lunch
    (17.0, 18.0, false), // evening
];

/// Background-traffic windows between the peaks.
const NORMAL_WINDOWS: [(f64, f64); 5] = [
    (0.0, 6.0),
    (8.0, 11.0),
    (12.0, 13.0),
    (14.0, 17.0),
    (18.0, 24.0),
];

pub struct RequestGenerator {
    rng: Pcg64Mcg,
}

impl RequestGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Produce the full day's request set: every peak window at the
    /// configured peak volume, then the normal volume spread uniformly over
    /// the background windows.
    pub fn generate(&mut self, config: &SimConfig) -> Vec<Request> {
        let mut requests = Vec::new();
        for &(start, end, up_peak) in &PEAK_WINDOWS {
            self.peak_window(config.peak_requests, start, end, up_peak, &mut requests);
        }
        self.normal_traffic(config.normal_requests, &mut requests);
        requests
    }

    fn peak_window(&mut self, volume: u32, start: f64, end: f64, up_peak: bool, out: &mut Vec<Request>) {
        for _ in 0..volume {
            let time_hours = self.rng.gen_range(start..end);
            let count = self.rng.gen_range(1..=4);
            let floor = self.rng.gen_range(2..=FLOOR_COUNT);
            let (from, to) = if up_peak { (1, floor) } else { (floor, 1) };
            out.push(Request { from, to, count, time_hours });
        }
    }

    fn normal_traffic(&mut self, volume: u32, out: &mut Vec<Request>) {
        for _ in 0..volume {
            let (start, end) = NORMAL_WINDOWS[self.rng.gen_range(0..NORMAL_WINDOWS.len())];
            let time_hours = self.rng.gen_range(start..end);
            let from = self.rng.gen_range(1..=FLOOR_COUNT);
            let to = loop {
                let candidate = self.rng.gen_range(1..=FLOOR_COUNT);
                if candidate != from {
                    break candidate;
                }
            };
            let count = self.rng.gen_range(1..=3);
            out.push(Request { from, to, count, time_hours });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_requests() {
        let config = SimConfig::default();
        let a = RequestGenerator::new(99).generate(&config);
        let b = RequestGenerator::new(99).generate(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn peak_windows_are_directionally_biased() {
        let config = SimConfig::default();
        let requests = RequestGenerator::new(7).generate(&config);
        for request in &requests {
            let hour = request.time_hours;
            // Background windows exclude the peak hours, so any request in
            // a peak window came from the biased generator.
            if (6.0..8.0).contains(&hour) || (11.0..12.0).contains(&hour) {
                assert_eq!(request.from, 1, "up-peak rides start at ground");
            }
            if (13.0..14.0).contains(&hour) || (17.0..18.0).contains(&hour) {
                assert_eq!(request.to, 1, "down-peak rides end at ground");
            }
        }
    }

    #[test]
    fn volumes_follow_the_config() {
        let mut config = SimConfig::default();
        config.set_request_counts(10, 25);
        let requests = RequestGenerator::new(1).generate(&config);
        assert_eq!(requests.len(), 4 * 10 + 25);
    }
}
