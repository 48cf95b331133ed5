//! lift-runner: headless driver for the autolift simulation engine.
//!
//! Usage:
//!   lift-runner --seed 12345 --strategy look
//!   lift-runner --script requests.txt --step 0.5
//!
//! Loads a request script or a seeded random request set, drives the engine
//! across one simulated day in fixed steps, then prints status and the usage
//! statistics.

use anyhow::{Context, Result};
use autolift_core::{
    stats::PEAK_PERIODS,
    types::SECONDS_PER_HOUR,
    ElevatorSystem, SimConfig, Strategy,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let step = parse_arg(&args, "--step", 1.0f64);
    let strategy: Strategy = str_arg(&args, "--strategy")
        .map(|s| s.parse().map_err(anyhow::Error::msg))
        .transpose()?
        .unwrap_or(Strategy::NearestFirst);
    let script = str_arg(&args, "--script");

    anyhow::ensure!(step > 0.0, "--step must be positive");

    let mut system = ElevatorSystem::new(SimConfig::default());
    system.set_strategy(strategy);

    match script {
        Some(path) => {
            let loaded = system
                .load_file_requests(Path::new(path))
                .with_context(|| format!("loading request script {path}"))?;
            log::info!("loaded {loaded} request(s) from {path}");
        }
        None => {
            system.load_random_requests(seed);
            log::info!("generated random requests with seed {seed}");
        }
    }

    system.start();
    let day_seconds = system.config().day_simulation_time * SECONDS_PER_HOUR;
    let mut elapsed = 0.0;
    while elapsed < day_seconds {
        system.update(step);
        elapsed += step;
    }

    print_status(&system);
    print_statistics(&system);
    Ok(())
}

fn print_status(system: &ElevatorSystem) {
    let status = system.status();
    println!("=== Fleet status at {} ===", status.clock_display());
    for (index, car) in status.elevators.iter().enumerate() {
        println!(
            "  car {}: floor {:>2}  load {:>2}  {:?}",
            index + 1,
            car.floor,
            car.load,
            car.state
        );
    }
    println!("  still waiting: {}", system.waiting_count());
}

fn print_statistics(system: &ElevatorSystem) {
    let stats = system.stats();
    println!("\n=== Usage statistics ===");
    println!("floor activity:");
    for (index, count) in stats.floor_requests.iter().enumerate() {
        println!("  floor {:>2}: {count}", index + 1);
    }
    println!("hourly request share:");
    for hour in 0..24 {
        println!("  {hour:02}:00-{:02}:00  {:5.1}%", hour + 1, stats.hourly_share(hour));
    }
    println!("peak windows:");
    for (label, start, end) in PEAK_PERIODS {
        println!(
            "  {label:<13} {start:02}:00-{end:02}:00  {:5.1}%",
            stats.peak_share(start, end)
        );
    }
    println!("total requests:    {}", stats.total_requests);
    println!("timed-out waiters: {}", stats.timeout_requests);
}

fn parse_arg<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == name)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}
