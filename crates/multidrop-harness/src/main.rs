#![forbid(unsafe_code)]

//! Replay a multidrop scenario and print the resulting orders as JSON.
//!
//! # Running
//!
//! ```sh
//! cargo run -p multidrop-harness -- crates/multidrop-harness/scenarios/reorder.json
//! cat scenario.json | cargo run -p multidrop-harness
//! ```
//!
//! Diagnostics go to stderr, filtered by `MULTIDROP_LOG` (default `warn`):
//!
//! ```sh
//! MULTIDROP_LOG=multidrop_core=debug cargo run -p multidrop-harness -- scenario.json
//! ```

use std::io::{self, Write};
use std::path::Path;

use multidrop_harness::{Scenario, ScenarioError, replay};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("MULTIDROP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), ScenarioError> {
    let scenario = match std::env::args().nth(1) {
        Some(path) if path != "-" => Scenario::load(Path::new(&path))?,
        _ => Scenario::from_reader(io::stdin().lock())?,
    };
    tracing::info!(
        containers = scenario.containers.len(),
        events = scenario.events.len(),
        "replaying scenario"
    );

    let report = replay(&scenario)?;
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("scenario failed: {err}");
        std::process::exit(2);
    }
}
