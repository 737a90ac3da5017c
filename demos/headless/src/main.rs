//! headless: a predator/prey chase on a small walled map, logged instead of
//! drawn.
//!
//! Three predators and six prey share a 60 x 20 arena with three safe zones
//! and a handful of fixed walls.  The run stops when every prey is caught or
//! after `MAX_STEPS` ticks (default 100 000).  Set `RUST_LOG=debug` to watch
//! state changes, or `RUST_LOG=trace` for path invalidations as well.

use std::env;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use hunt_agent::Agent;
use hunt_behavior::CaptureOutcome;
use hunt_core::{Cell, SimConfig, Tick};
use hunt_sim::{RunSummary, SimBuilder, SimObserver};
use hunt_spatial::{GridWorld, GridWorldBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:             i32 = 60;
const HEIGHT:            i32 = 20;
const DEFAULT_MAX_STEPS: u64 = 100_000;
const DEFAULT_SEED:      u64 = 42;

const SAFE_ZONES: [(i32, i32); 3] = [(10, 10), (50, 10), (30, 5)];
const PREDATORS:  [(i32, i32); 3] = [(10, 5), (30, 10), (50, 15)];
const PREY:       [(i32, i32); 6] = [(10, 10), (25, 10), (40, 10), (10, 15), (25, 15), (40, 15)];

// ── Map ───────────────────────────────────────────────────────────────────────

fn build_world() -> Result<GridWorld> {
    let ledge = (15..=20).map(|x| Cell::new(x, 7));
    let pillar = (3..=8).map(|y| Cell::new(35, y));
    let shelf = (28..=33).map(|x| Cell::new(x, 13));
    let block = [(45, 12), (46, 12), (45, 13), (46, 13), (20, 16), (21, 16), (20, 17)].map(Cell::from);

    let mut builder = GridWorldBuilder::new(WIDTH, HEIGHT)
        .border_walls()
        .obstacles(ledge.chain(pillar).chain(shelf).chain(block));
    for center in SAFE_ZONES {
        builder = builder.safe_zone(Cell::from(center));
    }
    Ok(builder.build()?)
}

// ── Environment ───────────────────────────────────────────────────────────────

fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default, "ignoring unparsable setting");
            default
        }),
        Err(_) => default,
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs captures and evasions as they happen.
struct CaptureLog {
    progress_every: u64,
}

impl SimObserver for CaptureLog {
    fn on_captures(&mut self, tick: Tick, outcome: &CaptureOutcome) {
        for id in &outcome.captured {
            info!(%tick, prey = %id, "prey captured");
        }
        for event in &outcome.evasions {
            info!(%tick, at = %event.position, "{}", event.message);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, _predators: &[Agent], prey: &[Agent]) {
        if self.progress_every > 0 && tick.0 > 0 && tick.0 % self.progress_every == 0 {
            info!(%tick, prey_remaining = prey.len(), "progress");
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        if summary.all_captured() {
            info!(ticks = summary.ticks, "all prey captured");
        } else {
            info!(ticks = summary.ticks, survivors = summary.prey_remaining, "step limit reached");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = SimConfig {
        seed:      env_u64("SEED", DEFAULT_SEED),
        max_ticks: env_u64("MAX_STEPS", DEFAULT_MAX_STEPS),
    };

    let mut sim = SimBuilder::new(build_world()?, config)
        .predators(PREDATORS.map(Cell::from))
        .prey_group(PREY.map(Cell::from))
        .build()?;

    let start = Instant::now();
    let summary = sim.run(&mut CaptureLog { progress_every: 1_000 });
    info!(
        ticks = summary.ticks,
        captures = summary.captures,
        evasions = summary.evasions,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}
