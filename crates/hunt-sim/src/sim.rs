//! The `Sim` struct and its tick loop.

use tracing::{debug, info};

use hunt_agent::Agent;
use hunt_behavior::{process_captures, update_predator, update_prey, BehaviorContext, CaptureOutcome};
use hunt_core::{BehaviorParams, SimConfig, SimRng, Tick};
use hunt_mobility::StuckDetector;
use hunt_spatial::{GridWorld, SpatialIndex};

use crate::{NoopObserver, SimObserver};

// ── Reports ───────────────────────────────────────────────────────────────────

/// Everything the capture passes of one tick produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:     Tick,
    pub captures: CaptureOutcome,
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks actually simulated.
    pub ticks:          u64,
    pub captures:       usize,
    pub evasions:       usize,
    pub prey_remaining: usize,
}

impl RunSummary {
    pub fn all_captured(&self) -> bool {
        self.prey_remaining == 0
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The reference driver.
///
/// Owns the world, both agent lists, the shared RNG and the stuck table, and
/// calls the behavior operations in the fixed order documented at the crate
/// root.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: SpatialIndex = GridWorld> {
    pub config:    SimConfig,
    pub params:    BehaviorParams,
    pub world:     W,
    pub predators: Vec<Agent>,
    /// Shrinks as prey are captured.
    pub prey:      Vec<Agent>,
    pub rng:       SimRng,
    pub stuck:     StuckDetector,
    /// The next tick to run.
    pub tick:      Tick,

    captures: usize,
    evasions: usize,
}

impl<W: SpatialIndex> Sim<W> {
    pub(crate) fn new(
        config:    SimConfig,
        params:    BehaviorParams,
        world:     W,
        predators: Vec<Agent>,
        prey:      Vec<Agent>,
    ) -> Self {
        Self {
            rng:      SimRng::new(config.seed),
            stuck:    StuckDetector::new(params.stuck),
            tick:     Tick::ZERO,
            captures: 0,
            evasions: 0,
            config,
            params,
            world,
            predators,
            prey,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// `true` once every prey is gone or the tick limit is reached.
    pub fn is_finished(&self) -> bool {
        self.prey.is_empty() || self.tick >= self.config.end_tick()
    }

    /// Run until finished, then report.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        info!(
            predators = self.predators.len(),
            prey = self.prey.len(),
            seed = self.config.seed,
            max_ticks = self.config.max_ticks,
            "simulation start"
        );
        while !self.is_finished() {
            self.step_observed(observer);
        }
        let summary = self.summary();
        info!(
            ticks = summary.ticks,
            captures = summary.captures,
            evasions = summary.evasions,
            prey_remaining = summary.prey_remaining,
            "simulation end"
        );
        observer.on_sim_end(&summary);
        summary
    }

    /// Run at most `n` ticks, stopping early if the run finishes.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.is_finished() {
                break;
            }
            self.step_observed(observer);
        }
    }

    /// Advance one tick without an observer.
    pub fn step(&mut self) -> TickReport {
        self.step_observed(&mut NoopObserver)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks:          self.tick.0,
            captures:       self.captures,
            evasions:       self.evasions,
            prey_remaining: self.prey.len(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.tick;
        observer.on_tick_start(now);

        let ctx = BehaviorContext::new(&self.world, &self.params);
        let mut report = TickReport { tick: now, ..TickReport::default() };

        // ── Predators, each followed by a capture pass ────────────────────
        for i in 0..self.predators.len() {
            if self.prey.is_empty() {
                break;
            }
            update_predator(&mut self.predators[i], &self.prey, &ctx, &mut self.stuck, &mut self.rng);
            let outcome = process_captures(&mut self.predators, &mut self.prey, &ctx, &mut self.rng);
            if !outcome.is_empty() {
                observer.on_captures(now, &outcome);
                report.captures.merge(outcome);
            }
        }

        // ── Prey, then one final pass ─────────────────────────────────────
        if !self.prey.is_empty() {
            for j in 0..self.prey.len() {
                update_prey(&mut self.prey[j], &self.predators, &ctx, &mut self.rng);
            }
            let outcome = process_captures(&mut self.predators, &mut self.prey, &ctx, &mut self.rng);
            if !outcome.is_empty() {
                observer.on_captures(now, &outcome);
                report.captures.merge(outcome);
            }
        }

        self.captures += report.captures.captures;
        self.evasions += report.captures.evasions.len();
        if !report.captures.is_empty() {
            debug!(
                tick = %now,
                captures = report.captures.captures,
                evasions = report.captures.evasions.len(),
                remaining = self.prey.len(),
                "tick summary"
            );
        }

        self.tick = now.next();
        observer.on_tick_end(now, &self.predators, &self.prey);
        report
    }
}
