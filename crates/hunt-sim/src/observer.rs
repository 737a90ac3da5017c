//! Observer hooks for presentation layers.

use hunt_agent::Agent;
use hunt_behavior::CaptureOutcome;
use hunt_core::Tick;

use crate::RunSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// Every method has a no-op default, so a renderer or logger overrides only
/// what it needs.
///
/// # Example: capture ticker
///
/// ```rust,ignore
/// struct Ticker;
///
/// impl SimObserver for Ticker {
///     fn on_captures(&mut self, tick: Tick, outcome: &CaptureOutcome) {
///         for e in &outcome.evasions {
///             println!("{tick}: {} at {}", e.message, e.position);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Before any agent acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// After a capture pass that captured or lost at least one prey.  Called
    /// up to once per predator plus once after the prey move.
    fn on_captures(&mut self, _tick: Tick, _outcome: &CaptureOutcome) {}

    /// After every agent has acted, with read-only access to both lists.
    fn on_tick_end(&mut self, _tick: Tick, _predators: &[Agent], _prey: &[Agent]) {}

    /// Once, after the last tick.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
