//! Detecting and freeing immobilized predators.
//!
//! Path following and random-walk relaxation can pin a predator in place or
//! bounce it between two cells forever (a doorway it keeps replanning
//! through, a wall pocket).  The detector keeps a short position history per
//! predator and relocates any predator that has made no progress for more
//! than `threshold` consecutive observations.
//!
//! # Detection
//!
//! With `h[0]` the newest recorded position:
//!
//! | Pattern     | Condition                                      |
//! |-------------|------------------------------------------------|
//! | stationary  | `h[0] == h[1]`                                 |
//! | oscillating | not stationary, `h[0] == h[2] && h[1] == h[3]` |
//!
//! Either pattern increments the counter; anything else resets it.  The
//! behavior state plays no part, so a predator resting in place for too long
//! is relocated like any other.
//!
//! # Recovery
//!
//! Once the counter exceeds the threshold the predator is forced back to
//! `Wandering` with no path and no trail, then relocation is tried with a
//! widening search:
//!
//! | Counter            | Candidates (first walkable wins)                     |
//! |--------------------|------------------------------------------------------|
//! | > threshold        | 8 unit directions × base speed, shuffled             |
//! | > threshold + 2    | `(±3,0) (0,±3) (±2,±2)`, shuffled                    |
//! | > threshold + 5    | every cell of the square of `wide_search_radius`, row by row |
//!
//! A failed recovery leaves the counter high so the next tick escalates.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use hunt_agent::{Agent, BehaviorState};
use hunt_core::{AgentId, Cell, SimRng, StuckParams, COMPASS};
use hunt_spatial::SpatialIndex;

const LONG_JUMPS: [Cell; 8] = [
    Cell::new(3, 0),
    Cell::new(-3, 0),
    Cell::new(0, 3),
    Cell::new(0, -3),
    Cell::new(2, 2),
    Cell::new(-2, -2),
    Cell::new(2, -2),
    Cell::new(-2, 2),
];

/// Result of one [`StuckDetector::observe`] call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StuckOutcome {
    /// Making progress, or not tracked.
    NotStuck,
    /// Teleported; the caller skips the rest of this predator's tick.
    Recovered { from: Cell, to: Cell },
    /// Stuck, reset to `Wandering`, but every candidate cell was blocked.
    StillStuck,
}

#[derive(Clone, Debug, Default)]
struct Track {
    /// Newest first, at most `history_len` entries.
    history: VecDeque<Cell>,
    counter: u32,
}

impl Track {
    fn record(&mut self, cell: Cell, cap: usize) {
        self.history.push_front(cell);
        self.history.truncate(cap);
    }

    fn is_stationary(&self) -> bool {
        matches!((self.history.front(), self.history.get(1)), (Some(a), Some(b)) if a == b)
    }

    fn is_oscillating(&self) -> bool {
        let h = &self.history;
        h.len() >= 4 && h[0] == h[2] && h[1] == h[3]
    }

    fn reset_to(&mut self, cell: Cell, cap: usize) {
        self.history.clear();
        self.history.extend(std::iter::repeat_n(cell, cap));
        self.counter = 0;
    }
}

/// Per-predator position histories, keyed by identity.
///
/// Persists across ticks.  Holds at most `max_tracked` predators; later ones
/// are never considered stuck.
#[derive(Clone, Debug)]
pub struct StuckDetector {
    params: StuckParams,
    tracks: FxHashMap<AgentId, Track>,
}

impl StuckDetector {
    pub fn new(params: StuckParams) -> Self {
        Self { params, tracks: FxHashMap::default() }
    }

    /// Current stuck counter for `id` (0 if untracked).
    pub fn counter(&self, id: AgentId) -> u32 {
        self.tracks.get(&id).map_or(0, |t| t.counter)
    }

    pub fn tracked(&self) -> usize {
        self.tracks.len()
    }

    /// Record the predator's current position and recover it if it has been
    /// stuck for too long.
    pub fn observe<W: SpatialIndex + ?Sized>(
        &mut self,
        predator: &mut Agent,
        world:    &W,
        rng:      &mut SimRng,
    ) -> StuckOutcome {
        let cap = self.params.history_len;
        let threshold = self.params.threshold;
        if !self.tracks.contains_key(&predator.id) && self.tracks.len() >= self.params.max_tracked {
            return StuckOutcome::NotStuck;
        }
        let track = self.tracks.entry(predator.id).or_default();

        let here = predator.position();
        track.record(here, cap);

        if track.is_stationary() || track.is_oscillating() {
            track.counter += 1;
        } else {
            track.counter = 0;
        }
        if track.counter <= threshold {
            return StuckOutcome::NotStuck;
        }

        predator.enter(BehaviorState::Wandering);
        predator.motion.clear_path();
        if let Some(p) = predator.predator_mut() {
            p.wander_trail.clear();
        }

        let counter = track.counter;
        match Self::relocate(&self.params, here, predator.motion.speed, counter, world, rng) {
            Some(to) => {
                predator.motion.position = to;
                track.reset_to(to, cap);
                debug!(agent = %predator.id, from = %here, %to, counter, "stuck predator relocated");
                StuckOutcome::Recovered { from: here, to }
            }
            None => {
                trace!(agent = %predator.id, at = %here, counter, "stuck predator has no escape yet");
                StuckOutcome::StillStuck
            }
        }
    }

    fn relocate<W: SpatialIndex + ?Sized>(
        params:  &StuckParams,
        here:    Cell,
        speed:   i32,
        counter: u32,
        world:   &W,
        rng:     &mut SimRng,
    ) -> Option<Cell> {
        let threshold = params.threshold;

        let mut near = COMPASS;
        rng.shuffle(&mut near);
        if let Some(c) = near.iter().map(|&d| here.step(d, speed)).find(|&c| world.is_walkable(c)) {
            return Some(c);
        }

        if counter > threshold + 2 {
            let mut far = LONG_JUMPS;
            rng.shuffle(&mut far);
            if let Some(c) = far.iter().map(|&d| here + d).find(|&c| world.is_walkable(c)) {
                return Some(c);
            }
        }

        if counter > threshold + 5 {
            let r = params.wide_search_radius;
            return (-r..=r)
                .flat_map(|dy| (-r..=r).map(move |dx| Cell::new(dx, dy)))
                .filter(|d| !d.is_zero())
                .map(|d| here + d)
                .find(|&c| world.is_walkable(c));
        }

        None
    }
}
