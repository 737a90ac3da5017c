//! The shared, explicitly threaded random source.
//!
//! # Determinism strategy
//!
//! Every random draw in a tick comes from one `SimRng` that the driver owns
//! and lends out by `&mut`: random-walk direction picks, stuck-recovery
//! shuffles, flee tie-breaks, evasion rolls and escape offsets alike.  There
//! is no global generator.  Given the same seed, the same starting agents and
//! the same agent order, a run replays bit-for-bit.
//!
//! The draw sequence is part of the observable behavior: an extra draw
//! anywhere in the per-tick path shifts every later outcome.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Simulation-wide deterministic RNG.  Not `Clone`: one run, one stream.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform roll in `[0, 1)`, used for probability checks.
    #[inline]
    pub fn roll(&mut self) -> f32 {
        self.0.r#gen()
    }

    /// Uniform integer in `[lo, hi]` (inclusive).
    #[inline]
    pub fn between(&mut self, lo: i32, hi: i32) -> i32 {
        self.0.gen_range(lo..=hi)
    }

    /// `-1` or `+1` with equal probability.
    #[inline]
    pub fn sign(&mut self) -> i32 {
        if self.0.gen_bool(0.5) { 1 } else { -1 }
    }

    /// In-place Fisher-Yates shuffle.
    #[inline]
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }

    /// Uniform pick; `None` on an empty slice.
    #[inline]
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}
