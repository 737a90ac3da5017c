//! Finding the nearest opponent.

use hunt_agent::Agent;
use hunt_core::Cell;

/// The agent in `others` closest to `from` by squared Euclidean distance,
/// together with its Manhattan distance.  Ties go to the earlier agent.
pub fn nearest(from: Cell, others: &[Agent]) -> Option<(&Agent, i32)> {
    let mut best: Option<(&Agent, i32)> = None;
    for other in others {
        let d2 = from.squared_distance(other.position());
        if best.is_none_or(|(_, b)| d2 < b) {
            best = Some((other, d2));
        }
    }
    best.map(|(a, _)| (a, from.manhattan(a.position())))
}

/// [`nearest`], but only if its Manhattan distance is within `radius`.
pub fn nearest_within(from: Cell, others: &[Agent], radius: i32) -> Option<(&Agent, i32)> {
    nearest(from, others).filter(|&(_, d)| d <= radius)
}
