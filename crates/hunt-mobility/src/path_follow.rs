//! Walking a cached path one validated step at a time.

use hunt_agent::Motion;
use hunt_spatial::SpatialIndex;
use tracing::trace;

/// Move along `motion.path` by up to `max_steps` cells and return how many
/// were taken.
///
/// Each step must be Chebyshev-adjacent to the previous cell and walkable.
/// The first step that is not discards the rest of the path and marks it
/// stale (`turns_since_replan = replan_interval`) so the next planning pass
/// replans.  A used-up path is discarded the same way.
///
/// If the very first step fails because the agent has drifted off its
/// cursor but still stands on the path, the cursor is re-synced to the cell
/// after the agent's position and a single step is retried.
pub fn advance_along_path<W: SpatialIndex + ?Sized>(
    motion:          &mut Motion,
    world:           &W,
    max_steps:       usize,
    replan_interval: u32,
) -> usize {
    let mut cur = motion.position;
    let mut budget = max_steps;
    let mut taken = 0;
    let mut resynced = false;

    while taken < budget {
        let Some(next) = motion.next_waypoint() else { break };

        if cur.chebyshev(next) == 1 && world.is_walkable(next) {
            cur = next;
            motion.path_cursor += 1;
            taken += 1;
            continue;
        }

        if taken == 0 && !resynced {
            resynced = true;
            if let Some(i) = motion.path.index_of(cur) {
                if i + 1 != motion.path_cursor {
                    motion.path_cursor = i + 1;
                    budget = 1;
                    continue;
                }
            }
        }

        trace!(at = %cur, blocked = %next, "path invalidated");
        motion.invalidate_path(replan_interval);
        break;
    }

    motion.position = cur;
    if !motion.path.is_empty() && motion.path_exhausted() {
        motion.invalidate_path(replan_interval);
    }
    taken
}
