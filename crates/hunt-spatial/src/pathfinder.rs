//! 8-connected A* over the grid.
//!
//! # Cost model
//!
//! Every move, straight or diagonal, costs 1.  The heuristic is the
//! Manhattan distance to the goal.  It overestimates diagonal travel, so the
//! search is not guaranteed optimal on cluttered maps; on open ground the
//! returned path is still the Chebyshev-shortest.  Agents only need a
//! plausible route, and the Manhattan bias pulls the search toward the goal
//! quickly.
//!
//! # Ordering
//!
//! The open set is a min-heap on `(f, h, cell)`: lowest `f = g + h` first,
//! then the node nearer the goal, then the smaller cell.  The last key only
//! makes the expansion order independent of hash iteration.  Neighbors are
//! expanded in [`COMPASS`] order (cardinals, then diagonals).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use hunt_core::{Cell, COMPASS};

use crate::path::{validate_path, Path};

/// Search a route from `start` to `goal`, both inclusive.
///
/// Returns the empty path when the goal is unreachable or obstructed.
/// `start == goal` yields `[start]` provided `start` is walkable.
pub fn find_path(
    start:     Cell,
    goal:      Cell,
    obstacles: &FxHashSet<Cell>,
    width:     i32,
    height:    i32,
) -> Path {
    let walkable = |c: Cell| c.in_bounds(width, height) && !obstacles.contains(&c);

    if !walkable(goal) {
        return Path::empty();
    }
    if start == goal {
        return if walkable(start) { Path::from(vec![start]) } else { Path::empty() };
    }

    // g[c] = best known step count from start; came_from[c] = predecessor.
    let mut g: FxHashMap<Cell, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();

    let h0 = start.manhattan(goal) as u32;
    g.insert(start, 0);

    let mut open: BinaryHeap<Reverse<(u32, u32, Cell)>> = BinaryHeap::new();
    open.push(Reverse((h0, h0, start)));

    while let Some(Reverse((f, h, current))) = open.pop() {
        if current == goal {
            return reconstruct(&came_from, start, goal, obstacles, width, height);
        }

        let g_cur = g.get(&current).copied().unwrap_or(u32::MAX);
        // Skip stale heap entries.
        if f - h > g_cur {
            continue;
        }

        for dir in COMPASS {
            let next = current + dir;
            if !walkable(next) {
                continue;
            }
            let tentative = g_cur + 1;
            if g.get(&next).is_none_or(|&known| tentative < known) {
                g.insert(next, tentative);
                came_from.insert(next, current);
                let h_next = next.manhattan(goal) as u32;
                open.push(Reverse((tentative + h_next, h_next, next)));
            }
        }
    }

    Path::empty()
}

/// Follow predecessor links back from `goal`, then reverse.  A broken chain
/// or a result that fails [`validate_path`] yields the empty path.
fn reconstruct(
    came_from: &FxHashMap<Cell, Cell>,
    start:     Cell,
    goal:      Cell,
    obstacles: &FxHashSet<Cell>,
    width:     i32,
    height:    i32,
) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        match came_from.get(&cur) {
            Some(&prev) => {
                cells.push(prev);
                cur = prev;
            }
            None => return Path::empty(),
        }
    }
    cells.reverse();

    if validate_path(&cells, obstacles, width, height) {
        Path::from(cells)
    } else {
        Path::empty()
    }
}
