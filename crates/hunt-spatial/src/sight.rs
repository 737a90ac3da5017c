//! Line of sight on the grid.

use rustc_hash::FxHashSet;

use hunt_core::Cell;

/// `true` if no obstacle or off-grid cell lies strictly between `from` and
/// `to` on the Bresenham line joining them.
///
/// Neither endpoint is tested, so a viewer standing next to a wall still
/// sees the cell on the other side of it only if the traced line misses the
/// wall.  `from == to` is always visible.
pub fn has_line_of_sight(
    from:      Cell,
    to:        Cell,
    obstacles: &FxHashSet<Cell>,
    width:     i32,
    height:    i32,
) -> bool {
    if from == to {
        return true;
    }

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cur = from;

    loop {
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cur.x += sx;
        }
        if e2 <= dx {
            err += dx;
            cur.y += sy;
        }
        if cur == to {
            return true;
        }
        if !cur.in_bounds(width, height) || obstacles.contains(&cur) {
            return false;
        }
    }
}
