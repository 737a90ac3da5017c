//! Unit tests for hunt-spatial.
//!
//! Worlds are built by hand; no map generator is involved.

#[cfg(test)]
mod helpers {
    use hunt_core::Cell;
    use rustc_hash::FxHashSet;

    pub fn walls(cells: &[(i32, i32)]) -> FxHashSet<Cell> {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    /// A vertical wall at `x` spanning every row except `gap`.
    pub fn wall_with_gap(x: i32, height: i32, gap: i32) -> FxHashSet<Cell> {
        (0..height).filter(|&y| y != gap).map(|y| Cell::new(x, y)).collect()
    }
}

// ── World & builder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod world {
    use hunt_core::Cell;
    use crate::{GridWorldBuilder, SpatialError, SpatialIndex};

    #[test]
    fn border_walls_enclose_interior() {
        let w = GridWorldBuilder::new(6, 4).border_walls().build().unwrap();
        assert!(!w.is_walkable(Cell::new(0, 0)));
        assert!(!w.is_walkable(Cell::new(5, 2)));
        assert!(!w.is_walkable(Cell::new(3, 3)));
        assert!(w.is_walkable(Cell::new(1, 1)));
        assert!(w.is_walkable(Cell::new(4, 2)));
        assert_eq!(w.open_cells().count(), 4 * 2);
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let w = GridWorldBuilder::new(3, 3).build().unwrap();
        assert!(!w.is_walkable(Cell::new(-1, 0)));
        assert!(!w.is_walkable(Cell::new(0, 3)));
    }

    #[test]
    fn safe_zone_is_manhattan_diamond() {
        let w = GridWorldBuilder::new(20, 20).safe_zone(Cell::new(10, 10)).build().unwrap();
        assert!(w.is_in_safe_zone(Cell::new(10, 10)));
        assert!(w.is_in_safe_zone(Cell::new(12, 10)));
        assert!(w.is_in_safe_zone(Cell::new(11, 11)));
        assert!(!w.is_in_safe_zone(Cell::new(12, 11)));
        assert_eq!(w.safe_zone_centers(), &[Cell::new(10, 10)]);
    }

    #[test]
    fn safe_zone_center_is_cleared() {
        let c = Cell::new(4, 4);
        let w = GridWorldBuilder::new(8, 8).obstacle(c).safe_zone(c).build().unwrap();
        assert!(w.is_walkable(c));
    }

    #[test]
    fn rejects_out_of_bounds_obstacle() {
        let err = GridWorldBuilder::new(5, 5).obstacle(Cell::new(5, 0)).build().unwrap_err();
        assert!(matches!(err, SpatialError::OutOfBounds { what: "obstacle", .. }));
    }

    #[test]
    fn rejects_empty_grid() {
        let err = GridWorldBuilder::new(0, 5).build().unwrap_err();
        assert!(matches!(err, SpatialError::InvalidDimensions { width: 0, height: 5 }));
    }
}

// ── A* ────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinding {
    use hunt_core::Cell;
    use rustc_hash::FxHashSet;

    use super::helpers::{wall_with_gap, walls};
    use crate::{find_path, validate_path};

    #[test]
    fn start_equals_goal() {
        let none = FxHashSet::default();
        let p = find_path(Cell::new(2, 2), Cell::new(2, 2), &none, 5, 5);
        assert_eq!(p.cells(), &[Cell::new(2, 2)]);
    }

    #[test]
    fn open_grid_takes_diagonals() {
        let none = FxHashSet::default();
        let p = find_path(Cell::new(0, 0), Cell::new(3, 1), &none, 10, 10);
        assert_eq!(p.len(), 4);
        assert_eq!(p.first(), Some(Cell::new(0, 0)));
        assert_eq!(p.last(), Some(Cell::new(3, 1)));
        assert!(validate_path(p.cells(), &none, 10, 10));
    }

    #[test]
    fn detours_through_gap() {
        let obstacles = wall_with_gap(5, 10, 8);
        let p = find_path(Cell::new(1, 1), Cell::new(9, 1), &obstacles, 10, 10);
        assert!(!p.is_empty());
        assert!(p.index_of(Cell::new(5, 8)).is_some());
        assert!(validate_path(p.cells(), &obstacles, 10, 10));
    }

    #[test]
    fn unreachable_goal_is_empty() {
        let obstacles = walls(&[(3, 2), (3, 3), (3, 4), (5, 2), (5, 3), (5, 4), (4, 2), (4, 4)]);
        let p = find_path(Cell::new(0, 0), Cell::new(4, 3), &obstacles, 8, 8);
        assert!(p.is_empty());
    }

    #[test]
    fn obstructed_or_off_grid_goal_is_empty() {
        let obstacles = walls(&[(2, 2)]);
        assert!(find_path(Cell::new(0, 0), Cell::new(2, 2), &obstacles, 5, 5).is_empty());
        assert!(find_path(Cell::new(0, 0), Cell::new(5, 0), &obstacles, 5, 5).is_empty());
    }

    #[test]
    fn validate_rejects_gaps_and_walls() {
        let obstacles = walls(&[(1, 1)]);
        let jump = [Cell::new(0, 0), Cell::new(2, 0)];
        let through = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)];
        let stall = [Cell::new(0, 0), Cell::new(0, 0)];
        assert!(!validate_path(&jump, &obstacles, 5, 5));
        assert!(!validate_path(&through, &obstacles, 5, 5));
        assert!(!validate_path(&stall, &obstacles, 5, 5));
        assert!(validate_path(&[], &obstacles, 5, 5));
    }
}

#[cfg(test)]
mod pathfinding_props {
    use hunt_core::Cell;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use crate::{find_path, validate_path};

    const W: i32 = 12;
    const H: i32 = 9;

    fn cell() -> impl Strategy<Value = Cell> {
        (0..W, 0..H).prop_map(|(x, y)| Cell::new(x, y))
    }

    proptest! {
        #[test]
        fn open_grid_length_is_chebyshev_plus_one(a in cell(), b in cell()) {
            let none = FxHashSet::default();
            let p = find_path(a, b, &none, W, H);
            prop_assert_eq!(p.len() as i32, a.chebyshev(b) + 1);
            prop_assert_eq!(p.first(), Some(a));
            prop_assert_eq!(p.last(), Some(b));
        }

        #[test]
        fn paths_avoid_obstacles_and_stay_connected(
            a in cell(),
            b in cell(),
            blocked in proptest::collection::vec(cell(), 0..40),
        ) {
            let obstacles: FxHashSet<Cell> =
                blocked.into_iter().filter(|&c| c != a && c != b).collect();
            let p = find_path(a, b, &obstacles, W, H);
            if !p.is_empty() {
                prop_assert!(validate_path(p.cells(), &obstacles, W, H));
                prop_assert_eq!(p.first(), Some(a));
                prop_assert_eq!(p.last(), Some(b));
            }
        }
    }
}

// ── Line of sight ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sight {
    use hunt_core::Cell;
    use rustc_hash::FxHashSet;

    use super::helpers::walls;
    use crate::has_line_of_sight;

    #[test]
    fn self_is_visible() {
        let obstacles = walls(&[(1, 1)]);
        assert!(has_line_of_sight(Cell::new(1, 1), Cell::new(1, 1), &obstacles, 3, 3));
    }

    #[test]
    fn symmetric_on_open_lines() {
        let none = FxHashSet::default();
        let pairs = [
            (Cell::new(0, 3), Cell::new(9, 3)),
            (Cell::new(4, 0), Cell::new(4, 8)),
            (Cell::new(1, 1), Cell::new(7, 7)),
            (Cell::new(8, 0), Cell::new(0, 8)),
        ];
        for (a, b) in pairs {
            assert!(has_line_of_sight(a, b, &none, 10, 10));
            assert!(has_line_of_sight(b, a, &none, 10, 10));
        }
    }

    #[test]
    fn wall_in_between_blocks_both_ways() {
        let obstacles = walls(&[(3, 3)]);
        let (a, b) = (Cell::new(1, 1), Cell::new(5, 5));
        assert!(!has_line_of_sight(a, b, &obstacles, 10, 10));
        assert!(!has_line_of_sight(b, a, &obstacles, 10, 10));
    }

    #[test]
    fn endpoints_are_not_tested() {
        let obstacles = walls(&[(0, 0), (2, 0)]);
        assert!(has_line_of_sight(Cell::new(0, 0), Cell::new(2, 0), &FxHashSet::default(), 5, 5));
        assert!(has_line_of_sight(Cell::new(0, 0), Cell::new(1, 0), &obstacles, 5, 5));
        assert!(has_line_of_sight(Cell::new(1, 0), Cell::new(2, 0), &obstacles, 5, 5));
    }
}
