//! The world boundary data the behavior core reads.
//!
//! # Interface
//!
//! Behavior code only talks to the world through [`SpatialIndex`], which
//! answers four questions: grid size, the obstacle set, safe-zone centers,
//! and (via provided methods) walkability and safe-zone membership.  The
//! world is read-only during a tick; agents never block each other.
//!
//! [`GridWorld`] is the stock implementation, built from explicit obstacle
//! cells by [`GridWorldBuilder`].  Map generation belongs to the caller.

use rustc_hash::FxHashSet;

use hunt_core::Cell;

use crate::{find_path, has_line_of_sight, Path, SpatialError, SpatialResult};

/// Manhattan radius of every safe zone around its center.
pub const SAFE_ZONE_RADIUS: i32 = 2;

// ── SpatialIndex trait ────────────────────────────────────────────────────────

/// Read-only view of a grid world.
pub trait SpatialIndex {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn obstacles(&self) -> &FxHashSet<Cell>;

    fn safe_zone_centers(&self) -> &[Cell];

    fn safe_zone_radius(&self) -> i32 {
        SAFE_ZONE_RADIUS
    }

    /// In bounds and not an obstacle.
    #[inline]
    fn is_walkable(&self, cell: Cell) -> bool {
        cell.in_bounds(self.width(), self.height()) && !self.obstacles().contains(&cell)
    }

    /// Within the safe-zone radius (Manhattan) of any center.
    fn is_in_safe_zone(&self, cell: Cell) -> bool {
        let r = self.safe_zone_radius();
        self.safe_zone_centers().iter().any(|&c| c.manhattan(cell) <= r)
    }

    /// [`find_path`] over this world.
    fn path(&self, start: Cell, goal: Cell) -> Path {
        find_path(start, goal, self.obstacles(), self.width(), self.height())
    }

    /// [`has_line_of_sight`] over this world.
    fn line_of_sight(&self, from: Cell, to: Cell) -> bool {
        has_line_of_sight(from, to, self.obstacles(), self.width(), self.height())
    }
}

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// Fixed-size grid with a static obstacle set and circular (Manhattan)
/// safe zones.
///
/// Immutable after construction; use [`GridWorldBuilder`].
#[derive(Clone, Debug)]
pub struct GridWorld {
    width:            i32,
    height:           i32,
    obstacles:        FxHashSet<Cell>,
    safe_zones:       Vec<Cell>,
    safe_zone_radius: i32,
}

impl GridWorld {
    /// All walkable cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|&c| !self.obstacles.contains(&c))
    }
}

impl SpatialIndex for GridWorld {
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn obstacles(&self) -> &FxHashSet<Cell> {
        &self.obstacles
    }

    #[inline]
    fn safe_zone_centers(&self) -> &[Cell] {
        &self.safe_zones
    }

    #[inline]
    fn safe_zone_radius(&self) -> i32 {
        self.safe_zone_radius
    }
}

// ── GridWorldBuilder ──────────────────────────────────────────────────────────

/// Fluent builder for [`GridWorld`].
///
/// # Example
///
/// ```rust
/// use hunt_core::Cell;
/// use hunt_spatial::{GridWorldBuilder, SpatialIndex};
///
/// let world = GridWorldBuilder::new(60, 20)
///     .border_walls()
///     .obstacle(Cell::new(30, 10))
///     .safe_zone(Cell::new(10, 10))
///     .build()
///     .unwrap();
///
/// assert!(!world.is_walkable(Cell::new(0, 5)));
/// assert!(world.is_in_safe_zone(Cell::new(11, 11)));
/// ```
///
/// A safe-zone center is always cleared of obstacles, whichever order the
/// calls come in.
pub struct GridWorldBuilder {
    width:            i32,
    height:           i32,
    obstacles:        Vec<Cell>,
    safe_zones:       Vec<Cell>,
    safe_zone_radius: i32,
    border:           bool,
}

impl GridWorldBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            obstacles:        Vec::new(),
            safe_zones:       Vec::new(),
            safe_zone_radius: SAFE_ZONE_RADIUS,
            border:           false,
        }
    }

    pub fn obstacle(mut self, cell: Cell) -> Self {
        self.obstacles.push(cell);
        self
    }

    pub fn obstacles<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.obstacles.extend(cells);
        self
    }

    /// Wall off the outermost ring of cells.
    pub fn border_walls(mut self) -> Self {
        self.border = true;
        self
    }

    pub fn safe_zone(mut self, center: Cell) -> Self {
        self.safe_zones.push(center);
        self
    }

    /// Override the default radius of [`SAFE_ZONE_RADIUS`].
    pub fn safe_zone_radius(mut self, radius: i32) -> Self {
        self.safe_zone_radius = radius;
        self
    }

    /// Validate every cell against the grid and produce the world.
    pub fn build(self) -> SpatialResult<GridWorld> {
        let (width, height) = (self.width, self.height);
        if width <= 0 || height <= 0 {
            return Err(SpatialError::InvalidDimensions { width, height });
        }
        if self.safe_zone_radius < 0 {
            return Err(SpatialError::NegativeRadius(self.safe_zone_radius));
        }

        let check = |what: &'static str, cell: Cell| {
            if cell.in_bounds(width, height) {
                Ok(())
            } else {
                Err(SpatialError::OutOfBounds { what, cell, width, height })
            }
        };

        let mut obstacles = FxHashSet::default();
        for &cell in &self.obstacles {
            check("obstacle", cell)?;
            obstacles.insert(cell);
        }
        if self.border {
            for x in 0..width {
                obstacles.insert(Cell::new(x, 0));
                obstacles.insert(Cell::new(x, height - 1));
            }
            for y in 0..height {
                obstacles.insert(Cell::new(0, y));
                obstacles.insert(Cell::new(width - 1, y));
            }
        }
        for &center in &self.safe_zones {
            check("safe-zone center", center)?;
            obstacles.remove(&center);
        }

        Ok(GridWorld {
            width,
            height,
            obstacles,
            safe_zones:       self.safe_zones,
            safe_zone_radius: self.safe_zone_radius,
        })
    }
}
