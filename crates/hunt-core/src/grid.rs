//! Integer grid coordinates and the direction tables shared by movement,
//! pathfinding, and evasion.
//!
//! `Cell` doubles as a position and as an offset: a direction is just a
//! `Cell` whose components are in `-1..=1`.  Three distance metrics are in
//! use and they are not interchangeable:
//!
//! | Metric      | Used for                                                |
//! |-------------|---------------------------------------------------------|
//! | Manhattan   | A* heuristic, vision/awareness radii, safe-zone extent  |
//! | Chebyshev   | path adjacency (8-connected), capture adjacency         |
//! | squared     | picking the *nearest* opponent                          |

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A grid coordinate (or offset).  `x` grows to the right, `y` downward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// The four axis-aligned unit offsets.
pub const CARDINAL: [Cell; 4] = [
    Cell::new(0, 1),
    Cell::new(0, -1),
    Cell::new(1, 0),
    Cell::new(-1, 0),
];

/// The four diagonal unit offsets.
pub const DIAGONAL: [Cell; 4] = [
    Cell::new(1, 1),
    Cell::new(1, -1),
    Cell::new(-1, 1),
    Cell::new(-1, -1),
];

/// All eight neighbor offsets, cardinals first.  This is also the A*
/// expansion order.
pub const COMPASS: [Cell; 8] = [
    Cell::new(0, 1),
    Cell::new(0, -1),
    Cell::new(1, 0),
    Cell::new(-1, 0),
    Cell::new(1, 1),
    Cell::new(1, -1),
    Cell::new(-1, 1),
    Cell::new(-1, -1),
];

impl Cell {
    pub const ZERO: Cell = Cell::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// `self + dir * scale`.
    #[inline]
    pub fn step(self, dir: Cell, scale: i32) -> Cell {
        Cell::new(self.x + dir.x * scale, self.y + dir.y * scale)
    }

    #[inline]
    pub fn manhattan(self, other: Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    #[inline]
    pub fn chebyshev(self, other: Cell) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    #[inline]
    pub fn squared_distance(self, other: Cell) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn dot(self, other: Cell) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// Component-wise sign, e.g. `(5, -2) → (1, -1)`.
    #[inline]
    pub fn signum(self) -> Cell {
        Cell::new(self.x.signum(), self.y.signum())
    }

    /// Clamp each component to `[-limit, limit]`.
    #[inline]
    pub fn clamp_len(self, limit: i32) -> Cell {
        Cell::new(self.x.clamp(-limit, limit), self.y.clamp(-limit, limit))
    }

    #[inline]
    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }

    /// Clamp into `[0, width) × [0, height)`.
    ///
    /// # Panics
    /// Panics if `width` or `height` is not positive.
    #[inline]
    pub fn clamp_to(self, width: i32, height: i32) -> Cell {
        Cell::new(self.x.clamp(0, width - 1), self.y.clamp(0, height - 1))
    }
}

impl Add for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Cell;
    #[inline]
    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Cell {
    type Output = Cell;
    #[inline]
    fn neg(self) -> Cell {
        Cell::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
