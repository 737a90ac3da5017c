//! Cell paths and their structural invariant.
//!
//! A usable path has every cell in bounds and off the obstacle set, and
//! every consecutive pair exactly one king-move apart (Chebyshev distance 1).
//! Paths produced by [`find_path`](crate::find_path) satisfy this when
//! returned, but obstacles and agents move, so followers re-check each step
//! before taking it.

use rustc_hash::FxHashSet;

use hunt_core::Cell;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered list of cells from a start (inclusive) to a goal (inclusive).
///
/// The empty path means "no route".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Index of the first occurrence of `cell`, if any.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// `true` if every cell is in bounds and unobstructed and consecutive cells
/// are Chebyshev-adjacent.  The empty path is trivially valid.
pub fn validate_path(
    path:      &[Cell],
    obstacles: &FxHashSet<Cell>,
    width:     i32,
    height:    i32,
) -> bool {
    let open = |c: &Cell| c.in_bounds(width, height) && !obstacles.contains(c);
    path.iter().all(open) && path.windows(2).all(|w| w[0].chebyshev(w[1]) == 1)
}
