//! Framework error type.
//!
//! Nothing in the per-tick path returns an error: unreachable goals, blocked
//! paths, and stuck agents are policy branches.  Errors exist only for
//! construction-time configuration problems.

use thiserror::Error;

use crate::Cell;

/// The top-level error type for `hunt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HuntError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: i32, height: i32 },
}

/// Shorthand result type for all `hunt-*` crates.
pub type HuntResult<T> = Result<T, HuntError>;
