//! Spatial-subsystem error type.

use thiserror::Error;

use hunt_core::Cell;

/// Errors produced while building a [`GridWorld`](crate::GridWorld).
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid dimensions {width}x{height} must both be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("{what} at {cell} lies outside the {width}x{height} grid")]
    OutOfBounds { what: &'static str, cell: Cell, width: i32, height: i32 },

    #[error("safe-zone radius {0} must not be negative")]
    NegativeRadius(i32),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
