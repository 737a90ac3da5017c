//! `hunt-spatial`: the grid world, pathfinding, and visibility.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`world`]      | `SpatialIndex` trait, `GridWorld`, `GridWorldBuilder`     |
//! | [`path`]       | `Path`, `validate_path`                                   |
//! | [`pathfinder`] | `find_path` (8-connected A*)                              |
//! | [`sight`]      | `has_line_of_sight` (Bresenham)                           |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! Pathfinding and line of sight are pure functions of the obstacle set and
//! the grid dimensions.  [`SpatialIndex`] adds provided methods that forward
//! to them, so behavior code can write `world.path(a, b)`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod path;
pub mod pathfinder;
pub mod sight;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use path::{validate_path, Path};
pub use pathfinder::find_path;
pub use sight::has_line_of_sight;
pub use world::{GridWorld, GridWorldBuilder, SpatialIndex, SAFE_ZONE_RADIUS};
