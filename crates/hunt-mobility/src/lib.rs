//! `hunt-mobility`: how agents actually change cells.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`engine`]      | `MovementEngine`: stun/rest handling, speed, random walk       |
//! | [`path_follow`] | `advance_along_path`: validated multi-step path walking        |
//! | [`stuck`]       | `StuckDetector`, `StuckOutcome`: immobility detection + relocation |
//!
//! # Movement model
//!
//! One call moves one agent at most once.  Agents are points: nothing stops
//! two of them sharing a cell, so only obstacles and the grid edge block
//! movement.  Every destination is checked for walkability before it is
//! taken, and the final position is clamped to the grid.
//!
//! The behavior crate decides *which* movement an agent makes (wander,
//! follow a path, chase, flee); this crate carries it out.

pub mod engine;
pub mod path_follow;
pub mod stuck;

#[cfg(test)]
mod tests;

pub use engine::MovementEngine;
pub use path_follow::advance_along_path;
pub use stuck::{StuckDetector, StuckOutcome};
