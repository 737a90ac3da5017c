//! `hunt-core`: foundational types for the `rust_hunt` predator/prey core.
//!
//! This crate is a dependency of every other `hunt-*` crate.  It has no
//! `hunt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                                 |
//! | [`grid`]   | `Cell`, direction offset tables, grid distances           |
//! | [`time`]   | `Tick`, `SimConfig`                                       |
//! | [`rng`]    | `SimRng`: the single shared random source                |
//! | [`params`] | Tuning parameters for movement, behavior, capture, stuck  |
//! | [`error`]  | `HuntError`, `HuntResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HuntError, HuntResult};
pub use grid::{Cell, CARDINAL, COMPASS, DIAGONAL};
pub use ids::AgentId;
pub use params::{
    BehaviorParams, CaptureParams, MovementParams, PredatorParams, PreyParams, StuckParams,
    EVASION_HARD_CAP,
};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
