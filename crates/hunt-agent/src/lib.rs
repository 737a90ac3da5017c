//! `hunt-agent`: agent records for the `rust_hunt` core.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`state`]   | `BehaviorState`                                              |
//! | [`agent`]   | `Agent`, `Motion`, `AgentKind`, `PredatorData`, `PreyData`   |
//! | [`builder`] | `AgentBuilder`, `PredatorBuilder`, `PreyBuilder`             |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                               |
//!
//! Both kinds share one `Agent` struct: identity, behavior state and the
//! movement record are common, and the kind-specific resources (stamina,
//! stun, fear) live in the [`AgentKind`] payload.  Code that only makes
//! sense for one kind matches on it.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.       |

pub mod agent;
pub mod builder;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentKind, Motion, PredatorData, PreyData};
pub use builder::{AgentBuilder, PredatorBuilder, PreyBuilder};
pub use error::{AgentError, AgentResult};
pub use state::BehaviorState;
