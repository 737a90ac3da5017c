//! `hunt-sim`: reference tick driver for the rust_hunt core.
//!
//! # Tick order
//!
//! ```text
//! for each tick until max_ticks or no prey remain:
//!   ① for each predator, in order:
//!        update_predator       : sense, stuck check, transition, plan, move
//!        process_captures      : every predator against every prey
//!   ② for each prey, in order:
//!        update_prey           : sense, fear, transition, flee or wander
//!   ③ process_captures once more
//! ```
//!
//! Steps stop as soon as the prey list is empty.  All randomness comes from
//! one [`SimRng`](hunt_core::SimRng) seeded from [`SimConfig::seed`], so a
//! seed and a set of inputs always replay the same run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hunt_core::{Cell, SimConfig};
//! use hunt_sim::{NoopObserver, SimBuilder};
//! use hunt_spatial::GridWorldBuilder;
//!
//! let world = GridWorldBuilder::new(60, 20).border_walls().build()?;
//! let mut sim = SimBuilder::new(world, SimConfig::default())
//!     .predator(Cell::new(10, 5))
//!     .prey(Cell::new(25, 10))
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Sim, TickReport};
