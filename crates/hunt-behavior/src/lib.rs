//! `hunt-behavior`: per-tick decision logic.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`context`]  | `BehaviorContext<'a, W>`: world + tuning shared by every call    |
//! | [`sensing`]  | nearest-opponent lookup                                           |
//! | [`predator`] | predator `transition` (pure) and `update_predator`                |
//! | [`prey`]     | prey `transition` (pure) and `update_prey`                        |
//! | [`capture`]  | `process_captures`, `resolve_encounter`, `evasion_probability`    |
//!
//! # Tick contract
//!
//! A driver calls, in this order:
//!
//! 1. for each predator: [`update_predator`], then [`process_captures`];
//! 2. for each prey: [`update_prey`];
//! 3. [`process_captures`] once more.
//!
//! Every call takes the single run-wide [`SimRng`](hunt_core::SimRng) by
//! `&mut`, so the agent order fixes the random draw order.  `hunt-sim`
//! packages this loop; nothing here depends on it.
//!
//! # Design notes
//!
//! Each kind's state machine is split into a pure `transition` function
//! (state + observation in, next state + bookkeeping action out) and an
//! `update_*` function that senses, applies the transition, plans and moves.
//! The pure half is what the unit tests pin down.

pub mod capture;
pub mod context;
pub mod predator;
pub mod prey;
pub mod sensing;


pub use capture::{
    evasion_probability, process_captures, resolve_encounter, CaptureOutcome, Encounter,
    EvasionEvent,
};
pub use context::BehaviorContext;
pub use predator::{update_predator, PredatorAction, PredatorObservation, PredatorTransition};
pub use prey::{update_prey, PreyObservation, PreyTransition};
