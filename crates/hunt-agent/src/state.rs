//! The closed set of behavior states.

use std::fmt;

/// Exactly one is active per agent.
///
/// Predators move through every state except `Fleeing`; prey only ever
/// alternate between `Wandering` and `Fleeing`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    #[default]
    Wandering,
    /// Chasing a visible prey.
    Seeking,
    /// Prey lost; heading for the last place it was seen.
    SearchingLastKnown,
    Fleeing,
    /// Knocked back by an evasion; no movement until the stun wears off.
    Stunned,
    /// Standing still to recover stamina.
    Resting,
}

impl BehaviorState {
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorState::Wandering          => "WANDERING",
            BehaviorState::Seeking            => "SEEKING",
            BehaviorState::SearchingLastKnown => "SEARCHING_LAST_KNOWN",
            BehaviorState::Fleeing            => "FLEEING",
            BehaviorState::Stunned            => "STUNNED",
            BehaviorState::Resting            => "RESTING",
        }
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
