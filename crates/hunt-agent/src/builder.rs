//! Validated construction of predators and prey.
//!
//! # Usage
//!
//! ```rust
//! use hunt_agent::{AgentBuilder, BehaviorState};
//! use hunt_core::{AgentId, BehaviorParams, Cell};
//!
//! let params = BehaviorParams::default();
//! let hunter = AgentBuilder::predator(AgentId(0), Cell::new(2, 2))
//!     .params(&params.predator)
//!     .build()
//!     .unwrap();
//! let rabbit = AgentBuilder::prey(AgentId(1), Cell::new(9, 4))
//!     .params(&params.prey)
//!     .evasion_chance(0.5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(hunter.state, BehaviorState::Wandering);
//! assert_eq!(rabbit.prey().unwrap().evasion_chance, 0.5);
//! ```
//!
//! Walkability of the start cell is a property of the world, not the agent;
//! `hunt_sim::SimBuilder` checks it.

use std::collections::VecDeque;

use hunt_core::{AgentId, Cell, PredatorParams, PreyParams};

use crate::{Agent, AgentError, AgentKind, AgentResult, BehaviorState, Motion, PredatorData, PreyData};

/// Entry point; picks the kind.
pub struct AgentBuilder;

impl AgentBuilder {
    pub fn predator(id: AgentId, position: Cell) -> PredatorBuilder {
        PredatorBuilder::new(id, position)
    }

    pub fn prey(id: AgentId, position: Cell) -> PreyBuilder {
        PreyBuilder::new(id, position)
    }
}

// ── PredatorBuilder ───────────────────────────────────────────────────────────

pub struct PredatorBuilder {
    id:                    AgentId,
    position:              Cell,
    speed:                 i32,
    stamina:               Option<u32>,
    max_stamina:           u32,
    stamina_recharge_time: u32,
    max_resting_duration:  u32,
}

impl PredatorBuilder {
    fn new(id: AgentId, position: Cell) -> Self {
        Self::from_params(id, position, &PredatorParams::default())
    }

    fn from_params(id: AgentId, position: Cell, p: &PredatorParams) -> Self {
        Self {
            id,
            position,
            speed:                 p.base_speed,
            stamina:               None,
            max_stamina:           p.max_stamina,
            stamina_recharge_time: p.stamina_recharge_time,
            max_resting_duration:  p.max_resting_duration,
        }
    }

    /// Take speed, stamina and resting limits from `p`.
    pub fn params(self, p: &PredatorParams) -> Self {
        Self { stamina: self.stamina, ..Self::from_params(self.id, self.position, p) }
    }

    pub fn speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    pub fn max_stamina(mut self, max: u32) -> Self {
        self.max_stamina = max;
        self
    }

    /// Starting stamina; defaults to the maximum.
    pub fn stamina(mut self, stamina: u32) -> Self {
        self.stamina = Some(stamina);
        self
    }

    pub fn build(self) -> AgentResult<Agent> {
        if self.id == AgentId::INVALID {
            return Err(AgentError::InvalidId);
        }
        if self.speed < 1 {
            return Err(AgentError::NonPositiveSpeed(self.speed));
        }
        if self.max_stamina == 0 {
            return Err(AgentError::ZeroMaximum("max_stamina"));
        }
        if self.stamina_recharge_time == 0 {
            return Err(AgentError::ZeroMaximum("stamina_recharge_time"));
        }
        let stamina = self.stamina.unwrap_or(self.max_stamina);
        if stamina > self.max_stamina {
            return Err(AgentError::AboveMaximum {
                what:  "stamina",
                value: stamina as f32,
                max:   self.max_stamina as f32,
            });
        }

        Ok(Agent {
            id:     self.id,
            state:  BehaviorState::Wandering,
            motion: Motion::new(self.position, self.speed),
            kind:   AgentKind::Predator(PredatorData {
                stamina,
                max_stamina:           self.max_stamina,
                stamina_recharge_time: self.stamina_recharge_time,
                recharge_counter:      0,
                resting_duration:      0,
                max_resting_duration:  self.max_resting_duration,
                stun_remaining:        0,
                last_known_prey:       None,
                wander_trail:          VecDeque::new(),
            }),
        })
    }
}

// ── PreyBuilder ───────────────────────────────────────────────────────────────

pub struct PreyBuilder {
    id:                 AgentId,
    position:           Cell,
    speed:              i32,
    fear:               f32,
    max_fear:           f32,
    fear_increase_rate: f32,
    fear_decrease_rate: f32,
    evasion_chance:     f32,
}

impl PreyBuilder {
    fn new(id: AgentId, position: Cell) -> Self {
        Self::from_params(id, position, &PreyParams::default())
    }

    fn from_params(id: AgentId, position: Cell, p: &PreyParams) -> Self {
        Self {
            id,
            position,
            speed:              p.base_speed,
            fear:               0.0,
            max_fear:           p.max_fear,
            fear_increase_rate: p.fear_increase_rate,
            fear_decrease_rate: p.fear_decrease_rate,
            evasion_chance:     p.evasion_chance,
        }
    }

    /// Take speed, fear rates and evasion chance from `p`.
    pub fn params(self, p: &PreyParams) -> Self {
        Self { fear: self.fear, ..Self::from_params(self.id, self.position, p) }
    }

    pub fn speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    /// Starting fear; defaults to zero.
    pub fn fear(mut self, fear: f32) -> Self {
        self.fear = fear;
        self
    }

    pub fn max_fear(mut self, max: f32) -> Self {
        self.max_fear = max;
        self
    }

    pub fn evasion_chance(mut self, p: f32) -> Self {
        self.evasion_chance = p;
        self
    }

    pub fn build(self) -> AgentResult<Agent> {
        if self.id == AgentId::INVALID {
            return Err(AgentError::InvalidId);
        }
        if self.speed < 1 {
            return Err(AgentError::NonPositiveSpeed(self.speed));
        }
        if !(self.max_fear > 0.0) {
            return Err(AgentError::ZeroMaximum("max_fear"));
        }
        if !(0.0..=1.0).contains(&self.evasion_chance) {
            return Err(AgentError::EvasionOutOfRange(self.evasion_chance));
        }
        for (what, value) in [
            ("fear", self.fear),
            ("fear_increase_rate", self.fear_increase_rate),
            ("fear_decrease_rate", self.fear_decrease_rate),
        ] {
            if value < 0.0 {
                return Err(AgentError::Negative { what, value });
            }
        }
        if self.fear > self.max_fear {
            return Err(AgentError::AboveMaximum { what: "fear", value: self.fear, max: self.max_fear });
        }

        Ok(Agent {
            id:     self.id,
            state:  BehaviorState::Wandering,
            motion: Motion::new(self.position, self.speed),
            kind:   AgentKind::Prey(PreyData {
                fear:                 self.fear,
                max_fear:             self.max_fear,
                fear_increase_rate:   self.fear_increase_rate,
                fear_decrease_rate:   self.fear_decrease_rate,
                evasion_chance:       self.evasion_chance,
                heading_to_safe_zone: false,
            }),
        })
    }
}
