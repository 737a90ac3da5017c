//! Tuning parameters.
//!
//! Per-agent quantities (speed, stamina and fear maxima, evasion chance) are
//! copied onto each agent by `hunt_agent::AgentBuilder` so individuals may
//! differ.  Everything else here is read at tick time through
//! [`BehaviorParams`].
//!
//! All defaults reproduce the reference tuning: a 2-speed predator with 5
//! stamina that sees 60 cells, a 1-speed prey that notices predators within
//! 5 cells, and a 35 % base evasion chance.

use crate::{HuntError, HuntResult};

/// No parameter combination may push evasion probability above this.
pub const EVASION_HARD_CAP: f32 = 0.9;

// ── Predator ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredatorParams {
    /// Manhattan radius within which the nearest prey counts as visible.
    pub vision_radius: i32,
    pub base_speed: i32,
    /// Displacement per tick while sprinting.
    pub sprint_speed: i32,
    pub max_stamina: u32,
    /// Ticks of non-sprinting movement after which stamina refills fully.
    pub stamina_recharge_time: u32,
    /// While resting, one stamina point is regained every this many ticks.
    pub rest_recharge_interval: u32,
    /// A rest longer than this ends even if stamina is not full.
    pub max_resting_duration: u32,
    /// A cached path older than this many ticks is recomputed.
    pub replan_interval: u32,
    /// Manhattan range of the direct greedy chase step.
    pub pursuit_range: i32,
}

impl Default for PredatorParams {
    fn default() -> Self {
        Self {
            vision_radius:          60,
            base_speed:             2,
            sprint_speed:           2,
            max_stamina:            5,
            stamina_recharge_time:  10,
            rest_recharge_interval: 2,
            max_resting_duration:   20,
            replan_interval:        2,
            pursuit_range:          3,
        }
    }
}

// ── Prey ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreyParams {
    /// Manhattan radius within which a predator (with line of sight) is
    /// noticed.
    pub awareness_radius: i32,
    pub base_speed: i32,
    pub max_fear: f32,
    pub fear_increase_rate: f32,
    pub fear_decrease_rate: f32,
    /// Fear decay is multiplied by this inside a safe zone.
    pub safe_zone_decay_multiplier: f32,
    /// Safe zones farther than this (Manhattan) are not considered when
    /// fleeing.
    pub max_safe_zone_distance: i32,
    /// Base probability of slipping away when caught.
    pub evasion_chance: f32,
}

impl Default for PreyParams {
    fn default() -> Self {
        Self {
            awareness_radius:           5,
            base_speed:                 1,
            max_fear:                   100.0,
            fear_increase_rate:         15.0,
            fear_decrease_rate:         5.0,
            safe_zone_decay_multiplier: 2.0,
            max_safe_zone_distance:     25,
            evasion_chance:             0.35,
        }
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementParams {
    /// Streak cap for the biased random walk.
    pub max_steps_in_direction: u32,
    /// Capacity of a predator's wander trail.
    pub wander_trail_length: usize,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self { max_steps_in_direction: 5, wander_trail_length: 8 }
    }
}

// ── Capture ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureParams {
    /// Evasion bonus at maximum fear; scales linearly with `fear / max_fear`.
    pub max_fear_bonus: f32,
    /// Upper bound on evasion probability.  Values above
    /// [`EVASION_HARD_CAP`] are ignored in favor of the hard cap.
    pub evasion_ceiling: f32,
    /// Ticks a predator stays stunned after a prey slips away.
    pub stun_duration: u32,
    pub escape_min_distance: i32,
    pub escape_max_distance: i32,
    /// Radius of the ring search used when the first escape cell is blocked.
    pub escape_search_radius: i32,
}

impl CaptureParams {
    #[inline]
    pub fn ceiling(&self) -> f32 {
        self.evasion_ceiling.min(EVASION_HARD_CAP)
    }
}

impl Default for CaptureParams {
    fn default() -> Self {
        Self {
            max_fear_bonus:       0.15,
            evasion_ceiling:      EVASION_HARD_CAP,
            stun_duration:        2,
            escape_min_distance:  2,
            escape_max_distance:  3,
            escape_search_radius: 3,
        }
    }
}

// ── Stuck detection ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StuckParams {
    /// Recovery starts once the stuck counter exceeds this.
    pub threshold: u32,
    /// Positions kept per predator.  Oscillation detection needs at least 4.
    pub history_len: usize,
    /// Predators beyond this many are not tracked.
    pub max_tracked: usize,
    /// Half-width of the square scanned by the last-resort relocation.
    pub wide_search_radius: i32,
}

impl Default for StuckParams {
    fn default() -> Self {
        Self { threshold: 3, history_len: 5, max_tracked: 10, wide_search_radius: 5 }
    }
}

// ── Bundle ────────────────────────────────────────────────────────────────────

/// Every tuning knob read during a tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorParams {
    pub predator: PredatorParams,
    pub prey:     PreyParams,
    pub movement: MovementParams,
    pub capture:  CaptureParams,
    pub stuck:    StuckParams,
}

impl BehaviorParams {
    /// Reject combinations the tick logic cannot work with.
    pub fn validate(&self) -> HuntResult<()> {
        let p = &self.predator;
        if p.base_speed < 1 || p.sprint_speed < 1 {
            return Err(HuntError::Config("predator speeds must be at least 1".into()));
        }
        if p.max_stamina == 0 {
            return Err(HuntError::Config("predator max_stamina must be positive".into()));
        }
        if p.rest_recharge_interval == 0 || p.stamina_recharge_time == 0 {
            return Err(HuntError::Config("stamina recharge intervals must be positive".into()));
        }
        if self.prey.base_speed < 1 {
            return Err(HuntError::Config("prey speed must be at least 1".into()));
        }
        if !(self.prey.max_fear > 0.0) {
            return Err(HuntError::Config("prey max_fear must be positive".into()));
        }
        let c = &self.capture;
        if !(0.0..=1.0).contains(&c.evasion_ceiling) || c.max_fear_bonus < 0.0 {
            return Err(HuntError::Config(format!(
                "evasion ceiling {} / fear bonus {} out of range",
                c.evasion_ceiling, c.max_fear_bonus
            )));
        }
        if c.stun_duration == 0 {
            return Err(HuntError::Config("stun_duration must be positive".into()));
        }
        if c.escape_min_distance < 1 || c.escape_max_distance < c.escape_min_distance {
            return Err(HuntError::Config("escape distance range is empty".into()));
        }
        if self.stuck.history_len < 4 {
            return Err(HuntError::Config("stuck history must hold at least 4 positions".into()));
        }
        if self.movement.max_steps_in_direction == 0 {
            return Err(HuntError::Config("max_steps_in_direction must be positive".into()));
        }
        Ok(())
    }
}
