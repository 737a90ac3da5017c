//! Agent records.
//!
//! # Ownership
//!
//! The driver owns predators and prey in two plain `Vec<Agent>`s.  Per-tick
//! operations borrow the agent being updated mutably and the opposing list
//! immutably, which is why the two kinds are never stored together.

use std::collections::VecDeque;

use hunt_core::{AgentId, Cell};
use hunt_spatial::Path;

use crate::BehaviorState;

// ── Motion ────────────────────────────────────────────────────────────────────

/// Movement record shared by both kinds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub position: Cell,
    /// Base displacement per tick.
    pub speed: i32,
    /// Unit offset of the last random-walk or flee move; `Cell::ZERO` when
    /// the agent last stayed put.
    pub last_direction: Cell,
    /// Consecutive ticks spent continuing `last_direction`.
    pub streak: u32,
    pub path: Path,
    /// Index of the next path cell to step onto.  Paths include their start
    /// cell, so a fresh path starts at 1.
    pub path_cursor: usize,
    pub turns_since_replan: u32,
}

impl Motion {
    pub fn new(position: Cell, speed: i32) -> Self {
        Self {
            position,
            speed,
            last_direction:     Cell::ZERO,
            streak:             0,
            path:               Path::empty(),
            path_cursor:        0,
            turns_since_replan: 0,
        }
    }

    /// Adopt a freshly planned path and reset staleness.
    pub fn set_path(&mut self, path: Path) {
        self.path = path;
        self.path_cursor = 1;
        self.turns_since_replan = 0;
    }

    /// Drop the path and mark it stale so the next planning pass replans.
    pub fn invalidate_path(&mut self, replan_interval: u32) {
        self.path.clear();
        self.path_cursor = 0;
        self.turns_since_replan = replan_interval;
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
        self.path_cursor = 0;
    }

    /// Next waypoint, or `None` when there is no path or it is used up.
    #[inline]
    pub fn next_waypoint(&self) -> Option<Cell> {
        self.path.get(self.path_cursor)
    }

    #[inline]
    pub fn path_exhausted(&self) -> bool {
        self.path_cursor >= self.path.len()
    }
}

// ── Kind payloads ─────────────────────────────────────────────────────────────

/// Stamina, stun and pursuit memory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredatorData {
    /// In `[0, max_stamina]`.
    pub stamina:               u32,
    pub max_stamina:           u32,
    pub stamina_recharge_time: u32,
    /// Shared by the slow passive refill and the resting cadence; reset
    /// whenever a point is gained or spent.
    pub recharge_counter:      u32,
    pub resting_duration:      u32,
    pub max_resting_duration:  u32,
    /// Ticks of stun left; the predator is stunned while this is non-zero.
    pub stun_remaining:        u32,
    pub last_known_prey:       Option<Cell>,
    /// Most recent first.
    pub wander_trail:          VecDeque<Cell>,
}

impl PredatorData {
    #[inline]
    pub fn is_stunned(&self) -> bool {
        self.stun_remaining > 0
    }

    #[inline]
    pub fn stamina_full(&self) -> bool {
        self.stamina >= self.max_stamina
    }

    /// Below half of the maximum (integer halving).
    #[inline]
    pub fn is_tired(&self) -> bool {
        self.stamina < self.max_stamina / 2
    }

    /// Record a wander destination, evicting the oldest beyond `capacity`.
    /// A repeat of the current front is ignored.
    pub fn push_trail(&mut self, cell: Cell, capacity: usize) {
        if self.wander_trail.front() == Some(&cell) {
            return;
        }
        self.wander_trail.push_front(cell);
        self.wander_trail.truncate(capacity);
    }

    #[inline]
    pub fn on_trail(&self, cell: Cell) -> bool {
        self.wander_trail.contains(&cell)
    }
}

/// Fear and evasion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreyData {
    /// In `[0, max_fear]`.
    pub fear:                 f32,
    pub max_fear:             f32,
    pub fear_increase_rate:   f32,
    pub fear_decrease_rate:   f32,
    pub evasion_chance:       f32,
    pub heading_to_safe_zone: bool,
}

impl PreyData {
    #[inline]
    pub fn fear_ratio(&self) -> f32 {
        self.fear / self.max_fear
    }

    pub fn raise_fear(&mut self) {
        self.fear = (self.fear + self.fear_increase_rate).min(self.max_fear);
    }

    pub fn calm(&mut self, multiplier: f32) {
        self.fear = (self.fear - self.fear_decrease_rate * multiplier).max(0.0);
    }
}

/// Kind-specific payload.  Immutable in kind after construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Predator(PredatorData),
    Prey(PreyData),
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:     AgentId,
    pub state:  BehaviorState,
    pub motion: Motion,
    pub kind:   AgentKind,
}

impl Agent {
    #[inline]
    pub fn position(&self) -> Cell {
        self.motion.position
    }

    #[inline]
    pub fn is_predator(&self) -> bool {
        matches!(self.kind, AgentKind::Predator(_))
    }

    #[inline]
    pub fn is_prey(&self) -> bool {
        matches!(self.kind, AgentKind::Prey(_))
    }

    pub fn predator(&self) -> Option<&PredatorData> {
        match &self.kind {
            AgentKind::Predator(p) => Some(p),
            AgentKind::Prey(_) => None,
        }
    }

    pub fn predator_mut(&mut self) -> Option<&mut PredatorData> {
        match &mut self.kind {
            AgentKind::Predator(p) => Some(p),
            AgentKind::Prey(_) => None,
        }
    }

    pub fn prey(&self) -> Option<&PreyData> {
        match &self.kind {
            AgentKind::Prey(p) => Some(p),
            AgentKind::Predator(_) => None,
        }
    }

    pub fn prey_mut(&mut self) -> Option<&mut PreyData> {
        match &mut self.kind {
            AgentKind::Prey(p) => Some(p),
            AgentKind::Predator(_) => None,
        }
    }

    /// `true` for a predator with stun ticks left.  Prey are never stunned.
    #[inline]
    pub fn is_stunned(&self) -> bool {
        self.predator().is_some_and(PredatorData::is_stunned)
    }

    /// Switch state; a predator leaving `Wandering` forgets its wander trail.
    /// Returns the previous state.
    pub fn enter(&mut self, next: BehaviorState) -> BehaviorState {
        let prev = self.state;
        if prev == BehaviorState::Wandering && next != BehaviorState::Wandering {
            if let AgentKind::Predator(p) = &mut self.kind {
                p.wander_trail.clear();
            }
        }
        self.state = next;
        prev
    }
}
