//! The movement engine: one displacement per call.
//!
//! # Order of checks in [`MovementEngine::wander`]
//!
//! 1. A stunned predator counts down its stun and does not move.  When the
//!    stun reaches zero it is back to `Wandering`.
//! 2. A resting predator does not move.  It regains one stamina point every
//!    `rest_recharge_interval` ticks and its resting duration grows.
//! 3. Effective speed is fixed for the tick (see [`effective_speed`]).
//! 4. Below the streak cap, the agent keeps its last direction if the cell
//!    at effective speed is walkable.  A sprinting predator falls back to a
//!    single cell in the same direction.
//! 5. Otherwise a new direction is drawn from the walkable options with
//!    progressive relaxation, never reversing unless that is the only way
//!    out.
//!
//! # Stamina
//!
//! A predator spends one stamina point in each tick in which it actually
//! moves more than one cell, whichever kind of movement carried it.  Any
//! other moving tick advances the passive recharge counter, and stamina
//! refills completely once the counter reaches `stamina_recharge_time`.
//!
//! [`effective_speed`]: MovementEngine::effective_speed

use hunt_agent::{Agent, AgentKind, BehaviorState};
use hunt_core::{BehaviorParams, Cell, SimRng, CARDINAL, COMPASS};
use hunt_spatial::SpatialIndex;

use crate::path_follow::advance_along_path;

/// Stateless apart from its tuning; share one per run.
#[derive(Clone, Debug)]
pub struct MovementEngine {
    max_streak:             u32,
    trail_length:           usize,
    sprint_speed:           i32,
    rest_recharge_interval: u32,
    replan_interval:        u32,
}

impl MovementEngine {
    pub fn new(params: &BehaviorParams) -> Self {
        Self {
            max_streak:             params.movement.max_steps_in_direction,
            trail_length:           params.movement.wander_trail_length,
            sprint_speed:           params.predator.sprint_speed,
            rest_recharge_interval: params.predator.rest_recharge_interval,
            replan_interval:        params.predator.replan_interval,
        }
    }

    #[inline]
    pub fn replan_interval(&self) -> u32 {
        self.replan_interval
    }

    /// Cells per tick this agent may cover right now.
    ///
    /// Predators sprint only while `Seeking` with stamina left and otherwise
    /// crawl at one cell.  Prey always use their base speed.
    pub fn effective_speed(&self, agent: &Agent) -> i32 {
        match &agent.kind {
            AgentKind::Predator(p) if agent.state == BehaviorState::Seeking && p.stamina > 0 => {
                self.sprint_speed
            }
            AgentKind::Predator(_) => 1,
            AgentKind::Prey(_) => agent.motion.speed,
        }
    }

    /// Book stamina for a tick in which the predator moved.  No-op for prey.
    pub fn settle_stamina(&self, agent: &mut Agent, sprinted: bool) {
        let AgentKind::Predator(p) = &mut agent.kind else { return };
        if sprinted {
            p.stamina = p.stamina.saturating_sub(1);
            p.recharge_counter = 0;
        } else if !p.stamina_full() {
            p.recharge_counter += 1;
            if p.recharge_counter >= p.stamina_recharge_time {
                p.stamina = p.max_stamina;
                p.recharge_counter = 0;
            }
        }
    }

    // ── Random walk ───────────────────────────────────────────────────────────

    /// Stun countdown, resting recharge, or one biased random-walk move.
    pub fn wander<W: SpatialIndex + ?Sized>(&self, agent: &mut Agent, world: &W, rng: &mut SimRng) {
        if let AgentKind::Predator(p) = &mut agent.kind {
            if p.is_stunned() {
                p.stun_remaining -= 1;
                if p.stun_remaining == 0 {
                    agent.state = BehaviorState::Wandering;
                }
                return;
            }
            if agent.state == BehaviorState::Resting {
                if !p.stamina_full() {
                    p.recharge_counter += 1;
                    if p.recharge_counter >= self.rest_recharge_interval {
                        p.stamina = (p.stamina + 1).min(p.max_stamina);
                        p.recharge_counter = 0;
                    }
                }
                p.resting_duration += 1;
                return;
            }
        }

        let speed = self.effective_speed(agent);
        let origin = agent.position();

        let dest = match self.continue_straight(agent, speed, world) {
            Some(cell) => {
                agent.motion.streak += 1;
                cell
            }
            None => self.turn(agent, speed, world, rng),
        };

        agent.motion.position = dest.clamp_to(world.width(), world.height());
        self.settle_stamina(agent, origin.chebyshev(dest) > 1);
    }

    fn continue_straight<W: SpatialIndex + ?Sized>(&self, agent: &Agent, speed: i32, world: &W) -> Option<Cell> {
        let dir = agent.motion.last_direction;
        if dir.is_zero() || agent.motion.streak >= self.max_streak {
            return None;
        }
        let origin = agent.position();
        let full = origin.step(dir, speed);
        if world.is_walkable(full) {
            return Some(full);
        }
        let single = origin + dir;
        (agent.is_predator() && speed > 1 && world.is_walkable(single)).then_some(single)
    }

    /// Pick a new direction and return the destination.
    ///
    /// Predators try, in order: the 8 directions at `speed` avoiding their
    /// wander trail, the same at one cell, trail cells at `speed`, trail
    /// cells at one cell, then staying.  Prey choose among the 4 cardinals
    /// and staying.
    fn turn<W: SpatialIndex + ?Sized>(
        &self,
        agent: &mut Agent,
        speed: i32,
        world: &W,
        rng:   &mut SimRng,
    ) -> Cell {
        let origin = agent.position();
        let last = agent.motion.last_direction;

        let mut options: Vec<(Cell, i32)> = match agent.predator() {
            Some(p) => {
                let gather = |scale: i32, avoid_trail: bool| -> Vec<(Cell, i32)> {
                    COMPASS
                        .iter()
                        .map(|&d| (d, scale))
                        .filter(|&(d, s)| {
                            let c = origin.step(d, s);
                            world.is_walkable(c) && !(avoid_trail && p.on_trail(c))
                        })
                        .collect()
                };
                let mut found = gather(speed, true);
                if found.is_empty() && speed > 1 {
                    found = gather(1, true);
                }
                if found.is_empty() {
                    found = gather(speed, false);
                }
                if found.is_empty() && speed > 1 {
                    found = gather(1, false);
                }
                found
            }
            None => CARDINAL
                .iter()
                .chain(std::iter::once(&Cell::ZERO))
                .map(|&d| (d, speed))
                .filter(|&(d, s)| world.is_walkable(origin.step(d, s)))
                .collect(),
        };

        if !last.is_zero() && options.iter().any(|&(d, _)| d != -last) {
            options.retain(|&(d, _)| d != -last);
        }

        let (dir, scale) = rng.pick(&options).copied().unwrap_or((Cell::ZERO, 0));
        let dest = origin.step(dir, scale);

        agent.motion.last_direction = dir;
        agent.motion.streak = if dir.is_zero() { self.max_streak } else { 1 };
        if !dir.is_zero() {
            let cap = self.trail_length;
            if let Some(p) = agent.predator_mut() {
                p.push_trail(dest, cap);
            }
        }
        dest
    }

    // ── Path following ────────────────────────────────────────────────────────

    /// Follow the cached path at effective speed, or wander if no step can be
    /// taken.  Returns the number of path cells covered.
    pub fn follow_path<W: SpatialIndex + ?Sized>(&self, agent: &mut Agent, world: &W, rng: &mut SimRng) -> usize {
        let speed = self.effective_speed(agent).max(1) as usize;
        let taken = advance_along_path(&mut agent.motion, world, speed, self.replan_interval);
        if taken == 0 {
            self.wander(agent, world, rng);
        } else {
            self.settle_stamina(agent, taken > 1);
        }
        taken
    }
}
