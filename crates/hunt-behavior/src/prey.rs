//! The prey state machine.
//!
//! Prey alternate between `Wandering` and `Fleeing`.  A prey flees while its
//! nearest predator is within the awareness radius *and* visible; walls
//! hide a predator from prey even when it is close.
//!
//! While fleeing, a prey first looks for a route to a safe zone that does not
//! start toward the predator.  Without one (or once the route breaks) it
//! makes a reactive dodge each tick, preferring cells the predator cannot
//! see.

use tracing::debug;

use hunt_agent::{Agent, AgentKind, BehaviorState};
use hunt_core::{Cell, SimRng, COMPASS};
use hunt_mobility::advance_along_path;
use hunt_spatial::{Path, SpatialIndex};

use crate::sensing::nearest;
use crate::BehaviorContext;

// ── Pure transition ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PreyObservation {
    /// Nearest predator within the awareness radius with line of sight.
    pub threat_visible: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreyTransition {
    pub next: BehaviorState,
    /// Forget any safe-zone route.
    pub reset_route: bool,
}

pub fn transition(state: BehaviorState, obs: &PreyObservation) -> PreyTransition {
    let next = if obs.threat_visible { BehaviorState::Fleeing } else { BehaviorState::Wandering };
    PreyTransition { next, reset_route: next != state }
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Run one prey for one tick: sense, update fear, transition, move.
pub fn update_prey<W: SpatialIndex + ?Sized>(
    prey:      &mut Agent,
    predators: &[Agent],
    ctx:       &BehaviorContext<'_, W>,
    rng:       &mut SimRng,
) {
    if !prey.is_prey() {
        return;
    }
    let world = ctx.world;
    let qp = &ctx.params.prey;
    let here = prey.position();

    let threat = nearest(here, predators).map(|(a, dist)| (a.position(), dist));
    let visible = threat.is_some_and(|(at, dist)| dist <= qp.awareness_radius && world.line_of_sight(here, at));

    if let AgentKind::Prey(p) = &mut prey.kind {
        if visible {
            p.raise_fear();
        } else {
            let mult = if world.is_in_safe_zone(here) { qp.safe_zone_decay_multiplier } else { 1.0 };
            p.calm(mult);
        }
    }

    let t = transition(prey.state, &PreyObservation { threat_visible: visible });
    let prev = prey.enter(t.next);
    if t.reset_route {
        forget_route(prey);
    }
    if prev != t.next {
        debug!(agent = %prey.id, at = %here, from = %prev, to = %t.next, "prey state change");
    }

    match (prey.state, threat) {
        (BehaviorState::Fleeing, Some((threat_at, _))) => flee(prey, threat_at, ctx, rng),
        _ => ctx.engine.wander(prey, world, rng),
    }
}

fn forget_route(prey: &mut Agent) {
    prey.motion.clear_path();
    if let AgentKind::Prey(p) = &mut prey.kind {
        p.heading_to_safe_zone = false;
    }
}

fn heading_to_safe_zone(prey: &Agent) -> bool {
    prey.prey().is_some_and(|p| p.heading_to_safe_zone)
}

fn flee<W: SpatialIndex + ?Sized>(prey: &mut Agent, threat: Cell, ctx: &BehaviorContext<'_, W>, rng: &mut SimRng) {
    let world = ctx.world;
    let qp = &ctx.params.prey;
    let from = prey.position();

    if !heading_to_safe_zone(prey) {
        if let Some(route) = route_to_safe_zone(from, threat, world, qp.max_safe_zone_distance) {
            prey.motion.set_path(route);
            if let AgentKind::Prey(p) = &mut prey.kind {
                p.heading_to_safe_zone = true;
            }
        }
    }

    let mut routed = false;
    if heading_to_safe_zone(prey) && !prey.motion.path.is_empty() {
        let steps = advance_along_path(&mut prey.motion, world, 1, ctx.engine.replan_interval());
        if steps > 0 {
            routed = true;
            if prey.motion.path.is_empty() {
                forget_route(prey);
                let there = prey.position();
                if world.is_in_safe_zone(there) && there.manhattan(threat) > qp.awareness_radius / 2 {
                    prey.enter(BehaviorState::Wandering);
                    debug!(agent = %prey.id, at = %there, "prey reached safety");
                }
            }
        } else {
            forget_route(prey);
        }
    }

    if !routed {
        prey.motion.position = dodge(prey, threat, world, rng);
    }

    let moved = prey.position() - from;
    if !moved.is_zero() {
        prey.motion.last_direction = moved.signum();
    }
}

/// Shortest route to a nearby safe-zone center whose first step does not
/// head toward the threat.
fn route_to_safe_zone<W: SpatialIndex + ?Sized>(from: Cell, threat: Cell, world: &W, max_dist: i32) -> Option<Path> {
    let toward_threat = threat - from;
    let mut best: Option<Path> = None;

    for &center in world.safe_zone_centers() {
        if from.manhattan(center) > max_dist {
            continue;
        }
        let path = world.path(from, center);
        let Some(first) = path.get(1) else { continue };
        if (first - from).dot(toward_threat) > 0 {
            continue;
        }
        if best.as_ref().is_none_or(|b| path.len() < b.len()) {
            best = Some(path);
        }
    }
    best
}

/// One reactive evasive step over the 8 directions plus staying, in random
/// order.  A destination hidden from the threat beats any visible one; among
/// hidden cells the farthest wins, and among visible cells the farthest wins
/// with moving preferred over staying on a tie.
fn dodge<W: SpatialIndex + ?Sized>(prey: &Agent, threat: Cell, world: &W, rng: &mut SimRng) -> Cell {
    let from = prey.position();
    let speed = prey.motion.speed;

    let mut options = [Cell::ZERO; 9];
    options[..8].copy_from_slice(&COMPASS);
    rng.shuffle(&mut options);

    let mut best_hidden: Option<(Cell, i32)> = None;
    let mut best_open: Option<(Cell, i32)> = None;

    for dir in options {
        let cell = from.step(dir, speed);
        if !world.is_walkable(cell) {
            continue;
        }
        let dist = threat.manhattan(cell);
        if !world.line_of_sight(cell, threat) {
            if best_hidden.is_none_or(|(_, d)| dist > d) {
                best_hidden = Some((cell, dist));
            }
        } else if best_hidden.is_none() {
            let better = match best_open {
                None => true,
                Some((c, d)) => dist > d || (dist == d && c == from && cell != from),
            };
            if better {
                best_open = Some((cell, dist));
            }
        }
    }

    best_hidden.or(best_open).map_or(from, |(c, _)| c)
}
