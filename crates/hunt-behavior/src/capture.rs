//! Capture resolution.
//!
//! Runs after movement.  Each predator that is not stunned checks every
//! remaining prey within one cell on both axes (its own cell included).  An
//! adjacent prey either evades, leaving the predator stunned and the prey
//! thrown clear, or is captured and removed from the list.

use tracing::{debug, info};

use hunt_agent::{Agent, AgentKind, BehaviorState, PreyData};
use hunt_core::{AgentId, CaptureParams, Cell, SimRng};
use hunt_spatial::SpatialIndex;

use crate::BehaviorContext;

/// Chance that `prey` slips away: the base chance plus a fear bonus, never
/// above the configured ceiling.
pub fn evasion_probability(prey: &PreyData, params: &CaptureParams) -> f32 {
    let p = prey.evasion_chance + params.max_fear_bonus * prey.fear_ratio();
    p.min(params.ceiling())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encounter {
    NotAdjacent,
    Captured,
    Evaded { escape: Cell },
}

/// A prey got away.  Kept for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvasionEvent {
    pub predator: AgentId,
    pub prey:     AgentId,
    /// Where the prey landed.
    pub position: Cell,
    pub message:  String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub captures: usize,
    pub captured: Vec<AgentId>,
    pub evasions: Vec<EvasionEvent>,
}

impl CaptureOutcome {
    pub fn is_empty(&self) -> bool {
        self.captures == 0 && self.evasions.is_empty()
    }

    pub fn merge(&mut self, other: CaptureOutcome) {
        self.captures += other.captures;
        self.captured.extend(other.captured);
        self.evasions.extend(other.evasions);
    }
}

fn adjacent(a: Cell, b: Cell) -> bool {
    a.chebyshev(b) <= 1
}

/// Settle one predator/prey pair given an already drawn `roll` in `[0, 1)`.
///
/// On evasion the predator is stunned (for a positive stun duration) and the
/// prey moved; on capture nothing is mutated and the caller removes the prey.
/// `rng` is only used to place an evading prey.
pub fn resolve_encounter<W: SpatialIndex + ?Sized>(
    predator: &mut Agent,
    prey:     &mut Agent,
    roll:     f32,
    ctx:      &BehaviorContext<'_, W>,
    rng:      &mut SimRng,
) -> Encounter {
    if !adjacent(predator.position(), prey.position()) {
        return Encounter::NotAdjacent;
    }
    let cp = &ctx.params.capture;
    let chance = prey.prey().map_or(0.0, |p| evasion_probability(p, cp));
    if roll > chance {
        return Encounter::Captured;
    }

    // A zero-length stun has no countdown to end it, so it is no stun at all.
    if cp.stun_duration > 0 {
        predator.enter(BehaviorState::Stunned);
        predator.motion.clear_path();
        if let Some(p) = predator.predator_mut() {
            p.stun_remaining = cp.stun_duration;
        }
    }

    let escape = escape_cell(prey.position(), predator.position(), ctx.world, cp, rng);
    prey.motion.position = escape;
    prey.motion.clear_path();
    if let AgentKind::Prey(p) = &mut prey.kind {
        p.heading_to_safe_zone = false;
    }
    Encounter::Evaded { escape }
}

/// Landing cell for an evading prey: thrown 2-3 cells directly away from the
/// predator (random sign on an axis where they line up).  If that cell is
/// blocked, the nearest open cell in growing squares around the prey.
fn escape_cell<W: SpatialIndex + ?Sized>(
    from:   Cell,
    threat: Cell,
    world:  &W,
    cp:     &CaptureParams,
    rng:    &mut SimRng,
) -> Cell {
    let away = (from - threat).signum();
    let sx = if away.x == 0 { rng.sign() } else { away.x };
    let sy = if away.y == 0 { rng.sign() } else { away.y };
    let dist = rng.between(cp.escape_min_distance, cp.escape_max_distance);

    let target = from.step(Cell::new(sx, sy), dist).clamp_to(world.width(), world.height());
    if world.is_walkable(target) {
        return target;
    }

    for r in 1..=cp.escape_search_radius {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx.abs().max(dy.abs()) != r {
                    continue;
                }
                let cell = Cell::new(from.x + dx, from.y + dy);
                if world.is_walkable(cell) {
                    return cell;
                }
            }
        }
    }
    from
}

/// One resolution pass over every predator and the remaining prey.
///
/// Captured prey are removed from `prey` before the next predator looks.  A
/// predator stunned by an evasion checks nothing further this pass.
pub fn process_captures<W: SpatialIndex + ?Sized>(
    predators: &mut [Agent],
    prey:      &mut Vec<Agent>,
    ctx:       &BehaviorContext<'_, W>,
    rng:       &mut SimRng,
) -> CaptureOutcome {
    let mut out = CaptureOutcome::default();

    for (n, predator) in predators.iter_mut().enumerate() {
        let mut i = 0;
        while i < prey.len() {
            if predator.is_stunned() {
                break;
            }
            if !adjacent(predator.position(), prey[i].position()) {
                i += 1;
                continue;
            }
            let roll = rng.roll();
            match resolve_encounter(predator, &mut prey[i], roll, ctx, rng) {
                Encounter::Captured => {
                    let gone = prey.remove(i);
                    info!(predator = %predator.id, prey = %gone.id, at = %gone.position(), "prey captured");
                    out.captures += 1;
                    out.captured.push(gone.id);
                }
                Encounter::Evaded { escape } => {
                    debug!(predator = %predator.id, prey = %prey[i].id, to = %escape, roll, "prey evaded");
                    out.evasions.push(EvasionEvent {
                        predator: predator.id,
                        prey:     prey[i].id,
                        position: escape,
                        message:  format!("Prey escaped from Predator {}", n + 1),
                    });
                    i += 1;
                }
                Encounter::NotAdjacent => i += 1,
            }
        }
    }
    out
}
