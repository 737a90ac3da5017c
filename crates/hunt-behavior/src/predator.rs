//! The predator state machine.
//!
//! # Transitions
//!
//! | From                 | Condition                         | To                   |
//! |----------------------|-----------------------------------|----------------------|
//! | `Wandering`          | prey in sight                     | `Seeking`            |
//! | `Wandering`          | stamina below half                | `Resting`            |
//! | `Seeking`            | prey lost                         | `SearchingLastKnown` |
//! | `Seeking`            | stamina exhausted                 | `Resting`            |
//! | `SearchingLastKnown` | prey in sight                     | `Seeking`            |
//! | `SearchingLastKnown` | at last known cell, or no path    | `Wandering`          |
//! | `Resting`            | prey in sight                     | `Seeking`            |
//! | `Resting`            | stamina full, or rested too long  | `Wandering`          |
//! | `Stunned`            | stun expired (movement engine)    | `Wandering`          |
//!
//! "In sight" means the nearest prey (squared distance) is within the vision
//! radius (Manhattan).  Walls do not block a predator's vision.

use tracing::debug;

use hunt_agent::{Agent, AgentKind, BehaviorState};
use hunt_core::{Cell, SimRng};
use hunt_mobility::{StuckDetector, StuckOutcome};
use hunt_spatial::SpatialIndex;

use crate::sensing::nearest_within;
use crate::BehaviorContext;

// ── Pure transition ───────────────────────────────────────────────────────────

/// What the predator knows about itself and its surroundings this tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredatorObservation {
    /// Position of the nearest prey, if within vision.
    pub prey_in_sight:    Option<Cell>,
    pub stamina:          u32,
    /// Stamina below half of the maximum.
    pub tired:            bool,
    pub stamina_full:     bool,
    pub rested_too_long:  bool,
    pub at_last_known:    bool,
    pub has_path:         bool,
}

/// Bookkeeping that accompanies a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PredatorAction {
    Keep,
    /// New sighting: remember the cell, drop the path, force a replan and
    /// reset the resting duration.
    Acquire(Cell),
    /// Ongoing chase: remember the cell and age the path.
    Track(Cell),
    /// Age the path toward the last known cell.
    Age,
    /// Stop to rest: reset the resting duration and drop the path.  A
    /// sighting made on the way is still remembered.
    Rest(Option<Cell>),
    /// Rest is over.
    Wake,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PredatorTransition {
    pub next:   BehaviorState,
    pub action: PredatorAction,
}

impl PredatorTransition {
    fn to(next: BehaviorState, action: PredatorAction) -> Self {
        Self { next, action }
    }

    /// Enter (or remain in) `state` with no bookkeeping.
    fn stay(state: BehaviorState) -> Self {
        Self { next: state, action: PredatorAction::Keep }
    }
}

/// Decide the next state.  Stunned predators never reach this; the movement
/// engine owns the stun countdown.
pub fn transition(state: BehaviorState, obs: &PredatorObservation) -> PredatorTransition {
    use BehaviorState::*;
    type T = PredatorTransition;
    type A = PredatorAction;

    match (state, obs.prey_in_sight) {
        (Wandering | SearchingLastKnown | Resting, Some(prey)) => T::to(Seeking, A::Acquire(prey)),

        (Wandering, None) if obs.tired => T::to(Resting, A::Rest(None)),
        (Wandering, None) => T::stay(Wandering),

        (Seeking, Some(prey)) if obs.stamina == 0 => T::to(Resting, A::Rest(Some(prey))),
        (Seeking, Some(prey)) => T::to(Seeking, A::Track(prey)),
        (Seeking, None) => T::stay(SearchingLastKnown),

        (SearchingLastKnown, None) if obs.at_last_known || !obs.has_path => T::stay(Wandering),
        (SearchingLastKnown, None) => T::to(SearchingLastKnown, A::Age),

        (Resting, None) if obs.stamina_full || obs.rested_too_long => T::to(Wandering, A::Wake),
        (Resting, None) => T::stay(Resting),

        (Stunned | Fleeing, _) => T::stay(state),
    }
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Run one predator for one tick.
///
/// Order: stun countdown (and nothing else) if stunned; sense the nearest
/// prey; stuck check, which ends the tick on a successful relocation; state
/// transition; path planning; movement.
pub fn update_predator<W: SpatialIndex + ?Sized>(
    predator: &mut Agent,
    prey:     &[Agent],
    ctx:      &BehaviorContext<'_, W>,
    stuck:    &mut StuckDetector,
    rng:      &mut SimRng,
) {
    let Some(data) = predator.predator() else { return };
    if data.is_stunned() {
        ctx.engine.wander(predator, ctx.world, rng);
        return;
    }

    let pp = &ctx.params.predator;
    let target = nearest_within(predator.position(), prey, pp.vision_radius)
        .map(|(a, dist)| (a.position(), predicted_cell(a, ctx.world), dist));

    if let StuckOutcome::Recovered { .. } = stuck.observe(predator, ctx.world, rng) {
        return;
    }

    let obs = observe(predator, target.map(|(pos, _, _)| pos));
    let t = transition(predator.state, &obs);
    apply(predator, t, pp.replan_interval);

    plan(predator, target.map(|(_, goal, _)| goal), ctx.world, pp.replan_interval);

    match predator.state {
        BehaviorState::Seeking => match target {
            Some((_, goal, dist)) if dist <= pp.pursuit_range => pursue(predator, goal, ctx),
            _ if !predator.motion.path.is_empty() => {
                ctx.engine.follow_path(predator, ctx.world, rng);
            }
            _ => ctx.engine.wander(predator, ctx.world, rng),
        },
        BehaviorState::SearchingLastKnown if !predator.motion.path.is_empty() => {
            ctx.engine.follow_path(predator, ctx.world, rng);
        }
        _ => ctx.engine.wander(predator, ctx.world, rng),
    }
}

fn observe(predator: &Agent, prey_in_sight: Option<Cell>) -> PredatorObservation {
    let Some(p) = predator.predator() else { return PredatorObservation::default() };
    PredatorObservation {
        prey_in_sight,
        stamina:         p.stamina,
        tired:           p.is_tired(),
        stamina_full:    p.stamina_full(),
        rested_too_long: p.resting_duration > p.max_resting_duration,
        at_last_known:   p.last_known_prey == Some(predator.position()),
        has_path:        !predator.motion.path.is_empty(),
    }
}

fn apply(predator: &mut Agent, t: PredatorTransition, replan_interval: u32) {
    let prev = predator.enter(t.next);
    if prev != t.next {
        debug!(agent = %predator.id, at = %predator.position(), from = %prev, to = %t.next, "predator state change");
    }

    let motion = &mut predator.motion;
    let AgentKind::Predator(p) = &mut predator.kind else { return };
    match t.action {
        PredatorAction::Keep => {}
        PredatorAction::Acquire(cell) => {
            p.last_known_prey = Some(cell);
            p.resting_duration = 0;
            motion.invalidate_path(replan_interval);
        }
        PredatorAction::Track(cell) => {
            p.last_known_prey = Some(cell);
            motion.turns_since_replan += 1;
        }
        PredatorAction::Age => motion.turns_since_replan += 1,
        PredatorAction::Rest(sighting) => {
            if sighting.is_some() {
                p.last_known_prey = sighting;
            }
            p.resting_duration = 0;
            motion.clear_path();
        }
        PredatorAction::Wake => p.resting_duration = 0,
    }
}

/// Where the prey will be next tick if it keeps going: its position plus its
/// last direction times its speed, when that cell is walkable.
fn predicted_cell<W: SpatialIndex + ?Sized>(prey: &Agent, world: &W) -> Cell {
    let dir = prey.motion.last_direction;
    let ahead = prey.position().step(dir, prey.motion.speed);
    if !dir.is_zero() && world.is_walkable(ahead) { ahead } else { prey.position() }
}

/// Replan when the cached path is missing or stale.
fn plan<W: SpatialIndex + ?Sized>(predator: &mut Agent, chase_goal: Option<Cell>, world: &W, replan_interval: u32) {
    let goal = match (predator.state, chase_goal) {
        (BehaviorState::Seeking, Some(goal)) => goal,
        (BehaviorState::SearchingLastKnown, _) => {
            match predator.predator().and_then(|p| p.last_known_prey) {
                Some(lkp) => lkp,
                None => return,
            }
        }
        _ => return,
    };

    let motion = &mut predator.motion;
    if motion.path.is_empty() || motion.turns_since_replan >= replan_interval {
        let path = world.path(motion.position, goal);
        motion.set_path(path);
    }
}

/// Close-range greedy chase toward `goal`, clamped per axis to the effective
/// speed.  A blocked diagonal falls back to whichever cardinal component
/// lands closer to the goal; if both are blocked the predator holds.
fn pursue<W: SpatialIndex + ?Sized>(predator: &mut Agent, goal: Cell, ctx: &BehaviorContext<'_, W>) {
    let speed = ctx.engine.effective_speed(predator);
    let from = predator.position();
    let delta = (goal - from).clamp_len(speed);
    if delta.is_zero() {
        return;
    }

    let world = ctx.world;
    let mut dest = from + delta;
    if !world.is_walkable(dest) {
        let fallback = if delta.x != 0 && delta.y != 0 {
            [Cell::new(from.x + delta.x, from.y), Cell::new(from.x, from.y + delta.y)]
                .into_iter()
                .filter(|&c| world.is_walkable(c))
                .min_by_key(|&c| c.manhattan(goal))
        } else {
            None
        };
        match fallback {
            Some(c) => dest = c,
            None => return,
        }
    }

    predator.motion.position = dest;
    ctx.engine.settle_stamina(predator, from.chebyshev(dest) > 1);
}
