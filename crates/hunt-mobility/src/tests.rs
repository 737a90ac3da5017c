//! Unit tests for hunt-mobility.

#[cfg(test)]
mod helpers {
    use hunt_agent::{Agent, AgentBuilder};
    use hunt_core::{AgentId, BehaviorParams, Cell};
    use hunt_spatial::{GridWorld, GridWorldBuilder};

    use crate::MovementEngine;

    pub fn open(w: i32, h: i32) -> GridWorld {
        GridWorldBuilder::new(w, h).build().unwrap()
    }

    /// A 1-cell-high corridor along `y = 1`, `len` cells long.
    pub fn corridor(len: i32) -> GridWorld {
        let walls = (0..len).flat_map(|x| [Cell::new(x, 0), Cell::new(x, 2)]);
        GridWorldBuilder::new(len, 3).obstacles(walls).build().unwrap()
    }

    pub fn predator(at: (i32, i32)) -> Agent {
        AgentBuilder::predator(AgentId(0), Cell::from(at)).build().unwrap()
    }

    pub fn prey(at: (i32, i32)) -> Agent {
        AgentBuilder::prey(AgentId(1), Cell::from(at)).build().unwrap()
    }

    pub fn engine() -> MovementEngine {
        MovementEngine::new(&BehaviorParams::default())
    }
}

// ── Stun, rest, stamina ───────────────────────────────────────────────────────

#[cfg(test)]
mod resources {
    use hunt_agent::BehaviorState;
    use hunt_core::{Cell, SimRng};

    use super::helpers::{engine, open, predator};

    #[test]
    fn stun_counts_down_without_moving() {
        let (world, eng, mut rng) = (open(10, 10), engine(), SimRng::new(1));
        let mut a = predator((5, 5));
        a.state = BehaviorState::Stunned;
        a.predator_mut().unwrap().stun_remaining = 2;

        eng.wander(&mut a, &world, &mut rng);
        assert_eq!(a.position(), Cell::new(5, 5));
        assert_eq!(a.state, BehaviorState::Stunned);

        eng.wander(&mut a, &world, &mut rng);
        assert_eq!(a.position(), Cell::new(5, 5));
        assert_eq!(a.state, BehaviorState::Wandering);
        assert!(!a.is_stunned());
    }

    #[test]
    fn resting_regains_one_point_every_two_ticks() {
        let (world, eng, mut rng) = (open(10, 10), engine(), SimRng::new(1));
        let mut a = predator((5, 5));
        a.state = BehaviorState::Resting;
        a.predator_mut().unwrap().stamina = 0;

        for _ in 0..4 {
            eng.wander(&mut a, &world, &mut rng);
        }
        let p = a.predator().unwrap();
        assert_eq!(a.position(), Cell::new(5, 5));
        assert_eq!(p.stamina, 2);
        assert_eq!(p.resting_duration, 4);
    }

    #[test]
    fn passive_recharge_refills_completely() {
        let (world, eng, mut rng) = (open(30, 30), engine(), SimRng::new(3));
        let mut a = predator((15, 15));
        a.predator_mut().unwrap().stamina = 0;

        for _ in 0..9 {
            eng.wander(&mut a, &world, &mut rng);
        }
        assert_eq!(a.predator().unwrap().stamina, 0);
        eng.wander(&mut a, &world, &mut rng);
        assert_eq!(a.predator().unwrap().stamina, 5);
    }

    #[test]
    fn sprint_spends_one_point_per_tick() {
        let (world, eng, mut rng) = (open(20, 20), engine(), SimRng::new(1));
        let mut a = predator((5, 5));
        a.state = BehaviorState::Seeking;
        a.motion.last_direction = Cell::new(1, 0);

        eng.wander(&mut a, &world, &mut rng);
        assert_eq!(a.position(), Cell::new(7, 5));
        assert_eq!(a.predator().unwrap().stamina, 4);
        assert_eq!(a.motion.streak, 1);
    }

    #[test]
    fn blocked_sprint_falls_back_to_one_cell_for_free() {
        let world = hunt_spatial::GridWorldBuilder::new(20, 20)
            .obstacle(Cell::new(7, 5))
            .build()
            .unwrap();
        let (eng, mut rng) = (engine(), SimRng::new(1));
        let mut a = predator((5, 5));
        a.state = BehaviorState::Seeking;
        a.motion.last_direction = Cell::new(1, 0);

        eng.wander(&mut a, &world, &mut rng);
        assert_eq!(a.position(), Cell::new(6, 5));
        assert_eq!(a.predator().unwrap().stamina, 5);
    }

    #[test]
    fn speed_rules() {
        let eng = engine();
        let mut a = predator((0, 0));
        assert_eq!(eng.effective_speed(&a), 1);
        a.state = BehaviorState::Seeking;
        assert_eq!(eng.effective_speed(&a), 2);
        a.predator_mut().unwrap().stamina = 0;
        assert_eq!(eng.effective_speed(&a), 1);
        assert_eq!(eng.effective_speed(&super::helpers::prey((0, 0))), 1);
    }
}

// ── Random walk ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod random_walk {
    use hunt_core::{Cell, SimRng};
    use hunt_spatial::{GridWorldBuilder, SpatialIndex};

    use super::helpers::{corridor, engine, predator, prey};

    #[test]
    fn prey_moves_at_most_one_cardinal_cell() {
        let world = GridWorldBuilder::new(12, 8).border_walls().obstacle(Cell::new(5, 4)).build().unwrap();
        let (eng, mut rng) = (engine(), SimRng::new(11));
        let mut a = prey((2, 2));
        for _ in 0..300 {
            let before = a.position();
            eng.wander(&mut a, &world, &mut rng);
            assert!(world.is_walkable(a.position()));
            assert!(before.manhattan(a.position()) <= 1);
        }
    }

    #[test]
    fn predator_wander_stays_walkable() {
        let world = GridWorldBuilder::new(15, 10).border_walls().build().unwrap();
        let (eng, mut rng) = (engine(), SimRng::new(5));
        let mut a = predator((3, 3));
        for _ in 0..300 {
            let before = a.position();
            eng.wander(&mut a, &world, &mut rng);
            assert!(world.is_walkable(a.position()));
            assert!(before.chebyshev(a.position()) <= 1);
            assert!(a.predator().unwrap().wander_trail.len() <= 8);
        }
    }

    #[test]
    fn does_not_reverse_when_another_way_exists() {
        let (world, eng) = (corridor(6), engine());
        for seed in 0..16 {
            let mut rng = SimRng::new(seed);
            let mut a = predator((2, 1));
            a.motion.last_direction = Cell::new(1, 0);
            a.motion.streak = 5;
            eng.wander(&mut a, &world, &mut rng);
            assert_eq!(a.position(), Cell::new(3, 1));
            assert_eq!(a.motion.streak, 1);
        }
    }

    #[test]
    fn reverses_at_a_dead_end() {
        let (world, eng, mut rng) = (corridor(6), engine(), SimRng::new(0));
        let mut a = predator((5, 1));
        a.motion.last_direction = Cell::new(1, 0);
        eng.wander(&mut a, &world, &mut rng);
        assert_eq!(a.position(), Cell::new(4, 1));
        assert_eq!(a.motion.last_direction, Cell::new(-1, 0));
        assert_eq!(a.predator().unwrap().wander_trail.front(), Some(&Cell::new(4, 1)));
    }

    #[test]
    fn avoids_trail_cells_when_possible() {
        let (world, eng) = (corridor(6), engine());
        for seed in 0..16 {
            let mut rng = SimRng::new(seed);
            let mut a = predator((2, 1));
            a.predator_mut().unwrap().push_trail(Cell::new(3, 1), 8);
            eng.wander(&mut a, &world, &mut rng);
            assert_eq!(a.position(), Cell::new(1, 1));
        }
    }

    #[test]
    fn walled_in_agent_stays() {
        let world = GridWorldBuilder::new(3, 3).border_walls().build().unwrap();
        let (eng, mut rng) = (engine(), SimRng::new(0));
        let mut a = predator((1, 1));
        eng.wander(&mut a, &world, &mut rng);
        assert_eq!(a.position(), Cell::new(1, 1));
        assert_eq!(a.motion.last_direction, Cell::ZERO);
        assert_eq!(a.motion.streak, 5);
    }
}

// ── Path following ────────────────────────────────────────────────────────────

#[cfg(test)]
mod path_following {
    use hunt_agent::BehaviorState;
    use hunt_core::{Cell, SimRng};
    use hunt_spatial::{GridWorldBuilder, Path};

    use super::helpers::{engine, open, predator};
    use crate::advance_along_path;

    fn diagonal(n: i32) -> Path {
        Path::from((0..n).map(|i| Cell::new(i, i)).collect::<Vec<_>>())
    }

    #[test]
    fn sprints_two_cells_along_path() {
        let (world, eng, mut rng) = (open(10, 10), engine(), SimRng::new(0));
        let mut a = predator((0, 0));
        a.state = BehaviorState::Seeking;
        a.motion.set_path(diagonal(4));

        assert_eq!(eng.follow_path(&mut a, &world, &mut rng), 2);
        assert_eq!(a.position(), Cell::new(2, 2));
        assert_eq!(a.motion.path_cursor, 3);
        assert_eq!(a.predator().unwrap().stamina, 4);

        assert_eq!(eng.follow_path(&mut a, &world, &mut rng), 1);
        assert_eq!(a.position(), Cell::new(3, 3));
        assert!(a.motion.path.is_empty());
        assert_eq!(a.motion.turns_since_replan, 2);
        assert_eq!(a.predator().unwrap().stamina, 4);
    }

    #[test]
    fn blocked_step_discards_path_and_wanders() {
        let world = GridWorldBuilder::new(10, 10).obstacle(Cell::new(1, 1)).build().unwrap();
        let (eng, mut rng) = (engine(), SimRng::new(0));
        let mut a = predator((0, 0));
        a.motion.set_path(diagonal(4));

        assert_eq!(eng.follow_path(&mut a, &world, &mut rng), 0);
        assert!(a.motion.path.is_empty());
        assert_eq!(a.motion.turns_since_replan, 2);
        assert_ne!(a.position(), Cell::new(1, 1));
    }

    #[test]
    fn resyncs_when_off_cursor() {
        let world = open(10, 10);
        let mut a = predator((2, 2));
        a.motion.set_path(diagonal(5));
        a.motion.path_cursor = 0;

        assert_eq!(advance_along_path(&mut a.motion, &world, 2, 2), 1);
        assert_eq!(a.position(), Cell::new(3, 3));
        assert_eq!(a.motion.path_cursor, 4);
    }

    #[test]
    fn non_adjacent_waypoint_is_rejected() {
        let world = open(10, 10);
        let mut a = predator((0, 0));
        a.motion.set_path(Path::from(vec![Cell::new(0, 0), Cell::new(2, 0)]));

        assert_eq!(advance_along_path(&mut a.motion, &world, 1, 2), 0);
        assert_eq!(a.position(), Cell::new(0, 0));
        assert!(a.motion.path.is_empty());
    }
}

// ── Stuck detection ───────────────────────────────────────────────────────────

#[cfg(test)]
mod stuck {
    use hunt_agent::{AgentBuilder, BehaviorState};
    use hunt_core::{AgentId, Cell, SimRng, StuckParams};
    use hunt_spatial::{GridWorldBuilder, Path, SpatialIndex};

    use super::helpers::{open, predator};
    use crate::{StuckDetector, StuckOutcome};

    #[test]
    fn fifth_identical_observation_triggers_recovery() {
        let (world, mut rng) = (open(20, 20), SimRng::new(2));
        let mut det = StuckDetector::new(StuckParams::default());
        let mut a = predator((10, 10));
        a.state = BehaviorState::Seeking;
        a.motion.set_path(Path::from(vec![Cell::new(10, 10), Cell::new(11, 10)]));

        for _ in 0..4 {
            assert_eq!(det.observe(&mut a, &world, &mut rng), StuckOutcome::NotStuck);
        }
        assert_eq!(det.counter(a.id), 3);

        let StuckOutcome::Recovered { from, to } = det.observe(&mut a, &world, &mut rng) else {
            panic!("expected recovery");
        };
        assert_eq!(from, Cell::new(10, 10));
        assert_eq!(a.position(), to);
        assert_ne!(to, from);
        assert_eq!(from.chebyshev(to), 2);
        assert!(world.is_walkable(to));
        assert_eq!(a.state, BehaviorState::Wandering);
        assert!(a.motion.path.is_empty());
        assert_eq!(det.counter(a.id), 0);
    }

    #[test]
    fn oscillation_counts_as_stuck() {
        let (world, mut rng) = (open(20, 20), SimRng::new(2));
        let mut det = StuckDetector::new(StuckParams::default());
        let mut a = predator((5, 5));
        for i in 0..4 {
            a.motion.position = if i % 2 == 0 { Cell::new(5, 5) } else { Cell::new(6, 5) };
            det.observe(&mut a, &world, &mut rng);
        }
        assert_eq!(det.counter(a.id), 1);
    }

    #[test]
    fn progress_resets_counter() {
        let (world, mut rng) = (open(20, 20), SimRng::new(2));
        let mut det = StuckDetector::new(StuckParams::default());
        let mut a = predator((5, 5));
        for _ in 0..3 {
            det.observe(&mut a, &world, &mut rng);
        }
        assert_eq!(det.counter(a.id), 2);
        a.motion.position = Cell::new(6, 6);
        det.observe(&mut a, &world, &mut rng);
        assert_eq!(det.counter(a.id), 0);
    }

    #[test]
    fn resting_in_place_is_still_recovered() {
        let (world, mut rng) = (open(20, 20), SimRng::new(2));
        let mut det = StuckDetector::new(StuckParams::default());
        let mut a = predator((5, 5));
        a.state = BehaviorState::Resting;

        for _ in 0..4 {
            assert_eq!(det.observe(&mut a, &world, &mut rng), StuckOutcome::NotStuck);
        }
        assert_eq!(det.counter(a.id), 3);

        let StuckOutcome::Recovered { from, to } = det.observe(&mut a, &world, &mut rng) else {
            panic!("a resting predator pinned for five observations must be relocated");
        };
        assert_eq!(from, Cell::new(5, 5));
        assert_ne!(to, from);
        assert!(world.is_walkable(to));
        assert_eq!(a.state, BehaviorState::Wandering);
        assert_eq!(det.counter(a.id), 0);
    }

    #[test]
    fn escalates_to_wide_square_scan() {
        // Solid rock apart from one cell that only the wide scan reaches.
        let here = Cell::new(10, 10);
        let open_cell = Cell::new(13, 14);
        let walls = (0..21)
            .flat_map(|y| (0..21).map(move |x| Cell::new(x, y)))
            .filter(|&c| c != here && c != open_cell);
        let world = GridWorldBuilder::new(21, 21).obstacles(walls).build().unwrap();
        let mut rng = SimRng::new(4);
        let mut det = StuckDetector::new(StuckParams::default());
        let mut a = predator((10, 10));

        let outcomes: Vec<StuckOutcome> = (0..10).map(|_| det.observe(&mut a, &world, &mut rng)).collect();
        assert!(outcomes[4..9].iter().all(|o| *o == StuckOutcome::StillStuck));
        assert_eq!(det.counter(a.id), 0);
        assert_eq!(outcomes[9], StuckOutcome::Recovered { from: here, to: open_cell });
        assert_eq!(a.position(), open_cell);
    }

    #[test]
    fn escalates_to_long_jumps() {
        let here = Cell::new(10, 10);
        let ring: Vec<Cell> = hunt_core::COMPASS.iter().map(|&d| here.step(d, 2)).collect();
        let world = GridWorldBuilder::new(20, 20).obstacles(ring).build().unwrap();
        let mut rng = SimRng::new(4);
        let mut det = StuckDetector::new(StuckParams::default());
        let mut a = predator((10, 10));

        let outcomes: Vec<StuckOutcome> = (0..7).map(|_| det.observe(&mut a, &world, &mut rng)).collect();
        assert_eq!(outcomes[4], StuckOutcome::StillStuck);
        assert_eq!(outcomes[5], StuckOutcome::StillStuck);
        let StuckOutcome::Recovered { to, .. } = outcomes[6] else {
            panic!("expected recovery on the seventh observation");
        };
        let jump = to - here;
        assert!(matches!((jump.x.abs(), jump.y.abs()), (3, 0) | (0, 3) | (2, 2)));
    }

    #[test]
    fn tracked_set_is_bounded() {
        let (world, mut rng) = (open(20, 20), SimRng::new(2));
        let params = StuckParams { max_tracked: 2, ..StuckParams::default() };
        let mut det = StuckDetector::new(params);
        for i in 0..3 {
            let mut a = AgentBuilder::predator(AgentId(i), Cell::new(3, 3)).build().unwrap();
            for _ in 0..10 {
                det.observe(&mut a, &world, &mut rng);
            }
        }
        assert_eq!(det.tracked(), 2);
        assert_eq!(det.counter(AgentId(2)), 0);
    }
}
