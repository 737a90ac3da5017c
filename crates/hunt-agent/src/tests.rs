//! Unit tests for hunt-agent.

#[cfg(test)]
mod builder {
    use hunt_core::{AgentId, Cell, PredatorParams, PreyParams};
    use crate::{AgentBuilder, AgentError, BehaviorState};

    #[test]
    fn predator_defaults() {
        let a = AgentBuilder::predator(AgentId(0), Cell::new(1, 1)).build().unwrap();
        let p = a.predator().unwrap();
        assert!(a.is_predator());
        assert_eq!(a.state, BehaviorState::Wandering);
        assert_eq!(a.motion.speed, 2);
        assert_eq!(p.stamina, 5);
        assert_eq!(p.max_stamina, 5);
        assert_eq!(p.stamina_recharge_time, 10);
        assert!(!p.is_stunned());
        assert!(a.prey().is_none());
    }

    #[test]
    fn prey_defaults() {
        let a = AgentBuilder::prey(AgentId(3), Cell::new(4, 2)).build().unwrap();
        let p = a.prey().unwrap();
        assert_eq!(a.motion.speed, 1);
        assert_eq!(p.fear, 0.0);
        assert_eq!(p.evasion_chance, 0.35);
        assert!(!a.is_stunned());
    }

    #[test]
    fn params_override_defaults() {
        let pp = PredatorParams { max_stamina: 8, base_speed: 3, ..PredatorParams::default() };
        let a = AgentBuilder::predator(AgentId(0), Cell::ZERO)
            .stamina(2)
            .params(&pp)
            .build()
            .unwrap();
        assert_eq!(a.motion.speed, 3);
        assert_eq!(a.predator().unwrap().stamina, 2);
        assert_eq!(a.predator().unwrap().max_stamina, 8);

        let qp = PreyParams { fear_increase_rate: 20.0, ..PreyParams::default() };
        let b = AgentBuilder::prey(AgentId(1), Cell::ZERO).params(&qp).build().unwrap();
        assert_eq!(b.prey().unwrap().fear_increase_rate, 20.0);
    }

    #[test]
    fn rejects_zero_maxima() {
        let err = AgentBuilder::predator(AgentId(0), Cell::ZERO).max_stamina(0).build().unwrap_err();
        assert_eq!(err, AgentError::ZeroMaximum("max_stamina"));
        let err = AgentBuilder::prey(AgentId(0), Cell::ZERO).max_fear(0.0).build().unwrap_err();
        assert_eq!(err, AgentError::ZeroMaximum("max_fear"));
    }

    #[test]
    fn rejects_bad_evasion_and_speed() {
        let err = AgentBuilder::prey(AgentId(0), Cell::ZERO).evasion_chance(1.2).build().unwrap_err();
        assert_eq!(err, AgentError::EvasionOutOfRange(1.2));
        let err = AgentBuilder::prey(AgentId(0), Cell::ZERO).speed(0).build().unwrap_err();
        assert_eq!(err, AgentError::NonPositiveSpeed(0));
    }

    #[test]
    fn rejects_resources_above_maximum() {
        assert!(AgentBuilder::predator(AgentId(0), Cell::ZERO).stamina(6).build().is_err());
        assert!(AgentBuilder::prey(AgentId(0), Cell::ZERO).fear(101.0).build().is_err());
        assert!(AgentBuilder::prey(AgentId(0), Cell::ZERO).fear(-1.0).build().is_err());
    }

    #[test]
    fn rejects_invalid_id() {
        let err = AgentBuilder::prey(AgentId::INVALID, Cell::ZERO).build().unwrap_err();
        assert_eq!(err, AgentError::InvalidId);
    }
}

#[cfg(test)]
mod agent {
    use hunt_core::{AgentId, Cell};
    use hunt_spatial::Path;
    use crate::{AgentBuilder, BehaviorState};

    #[test]
    fn leaving_wandering_clears_trail() {
        let mut a = AgentBuilder::predator(AgentId(0), Cell::ZERO).build().unwrap();
        a.predator_mut().unwrap().push_trail(Cell::new(1, 0), 8);
        assert_eq!(a.enter(BehaviorState::Wandering), BehaviorState::Wandering);
        assert_eq!(a.predator().unwrap().wander_trail.len(), 1);
        assert_eq!(a.enter(BehaviorState::Seeking), BehaviorState::Wandering);
        assert!(a.predator().unwrap().wander_trail.is_empty());
    }

    #[test]
    fn trail_is_bounded_most_recent_first() {
        let mut a = AgentBuilder::predator(AgentId(0), Cell::ZERO).build().unwrap();
        let p = a.predator_mut().unwrap();
        for x in 0..10 {
            p.push_trail(Cell::new(x, 0), 8);
        }
        p.push_trail(Cell::new(9, 0), 8);
        assert_eq!(p.wander_trail.len(), 8);
        assert_eq!(p.wander_trail.front(), Some(&Cell::new(9, 0)));
        assert_eq!(p.wander_trail.back(), Some(&Cell::new(2, 0)));
        assert!(!p.on_trail(Cell::new(1, 0)));
    }

    #[test]
    fn fear_stays_in_range() {
        let mut a = AgentBuilder::prey(AgentId(0), Cell::ZERO).fear(95.0).build().unwrap();
        let p = a.prey_mut().unwrap();
        p.raise_fear();
        assert_eq!(p.fear, 100.0);
        assert_eq!(p.fear_ratio(), 1.0);
        p.fear = 4.0;
        p.calm(2.0);
        assert_eq!(p.fear, 0.0);
    }

    #[test]
    fn path_cursor_starts_after_origin() {
        let mut a = AgentBuilder::prey(AgentId(0), Cell::ZERO).build().unwrap();
        a.motion.set_path(Path::from(vec![Cell::ZERO, Cell::new(1, 0)]));
        assert_eq!(a.motion.next_waypoint(), Some(Cell::new(1, 0)));
        a.motion.path_cursor = 2;
        assert!(a.motion.path_exhausted());
        a.motion.invalidate_path(2);
        assert!(a.motion.path.is_empty());
        assert_eq!(a.motion.turns_since_replan, 2);
    }

    #[test]
    fn tired_below_half() {
        let mut a = AgentBuilder::predator(AgentId(0), Cell::ZERO).build().unwrap();
        let p = a.predator_mut().unwrap();
        p.stamina = 1;
        assert!(p.is_tired());
        p.stamina = 2;
        assert!(!p.is_tired());
        assert_eq!(BehaviorState::SearchingLastKnown.to_string(), "SEARCHING_LAST_KNOWN");
    }
}
