#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use skirmish_core::constants::*;
    use skirmish_core::enums::{BehaviorState, EnemyClass};
    use skirmish_core::types::{Position, Velocity};

    use crate::fsm::{evaluate, wants_to_fire, ShipContext};
    use crate::profiles::get_profile;

    /// Ship at the origin, player `distance` units down the -z axis.
    fn make_context(class: EnemyClass, state: BehaviorState, distance: f64) -> ShipContext {
        let profile = get_profile(class);
        ShipContext {
            class,
            state,
            position: Position::default(),
            velocity: Velocity::default(),
            heading: 0.0,
            health: profile.max_health,
            max_health: profile.max_health,
            patrol_center: Position::default(),
            patrol_angle: 0.0,
            player_position: Position::new(0.0, 0.0, -distance),
            dt: NOMINAL_DT,
        }
    }

    #[test]
    fn test_profiles_match_class_table() {
        let pirate = get_profile(EnemyClass::Pirate);
        assert_eq!(pirate.name, "Pirate Raider");
        assert_eq!(pirate.max_health, 50.0);
        assert_eq!(pirate.aggression_range, 300.0);

        let mcrn = get_profile(EnemyClass::Mcrn);
        assert_eq!(mcrn.max_speed, 120.0);
        assert_eq!(mcrn.aggression_range, 400.0);

        let opa = get_profile(EnemyClass::Opa);
        assert_eq!(opa.size, 0.6);
        assert_eq!(opa.max_health, 30.0);
    }

    #[test]
    fn test_patrol_to_chase_inside_aggression_range() {
        let ctx = make_context(EnemyClass::Pirate, BehaviorState::Patrol, 299.0);
        let update = evaluate(&ctx);
        assert!(update.state_changed);
        assert_eq!(update.new_state, BehaviorState::Chase);
    }

    #[test]
    fn test_patrol_stays_outside_aggression_range() {
        let ctx = make_context(EnemyClass::Pirate, BehaviorState::Patrol, 301.0);
        let update = evaluate(&ctx);
        assert!(!update.state_changed);
        assert_eq!(update.new_state, BehaviorState::Patrol);
    }

    #[test]
    fn test_patrol_advances_patrol_angle() {
        let mut ctx = make_context(EnemyClass::Pirate, BehaviorState::Patrol, 1000.0);
        ctx.dt = 0.5;
        let update = evaluate(&ctx);
        assert!((update.patrol_angle - 0.5 * PATROL_ANGULAR_RATE).abs() < 1e-12);
        assert!(update.new_velocity.speed() > 0.0, "patrol should move toward waypoint");
    }

    /// Entering Chase at 299 and drifting back out past 300 keeps chasing
    /// until the distance exceeds 450.
    #[test]
    fn test_chase_hysteresis() {
        for distance in [301.0, 350.0, 449.0, 450.0] {
            let ctx = make_context(EnemyClass::Pirate, BehaviorState::Chase, distance);
            let update = evaluate(&ctx);
            assert_eq!(
                update.new_state,
                BehaviorState::Chase,
                "should still chase at {distance}"
            );
        }
        let ctx = make_context(EnemyClass::Pirate, BehaviorState::Chase, 450.5);
        assert_eq!(evaluate(&ctx).new_state, BehaviorState::Patrol);
    }

    #[test]
    fn test_chase_to_attack_when_close() {
        let ctx = make_context(EnemyClass::Mcrn, BehaviorState::Chase, 149.0);
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, BehaviorState::Attack);
    }

    #[test]
    fn test_chase_steers_toward_player() {
        let ctx = make_context(EnemyClass::Opa, BehaviorState::Chase, 180.0);
        let update = evaluate(&ctx);
        // Player is along -z; smoothed velocity points that way.
        assert!(update.new_velocity.z < 0.0);
        assert!(update.new_velocity.x.abs() < 1e-9);
        let expected = get_profile(EnemyClass::Opa).max_speed * VELOCITY_SMOOTHING;
        assert!((update.new_velocity.speed() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_attack_to_chase_when_player_pulls_away() {
        let ctx = make_context(EnemyClass::Pirate, BehaviorState::Attack, 201.0);
        assert_eq!(evaluate(&ctx).new_state, BehaviorState::Chase);
    }

    #[test]
    fn test_attack_to_flee_when_badly_damaged() {
        let mut ctx = make_context(EnemyClass::Pirate, BehaviorState::Attack, 120.0);
        ctx.health = ctx.max_health * 0.19;
        assert_eq!(evaluate(&ctx).new_state, BehaviorState::Flee);
    }

    #[test]
    fn test_attack_holds_at_flee_threshold() {
        let mut ctx = make_context(EnemyClass::Pirate, BehaviorState::Attack, 120.0);
        ctx.health = ctx.max_health * FLEE_HEALTH_FRACTION;
        assert_eq!(evaluate(&ctx).new_state, BehaviorState::Attack);
    }

    #[test]
    fn test_attack_approaches_slowly() {
        let mut ctx = make_context(EnemyClass::Mcrn, BehaviorState::Attack, 120.0);
        // Start at the chase speed steady state.
        ctx.velocity = Velocity::new(0.0, 0.0, -120.0);
        let update = evaluate(&ctx);
        assert!(update.new_velocity.speed() < 120.0);
        assert!(update.new_velocity.speed() > 120.0 * ATTACK_SPEED_FACTOR);
    }

    #[test]
    fn test_flee_moves_away_from_player() {
        let mut ctx = make_context(EnemyClass::Pirate, BehaviorState::Flee, 100.0);
        ctx.health = 5.0;
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, BehaviorState::Flee);
        // Player is at -z, so fleeing heads +z.
        assert!(update.new_velocity.z > 0.0);
    }

    #[test]
    fn test_flee_to_patrol_resets_patrol_center() {
        let mut ctx = make_context(EnemyClass::Pirate, BehaviorState::Flee, 601.0);
        ctx.position = Position::new(10.0, 0.0, 0.0);
        ctx.player_position = Position::new(10.0, 0.0, -601.0);
        ctx.patrol_center = Position::new(-500.0, 0.0, -500.0);
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, BehaviorState::Patrol);
        assert_eq!(update.patrol_center, ctx.position);
    }

    #[test]
    fn test_flee_stays_until_twice_aggression_range() {
        let ctx = make_context(EnemyClass::Pirate, BehaviorState::Flee, 599.0);
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, BehaviorState::Flee);
        assert_eq!(update.patrol_center, ctx.patrol_center);
    }

    #[test]
    fn test_heading_turns_shortest_way() {
        // Ship faces just short of +PI, target is just past -PI: the short
        // turn crosses the wrap rather than spinning the long way round.
        let mut ctx = make_context(EnemyClass::Pirate, BehaviorState::Chase, 200.0);
        ctx.heading = PI - 0.1;
        ctx.player_position = Position::new((0.1f64).sin() * 200.0, 0.0, (0.1f64).cos() * 200.0);
        let update = evaluate(&ctx);
        let target = update.target_heading;
        assert!((target - (-PI + 0.1)).abs() < 1e-9, "target heading {target}");
        // Moved toward the wrap, not back through zero.
        let moved = update.new_heading;
        assert!(moved > PI - 0.1 || moved < -PI + 0.1, "heading {moved}");
    }

    #[test]
    fn test_heading_converges() {
        let mut ctx = make_context(EnemyClass::Mcrn, BehaviorState::Chase, 200.0);
        ctx.heading = 1.0;
        for _ in 0..600 {
            let update = evaluate(&ctx);
            ctx.heading = update.new_heading;
        }
        assert!(ctx.heading.abs() < 1e-3, "heading {}", ctx.heading);
    }

    #[test]
    fn test_wants_to_fire_only_when_attacking_in_range() {
        assert!(wants_to_fire(BehaviorState::Attack, 150.0));
        assert!(!wants_to_fire(BehaviorState::Attack, ENEMY_FIRE_RANGE + 1.0));
        assert!(!wants_to_fire(BehaviorState::Chase, 100.0));
        assert!(!wants_to_fire(BehaviorState::Flee, 50.0));
    }
}
