//! Enemy behavior finite state machine.
//!
//! Pure functions that compute state transitions, steering and facing for a
//! single enemy ship from its class profile and the player's position.
//! No pool or world dependency; operates on plain data.
//!
//! Transition distances are measured before this step's movement.

use glam::DVec3;

use skirmish_core::constants::*;
use skirmish_core::enums::{BehaviorState, EnemyClass};
use skirmish_core::types::{normalize_angle, Position, Velocity};

use crate::profiles::{get_profile, ShipProfile};

/// Input to the FSM for a single ship.
pub struct ShipContext {
    pub class: EnemyClass,
    pub state: BehaviorState,
    pub position: Position,
    pub velocity: Velocity,
    pub heading: f64,
    pub health: f64,
    pub max_health: f64,
    pub patrol_center: Position,
    pub patrol_angle: f64,
    pub player_position: Position,
    /// Step length (seconds).
    pub dt: f64,
}

/// Output from the FSM. Position integration is left to the caller.
pub struct ShipUpdate {
    pub new_state: BehaviorState,
    pub new_velocity: Velocity,
    pub new_heading: f64,
    pub target_heading: f64,
    pub patrol_center: Position,
    pub patrol_angle: f64,
    pub state_changed: bool,
}

/// Evaluate the FSM for one ship.
pub fn evaluate(ctx: &ShipContext) -> ShipUpdate {
    let profile = get_profile(ctx.class);
    let distance = ctx.position.range_to(&ctx.player_position);

    let mut patrol_angle = ctx.patrol_angle;
    let mut patrol_center = ctx.patrol_center;

    let (steer_target, speed_factor, next_state) = match ctx.state {
        BehaviorState::Patrol => {
            patrol_angle += ctx.dt * PATROL_ANGULAR_RATE;
            let waypoint = Position::new(
                patrol_center.x + patrol_angle.cos() * PATROL_RADIUS,
                patrol_center.y,
                patrol_center.z + patrol_angle.sin() * PATROL_RADIUS,
            );
            (waypoint, 1.0, next_from_patrol(profile, distance))
        }
        BehaviorState::Chase => (ctx.player_position, 1.0, next_from_chase(profile, distance)),
        BehaviorState::Attack => (
            ctx.player_position,
            ATTACK_SPEED_FACTOR,
            next_from_attack(distance, ctx.health, ctx.max_health),
        ),
        BehaviorState::Flee => {
            let away = (ctx.position.as_dvec3() - ctx.player_position.as_dvec3()).normalize_or_zero();
            let escape_point = Position::from(ctx.position.as_dvec3() + away * 100.0);
            let next = next_from_flee(profile, distance);
            if next == BehaviorState::Patrol {
                patrol_center = ctx.position;
            }
            (escape_point, FLEE_SPEED_FACTOR, next)
        }
    };

    let (new_velocity, new_heading, target_heading) =
        steer(ctx, profile, &steer_target, speed_factor);

    ShipUpdate {
        new_state: next_state,
        new_velocity,
        new_heading,
        target_heading,
        patrol_center,
        patrol_angle,
        state_changed: next_state != ctx.state,
    }
}

fn next_from_patrol(profile: &ShipProfile, distance: f64) -> BehaviorState {
    if distance < profile.aggression_range {
        BehaviorState::Chase
    } else {
        BehaviorState::Patrol
    }
}

fn next_from_chase(profile: &ShipProfile, distance: f64) -> BehaviorState {
    if distance < ATTACK_ENTER_RANGE {
        BehaviorState::Attack
    } else if distance > profile.aggression_range * CHASE_GIVE_UP_FACTOR {
        BehaviorState::Patrol
    } else {
        BehaviorState::Chase
    }
}

/// Breaking off to chase wins over fleeing when both apply.
fn next_from_attack(distance: f64, health: f64, max_health: f64) -> BehaviorState {
    if distance > ATTACK_EXIT_RANGE {
        BehaviorState::Chase
    } else if health < max_health * FLEE_HEALTH_FRACTION {
        BehaviorState::Flee
    } else {
        BehaviorState::Attack
    }
}

fn next_from_flee(profile: &ShipProfile, distance: f64) -> BehaviorState {
    if distance > profile.aggression_range * FLEE_SAFE_FACTOR {
        BehaviorState::Patrol
    } else {
        BehaviorState::Flee
    }
}

/// Smooth the velocity toward the target and turn the ship to face it.
/// Returns (velocity, heading, target heading).
fn steer(
    ctx: &ShipContext,
    profile: &ShipProfile,
    target: &Position,
    speed_factor: f64,
) -> (Velocity, f64, f64) {
    let offset = target.as_dvec3() - ctx.position.as_dvec3();
    let direction = offset.normalize_or_zero();
    let desired = direction * profile.max_speed * speed_factor;
    let velocity = ctx.velocity.as_dvec3().lerp(desired, VELOCITY_SMOOTHING);

    if direction == DVec3::ZERO {
        return (velocity.into(), ctx.heading, ctx.heading);
    }

    let target_heading = ctx.position.heading_to(target);
    let error = normalize_angle(target_heading - ctx.heading);
    let turn = (ctx.dt * TURN_RATE).min(1.0);
    let heading = normalize_angle(ctx.heading + error * turn);

    (velocity.into(), heading, target_heading)
}

/// Whether a ship in `state` at `distance` from the player takes a shot when
/// its fire cooldown allows.
pub fn wants_to_fire(state: BehaviorState, distance: f64) -> bool {
    state == BehaviorState::Attack && distance <= ENEMY_FIRE_RANGE
}
