//! Tests for behavior routines, profiles and steering math.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use maskfall_core::components::BehaviorState;
use maskfall_core::constants::*;
use maskfall_core::enums::AgentKind;

use crate::behavior::{evaluate, initial_state, on_obstacle_contact, BehaviorContext};
use crate::profiles::get_profile;
use crate::steering::{facing_angle, random_interval, reflect};

const EPS: f32 = 1e-5;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn ctx(position: Vec2, reference: Option<Vec2>, dt: f32) -> BehaviorContext {
    BehaviorContext {
        position,
        reference,
        dt,
    }
}

fn assert_vec_eq(a: Vec2, b: Vec2) {
    assert!((a - b).length() < EPS, "expected {b:?}, got {a:?}");
}

// ---- Steering ----

#[test]
fn test_reflect_parallel_normal_is_unchanged() {
    // Normal perpendicular to motion: nothing to bounce off.
    assert_vec_eq(reflect(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)), Vec2::new(1.0, 0.0));
}

#[test]
fn test_reflect_head_on_reverses() {
    assert_vec_eq(reflect(Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0)), Vec2::new(-1.0, 0.0));
}

#[test]
fn test_reflect_diagonal_and_unnormalized_normal() {
    let out = reflect(Vec2::new(1.0, -1.0), Vec2::new(0.0, 4.0));
    assert_vec_eq(out, Vec2::new(1.0, 1.0));
    assert_vec_eq(reflect(Vec2::X, Vec2::ZERO), Vec2::X);
}

#[test]
fn test_facing_angle_forward_axis() {
    // Moving up means no rotation; moving right is a quarter turn clockwise.
    assert!(facing_angle(Vec2::Y).abs() < EPS);
    assert!((facing_angle(Vec2::X) + FRAC_PI_2).abs() < EPS);
    assert!((facing_angle(Vec2::new(-1.0, 0.0)) - FRAC_PI_2).abs() < EPS);
    assert!((facing_angle(-Vec2::Y) + PI).abs() < EPS);
}

#[test]
fn test_random_interval_bounds() {
    let mut rng = rng();
    for _ in 0..1000 {
        let v = random_interval(&mut rng, 1.0, 3.0);
        assert!((1.0..3.0).contains(&v));
    }
    assert_eq!(random_interval(&mut rng, 2.0, 2.0), 2.0);
}

// ---- Profiles ----

#[test]
fn test_profiles_match_kind_roles() {
    for kind in AgentKind::ALL {
        let profile = get_profile(kind);
        assert!(profile.health > 0.0);
        assert_eq!(kind.fires(), profile.shoot_interval > 0.0);
    }
    assert_eq!(get_profile(AgentKind::Turret).move_speed, 0.0);
    assert!(get_profile(AgentKind::Hunter).retreat_when_too_close);
}

#[test]
fn test_initial_states() {
    let mut rng = rng();
    match initial_state(AgentKind::Wanderer, &mut rng) {
        BehaviorState::Wanderer { direction, timer } => {
            assert!((direction.length() - 1.0).abs() < EPS);
            assert!((WANDERER_MIN_DIRECTION_INTERVAL..WANDERER_MAX_DIRECTION_INTERVAL)
                .contains(&timer));
        }
        other => panic!("unexpected state {other:?}"),
    }
    assert_eq!(
        initial_state(AgentKind::Turret, &mut rng),
        BehaviorState::Turret {
            shoot_timer: TURRET_SHOOT_INTERVAL
        }
    );
    assert_eq!(
        initial_state(AgentKind::Hunter, &mut rng),
        BehaviorState::Hunter {
            shoot_timer: HUNTER_SHOOT_INTERVAL * 0.5
        }
    );
}

// ---- Wanderer ----

#[test]
fn test_wanderer_holds_direction_until_timer_expires() {
    let mut rng = rng();
    let mut state = BehaviorState::Wanderer {
        direction: Vec2::X,
        timer: 1.0,
    };
    let update = evaluate(&ctx(Vec2::ZERO, None, 0.5), &mut state, &mut rng);
    assert_vec_eq(update.velocity, Vec2::X * WANDERER_SPEED);
    assert!((update.facing.unwrap() + FRAC_PI_2).abs() < EPS);
    assert!(update.fire.is_none());

    let update = evaluate(&ctx(Vec2::ZERO, None, 0.6), &mut state, &mut rng);
    match state {
        BehaviorState::Wanderer { direction, timer } => {
            assert!((direction.length() - 1.0).abs() < EPS);
            assert!(timer >= WANDERER_MIN_DIRECTION_INTERVAL);
            assert_vec_eq(update.velocity, direction * WANDERER_SPEED);
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_wanderer_bounces_off_obstacle() {
    let mut state = BehaviorState::Wanderer {
        direction: Vec2::X,
        timer: 2.0,
    };
    on_obstacle_contact(&mut state, Vec2::new(1.0, 0.0));
    assert_eq!(
        state,
        BehaviorState::Wanderer {
            direction: Vec2::new(-1.0, 0.0),
            timer: 2.0
        }
    );

    let mut chaser = BehaviorState::Chaser;
    on_obstacle_contact(&mut chaser, Vec2::Y);
    assert_eq!(chaser, BehaviorState::Chaser);
}

// ---- Chaser ----

#[test]
fn test_chaser_pursues_inside_band() {
    let mut rng = rng();
    let mut state = BehaviorState::Chaser;
    let update = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(0.0, 5.0)), DT),
        &mut state,
        &mut rng,
    );
    assert_vec_eq(update.velocity, Vec2::Y * CHASER_SPEED);
    assert!(update.facing.unwrap().abs() < EPS);
}

#[test]
fn test_chaser_idle_outside_band() {
    let mut rng = rng();
    let mut state = BehaviorState::Chaser;
    let far = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(CHASER_DETECTION_RANGE + 1.0, 0.0)), DT),
        &mut state,
        &mut rng,
    );
    assert_eq!(far.velocity, Vec2::ZERO);
    assert!(far.facing.is_none());

    let close = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(CHASER_STOP_DISTANCE, 0.0)), DT),
        &mut state,
        &mut rng,
    );
    assert_eq!(close.velocity, Vec2::ZERO);

    let absent = evaluate(&ctx(Vec2::ZERO, None, DT), &mut state, &mut rng);
    assert_eq!(absent.velocity, Vec2::ZERO);
}

// ---- Turret ----

#[test]
fn test_turret_fires_on_interval_when_in_range() {
    let mut rng = rng();
    let mut state = initial_state(AgentKind::Turret, &mut rng);
    let target = Vec2::new(4.0, 0.0);

    let first = evaluate(&ctx(Vec2::ZERO, Some(target), 1.0), &mut state, &mut rng);
    assert_eq!(first.velocity, Vec2::ZERO);
    assert!(first.fire.is_none());
    assert!((first.facing.unwrap() + FRAC_PI_2).abs() < EPS);

    let second = evaluate(&ctx(Vec2::ZERO, Some(target), 1.0), &mut state, &mut rng);
    let shot = second.fire.expect("turret should fire after a full interval");
    assert_vec_eq(shot.direction, Vec2::X);
    assert_vec_eq(shot.origin, Vec2::X * FIRE_POINT_OFFSET);
    assert_eq!(shot.speed, TURRET_PROJECTILE_SPEED);
    assert_eq!(shot.lifetime, PROJECTILE_LIFETIME);
    assert_eq!(
        state,
        BehaviorState::Turret {
            shoot_timer: TURRET_SHOOT_INTERVAL
        }
    );
}

#[test]
fn test_turret_cooldown_frozen_out_of_range() {
    let mut rng = rng();
    let mut state = BehaviorState::Turret { shoot_timer: 0.5 };
    let update = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(TURRET_SHOOT_RANGE + 0.1, 0.0)), 1.0),
        &mut state,
        &mut rng,
    );
    assert!(update.fire.is_none());
    assert!(update.facing.is_some());
    assert_eq!(state, BehaviorState::Turret { shoot_timer: 0.5 });

    let absent = evaluate(&ctx(Vec2::ZERO, None, 1.0), &mut state, &mut rng);
    assert!(absent.fire.is_none());
    assert!(absent.facing.is_none());
}

// ---- Hunter ----

#[test]
fn test_hunter_approaches_when_far() {
    let mut rng = rng();
    let mut state = BehaviorState::Hunter { shoot_timer: 10.0 };
    let update = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(10.0, 0.0)), DT),
        &mut state,
        &mut rng,
    );
    assert_vec_eq(update.velocity, Vec2::X * HUNTER_SPEED);
    assert!(update.fire.is_none(), "10 units is outside shoot range");
}

#[test]
fn test_hunter_retreats_when_too_close() {
    let mut rng = rng();
    let mut state = BehaviorState::Hunter { shoot_timer: 10.0 };
    let update = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(1.0, 0.0)), DT),
        &mut state,
        &mut rng,
    );
    assert_vec_eq(update.velocity, -Vec2::X * HUNTER_SPEED * 0.5);
    // Still faces the reference while backing off.
    assert!((update.facing.unwrap() + FRAC_PI_2).abs() < EPS);
}

#[test]
fn test_hunter_strafes_in_preferred_band() {
    let mut rng = rng();
    let mut state = BehaviorState::Hunter { shoot_timer: 10.0 };
    let update = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(4.0, 0.0)), DT),
        &mut state,
        &mut rng,
    );
    assert_vec_eq(update.velocity, Vec2::Y * HUNTER_SPEED * 0.5);
    assert!(update.velocity.dot(Vec2::X).abs() < EPS);
}

#[test]
fn test_hunter_idle_outside_chase_range() {
    let mut rng = rng();
    let mut state = BehaviorState::Hunter { shoot_timer: 0.1 };
    let update = evaluate(
        &ctx(Vec2::ZERO, Some(Vec2::new(HUNTER_CHASE_RANGE + 1.0, 0.0)), DT),
        &mut state,
        &mut rng,
    );
    assert_eq!(update.velocity, Vec2::ZERO);
    assert!(update.fire.is_none());
    assert!(update.facing.is_some());
}

#[test]
fn test_hunter_fires_toward_current_reference() {
    let mut rng = rng();
    let mut state = initial_state(AgentKind::Hunter, &mut rng);
    let origin = Vec2::new(1.0, 1.0);
    let target = Vec2::new(1.0, 7.0);

    // First shot after half an interval.
    let update = evaluate(
        &ctx(origin, Some(target), HUNTER_SHOOT_INTERVAL * 0.5),
        &mut state,
        &mut rng,
    );
    let shot = update.fire.expect("hunter should fire");
    assert_vec_eq(shot.direction, Vec2::Y);
    assert_eq!(shot.speed, HUNTER_PROJECTILE_SPEED);
    assert_eq!(
        state,
        BehaviorState::Hunter {
            shoot_timer: HUNTER_SHOOT_INTERVAL
        }
    );
}
