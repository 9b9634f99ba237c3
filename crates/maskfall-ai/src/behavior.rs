//! Agent behavior routines.
//!
//! Pure functions that compute a velocity intent, facing and fire request for
//! one agent from its variant state and the reference entity's position.
//! No ECS dependency; operates on plain data.

use glam::Vec2;
use rand::Rng;

use maskfall_core::components::BehaviorState;
use maskfall_core::constants::FIRE_POINT_OFFSET;
use maskfall_core::enums::AgentKind;

use crate::profiles::{get_profile, BehaviorProfile};
use crate::steering::{
    direction_to, facing_angle, perpendicular, random_interval, random_unit, reflect,
};

/// Input to a behavior routine for a single agent.
pub struct BehaviorContext {
    pub position: Vec2,
    /// Reference entity position, if one is present in the arena.
    pub reference: Option<Vec2>,
    /// Seconds since the previous evaluation.
    pub dt: f32,
}

/// A request to spawn one projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireRequest {
    /// Fire point in world space.
    pub origin: Vec2,
    /// Unit direction of travel.
    pub direction: Vec2,
    pub speed: f32,
    pub damage: f32,
    pub lifetime: f32,
}

/// Output from a behavior routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorUpdate {
    pub velocity: Vec2,
    /// New facing angle, or `None` to keep the current one.
    pub facing: Option<f32>,
    pub fire: Option<FireRequest>,
}

impl BehaviorUpdate {
    fn idle() -> Self {
        Self {
            velocity: Vec2::ZERO,
            facing: None,
            fire: None,
        }
    }
}

/// Build the starting variant state for a freshly spawned agent.
pub fn initial_state<R: Rng + ?Sized>(kind: AgentKind, rng: &mut R) -> BehaviorState {
    let profile = get_profile(kind);
    match kind {
        AgentKind::Wanderer => BehaviorState::Wanderer {
            direction: random_unit(rng),
            timer: random_interval(
                rng,
                profile.min_direction_interval,
                profile.max_direction_interval,
            ),
        },
        AgentKind::Chaser => BehaviorState::Chaser,
        AgentKind::Turret => BehaviorState::Turret {
            shoot_timer: profile.shoot_interval,
        },
        // Hunters open fire sooner than turrets.
        AgentKind::Hunter => BehaviorState::Hunter {
            shoot_timer: profile.shoot_interval * 0.5,
        },
    }
}

/// Evaluate one agent's variant. Mutates the variant-local timers in `state`.
pub fn evaluate<R: Rng + ?Sized>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    let profile = get_profile(state.kind());

    match state {
        BehaviorState::Wanderer { direction, timer } => {
            evaluate_wanderer(ctx, &profile, direction, timer, rng)
        }
        BehaviorState::Chaser => evaluate_chaser(ctx, &profile),
        BehaviorState::Turret { shoot_timer } => evaluate_turret(ctx, &profile, shoot_timer),
        BehaviorState::Hunter { shoot_timer } => evaluate_hunter(ctx, &profile, shoot_timer),
    }
}

/// React to a contact with a non-reference obstacle.
/// Wanderers bounce; every other variant ignores obstacles.
pub fn on_obstacle_contact(state: &mut BehaviorState, normal: Vec2) {
    if let BehaviorState::Wanderer { direction, .. } = state {
        *direction = reflect(*direction, normal);
    }
}

fn evaluate_wanderer<R: Rng + ?Sized>(
    ctx: &BehaviorContext,
    profile: &BehaviorProfile,
    direction: &mut Vec2,
    timer: &mut f32,
    rng: &mut R,
) -> BehaviorUpdate {
    *timer -= ctx.dt;
    if *timer <= 0.0 {
        *direction = random_unit(rng);
        *timer = random_interval(
            rng,
            profile.min_direction_interval,
            profile.max_direction_interval,
        );
    }

    BehaviorUpdate {
        velocity: *direction * profile.move_speed,
        facing: face(*direction),
        fire: None,
    }
}

fn evaluate_chaser(ctx: &BehaviorContext, profile: &BehaviorProfile) -> BehaviorUpdate {
    let Some(target) = ctx.reference else {
        return BehaviorUpdate::idle();
    };

    let distance = ctx.position.distance(target);
    if distance <= profile.detection_range && distance > profile.stop_distance {
        let direction = direction_to(ctx.position, target);
        return BehaviorUpdate {
            velocity: direction * profile.move_speed,
            facing: Some(facing_angle(direction)),
            fire: None,
        };
    }

    BehaviorUpdate::idle()
}

fn evaluate_turret(
    ctx: &BehaviorContext,
    profile: &BehaviorProfile,
    shoot_timer: &mut f32,
) -> BehaviorUpdate {
    let Some(target) = ctx.reference else {
        return BehaviorUpdate::idle();
    };

    let distance = ctx.position.distance(target);
    let direction = direction_to(ctx.position, target);

    BehaviorUpdate {
        velocity: Vec2::ZERO,
        facing: face(direction),
        fire: tick_weapon(ctx, profile, shoot_timer, distance, direction),
    }
}

fn evaluate_hunter(
    ctx: &BehaviorContext,
    profile: &BehaviorProfile,
    shoot_timer: &mut f32,
) -> BehaviorUpdate {
    let Some(target) = ctx.reference else {
        return BehaviorUpdate::idle();
    };

    let distance = ctx.position.distance(target);
    let direction = direction_to(ctx.position, target);

    let velocity = if distance <= profile.chase_range {
        if distance > profile.preferred_distance {
            direction * profile.move_speed
        } else if profile.retreat_when_too_close && distance < profile.preferred_distance * 0.5 {
            -direction * profile.move_speed * 0.5
        } else {
            perpendicular(direction) * profile.move_speed * 0.5
        }
    } else {
        Vec2::ZERO
    };

    BehaviorUpdate {
        velocity,
        facing: face(direction),
        fire: tick_weapon(ctx, profile, shoot_timer, distance, direction),
    }
}

fn face(direction: Vec2) -> Option<f32> {
    (direction != Vec2::ZERO).then(|| facing_angle(direction))
}

/// Advance the fire cooldown while in range; emit a shot when it elapses.
fn tick_weapon(
    ctx: &BehaviorContext,
    profile: &BehaviorProfile,
    shoot_timer: &mut f32,
    distance: f32,
    direction: Vec2,
) -> Option<FireRequest> {
    if distance > profile.shoot_range {
        return None;
    }

    *shoot_timer -= ctx.dt;
    if *shoot_timer > 0.0 {
        return None;
    }
    *shoot_timer = profile.shoot_interval;

    if direction == Vec2::ZERO {
        return None;
    }

    Some(FireRequest {
        origin: ctx.position + direction * FIRE_POINT_OFFSET,
        direction,
        speed: profile.projectile_speed,
        damage: profile.projectile_damage,
        lifetime: profile.projectile_lifetime,
    })
}
