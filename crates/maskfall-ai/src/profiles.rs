//! Kind-specific behavioral profiles.
//!
//! Consolidates per-kind tuning for the behavior routines and for spawning.

use maskfall_core::enums::AgentKind;

/// Behavioral profile for an agent kind. Fields a kind does not use are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorProfile {
    pub health: f32,
    pub contact_damage: f32,
    /// Movement speed (units/s).
    pub move_speed: f32,
    /// Wanderer re-pick window, [min, max).
    pub min_direction_interval: f32,
    pub max_direction_interval: f32,
    /// Chaser starts pursuing inside this range.
    pub detection_range: f32,
    /// Chaser halts inside this range.
    pub stop_distance: f32,
    /// Hunter pursues inside this range.
    pub chase_range: f32,
    /// Hunter strafes around this distance.
    pub preferred_distance: f32,
    pub retreat_when_too_close: bool,
    pub shoot_range: f32,
    pub shoot_interval: f32,
    pub projectile_speed: f32,
    pub projectile_damage: f32,
    pub projectile_lifetime: f32,
}

/// Get the behavioral profile for a given kind.
pub fn get_profile(kind: AgentKind) -> BehaviorProfile {
    use maskfall_core::constants::*;

    let base = BehaviorProfile {
        health: AGENT_HEALTH,
        contact_damage: AGENT_CONTACT_DAMAGE,
        move_speed: 0.0,
        min_direction_interval: 0.0,
        max_direction_interval: 0.0,
        detection_range: 0.0,
        stop_distance: 0.0,
        chase_range: 0.0,
        preferred_distance: 0.0,
        retreat_when_too_close: false,
        shoot_range: 0.0,
        shoot_interval: 0.0,
        projectile_speed: 0.0,
        projectile_damage: PROJECTILE_DAMAGE,
        projectile_lifetime: PROJECTILE_LIFETIME,
    };

    match kind {
        AgentKind::Wanderer => BehaviorProfile {
            move_speed: WANDERER_SPEED,
            min_direction_interval: WANDERER_MIN_DIRECTION_INTERVAL,
            max_direction_interval: WANDERER_MAX_DIRECTION_INTERVAL,
            ..base
        },
        AgentKind::Chaser => BehaviorProfile {
            move_speed: CHASER_SPEED,
            detection_range: CHASER_DETECTION_RANGE,
            stop_distance: CHASER_STOP_DISTANCE,
            ..base
        },
        AgentKind::Turret => BehaviorProfile {
            shoot_range: TURRET_SHOOT_RANGE,
            shoot_interval: TURRET_SHOOT_INTERVAL,
            projectile_speed: TURRET_PROJECTILE_SPEED,
            ..base
        },
        AgentKind::Hunter => BehaviorProfile {
            move_speed: HUNTER_SPEED,
            chase_range: HUNTER_CHASE_RANGE,
            preferred_distance: HUNTER_PREFERRED_DISTANCE,
            retreat_when_too_close: true,
            shoot_range: HUNTER_SHOOT_RANGE,
            shoot_interval: HUNTER_SHOOT_INTERVAL,
            projectile_speed: HUNTER_PROJECTILE_SPEED,
            ..base
        },
    }
}
