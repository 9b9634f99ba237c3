//! Tests for argument parsing, the scripted ship, level progression and the
//! run loop.

use std::path::PathBuf;

use glam::Vec2;

use maskfall_core::commands::SwarmCommand;
use maskfall_core::config::{CampaignConfig, LevelConfig};
use maskfall_core::enums::EffectKind;
use maskfall_core::events::{EffectEvent, SimEvent};
use maskfall_core::types::SpawnBounds;
use maskfall_sim::ReferenceEntity;

use crate::cli::{parse_args, CliArgs};
use crate::harness::{run, EffectTally, HarnessConfig};
use crate::progress::LevelProgress;
use crate::ship::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn arena() -> SpawnBounds {
    SpawnBounds::new(Vec2::new(-8.0, -4.0), Vec2::new(8.0, 4.0))
}

fn named_level(name: &str, kills_to_win: u32) -> LevelConfig {
    LevelConfig {
        name: name.into(),
        kills_to_win,
        ..Default::default()
    }
}

// ---- CLI ----

#[test]
fn test_cli_defaults() {
    let cli = parse_args(&[]).unwrap();
    assert_eq!(cli, CliArgs::default());
    assert_eq!(cli.seed, 42);
}

#[test]
fn test_cli_all_flags() {
    let cli = parse_args(&args(&[
        "--config",
        "levels.json",
        "--seconds",
        "12.5",
        "--seed",
        "99",
        "--verbose",
        "--json",
    ]))
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("levels.json")));
    assert_eq!(cli.seconds, 12.5);
    assert_eq!(cli.seed, 99);
    assert!(cli.verbose);
    assert!(cli.json);
    assert!(!cli.help);
}

#[test]
fn test_cli_errors() {
    assert!(parse_args(&args(&["--seed"])).is_err());
    assert!(parse_args(&args(&["--seed", "abc"])).is_err());
    assert!(parse_args(&args(&["--seconds", "-3"])).is_err());
    assert!(parse_args(&args(&["--frobnicate"])).is_err());
    assert!(parse_args(&args(&["--help"])).unwrap().help);
}

// ---- Ship ----

#[test]
fn test_ship_invincibility_and_dash() {
    let arena = arena();
    let mut ship = Ship::new(arena.center());

    ship.take_damage(1.0);
    assert_eq!(ship.health(), SHIP_MAX_HEALTH - 1.0);
    assert!(ship.is_invincible());

    // Invincible: ignored.
    ship.take_damage(1.0);
    assert_eq!(ship.health(), SHIP_MAX_HEALTH - 1.0);

    let effects = ship.update(1.45, &arena, None);
    assert!(effects.is_empty());
    assert!(ship.is_invincible());
    assert!(!ship.is_dashing());

    // Invincibility runs out and the first dash starts.
    let effects = ship.update(0.06, &arena, Some(Vec2::new(-6.0, 0.0)));
    assert!(!ship.is_invincible());
    assert!(ship.is_dashing());
    assert!(effects.iter().any(|e| e.kind == EffectKind::Dash));
    assert_eq!(ship.dashes(), 1);

    // Dashing: ignored.
    ship.take_damage(1.0);
    assert_eq!(ship.health(), SHIP_MAX_HEALTH - 1.0);

    ship.update(SHIP_DASH_DURATION, &arena, None);
    assert!(!ship.is_dashing());
    ship.take_damage(1.0);
    assert_eq!(ship.health(), SHIP_MAX_HEALTH - 2.0);
    assert_eq!(ship.hits_taken(), 2);
}

#[test]
fn test_ship_destroyed_stops_updating() {
    let arena = arena();
    let mut ship = Ship::new(arena.center());
    ship.take_damage(10.0);
    assert!(ship.is_destroyed());

    let before = ship.position();
    assert!(ship.update(5.0, &arena, None).is_empty());
    assert_eq!(ship.position(), before);
    assert!(!ship.is_dashing());
}

#[test]
fn test_ship_stays_in_arena() {
    let arena = arena();
    let mut ship = Ship::new(arena.center());
    let far_corner = Some(Vec2::new(100.0, 100.0));

    for _ in 0..600 {
        ship.update(1.0 / 60.0, &arena, far_corner);
        assert!(arena.contains(ship.position()));
    }
    assert!(ship.dashes() > 0);
}

// ---- Level progression ----

#[test]
fn test_progress_requires_levels() {
    assert!(LevelProgress::new(Vec::new()).is_err());
}

#[test]
fn test_progress_advances_through_levels() {
    let mut progress =
        LevelProgress::new(vec![named_level("first", 2), named_level("second", 1)]).unwrap();

    // Removals before the level is configured are not kills.
    assert!(progress.observe(&[SimEvent::AgentRemoved]).is_empty());
    assert_eq!(progress.total_kills(), 0);

    progress.observe(&[SimEvent::LevelConfigured {
        name: "first".into(),
    }]);
    assert!(progress.is_active());

    let commands = progress.observe(&[
        SimEvent::AgentRemoved,
        SimEvent::AgentRemoved,
        SimEvent::AgentRemoved,
    ]);
    assert_eq!(progress.total_kills(), 2);
    assert_eq!(progress.levels_completed(), 1);
    assert!(!progress.is_active());
    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[0], SwarmCommand::StopSpawning));
    assert!(matches!(commands[1], SwarmCommand::ClearAll));
    assert!(matches!(
        &commands[2],
        SwarmCommand::Configure { level } if level.name == "second"
    ));
    assert!(matches!(commands[3], SwarmCommand::StartSpawning));
    assert_eq!(progress.level_number(), 2);

    let commands = progress.observe(&[
        SimEvent::LevelConfigured {
            name: "second".into(),
        },
        SimEvent::AgentRemoved,
    ]);
    assert_eq!(commands.len(), 2);
    assert!(progress.is_finished());
    assert_eq!(progress.levels_completed(), 2);
    assert_eq!(progress.total_kills(), 3);
}

#[test]
fn test_progress_fraction() {
    let mut progress = LevelProgress::new(vec![named_level("only", 4)]).unwrap();
    progress.observe(&[SimEvent::LevelConfigured {
        name: "only".into(),
    }]);
    progress.observe(&[SimEvent::AgentRemoved]);
    assert!((progress.progress() - 0.25).abs() < 1e-6);
    assert_eq!(progress.kills(), 1);
}

// ---- Harness ----

#[test]
fn test_effect_tally() {
    let mut tally = EffectTally::default();
    tally.record(&[
        EffectEvent::new(EffectKind::EnemyKill, Vec2::ZERO),
        EffectEvent::new(EffectKind::EnemyKill, Vec2::ONE),
        EffectEvent::new(EffectKind::Dash, Vec2::ZERO),
    ]);
    assert_eq!(tally.enemy_kill, 2);
    assert_eq!(tally.dash, 1);
    assert_eq!(tally.damage_taken, 0);
}

#[test]
fn test_run_short_session() {
    let summary = run(&HarnessConfig {
        campaign: CampaignConfig::default_campaign(),
        seconds: 5.0,
        seed: 3,
    })
    .unwrap();

    assert!(summary.ticks > 0 && summary.ticks <= 300);
    assert!(summary.ticks == 300 || summary.ship_destroyed || summary.campaign_complete);
    assert!(summary.peak_population > 0);
    assert!(summary.peak_population <= 14);
    assert!(summary.dashes > 0);
    assert_eq!(summary.effects.dash, summary.dashes);
}

#[test]
fn test_run_is_deterministic() {
    let config = HarnessConfig {
        campaign: CampaignConfig::default_campaign(),
        seconds: 10.0,
        seed: 77,
    };
    assert_eq!(run(&config).unwrap(), run(&config).unwrap());
}

#[test]
fn test_run_zero_seconds() {
    let summary = run(&HarnessConfig {
        campaign: CampaignConfig::default_campaign(),
        seconds: 0.0,
        seed: 1,
    })
    .unwrap();
    assert_eq!(summary.ticks, 0);
    assert_eq!(summary.kills, 0);
    assert_eq!(summary.level, "Masquerade");
}

#[test]
fn test_run_rejects_empty_campaign() {
    let campaign = CampaignConfig {
        levels: Vec::new(),
        ..CampaignConfig::default_campaign()
    };
    let result = run(&HarnessConfig {
        campaign,
        seconds: 1.0,
        seed: 1,
    });
    assert!(result.is_err());
}
