//! maskfall: run the agent population core headless against a scripted ship.
//!
//! Usage:
//!   maskfall --seconds 60 --seed 7
//!   maskfall --config campaign.json --json

use std::process;

use maskfall_app::cli::{parse_args, usage};
use maskfall_app::harness::{run, HarnessConfig, RunSummary};
use maskfall_app::logging;
use maskfall_core::config::CampaignConfig;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{}", usage());
            process::exit(2);
        }
    };
    if cli.help {
        eprintln!("{}", usage());
        return;
    }

    logging::init(cli.verbose);

    let campaign = match &cli.config {
        Some(path) => CampaignConfig::load(path),
        None => Ok(CampaignConfig::default_campaign()),
    };
    let campaign = match campaign {
        Ok(campaign) => campaign,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let summary = match run(&HarnessConfig {
        campaign,
        seconds: cli.seconds,
        seed: cli.seed,
    }) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
    } else {
        print_summary(&summary);
    }
}

fn print_summary(summary: &RunSummary) {
    let outcome = if summary.campaign_complete {
        "campaign complete"
    } else if summary.ship_destroyed {
        "ship destroyed"
    } else {
        "time up"
    };

    println!("=== MASKFALL run: {outcome} ===");
    println!(
        "time        {:.2}s ({} ticks)",
        summary.elapsed_secs, summary.ticks
    );
    println!(
        "level       {} ({} completed)",
        summary.level, summary.levels_completed
    );
    println!("kills       {}", summary.kills);
    println!("waves       {}", summary.waves);
    println!("peak pop.   {}", summary.peak_population);
    println!(
        "ship        health {} | dashes {}",
        summary.ship_health, summary.dashes
    );
    let fx = &summary.effects;
    println!(
        "effects     kill {} | damage {} | wall {} | projectile {} | dash {}",
        fx.enemy_kill, fx.damage_taken, fx.wall_hit, fx.projectile_hit, fx.dash
    );
}
