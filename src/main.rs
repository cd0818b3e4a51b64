//! Headless match runner
//!
//! Runs one match to completion with the configured settings and logs
//! the outcome. Useful for smoke-testing tuning changes without a
//! front end.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bounce_royale::game::constants::time;
use bounce_royale::{GameEvent, SimConfig, Simulator};

/// Hard cap so a pacifist match cannot run forever
const MAX_TICKS: u64 = 60 * 60 * time::TICKS_PER_SECOND;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SimConfig::load_or_default();
    let ball_count = std::env::var("BOUNCE_BALL_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    let mut sim = Simulator::new(config)?;
    sim.initialize(ball_count);
    info!(ball_count, "match started");

    for _ in 0..MAX_TICKS {
        for event in sim.step() {
            match event {
                GameEvent::Kill {
                    killer_id,
                    victim_id,
                    remaining,
                    ..
                } => info!(victim = victim_id, killer = killer_id, remaining, "elimination"),
                GameEvent::ArenaShrunk { stage, width, height } => {
                    info!(stage, width, height, "arena shrunk")
                }
                GameEvent::MatchOver {
                    winner_id,
                    remaining_mass,
                    kills,
                    ..
                } => {
                    let seconds = sim.tick() / time::TICKS_PER_SECOND;
                    info!(winner = winner_id, remaining_mass, kills, seconds, "match over");
                    if let Some(result) = sim.match_result() {
                        for record in &result.kill_feed {
                            info!(
                                killer = record.killer_id,
                                victim = record.victim_id,
                                tick = record.tick,
                                "kill feed"
                            );
                        }
                    }
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    warn!(ticks = MAX_TICKS, "match did not finish within the tick cap");
    Ok(())
}
