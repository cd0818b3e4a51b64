//! Elimination, arena shrinking, and match progress
//!
//! Runs after collisions each tick: balls whose radius reached zero are
//! removed, deaths are attributed to the last weapon hit when that
//! attacker still lives, the arena advances one shrink stage per death
//! while the survivor count is at or below the stage threshold, and the
//! match flips to its terminal phase when one ball remains.

use rand::Rng;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::game::events::{GameEvent, GameEvents};
use crate::game::schedule::{Action, ScheduleQueue};
use crate::game::state::{GameState, KillRecord, MatchPhase};
use crate::game::systems::powerups;

/// Survivor count at or below which shrink stage `stage + 1` begins
fn shrink_threshold(initial: usize, stage: u8, max_stages: u8) -> usize {
    (initial as f32 * (1.0 - (stage + 1) as f32 / max_stages as f32)).ceil() as usize
}

/// Reap dead balls and advance match state for one tick
pub fn update_lifecycle(
    state: &mut GameState,
    config: &SimConfig,
    rng: &mut impl Rng,
    schedule: &mut ScheduleQueue,
    events: &mut GameEvents,
) {
    let dead: Vec<u32> = state
        .balls
        .iter()
        .filter(|b| b.is_dead())
        .map(|b| b.id)
        .collect();

    for victim_id in dead {
        let victim = match state.remove_ball(victim_id) {
            Some(v) => v,
            None => continue,
        };
        // A kill is attributed only while the attacker still lives;
        // a stale or missing reference means a silent removal
        let killer = victim
            .last_hit_by
            .and_then(|id| state.get_ball(id).filter(|b| !b.is_dead()))
            .map(|b| (b.id, b.color.clone()));
        match killer {
            Some((killer_id, killer_color)) => {
                if config.kill_tally_enabled {
                    state.record_kill(KillRecord {
                        killer_id,
                        killer_color: killer_color.clone(),
                        victim_id,
                        victim_color: victim.color.clone(),
                        tick: state.tick,
                    });
                }
                info!(
                    victim = victim_id,
                    killer = killer_id,
                    remaining = state.ball_count(),
                    "ball eliminated"
                );
                events.push(GameEvent::Kill {
                    killer_id,
                    victim_id,
                    killer_color,
                    victim_color: victim.color,
                    remaining: state.ball_count(),
                });
            }
            None => {
                debug!(victim = victim_id, "removed without attributable killer");
            }
        }

        // At most one stage advance per elimination
        let stage = state.arena.shrink_stage;
        if stage < config.max_shrink_stages
            && state.ball_count()
                <= shrink_threshold(
                    state.match_state.initial_ball_count,
                    stage,
                    config.max_shrink_stages,
                )
        {
            state
                .arena
                .shrink_by_ratio(config.shrink_ratio, config.min_arena_size);
            state.arena.shrink_stage = stage + 1;
            events.push(GameEvent::ArenaShrunk {
                stage: state.arena.shrink_stage,
                width: state.arena.bounds.width,
                height: state.arena.bounds.height,
            });
            // Pickups lying on the field move inside the new bounds; a
            // held weapon and a heal mid-countdown are left alone
            let bounds = state.arena.bounds;
            if state.weapon.enabled && state.weapon.available {
                powerups::place_power_up(&mut state.weapon, bounds, rng);
            }
            if state.heal.enabled && state.heal.available {
                powerups::place_power_up(&mut state.heal, bounds, rng);
            }
        }
    }

    if state.match_state.phase == MatchPhase::Running && state.ball_count() <= 1 {
        state.match_state.phase = MatchPhase::Terminal;
        if let Some(winner) = state.balls.first() {
            state.match_state.winner_id = Some(winner.id);
            schedule.schedule(
                Action::ReportWinner,
                state.tick,
                config.winner_report_delay_ticks,
                state.generation,
            );
            info!(winner = winner.id, "match decided");
        }
    }
}
