//! Final match outcome reporting

use serde::{Deserialize, Serialize};

use crate::game::state::{BallId, GameState, KillRecord};

/// Summary of a finished match, assembled once the winner is known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner_id: BallId,
    pub winner_color: String,
    /// Kills attributed to the winner
    pub winner_kills: u32,
    /// Total eliminations over the whole match
    pub total_kills: usize,
    /// Ticks elapsed from match start to the final elimination
    pub duration_ticks: u64,
    pub kill_feed: Vec<KillRecord>,
}

impl MatchResult {
    /// Build the summary from terminal state. Returns `None` while the
    /// match has no winner yet.
    pub fn from_state(state: &GameState) -> Option<Self> {
        let winner_id = state.match_state.winner_id?;
        let winner_color = state
            .get_ball(winner_id)
            .map(|b| b.color.clone())
            .unwrap_or_default();
        Some(Self {
            winner_id,
            winner_color,
            winner_kills: state
                .match_state
                .kill_counts
                .get(&winner_id)
                .copied()
                .unwrap_or(0),
            total_kills: state.match_state.kill_feed.len(),
            duration_ticks: state.tick,
            kill_feed: state.match_state.kill_feed.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::arena;
    use crate::game::state::{Ball, KillRecord};
    use crate::util::geom::Rect;
    use crate::util::vec2::Vec2;

    fn terminal_state() -> GameState {
        let bounds = Rect::new(
            arena::MARGIN,
            arena::MARGIN,
            arena::WORLD_WIDTH - 2.0 * arena::MARGIN,
            arena::WORLD_HEIGHT - 2.0 * arena::MARGIN,
        );
        let mut state = GameState::new(bounds, true, true);
        state.add_ball(Ball::new(
            1,
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            60.0,
            6.0,
            "#FF0000".to_string(),
        ));
        state.record_kill(KillRecord {
            killer_id: 1,
            killer_color: "#FF0000".into(),
            victim_id: 2,
            victim_color: "#00FF00".into(),
            tick: 90,
        });
        state.match_state.winner_id = Some(1);
        state.tick = 120;
        state
    }

    #[test]
    fn test_from_state_with_winner() {
        let state = terminal_state();
        let result = MatchResult::from_state(&state).unwrap();
        assert_eq!(result.winner_id, 1);
        assert_eq!(result.winner_color, "#FF0000");
        assert_eq!(result.winner_kills, 1);
        assert_eq!(result.total_kills, 1);
        assert_eq!(result.duration_ticks, 120);
    }

    #[test]
    fn test_from_state_without_winner() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 400.0);
        let state = GameState::new(bounds, true, true);
        assert!(MatchResult::from_state(&state).is_none());
    }
}
