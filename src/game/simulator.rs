//! The simulation driver
//!
//! [`Simulator`] owns the game state, the deferred-action queue, and the
//! RNG, and advances everything one tick per [`Simulator::step`] call.
//! Each step runs the systems in a fixed order and returns the events
//! the tick produced.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::game::constants::ball;
use crate::game::events::{GameEvent, GameEvents};
use crate::game::match_result::MatchResult;
use crate::game::schedule::{Action, ScheduleQueue};
use crate::game::state::{
    Ball, BallId, GameState, MatchPhase, MatchState, PowerUp, ResizeMode,
};
use crate::game::systems::{collision, lifecycle, physics, powerups};
use crate::util::geom::Rect;
use crate::util::vec2::Vec2;

/// Parameters for manually spawned balls. Fields left at their defaults
/// mirror the standard spawn values; `color` falls back to the palette.
#[derive(Debug, Clone)]
pub struct BallSpec {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub color: Option<String>,
}

impl Default for BallSpec {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: ball::RADIUS,
            mass: ball::MASS,
            color: None,
        }
    }
}

pub struct Simulator {
    config: SimConfig,
    state: GameState,
    schedule: ScheduleQueue,
    rng: SmallRng,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let state = GameState::new(
            config.initial_bounds(),
            config.weapon_enabled,
            config.heal_enabled,
        );
        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Self {
            config,
            state,
            schedule: ScheduleQueue::new(),
            rng,
        })
    }

    /// Start a fresh match with `ball_count` randomly placed balls.
    /// Everything from the previous match is discarded, including
    /// pending deferred actions. With zero balls this is a no-op.
    pub fn initialize(&mut self, ball_count: usize) {
        if ball_count == 0 {
            return;
        }
        self.reset_match();
        for i in 0..ball_count {
            let id = self.state.alloc_ball_id();
            let color = self.config.palette[i % self.config.palette.len()].clone();
            let ball = self.random_ball(id, color);
            self.state.add_ball(ball);
        }
        self.state.match_state.initial_ball_count = ball_count;
        self.state.match_state.phase = MatchPhase::Running;
        info!(ball_count, generation = self.state.generation, "match initialized");
    }

    /// Discard the current match: clear balls, kill data, and pending
    /// actions, restore the arena, and return to the idle phase.
    pub fn reset_match(&mut self) {
        self.state.generation += 1;
        self.state.tick = 0;
        self.schedule.clear();
        self.state.balls.clear();
        self.state.reset_ball_ids();
        self.state.match_state = MatchState::default();
        self.state.arena.restore();
        let bounds = self.state.arena.bounds;
        if self.state.weapon.enabled {
            powerups::place_power_up(&mut self.state.weapon, bounds, &mut self.rng);
        }
        if self.state.heal.enabled {
            powerups::place_power_up(&mut self.state.heal, bounds, &mut self.rng);
        }
    }

    /// Advance the simulation by one tick and return its events.
    /// Outside the running phase only deferred actions are processed.
    pub fn step(&mut self) -> GameEvents {
        self.state.tick += 1;
        let mut events = GameEvents::new();

        if self.state.match_state.phase == MatchPhase::Running {
            physics::update_physics(&mut self.state);
            collision::update_collisions(&mut self.state);
            powerups::update_powerups(
                &mut self.state,
                &self.config,
                &mut self.rng,
                &mut self.schedule,
                &mut events,
            );
            lifecycle::update_lifecycle(
                &mut self.state,
                &self.config,
                &mut self.rng,
                &mut self.schedule,
                &mut events,
            );
        }

        for action in self
            .schedule
            .drain_due(self.state.tick, self.state.generation)
        {
            match action {
                Action::RespawnHeal => {
                    if self.state.heal.enabled {
                        let bounds = self.state.arena.bounds;
                        powerups::place_power_up(&mut self.state.heal, bounds, &mut self.rng);
                    }
                }
                Action::ReportWinner => {
                    if let Some(winner_id) = self.state.match_state.winner_id {
                        let kills = self
                            .state
                            .match_state
                            .kill_counts
                            .get(&winner_id)
                            .copied()
                            .unwrap_or(0);
                        if let Some(winner) = self.state.get_ball(winner_id) {
                            events.push(GameEvent::MatchOver {
                                winner_id,
                                winner_color: winner.color.clone(),
                                remaining_mass: winner.mass,
                                kills,
                            });
                        }
                    }
                }
            }
        }

        events
    }

    /// Spawn one ball mid-match and return its id
    pub fn add_ball(&mut self, spec: BallSpec) -> BallId {
        let id = self.state.alloc_ball_id();
        let color = spec.color.unwrap_or_else(|| {
            self.config.palette[(id as usize - 1) % self.config.palette.len()].clone()
        });
        self.state.add_ball(Ball::new(
            id,
            spec.position,
            spec.velocity,
            spec.radius,
            spec.mass,
            color,
        ));
        id
    }

    /// Remove a ball without elimination bookkeeping. Returns false if
    /// the id is unknown.
    pub fn remove_ball(&mut self, id: BallId) -> bool {
        self.state.remove_ball(id).is_some()
    }

    /// Grow or shrink the arena by `delta` on the selected axes. Fails
    /// without side effects if either dimension would leave
    /// `[min_arena_size, original size]`.
    pub fn resize_arena(&mut self, mode: ResizeMode, delta: f32) -> Result<(f32, f32), SimError> {
        self.state
            .arena
            .try_resize(mode, delta, self.config.min_arena_size)
    }

    /// Replace the arena outright. The new bounds become the original
    /// size future resizes are bounded by, and the shrink stage resets.
    pub fn set_arena_bounds(&mut self, bounds: Rect) {
        let stage = self.state.arena.shrink_stage;
        self.state.arena = crate::game::state::Arena::new(bounds);
        if stage != 0 {
            info!(stage, "arena replaced, shrink stage reset");
        }
    }

    fn random_ball(&mut self, id: BallId, color: String) -> Ball {
        let bounds = self.state.arena.bounds;
        let radius = self.config.ball_radius;
        let span_x = (bounds.width - 2.0 * radius).max(0.0);
        let span_y = (bounds.height - 2.0 * radius).max(0.0);
        let position = Vec2::new(
            bounds.x + radius + self.rng.gen_range(0.0..=span_x),
            bounds.y + radius + self.rng.gen_range(0.0..=span_y),
        );
        let max = self.config.max_spawn_speed;
        let velocity = Vec2::new(
            self.rng.gen_range(-max..=max),
            self.rng.gen_range(-max..=max),
        );
        Ball::new(id, position, velocity, radius, self.config.ball_mass, color)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn balls(&self) -> &[Ball] {
        &self.state.balls
    }

    pub fn get_ball(&self, id: BallId) -> Option<&Ball> {
        self.state.get_ball(id)
    }

    /// Mutate one ball in place, for scripted setups. Returns false if
    /// the id is unknown.
    pub fn update_ball(&mut self, id: BallId, f: impl FnOnce(&mut Ball)) -> bool {
        match self.state.get_ball_mut(id) {
            Some(ball) => {
                f(ball);
                true
            }
            None => false,
        }
    }

    pub fn arena_bounds(&self) -> Rect {
        self.state.arena.bounds
    }

    pub fn power_ups(&self) -> (&PowerUp, &PowerUp) {
        (&self.state.weapon, &self.state.heal)
    }

    pub fn tick(&self) -> u64 {
        self.state.tick
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.match_state.phase
    }

    pub fn kill_feed(&self) -> &[crate::game::state::KillRecord] {
        &self.state.match_state.kill_feed
    }

    pub fn kill_count(&self, id: BallId) -> u32 {
        self.state
            .match_state
            .kill_counts
            .get(&id)
            .copied()
            .unwrap_or(0)
    }

    /// Final match summary, available once a winner exists
    pub fn match_result(&self) -> Option<MatchResult> {
        MatchResult::from_state(&self.state)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
