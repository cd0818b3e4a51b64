//! Simulation state definitions and structures
//!
//! Contains all entities (balls, power-ups), the arena boundary, and match
//! bookkeeping. Systems mutate this state in place during a tick.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::game::constants::{ball, powerup};
use crate::util::geom::Rect;
use crate::util::vec2::Vec2;

/// Stable ball identifier. Assigned monotonically from 1 at spawn, never
/// reused within a match. Cross-references (`last_hit_by`, kill records)
/// use ids rather than indices so removals cannot dangle.
pub type BallId = u32;

/// Ball state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position in world space
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Current collision radius; `<= 0` marks death
    pub radius: f32,
    /// Current mass (weights collision impulses)
    pub mass: f32,
    /// Radius at spawn; `radius` never exceeds this
    pub base_radius: f32,
    /// Mass at spawn; `mass` never exceeds this
    pub base_mass: f32,
    /// Whether this ball holds the one-shot weapon
    pub has_weapon: bool,
    /// Id of the last ball that damaged this one via the weapon
    pub last_hit_by: Option<BallId>,
    /// Palette color, for identification only
    pub color: String,
    /// Unique ball identifier
    pub id: BallId,
}

impl Ball {
    pub fn new(id: BallId, position: Vec2, velocity: Vec2, radius: f32, mass: f32, color: String) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass,
            base_radius: radius,
            base_mass: mass,
            has_weapon: false,
            last_hit_by: None,
            color,
            id,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.radius <= 0.0
    }

    /// Apply weapon damage from `attacker`, flooring stats at zero
    pub fn take_weapon_hit(&mut self, attacker: BallId) {
        self.mass = (self.mass - ball::WEAPON_MASS_DAMAGE).max(0.0);
        self.radius = (self.radius - ball::WEAPON_RADIUS_DAMAGE).max(0.0);
        self.last_hit_by = Some(attacker);
    }

    /// Apply the heal power-up, clamping stats to their spawn values
    pub fn heal(&mut self) {
        self.mass = (self.mass + ball::HEAL_MASS).min(self.base_mass);
        self.radius = (self.radius + ball::HEAL_RADIUS).min(self.base_radius);
    }
}

/// Power-up kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// One-shot damage on the next collision of the holder
    Weapon,
    /// Restores mass and radius toward their spawn values
    Heal,
}

/// A single-instance pickup lying in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Top-left corner of the pickup rectangle
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Whether the pickup can currently be collected
    pub available: bool,
    /// Presence flag from configuration. When false the pickup is never
    /// placed and never collected (the external asset is not configured).
    pub enabled: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, enabled: bool) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            width: powerup::ITEM_WIDTH,
            height: powerup::ITEM_HEIGHT,
            available: false,
            enabled,
        }
    }

    /// Pickup footprint as a rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }
}

/// Axis selector for manual arena resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeMode {
    Horizontal,
    Vertical,
    Both,
}

/// The rectangular play boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub bounds: Rect,
    /// Starting dimensions; resizing may never exceed them
    pub original_size: (f32, f32),
    /// Progressive shrink stage, monotonically non-decreasing within a match
    pub shrink_stage: u8,
}

impl Arena {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            original_size: (bounds.width, bounds.height),
            shrink_stage: 0,
        }
    }

    /// Restore the original dimensions, re-centered on the current center,
    /// and reset the shrink stage
    pub fn restore(&mut self) {
        let center = self.bounds.center();
        let (w, h) = self.original_size;
        self.bounds = Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h);
        self.shrink_stage = 0;
    }

    /// Shrink both dimensions by `ratio`, re-centered on the previous
    /// center. Dimensions are clamped to `min_size` so a stage advance
    /// never fails.
    pub fn shrink_by_ratio(&mut self, ratio: f32, min_size: f32) {
        let center = self.bounds.center();
        let new_w = (self.bounds.width * ratio).max(min_size);
        let new_h = (self.bounds.height * ratio).max(min_size);
        self.bounds = Rect::new(
            center.x - new_w / 2.0,
            center.y - new_h / 2.0,
            new_w,
            new_h,
        );
    }

    /// Attempt a manual resize by `delta` on the selected axes (positive
    /// grows, negative shrinks). Results must stay within
    /// `[min_size, original_size]` on both axes; otherwise the arena is
    /// left field-for-field unchanged and the call is rejected.
    pub fn try_resize(
        &mut self,
        mode: ResizeMode,
        delta: f32,
        min_size: f32,
    ) -> Result<(f32, f32), SimError> {
        let horizontal = matches!(mode, ResizeMode::Horizontal | ResizeMode::Both);
        let vertical = matches!(mode, ResizeMode::Vertical | ResizeMode::Both);

        let new_w = if horizontal {
            self.bounds.width + delta
        } else {
            self.bounds.width
        };
        let new_h = if vertical {
            self.bounds.height + delta
        } else {
            self.bounds.height
        };

        let (orig_w, orig_h) = self.original_size;
        if new_w < min_size || new_h < min_size || new_w > orig_w || new_h > orig_h {
            return Err(SimError::ResizeRejected {
                width: new_w,
                height: new_h,
            });
        }

        let center = self.bounds.center();
        if horizontal {
            self.bounds.width = new_w;
            self.bounds.x = center.x - new_w / 2.0;
        }
        if vertical {
            self.bounds.height = new_h;
            self.bounds.y = center.y - new_h / 2.0;
        }
        Ok((self.bounds.width, self.bounds.height))
    }
}

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchPhase {
    /// No balls spawned yet, or after a reset
    #[default]
    Idle,
    /// Match in progress
    Running,
    /// One survivor remains; absorbing until an explicit reset
    Terminal,
}

/// One entry of the append-only kill feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillRecord {
    pub killer_id: BallId,
    pub killer_color: String,
    pub victim_id: BallId,
    pub victim_color: String,
    /// Tick at which the elimination was detected
    pub tick: u64,
}

/// Match bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchState {
    pub phase: MatchPhase,
    /// Ball count at match start, drives the shrink thresholds
    pub initial_ball_count: usize,
    /// Kills attributed per ball id (inserted on first kill)
    pub kill_counts: HashMap<BallId, u32>,
    /// Chronological kill records
    pub kill_feed: Vec<KillRecord>,
    pub winner_id: Option<BallId>,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tick: u64,
    /// Match generation, bumped on every initialize/reset. Deferred
    /// actions carry the generation they were scheduled under and are
    /// discarded when it no longer matches.
    pub generation: u64,
    pub match_state: MatchState,
    pub arena: Arena,
    /// Living balls in insertion (id) order; dead balls are removed
    pub balls: Vec<Ball>,
    pub weapon: PowerUp,
    pub heal: PowerUp,
    next_ball_id: BallId,
}

impl GameState {
    pub fn new(arena_bounds: Rect, weapon_enabled: bool, heal_enabled: bool) -> Self {
        Self {
            tick: 0,
            generation: 0,
            match_state: MatchState::default(),
            arena: Arena::new(arena_bounds),
            balls: Vec::new(),
            weapon: PowerUp::new(PowerUpKind::Weapon, weapon_enabled),
            heal: PowerUp::new(PowerUpKind::Heal, heal_enabled),
            next_ball_id: 1,
        }
    }

    /// Allocate the next unique ball id
    pub fn alloc_ball_id(&mut self) -> BallId {
        let id = self.next_ball_id;
        self.next_ball_id += 1;
        id
    }

    /// Reset the id counter (only valid on full match reset)
    pub fn reset_ball_ids(&mut self) {
        self.next_ball_id = 1;
    }

    pub fn get_ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn get_ball_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    pub fn remove_ball(&mut self, id: BallId) -> Option<Ball> {
        let idx = self.balls.iter().position(|b| b.id == id)?;
        Some(self.balls.remove(idx))
    }

    /// Record a kill: append to the feed and bump the killer's tally
    pub fn record_kill(&mut self, record: KillRecord) {
        *self
            .match_state
            .kill_counts
            .entry(record.killer_id)
            .or_insert(0) += 1;
        self.match_state.kill_feed.push(record);
    }
}
