//! Simulation configuration
//!
//! All tunables live here with defaults matching the constants module.
//! `load_or_default` overlays environment variables on the defaults so a
//! headless run can be tuned without recompiling; invalid values fall
//! back to the default with a warning rather than aborting.

use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::error::SimError;
use crate::game::constants::{arena, ball, game, powerup, spawn};
use crate::util::geom::Rect;

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Spawn radius for balls created by `initialize`
    pub ball_radius: f32,
    /// Spawn mass for balls created by `initialize`
    pub ball_mass: f32,
    /// Per-component speed cap (units/tick) for random spawn velocities
    pub max_spawn_speed: f32,
    /// World dimensions the arena is inset into
    pub world_width: f32,
    pub world_height: f32,
    /// Inset between world edge and arena boundary
    pub arena_margin: f32,
    /// Floor on either arena dimension; shrinks and resizes never go below
    pub min_arena_size: f32,
    /// Multiplier applied to both dimensions per shrink stage
    pub shrink_ratio: f32,
    /// Number of elimination-driven shrink stages; zero disables
    /// automatic shrinking entirely
    pub max_shrink_stages: u8,
    /// Whether kills are tallied into counts and the feed; the kill
    /// events themselves are always emitted
    pub kill_tally_enabled: bool,
    /// Whether the weapon pickup is placed at all
    pub weapon_enabled: bool,
    /// Whether the heal pickup is placed at all
    pub heal_enabled: bool,
    /// Delay before a consumed heal reappears
    pub heal_respawn_delay_ticks: u64,
    /// Delay between the last elimination and the match-over event
    pub winner_report_delay_ticks: u64,
    /// Colors cycled through at spawn, for identification only
    pub palette: Vec<String>,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy
    pub rng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_radius: ball::RADIUS,
            ball_mass: ball::MASS,
            max_spawn_speed: spawn::MAX_SPEED,
            world_width: arena::WORLD_WIDTH,
            world_height: arena::WORLD_HEIGHT,
            arena_margin: arena::MARGIN,
            min_arena_size: arena::MIN_SIZE,
            shrink_ratio: arena::SHRINK_RATIO,
            max_shrink_stages: arena::MAX_SHRINK_STAGES,
            kill_tally_enabled: true,
            weapon_enabled: true,
            heal_enabled: true,
            heal_respawn_delay_ticks: powerup::HEAL_RESPAWN_DELAY_TICKS,
            winner_report_delay_ticks: game::WINNER_REPORT_DELAY_TICKS,
            palette: game::DEFAULT_PALETTE
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rng_seed: None,
        }
    }
}

impl SimConfig {
    /// Build a config from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn load_or_default() -> Self {
        let defaults = Self::default();
        Self {
            ball_radius: env_parse("BOUNCE_BALL_RADIUS", defaults.ball_radius),
            ball_mass: env_parse("BOUNCE_BALL_MASS", defaults.ball_mass),
            max_spawn_speed: env_parse("BOUNCE_MAX_SPAWN_SPEED", defaults.max_spawn_speed),
            world_width: env_parse("BOUNCE_WORLD_WIDTH", defaults.world_width),
            world_height: env_parse("BOUNCE_WORLD_HEIGHT", defaults.world_height),
            arena_margin: env_parse("BOUNCE_ARENA_MARGIN", defaults.arena_margin),
            min_arena_size: env_parse("BOUNCE_MIN_ARENA_SIZE", defaults.min_arena_size),
            shrink_ratio: env_parse("BOUNCE_SHRINK_RATIO", defaults.shrink_ratio),
            max_shrink_stages: env_parse("BOUNCE_MAX_SHRINK_STAGES", defaults.max_shrink_stages),
            kill_tally_enabled: env_parse("BOUNCE_KILL_TALLY_ENABLED", defaults.kill_tally_enabled),
            weapon_enabled: env_parse("BOUNCE_WEAPON_ENABLED", defaults.weapon_enabled),
            heal_enabled: env_parse("BOUNCE_HEAL_ENABLED", defaults.heal_enabled),
            heal_respawn_delay_ticks: env_parse(
                "BOUNCE_HEAL_RESPAWN_DELAY_TICKS",
                defaults.heal_respawn_delay_ticks,
            ),
            winner_report_delay_ticks: env_parse(
                "BOUNCE_WINNER_REPORT_DELAY_TICKS",
                defaults.winner_report_delay_ticks,
            ),
            palette: defaults.palette,
            rng_seed: env::var("BOUNCE_RNG_SEED")
                .ok()
                .and_then(|v| match v.parse() {
                    Ok(seed) => Some(seed),
                    Err(_) => {
                        warn!(value = %v, "invalid BOUNCE_RNG_SEED, seeding from entropy");
                        None
                    }
                }),
        }
    }

    /// Check internal consistency; call once before constructing a simulator
    pub fn validate(&self) -> Result<(), SimError> {
        if self.ball_radius <= 0.0 || self.ball_mass <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "ball radius and mass must be positive (got {} / {})",
                self.ball_radius, self.ball_mass
            )));
        }
        if !(0.0..1.0).contains(&self.shrink_ratio) {
            return Err(SimError::InvalidConfig(format!(
                "shrink ratio must be in [0, 1), got {}",
                self.shrink_ratio
            )));
        }
        let bounds = self.initial_bounds();
        if bounds.width < self.min_arena_size || bounds.height < self.min_arena_size {
            return Err(SimError::InvalidConfig(format!(
                "initial arena {}x{} is below the minimum size {}",
                bounds.width, bounds.height, self.min_arena_size
            )));
        }
        if self.palette.is_empty() {
            return Err(SimError::InvalidConfig(
                "palette must contain at least one color".to_string(),
            ));
        }
        Ok(())
    }

    /// Arena boundary at match start: the world rectangle inset by the margin
    pub fn initial_bounds(&self) -> Rect {
        Rect::new(
            self.arena_margin,
            self.arena_margin,
            self.world_width - 2.0 * self.arena_margin,
            self.world_height - 2.0 * self.arena_margin,
        )
    }
}

fn env_parse<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(key, value = %value, %default, "invalid config value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_initial_bounds() {
        let bounds = SimConfig::default().initial_bounds();
        assert_eq!(bounds.x, 20.0);
        assert_eq!(bounds.y, 20.0);
        assert_eq!(bounds.width, 960.0);
        assert_eq!(bounds.height, 660.0);
    }

    #[test]
    fn test_invalid_shrink_ratio_rejected() {
        let config = SimConfig {
            shrink_ratio: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_arena_smaller_than_min_rejected() {
        let config = SimConfig {
            world_width: 120.0,
            world_height: 120.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let config = SimConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
