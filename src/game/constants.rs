/// Logical clock constants. One `step()` is one tick; velocities are in
/// units per tick, matching the frame-based integration of the simulation.
pub mod time {
    /// Ticks per logical second (used to convert wall-clock style delays)
    pub const TICKS_PER_SECOND: u64 = 60;
}

/// Per-ball constants
pub mod ball {
    /// Default collision radius
    pub const RADIUS: f32 = 60.0;
    /// Default mass
    pub const MASS: f32 = 6.0;
    /// Mass removed from the victim of a weapon hit
    pub const WEAPON_MASS_DAMAGE: f32 = 1.0;
    /// Radius removed from the victim of a weapon hit
    pub const WEAPON_RADIUS_DAMAGE: f32 = 10.0;
    /// Mass restored by the heal power-up (clamped to the spawn value)
    pub const HEAL_MASS: f32 = 1.0;
    /// Radius restored by the heal power-up (clamped to the spawn value)
    pub const HEAL_RADIUS: f32 = 10.0;
}

/// Arena/boundary constants
pub mod arena {
    /// Default world extent the arena is inset into
    pub const WORLD_WIDTH: f32 = 1000.0;
    pub const WORLD_HEIGHT: f32 = 700.0;
    /// Default inset of the arena box from the world edge
    pub const MARGIN: f32 = 20.0;
    /// Smallest width/height the arena may reach
    pub const MIN_SIZE: f32 = 100.0;
    /// Width/height multiplier applied on each shrink stage
    pub const SHRINK_RATIO: f32 = 0.8;
    /// Number of progressive shrink stages over a match
    pub const MAX_SHRINK_STAGES: u8 = 5;
}

/// Power-up constants
pub mod powerup {
    use super::time::TICKS_PER_SECOND;

    /// Footprint of both pickup rectangles
    pub const ITEM_WIDTH: f32 = 50.0;
    pub const ITEM_HEIGHT: f32 = 50.0;
    /// Delay before a consumed heal is placed again (5 logical seconds)
    pub const HEAL_RESPAWN_DELAY_TICKS: u64 = 5 * TICKS_PER_SECOND;
}

/// Ball spawn constants
pub mod spawn {
    /// Initial velocity components are sampled uniformly from
    /// [-MAX_SPEED, MAX_SPEED] (units per tick)
    pub const MAX_SPEED: f32 = 4.0;
}

/// Match constants
pub mod game {
    use super::time::TICKS_PER_SECOND;

    /// Delay between the win condition and the terminal report
    /// (timing contract for the external presentation layer)
    pub const WINNER_REPORT_DELAY_TICKS: u64 = TICKS_PER_SECOND;
    /// Default ball color palette, cycled round-robin at spawn
    pub const DEFAULT_PALETTE: [&str; 6] = [
        "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arena_fits_balls() {
        // The default box must be able to hold a default-radius ball
        let box_w = arena::WORLD_WIDTH - 2.0 * arena::MARGIN;
        let box_h = arena::WORLD_HEIGHT - 2.0 * arena::MARGIN;
        assert!(box_w > 2.0 * ball::RADIUS);
        assert!(box_h > 2.0 * ball::RADIUS);
    }

    #[test]
    fn test_shrink_never_reaches_min_in_default_setup() {
        let mut w = arena::WORLD_WIDTH - 2.0 * arena::MARGIN;
        let mut h = arena::WORLD_HEIGHT - 2.0 * arena::MARGIN;
        for _ in 0..arena::MAX_SHRINK_STAGES {
            w *= arena::SHRINK_RATIO;
            h *= arena::SHRINK_RATIO;
        }
        assert!(w >= arena::MIN_SIZE);
        assert!(h >= arena::MIN_SIZE);
    }

    #[test]
    fn test_weapon_damage_kills_in_six_hits() {
        // radius 60 / 10 per hit = dead after the sixth hit
        let hits = (ball::RADIUS / ball::WEAPON_RADIUS_DAMAGE) as u32;
        assert_eq!(hits, 6);
    }

    #[test]
    fn test_heal_delay() {
        assert_eq!(powerup::HEAL_RESPAWN_DELAY_TICKS, 300);
    }
}
