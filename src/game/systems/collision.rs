//! Pairwise ball collisions
//!
//! Overlapping pairs exchange momentum as a one-dimensional elastic
//! collision along the line of centers: velocities are rotated into the
//! collision frame, the axial components are updated with the standard
//! two-body elastic formula, and the results are rotated back. The pair
//! is then separated symmetrically so no overlap survives the tick.
//!
//! The weapon resolves here too: when exactly one ball of a colliding
//! pair is armed, the other takes the hit and the weapon is consumed.
//! Damage applies before the impulse, so the momentum exchange uses the
//! victim's post-hit mass.

use tracing::debug;

use crate::game::state::{Ball, GameState};
use crate::util::vec2::Vec2;

/// Resolve every overlapping pair once, in index order
pub fn update_collisions(state: &mut GameState) {
    let len = state.balls.len();
    for i in 0..len {
        for j in (i + 1)..len {
            let (left, right) = state.balls.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];
            if a.position.distance_to(b.position) < a.radius + b.radius {
                // Weapon damage lands first so the impulse below sees the
                // victim's reduced mass
                apply_weapon(a, b);
                resolve_pair(a, b);
            }
        }
    }
}

fn resolve_pair(a: &mut Ball, b: &mut Ball) {
    let delta = b.position - a.position;
    let dist = delta.length();
    let angle = delta.y.atan2(delta.x);
    let (sin, cos) = angle.sin_cos();

    let total_mass = a.mass + b.mass;
    if total_mass > 0.0 {
        // Rotate into the collision frame; x is the line of centers
        let v1 = Vec2::new(
            a.velocity.x * cos + a.velocity.y * sin,
            a.velocity.y * cos - a.velocity.x * sin,
        );
        let v2 = Vec2::new(
            b.velocity.x * cos + b.velocity.y * sin,
            b.velocity.y * cos - b.velocity.x * sin,
        );

        let v1x = ((a.mass - b.mass) * v1.x + 2.0 * b.mass * v2.x) / total_mass;
        let v2x = ((b.mass - a.mass) * v2.x + 2.0 * a.mass * v1.x) / total_mass;

        a.velocity = Vec2::new(v1x * cos - v1.y * sin, v1.y * cos + v1x * sin);
        b.velocity = Vec2::new(v2x * cos - v2.y * sin, v2.y * cos + v2x * sin);
    }

    // Push each ball half the overlap apart along the line of centers
    let overlap = a.radius + b.radius - dist;
    let push = Vec2::new(cos, sin) * (overlap / 2.0);
    a.position -= push;
    b.position += push;
}

fn apply_weapon(a: &mut Ball, b: &mut Ball) {
    match (a.has_weapon, b.has_weapon) {
        (true, false) => {
            b.take_weapon_hit(a.id);
            a.has_weapon = false;
        }
        (false, true) => {
            a.take_weapon_hit(b.id);
            b.has_weapon = false;
        }
        (true, true) => {
            // Cannot happen while the weapon stays unavailable until its
            // holder spends it; shed both rather than pick a victim.
            debug!(a = a.id, b = b.id, "two armed balls collided, clearing both");
            a.has_weapon = false;
            b.has_weapon = false;
        }
        (false, false) => {}
    }
}
