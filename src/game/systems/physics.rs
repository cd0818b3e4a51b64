//! Movement integration and wall reflection
//!
//! Velocities are expressed in units per tick, so integration is a plain
//! addition with no timestep factor. Wall handling reflects the velocity
//! component and snaps the ball flush to the boundary, which also pulls
//! balls back inside after the arena shrinks around them.

use crate::game::state::GameState;

/// Advance every ball one tick and resolve wall contacts
pub fn update_physics(state: &mut GameState) {
    let bounds = state.arena.bounds;
    for ball in &mut state.balls {
        ball.position += ball.velocity;

        if ball.position.x - ball.radius < bounds.x {
            ball.position.x = bounds.x + ball.radius;
            ball.velocity.x = -ball.velocity.x;
        } else if ball.position.x + ball.radius > bounds.right() {
            ball.position.x = bounds.right() - ball.radius;
            ball.velocity.x = -ball.velocity.x;
        }

        if ball.position.y - ball.radius < bounds.y {
            ball.position.y = bounds.y + ball.radius;
            ball.velocity.y = -ball.velocity.y;
        } else if ball.position.y + ball.radius > bounds.bottom() {
            ball.position.y = bounds.bottom() - ball.radius;
            ball.velocity.y = -ball.velocity.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Ball;
    use crate::util::geom::Rect;
    use crate::util::vec2::Vec2;

    fn state_with_ball(position: Vec2, velocity: Vec2, radius: f32) -> GameState {
        let mut state = GameState::new(Rect::new(0.0, 0.0, 400.0, 400.0), true, true);
        state.add_ball(Ball::new(1, position, velocity, radius, 6.0, "#FF0000".into()));
        state
    }

    #[test]
    fn test_integration_is_one_step_per_tick() {
        let mut state = state_with_ball(Vec2::new(200.0, 200.0), Vec2::new(3.0, -2.0), 10.0);
        update_physics(&mut state);
        assert_eq!(state.balls[0].position, Vec2::new(203.0, 198.0));
        update_physics(&mut state);
        assert_eq!(state.balls[0].position, Vec2::new(206.0, 196.0));
    }

    #[test]
    fn test_right_wall_reflects_and_snaps() {
        let mut state = state_with_ball(Vec2::new(389.0, 200.0), Vec2::new(4.0, 0.0), 10.0);
        update_physics(&mut state);
        let ball = &state.balls[0];
        assert_eq!(ball.position.x, 390.0, "snapped flush to the wall");
        assert_eq!(ball.velocity.x, -4.0);
    }

    #[test]
    fn test_top_wall_reflects_and_snaps() {
        let mut state = state_with_ball(Vec2::new(200.0, 12.0), Vec2::new(0.0, -5.0), 10.0);
        update_physics(&mut state);
        let ball = &state.balls[0];
        assert_eq!(ball.position.y, 10.0);
        assert_eq!(ball.velocity.y, 5.0);
    }

    #[test]
    fn test_corner_reflects_both_components() {
        let mut state = state_with_ball(Vec2::new(388.0, 388.0), Vec2::new(5.0, 5.0), 10.0);
        update_physics(&mut state);
        let ball = &state.balls[0];
        assert_eq!(ball.position, Vec2::new(390.0, 390.0));
        assert_eq!(ball.velocity, Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_ball_outside_shrunk_bounds_is_pulled_back() {
        // Ball sits beyond the boundary, as happens right after a shrink
        let mut state = state_with_ball(Vec2::new(450.0, 200.0), Vec2::ZERO, 10.0);
        update_physics(&mut state);
        let ball = &state.balls[0];
        assert_eq!(ball.position.x, 390.0);
        assert!(Rect::new(0.0, 0.0, 400.0, 400.0).contains_circle(ball.position, ball.radius));
    }
}
