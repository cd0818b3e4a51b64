//! Pickup placement and collection
//!
//! Exactly one weapon and one heal exist. The weapon is re-placed only
//! once nobody holds it, so at most one ball is armed at any time. The
//! heal reappears on a timer after consumption; the respawn itself is
//! driven by the schedule queue, this system only starts the countdown.

use rand::Rng;

use crate::config::SimConfig;
use crate::game::events::{GameEvent, GameEvents};
use crate::game::schedule::{Action, ScheduleQueue};
use crate::game::state::{GameState, PowerUp};
use crate::util::geom::{circle_rect_distance, Rect};
use crate::util::vec2::Vec2;

/// Place `item` at a uniformly random position fully inside `bounds`
pub fn place_power_up(item: &mut PowerUp, bounds: Rect, rng: &mut impl Rng) {
    let span_x = (bounds.width - item.width).max(0.0);
    let span_y = (bounds.height - item.height).max(0.0);
    item.position = Vec2::new(
        bounds.x + rng.gen_range(0.0..=span_x),
        bounds.y + rng.gen_range(0.0..=span_y),
    );
    item.available = true;
}

/// Run pickup collection and weapon re-placement for one tick
pub fn update_powerups(
    state: &mut GameState,
    config: &SimConfig,
    rng: &mut impl Rng,
    schedule: &mut ScheduleQueue,
    events: &mut GameEvents,
) {
    let bounds = state.arena.bounds;

    if state.weapon.enabled {
        let held = state.balls.iter().any(|b| b.has_weapon);
        if !state.weapon.available && !held {
            place_power_up(&mut state.weapon, bounds, rng);
        }
        if state.weapon.available {
            let rect = state.weapon.rect();
            if let Some(ball) = state
                .balls
                .iter_mut()
                .find(|b| circle_rect_distance(b.position, &rect) <= b.radius)
            {
                ball.has_weapon = true;
                state.weapon.available = false;
                events.push(GameEvent::WeaponPickedUp { ball_id: ball.id });
            }
        }
    }

    if state.heal.enabled && state.heal.available {
        let rect = state.heal.rect();
        if let Some(ball) = state
            .balls
            .iter_mut()
            .find(|b| circle_rect_distance(b.position, &rect) <= b.radius)
        {
            ball.heal();
            state.heal.available = false;
            schedule.schedule(
                Action::RespawnHeal,
                state.tick,
                config.heal_respawn_delay_ticks,
                state.generation,
            );
            events.push(GameEvent::HealConsumed { ball_id: ball.id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use smallvec::SmallVec;

    use crate::game::state::Ball;

    fn fixture() -> (GameState, SimConfig, SmallRng, ScheduleQueue, GameEvents) {
        let config = SimConfig::default();
        let state = GameState::new(config.initial_bounds(), true, true);
        (
            state,
            config,
            SmallRng::seed_from_u64(7),
            ScheduleQueue::new(),
            SmallVec::new(),
        )
    }

    fn ball_at(id: u32, x: f32, y: f32) -> Ball {
        Ball::new(id, Vec2::new(x, y), Vec2::ZERO, 60.0, 6.0, "#FF0000".into())
    }

    #[test]
    fn test_placement_stays_inside_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let bounds = Rect::new(20.0, 20.0, 960.0, 660.0);
        let mut item = PowerUp::new(crate::game::state::PowerUpKind::Weapon, true);
        for _ in 0..200 {
            place_power_up(&mut item, bounds, &mut rng);
            let r = item.rect();
            assert!(r.x >= bounds.x && r.right() <= bounds.right());
            assert!(r.y >= bounds.y && r.bottom() <= bounds.bottom());
        }
    }

    #[test]
    fn test_placement_in_minimal_bounds() {
        // Arena no larger than the item itself: span collapses to a point
        let mut rng = SmallRng::seed_from_u64(1);
        let bounds = Rect::new(100.0, 100.0, 50.0, 50.0);
        let mut item = PowerUp::new(crate::game::state::PowerUpKind::Heal, true);
        place_power_up(&mut item, bounds, &mut rng);
        assert_eq!(item.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_weapon_pickup_arms_first_overlapping_ball() {
        let (mut state, config, mut rng, mut schedule, mut events) = fixture();
        state.weapon.position = Vec2::new(400.0, 300.0);
        state.weapon.available = true;
        state.add_ball(ball_at(1, 380.0, 290.0));
        state.add_ball(ball_at(2, 420.0, 310.0));
        update_powerups(&mut state, &config, &mut rng, &mut schedule, &mut events);
        assert!(state.balls[0].has_weapon);
        assert!(!state.balls[1].has_weapon, "only the first scanned ball arms");
        assert!(!state.weapon.available);
        assert_eq!(events.as_slice(), [GameEvent::WeaponPickedUp { ball_id: 1 }]);
    }

    #[test]
    fn test_weapon_not_replaced_while_held() {
        let (mut state, config, mut rng, mut schedule, mut events) = fixture();
        state.weapon.available = false;
        let mut holder = ball_at(1, 100.0, 100.0);
        holder.has_weapon = true;
        state.add_ball(holder);
        update_powerups(&mut state, &config, &mut rng, &mut schedule, &mut events);
        assert!(!state.weapon.available);
    }

    #[test]
    fn test_weapon_replaced_after_consumption() {
        let (mut state, config, mut rng, mut schedule, mut events) = fixture();
        state.weapon.available = false;
        // Ball far from any placement the arena can produce is unlikely,
        // so keep the arena empty: replacement must not require a pickup
        update_powerups(&mut state, &config, &mut rng, &mut schedule, &mut events);
        assert!(state.weapon.available);
        let r = state.weapon.rect();
        let bounds = state.arena.bounds;
        assert!(r.x >= bounds.x && r.right() <= bounds.right());
    }

    #[test]
    fn test_heal_pickup_heals_and_schedules_respawn() {
        let (mut state, config, mut rng, mut schedule, mut events) = fixture();
        state.heal.position = Vec2::new(400.0, 300.0);
        state.heal.available = true;
        state.tick = 100;
        let mut hurt = ball_at(1, 410.0, 310.0);
        hurt.radius = 40.0;
        hurt.mass = 4.0;
        state.add_ball(hurt);
        update_powerups(&mut state, &config, &mut rng, &mut schedule, &mut events);
        assert_eq!(state.balls[0].radius, 50.0);
        assert_eq!(state.balls[0].mass, 5.0);
        assert!(!state.heal.available);
        assert_eq!(events.as_slice(), [GameEvent::HealConsumed { ball_id: 1 }]);
        // Countdown started, nothing due before the full delay
        assert!(schedule
            .drain_due(100 + config.heal_respawn_delay_ticks - 1, 0)
            .is_empty());
        assert_eq!(
            schedule.drain_due(100 + config.heal_respawn_delay_ticks, 0),
            vec![Action::RespawnHeal]
        );
    }

    #[test]
    fn test_disabled_pickups_are_inert() {
        let config = SimConfig::default();
        let mut state = GameState::new(config.initial_bounds(), false, false);
        let mut rng = SmallRng::seed_from_u64(3);
        let mut schedule = ScheduleQueue::new();
        let mut events: GameEvents = SmallVec::new();
        state.add_ball(ball_at(1, 400.0, 300.0));
        update_powerups(&mut state, &config, &mut rng, &mut schedule, &mut events);
        assert!(!state.weapon.available);
        assert!(!state.balls[0].has_weapon);
        assert!(events.is_empty());
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_non_overlapping_ball_does_not_collect() {
        let (mut state, config, mut rng, mut schedule, mut events) = fixture();
        state.weapon.position = Vec2::new(800.0, 600.0);
        state.weapon.available = true;
        state.add_ball(ball_at(1, 100.0, 100.0));
        update_powerups(&mut state, &config, &mut rng, &mut schedule, &mut events);
        assert!(!state.balls[0].has_weapon);
        assert!(state.weapon.available);
        assert!(events.is_empty());
    }
}
