//! Observable per-tick simulation events
//!
//! Each call to [`Simulator::step`](crate::game::simulator::Simulator::step)
//! returns the events that occurred during that tick, in occurrence order.
//! Callers consume them for feeds, HUDs, or logging; the simulation itself
//! never reads them back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::game::state::BallId;

/// Events emitted by a single simulation tick. Most ticks produce none,
/// so the backing vector is inlined for the common small case.
pub type GameEvents = SmallVec<[GameEvent; 4]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball collected the weapon pickup
    WeaponPickedUp { ball_id: BallId },
    /// A ball consumed the heal pickup
    HealConsumed { ball_id: BallId },
    /// A ball was eliminated by a still-living killer. Deaths with no
    /// attributable killer are silent removals and emit nothing.
    Kill {
        killer_id: BallId,
        victim_id: BallId,
        killer_color: String,
        victim_color: String,
        /// Living balls left after the removal
        remaining: usize,
    },
    /// The arena advanced a shrink stage
    ArenaShrunk {
        stage: u8,
        width: f32,
        height: f32,
    },
    /// The match ended; emitted once, shortly after the last elimination
    MatchOver {
        winner_id: BallId,
        winner_color: String,
        remaining_mass: f32,
        kills: u32,
    },
}
