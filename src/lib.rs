//! Last-ball-standing arena simulation
//!
//! A fixed-tick 2D simulation of balls bouncing inside a shrinking
//! rectangular arena. Balls collide elastically, a one-shot weapon
//! pickup lets its holder damage the next ball it touches, a heal
//! pickup restores lost stats, and a ball whose radius reaches zero is
//! eliminated. The last survivor wins.
//!
//! Drive it through [`Simulator`]: construct with a [`SimConfig`], call
//! [`Simulator::initialize`] to start a match, then [`Simulator::step`]
//! once per tick and consume the returned events.

pub mod config;
pub mod error;
pub mod game;
pub mod util;

pub use config::SimConfig;
pub use error::SimError;
pub use game::events::{GameEvent, GameEvents};
pub use game::match_result::MatchResult;
pub use game::simulator::{BallSpec, Simulator};
pub use game::state::{Ball, BallId, GameState, MatchPhase, PowerUpKind, ResizeMode};
