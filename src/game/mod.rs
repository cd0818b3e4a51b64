//! Core simulation: state, systems, events, and the tick driver

pub mod constants;
pub mod events;
pub mod match_result;
pub mod schedule;
pub mod simulator;
pub mod state;
pub mod systems;
