//! Simulation systems, run in a fixed order each tick:
//! movement and wall bounces, then pairwise collisions, then pickup
//! collection, then elimination and match-progress handling.

pub mod collision;
pub mod lifecycle;
pub mod physics;
pub mod powerups;
