//! Match simulation for SKYDUEL.
//!
//! Owns the hecs ECS world, runs systems once per frame tick,
//! and produces MatchSnapshots for the presentation layer.

pub mod clock;
pub mod engine;
pub mod projectiles;
pub mod systems;
pub mod world_setup;

pub use engine::{MatchEngine, SimConfig};
pub use skyduel_core as core;
