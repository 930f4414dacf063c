//! Adversary AI for SKYDUEL.
//!
//! Implements the dragon's behavior state machine, intensity-scaled
//! behavior profiles, and predictive targeting for its shots.

pub mod fsm;
pub mod profiles;
pub mod targeting;

pub use skyduel_core as core;

#[cfg(test)]
mod tests;
