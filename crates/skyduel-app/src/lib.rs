//! SKYDUEL headless application.
//!
//! This crate wires the match engine to a paced loop thread, feeds it
//! input from a pilot, and publishes the latest snapshot for polling.

pub mod game_loop;
pub mod pilot;
pub mod state;

pub use skyduel_core as core;
