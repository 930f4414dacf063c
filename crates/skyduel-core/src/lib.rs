//! Core types and definitions for the SKYDUEL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector math, components, input, settings, snapshots, events, and
//! constants. It has no dependency on any runtime or rendering framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod math;
pub mod models;
pub mod state;
pub mod types;
