//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in the simulation systems.

use serde::{Deserialize, Serialize};

use crate::models::ModelId;
use crate::types::Vec3;

/// Marks the player-controlled craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks the autonomous adversary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dragon;

/// Position and Euler attitude (radians) of a combatant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Hit points. `current` never exceeds `max` and never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// Base movement speed (units per tick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mobility {
    pub speed: f64,
}

/// Wireframe model used to render this entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wireframe {
    pub model: ModelId,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage, saturating at zero. Returns the remaining health.
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Change the ceiling, clamping current health down if it shrank.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}
