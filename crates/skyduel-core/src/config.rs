//! Runtime game settings supplied by the configuration collaborator.
//!
//! The simulation reads these fresh every tick, so they may change
//! between ticks while a match is in progress. Invalid settings are
//! rejected when applied, never tolerated downstream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{AiIntensity, Difficulty};
use crate::input::{Action, KeyBindings};
use crate::math::Camera;
use crate::types::{AxisRange, Bounds, Vec3};

/// Errors surfaced when settings are parsed or applied.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{difficulty:?} profile has zero max health for the {side}")]
    ZeroMaxHealth {
        difficulty: Difficulty,
        side: &'static str,
    },
    #[error("bounds on the {axis} axis are inverted or non-finite ({min}..{max})")]
    InvalidBounds { axis: char, min: f64, max: f64 },
    #[error("camera distance must be positive and finite, got {0}")]
    InvalidCameraDistance(f64),
    #[error("camera position must be finite, got {0}")]
    InvalidCameraPosition(Vec3),
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("player speed must be finite and non-negative, got {0}")]
    InvalidPlayerSpeed(f64),
    #[error("key {key:?} is already bound to {existing:?}")]
    DuplicateBinding { key: String, existing: Action },
    #[error("unknown key binding preset: {0}")]
    UnknownPreset(String),
    #[error("malformed settings: {0}")]
    Parse(String),
}

/// Max health for both combatants at one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub player_max_health: u32,
    pub dragon_max_health: u32,
}

/// Per-tier health profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub easy: DifficultyProfile,
    pub normal: DifficultyProfile,
    pub hard: DifficultyProfile,
}

/// World and camera constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub bounds: Bounds,
    pub camera: Camera,
}

/// Everything the simulation reads from the configuration collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub difficulties: DifficultyTable,
    /// Player movement speed (units per tick).
    pub player_speed: f64,
    pub ai_intensity: AiIntensity,
    pub world: WorldConfig,
    pub controls: KeyBindings,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile {
                player_max_health: EASY_PLAYER_HEALTH,
                dragon_max_health: EASY_DRAGON_HEALTH,
            },
            normal: DifficultyProfile {
                player_max_health: NORMAL_PLAYER_HEALTH,
                dragon_max_health: NORMAL_DRAGON_HEALTH,
            },
            hard: DifficultyProfile {
                player_max_health: HARD_PLAYER_HEALTH,
                dragon_max_health: HARD_DRAGON_HEALTH,
            },
        }
    }
}

impl DifficultyTable {
    pub fn profile(&self, difficulty: Difficulty) -> DifficultyProfile {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            difficulties: DifficultyTable::default(),
            player_speed: PLAYER_DEFAULT_SPEED,
            ai_intensity: AiIntensity::default(),
            world: WorldConfig::default(),
            controls: KeyBindings::default(),
        }
    }
}

impl GameSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    /// The result is validated before it is returned.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: GameSettings =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Health profile for the selected difficulty.
    pub fn active_profile(&self) -> DifficultyProfile {
        self.difficulties.profile(self.difficulty)
    }

    /// Check every field the simulation depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (difficulty, profile) in [
            (Difficulty::Easy, self.difficulties.easy),
            (Difficulty::Normal, self.difficulties.normal),
            (Difficulty::Hard, self.difficulties.hard),
        ] {
            if profile.player_max_health == 0 {
                return Err(ConfigError::ZeroMaxHealth {
                    difficulty,
                    side: "player",
                });
            }
            if profile.dragon_max_health == 0 {
                return Err(ConfigError::ZeroMaxHealth {
                    difficulty,
                    side: "dragon",
                });
            }
        }

        let bounds = &self.world.bounds;
        for (axis, range) in [('x', bounds.x), ('y', bounds.y), ('z', bounds.z)] {
            check_range(axis, range)?;
        }

        let camera = &self.world.camera;
        if !(camera.distance.is_finite() && camera.distance > 0.0) {
            return Err(ConfigError::InvalidCameraDistance(camera.distance));
        }
        if !camera.position.is_finite() {
            return Err(ConfigError::InvalidCameraPosition(camera.position));
        }
        let viewport = camera.viewport;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(viewport.width) && positive(viewport.height)) {
            return Err(ConfigError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(ConfigError::InvalidPlayerSpeed(self.player_speed));
        }

        self.controls.validate()
    }
}

fn check_range(axis: char, range: AxisRange) -> Result<(), ConfigError> {
    if range.is_well_formed() {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds {
            axis,
            min: range.min,
            max: range.max,
        })
    }
}
