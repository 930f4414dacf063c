//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Which side fired a projectile. Selects the projectile's despawn rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Dragon,
}

/// Match state (top-level). Terminal once not `InProgress`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[default]
    InProgress,
    /// Dragon health depleted.
    Victory,
    /// Player health depleted.
    Defeat,
}

/// Named difficulty tier. Selects max health for both combatants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Adversary AI intensity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiIntensity {
    Weak,
    #[default]
    Normal,
    Strong,
}

/// Coarse adversary behavior, without the per-state timer.
/// Used in events and snapshots where the timer is noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorKind {
    #[default]
    Patrol,
    Chase,
    Attack,
    Retreat,
}

impl MatchOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchOutcome::InProgress)
    }
}

impl AiIntensity {
    /// Scalar applied to adversary speed and fire probability.
    pub fn multiplier(self) -> f64 {
        match self {
            AiIntensity::Weak => AI_WEAK_MULTIPLIER,
            AiIntensity::Normal => AI_NORMAL_MULTIPLIER,
            AiIntensity::Strong => AI_STRONG_MULTIPLIER,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

impl std::str::FromStr for AiIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weak" => Ok(AiIntensity::Weak),
            "normal" => Ok(AiIntensity::Normal),
            "strong" => Ok(AiIntensity::Strong),
            other => Err(format!("unknown AI intensity: {other}")),
        }
    }
}
