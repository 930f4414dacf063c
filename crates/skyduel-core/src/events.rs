//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Per-tick events drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile was spawned.
    ShotFired { faction: Faction },
    /// A projectile struck the opposing combatant.
    ProjectileHit { faction: Faction, damage: u32 },
    /// Combatants overlapped and the player took ramming damage.
    MeleeHit { damage: u32 },
    /// The adversary switched behavior.
    AdversaryStateChanged { from: BehaviorKind, to: BehaviorKind },
    /// The match reached a terminal outcome.
    MatchEnded { outcome: MatchOutcome, final_score: u32 },
    /// Match state was restored to its starting configuration.
    MatchReset,
}
