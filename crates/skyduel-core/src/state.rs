//! Match state snapshot: the complete visible state handed to the
//! render and HUD collaborators each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::math::{project, Camera};
use crate::types::{ScreenPoint, SimTime, Vec3};

/// Complete match state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub outcome: MatchOutcome,
    pub score: u32,
    pub player: CombatantView,
    pub dragon: CombatantView,
    /// Current adversary behavior (the renderer tints the dragon by it).
    pub adversary: BehaviorKind,
    pub projectiles: Vec<ProjectileView>,
    pub hud: HudView,
    /// Set while the input layer reports the config overlay key held.
    pub config_requested: bool,
    pub events: Vec<GameEvent>,
}

/// One combatant as the renderer and HUD see it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatantView {
    pub position: Vec3,
    pub rotation: Vec3,
    pub health: HealthView,
    pub wireframe: WireframeView,
}

/// Post rotation/translation vertex buffer plus edge list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireframeView {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[usize; 2]>,
}

/// A live projectile for styling and drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub faction: Faction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthView {
    pub current: u32,
    pub max: u32,
}

/// Read-only values for the heads-up display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    pub player_health: HealthView,
    pub dragon_health: HealthView,
    pub score: u32,
    /// Player y position.
    pub altitude: f64,
}

impl WireframeView {
    /// Screen-space line segments for every edge whose endpoints both project.
    pub fn project_edges(&self, camera: &Camera) -> Vec<(ScreenPoint, ScreenPoint)> {
        let projected: Vec<Option<ScreenPoint>> =
            self.vertices.iter().map(|v| project(*v, camera)).collect();
        self.edges
            .iter()
            .filter_map(|[a, b]| {
                let start = (*projected.get(*a)?)?;
                let end = (*projected.get(*b)?)?;
                Some((start, end))
            })
            .collect()
    }
}

impl HealthView {
    /// Remaining health as a fraction of max, for bar widths.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.max)
        }
    }
}
