//! ECS systems that operate on the match world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: combatant state lives in components, match state
//! is passed in by the engine.

use hecs::{Entity, World};

use skyduel_core::components::Transform;
use skyduel_core::types::Vec3;

pub mod adversary;
pub mod collision;
pub mod difficulty;
pub mod pilot;
pub mod snapshot;

/// Current position of a combatant, if it still carries a transform.
pub(crate) fn position_of(world: &World, entity: Entity) -> Option<Vec3> {
    world.get::<&Transform>(entity).ok().map(|t| t.position)
}
