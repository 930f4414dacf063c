//! Pilot system: turns held actions into player motion, attitude and shots.

use hecs::World;
use tracing::debug;

use skyduel_core::components::{Mobility, Transform};
use skyduel_core::constants::*;
use skyduel_core::enums::Faction;
use skyduel_core::events::GameEvent;
use skyduel_core::input::InputState;
use skyduel_core::types::{Bounds, Vec3};

use crate::projectiles::{FireGate, Projectile, ProjectileManager};
use crate::world_setup::Combatants;

/// Move the player, bank and pitch the craft, and fire if the trigger is
/// held and the gate is open.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    combatants: Combatants,
    input: &InputState,
    bounds: &Bounds,
    now_ms: u64,
    gate: &mut FireGate,
    projectiles: &mut ProjectileManager,
    events: &mut Vec<GameEvent>,
) {
    let Ok((transform, mobility)) =
        world.query_one_mut::<(&mut Transform, &Mobility)>(combatants.player)
    else {
        return;
    };

    transform.position = bounds.clamp(transform.position + displacement(input, mobility.speed));
    transform.rotation = attitude(transform.rotation, input);

    if input.shoot && gate.try_fire(now_ms) {
        projectiles.fire(Projectile::player_shot(transform.position));
        events.push(GameEvent::ShotFired {
            faction: Faction::Player,
        });
        debug!(now_ms, "player fired");
    }
}

/// Per-tick movement for the held directions at `speed`.
pub fn displacement(input: &InputState, speed: f64) -> Vec3 {
    let vertical = speed * PLAYER_VERTICAL_SPEED_FACTOR;
    let mut delta = Vec3::ZERO;
    if input.up {
        delta.y += vertical;
    }
    if input.down {
        delta.y -= vertical;
    }
    if input.left {
        delta.x -= speed;
    }
    if input.right {
        delta.x += speed;
    }
    if input.forward {
        delta.z += speed;
    }
    if input.backward {
        delta.z -= speed;
    }
    delta
}

/// Bank toward the lateral input and pitch toward the vertical input,
/// easing back to level when neither is held. Left and up win ties.
pub fn attitude(rotation: Vec3, input: &InputState) -> Vec3 {
    let roll = if input.left {
        (rotation.z + PLAYER_BANK_RATE).min(PLAYER_MAX_BANK)
    } else if input.right {
        (rotation.z - PLAYER_BANK_RATE).max(-PLAYER_MAX_BANK)
    } else {
        rotation.z * PLAYER_ATTITUDE_DECAY
    };
    let pitch = if input.up {
        (rotation.x + PLAYER_PITCH_RATE).min(PLAYER_MAX_PITCH)
    } else if input.down {
        (rotation.x - PLAYER_PITCH_RATE).max(-PLAYER_MAX_PITCH)
    } else {
        rotation.x * PLAYER_ATTITUDE_DECAY
    };
    Vec3::new(pitch, rotation.y, roll)
}
