//! Entity spawn factories for the two combatants.
//!
//! Both combatants live for the whole match; reset rewrites their
//! components in place instead of respawning them.

use hecs::{Entity, World};

use skyduel_core::components::*;
use skyduel_core::config::GameSettings;
use skyduel_core::constants::*;
use skyduel_core::models::ModelId;
use skyduel_core::types::Vec3;

/// Entity handles for the player craft and the dragon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combatants {
    pub player: Entity,
    pub dragon: Entity,
}

/// Spawn both combatants at their starting positions with full health.
/// Starting positions are clamped into the configured bounds.
pub fn spawn_combatants(world: &mut World, settings: &GameSettings) -> Combatants {
    let profile = settings.active_profile();
    let bounds = &settings.world.bounds;

    let player = world.spawn((
        Player,
        Transform::at(bounds.clamp(Vec3::from_array(PLAYER_START))),
        Health::full(profile.player_max_health),
        Mobility {
            speed: settings.player_speed,
        },
        Wireframe {
            model: ModelId::Fighter,
        },
    ));

    let dragon = world.spawn((
        Dragon,
        Transform::at(bounds.clamp(Vec3::from_array(DRAGON_START))),
        Health::full(profile.dragon_max_health),
        Mobility {
            speed: DRAGON_SPEED,
        },
        Wireframe {
            model: ModelId::Dragon,
        },
    ));

    Combatants { player, dragon }
}

/// Restore starting transforms, full health at the active difficulty, and
/// base speeds.
pub fn reset_combatants(world: &mut World, combatants: Combatants, settings: &GameSettings) {
    let profile = settings.active_profile();
    let bounds = &settings.world.bounds;
    restore(
        world,
        combatants.player,
        bounds.clamp(Vec3::from_array(PLAYER_START)),
        profile.player_max_health,
        settings.player_speed,
    );
    restore(
        world,
        combatants.dragon,
        bounds.clamp(Vec3::from_array(DRAGON_START)),
        profile.dragon_max_health,
        DRAGON_SPEED,
    );
}

fn restore(world: &mut World, entity: Entity, start: Vec3, max_health: u32, speed: f64) {
    if let Ok((transform, health, mobility)) =
        world.query_one_mut::<(&mut Transform, &mut Health, &mut Mobility)>(entity)
    {
        *transform = Transform::at(start);
        *health = Health::full(max_health);
        mobility.speed = speed;
    }
}
