//! Difficulty system: applies the active settings to combatant components.
//!
//! Runs at the start of every tick so settings changes take effect without
//! a reset. Idempotent.

use hecs::World;

use skyduel_core::components::{Health, Mobility};
use skyduel_core::config::GameSettings;

use crate::world_setup::Combatants;

/// Apply max health from the active difficulty and the configured player
/// speed. Current health is clamped down if the ceiling shrank.
pub fn run(world: &mut World, combatants: Combatants, settings: &GameSettings) {
    let profile = settings.active_profile();

    if let Ok((health, mobility)) =
        world.query_one_mut::<(&mut Health, &mut Mobility)>(combatants.player)
    {
        health.set_max(profile.player_max_health);
        mobility.speed = settings.player_speed;
    }
    if let Ok(mut health) = world.get::<&mut Health>(combatants.dragon) {
        health.set_max(profile.dragon_max_health);
    }
}
