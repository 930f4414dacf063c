//! Collision system: resolves projectile hits and ramming damage.
//!
//! Checks run in a fixed order and stop as soon as either side's health
//! reaches zero, so at most one terminal outcome is produced per tick.

use hecs::{Entity, World};

use skyduel_core::components::Health;
use skyduel_core::constants::*;
use skyduel_core::enums::{Faction, MatchOutcome};
use skyduel_core::events::GameEvent;
use skyduel_core::math::distance;
use skyduel_core::types::Vec3;

use crate::projectiles::{FireGate, ProjectileManager};
use crate::systems::position_of;
use crate::world_setup::Combatants;

/// Run all collision checks. Returns the outcome after this tick's damage.
pub fn run(
    world: &mut World,
    combatants: Combatants,
    projectiles: &mut ProjectileManager,
    score: &mut u32,
    melee_gate: &mut FireGate,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) -> MatchOutcome {
    let (Some(player_pos), Some(dragon_pos)) = (
        position_of(world, combatants.player),
        position_of(world, combatants.dragon),
    ) else {
        return MatchOutcome::InProgress;
    };

    // 1. Player shots against the dragon
    for index in (0..projectiles.len(Faction::Player)).rev() {
        if !hits(projectiles, Faction::Player, index, dragon_pos, PLAYER_SHOT_HIT_RADIUS) {
            continue;
        }
        projectiles.remove(Faction::Player, index);
        *score += PLAYER_SHOT_SCORE;
        events.push(GameEvent::ProjectileHit {
            faction: Faction::Player,
            damage: PLAYER_SHOT_DAMAGE,
        });
        if apply_damage(world, combatants.dragon, PLAYER_SHOT_DAMAGE) {
            *score += VICTORY_BONUS;
            return MatchOutcome::Victory;
        }
    }

    // 2. Dragon shots against the player
    for index in (0..projectiles.len(Faction::Dragon)).rev() {
        if !hits(projectiles, Faction::Dragon, index, player_pos, DRAGON_SHOT_HIT_RADIUS) {
            continue;
        }
        projectiles.remove(Faction::Dragon, index);
        events.push(GameEvent::ProjectileHit {
            faction: Faction::Dragon,
            damage: DRAGON_SHOT_DAMAGE,
        });
        if apply_damage(world, combatants.player, DRAGON_SHOT_DAMAGE) {
            return MatchOutcome::Defeat;
        }
    }

    // 3. Ramming, on a single shared cooldown
    if distance(player_pos, dragon_pos) < MELEE_RANGE && melee_gate.try_fire(now_ms) {
        events.push(GameEvent::MeleeHit {
            damage: MELEE_DAMAGE,
        });
        if apply_damage(world, combatants.player, MELEE_DAMAGE) {
            return MatchOutcome::Defeat;
        }
    }

    MatchOutcome::InProgress
}

fn hits(
    projectiles: &ProjectileManager,
    faction: Faction,
    index: usize,
    target: Vec3,
    radius: f64,
) -> bool {
    projectiles
        .get(faction, index)
        .is_some_and(|shot| distance(shot.position, target) < radius)
}

/// Damage an entity. Returns true if its health is now depleted.
fn apply_damage(world: &mut World, entity: Entity, amount: u32) -> bool {
    match world.get::<&mut Health>(entity) {
        Ok(mut health) => {
            health.damage(amount);
            health.is_depleted()
        }
        Err(_) => false,
    }
}
