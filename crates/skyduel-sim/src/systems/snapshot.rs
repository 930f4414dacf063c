//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use skyduel_core::components::*;
use skyduel_core::enums::*;
use skyduel_core::events::GameEvent;
use skyduel_core::math::transform_model;
use skyduel_core::state::*;
use skyduel_core::types::SimTime;

use crate::projectiles::ProjectileManager;

/// Build a complete MatchSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    outcome: MatchOutcome,
    score: u32,
    adversary: BehaviorKind,
    projectiles: &ProjectileManager,
    config_requested: bool,
    events: Vec<GameEvent>,
) -> MatchSnapshot {
    let player = build_combatant::<Player>(world);
    let dragon = build_combatant::<Dragon>(world);

    MatchSnapshot {
        time: *time,
        outcome,
        score,
        hud: HudView {
            player_health: player.health,
            dragon_health: dragon.health,
            score,
            altitude: player.position.y,
        },
        player,
        dragon,
        adversary,
        projectiles: build_projectiles(projectiles),
        config_requested,
        events,
    }
}

/// Build the view of the (single) combatant carrying marker `M`.
fn build_combatant<M: hecs::Component>(world: &World) -> CombatantView {
    let mut query = world.query::<(&M, &Transform, &Health, &Wireframe)>();
    query
        .iter()
        .next()
        .map(|(_, (_, transform, health, wireframe))| {
            let model = wireframe.model.model();
            CombatantView {
                position: transform.position,
                rotation: transform.rotation,
                health: HealthView {
                    current: health.current,
                    max: health.max,
                },
                wireframe: WireframeView {
                    vertices: transform_model(
                        &model.vertices(),
                        transform.rotation,
                        transform.position,
                    ),
                    edges: model.edges.to_vec(),
                },
            }
        })
        .unwrap_or_default()
}

/// Player shots first, then dragon shots, each in firing order.
fn build_projectiles(projectiles: &ProjectileManager) -> Vec<ProjectileView> {
    [Faction::Player, Faction::Dragon]
        .into_iter()
        .flat_map(|faction| projectiles.iter(faction))
        .map(|shot| ProjectileView {
            position: shot.position,
            faction: shot.faction,
        })
        .collect()
}
