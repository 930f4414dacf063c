//! Adversary system: runs the dragon's behavior FSM each tick.
//!
//! Calls the FSM from skyduel-ai, writes the result back to the dragon's
//! components, and turns fire requests into predictive shots.

use hecs::World;
use rand::Rng;
use tracing::debug;

use skyduel_core::components::{Mobility, Transform};
use skyduel_core::enums::{AiIntensity, Faction};
use skyduel_core::events::GameEvent;
use skyduel_core::input::InputState;
use skyduel_core::types::Bounds;

use skyduel_ai::fsm::{attitude, evaluate, AdversaryBrain, AdversaryContext};
use skyduel_ai::targeting::predictive_shot;

use crate::projectiles::{FireGate, Projectile, ProjectileManager};
use crate::systems::position_of;
use crate::world_setup::Combatants;

/// Advance the dragon one tick.
///
/// `input` is the player's held actions, used as the lead intent for shots.
#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    combatants: Combatants,
    brain: &mut AdversaryBrain,
    input: &InputState,
    intensity: AiIntensity,
    bounds: &Bounds,
    now_ms: u64,
    gate: &mut FireGate,
    projectiles: &mut ProjectileManager,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let Some(player_position) = position_of(world, combatants.player) else {
        return;
    };
    let Ok((transform, mobility)) =
        world.query_one_mut::<(&mut Transform, &Mobility)>(combatants.dragon)
    else {
        return;
    };

    let ctx = AdversaryContext {
        state: brain.state,
        move_phase: brain.move_phase,
        position: transform.position,
        player_position,
        speed: mobility.speed,
        intensity,
        bounds: *bounds,
    };
    let update = evaluate(&ctx, rng);

    if update.state_changed {
        let from = brain.state.kind();
        let to = update.new_state.kind();
        debug!(?from, ?to, "adversary state changed");
        events.push(GameEvent::AdversaryStateChanged { from, to });
    }

    brain.state = update.new_state;
    brain.move_phase = update.move_phase;
    transform.position = update.new_position;
    transform.rotation = attitude(transform.rotation, update.move_phase);

    for _ in 0..update.fire_requests {
        if !gate.is_open(now_ms) {
            break;
        }
        // A degenerate aim leaves the gate untouched.
        let Some(velocity) = predictive_shot(transform.position, player_position, input) else {
            continue;
        };
        gate.try_fire(now_ms);
        projectiles.fire(Projectile::dragon_shot(transform.position, velocity));
        events.push(GameEvent::ShotFired {
            faction: Faction::Dragon,
        });
        debug!(now_ms, "dragon fired");
    }
}
