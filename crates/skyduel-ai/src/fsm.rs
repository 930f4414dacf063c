//! Adversary behavior finite state machine.
//!
//! Pure functions that compute the dragon's next behavior state, its
//! displacement for the tick, and whether it wants to fire. No ECS
//! dependency: operates on plain data plus a caller-supplied RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use skyduel_core::constants::*;
use skyduel_core::enums::{AiIntensity, BehaviorKind};
use skyduel_core::math::{distance, normalize_or_skip};
use skyduel_core::types::{Bounds, Vec3};

use crate::profiles::{get_profile, AdversaryProfile};

/// Behavior state with the number of ticks spent in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdversaryState {
    Patrol { timer: u32 },
    Chase { timer: u32 },
    Attack { timer: u32 },
    Retreat { timer: u32 },
}

impl Default for AdversaryState {
    fn default() -> Self {
        AdversaryState::Patrol { timer: 0 }
    }
}

impl AdversaryState {
    pub fn kind(self) -> BehaviorKind {
        match self {
            AdversaryState::Patrol { .. } => BehaviorKind::Patrol,
            AdversaryState::Chase { .. } => BehaviorKind::Chase,
            AdversaryState::Attack { .. } => BehaviorKind::Attack,
            AdversaryState::Retreat { .. } => BehaviorKind::Retreat,
        }
    }

    pub fn timer(self) -> u32 {
        match self {
            AdversaryState::Patrol { timer }
            | AdversaryState::Chase { timer }
            | AdversaryState::Attack { timer }
            | AdversaryState::Retreat { timer } => timer,
        }
    }

    /// Fresh state of the given kind with its timer at zero.
    pub fn enter(kind: BehaviorKind) -> Self {
        match kind {
            BehaviorKind::Patrol => AdversaryState::Patrol { timer: 0 },
            BehaviorKind::Chase => AdversaryState::Chase { timer: 0 },
            BehaviorKind::Attack => AdversaryState::Attack { timer: 0 },
            BehaviorKind::Retreat => AdversaryState::Retreat { timer: 0 },
        }
    }

    fn ticked(self) -> Self {
        match self {
            AdversaryState::Patrol { timer } => AdversaryState::Patrol {
                timer: timer.saturating_add(1),
            },
            AdversaryState::Chase { timer } => AdversaryState::Chase {
                timer: timer.saturating_add(1),
            },
            AdversaryState::Attack { timer } => AdversaryState::Attack {
                timer: timer.saturating_add(1),
            },
            AdversaryState::Retreat { timer } => AdversaryState::Retreat {
                timer: timer.saturating_add(1),
            },
        }
    }
}

/// Persistent controller memory carried between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdversaryBrain {
    pub state: AdversaryState,
    /// Oscillation phase; keeps accumulating across transitions.
    pub move_phase: f64,
}

/// Input to the adversary FSM for a single tick.
pub struct AdversaryContext {
    pub state: AdversaryState,
    pub move_phase: f64,
    pub position: Vec3,
    pub player_position: Vec3,
    /// Base dragon speed (units per tick).
    pub speed: f64,
    pub intensity: AiIntensity,
    pub bounds: Bounds,
}

/// Output from the adversary FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdversaryUpdate {
    pub new_state: AdversaryState,
    /// Already clamped into bounds.
    pub new_position: Vec3,
    pub move_phase: f64,
    /// Number of fire requests raised this tick (charge roll plus
    /// opportunistic roll). The caller's fire gate decides what launches.
    pub fire_requests: u8,
    pub state_changed: bool,
}

/// Evaluate the FSM for one tick.
pub fn evaluate<R: Rng + ?Sized>(ctx: &AdversaryContext, rng: &mut R) -> AdversaryUpdate {
    let profile = get_profile(ctx.intensity);
    let phase = ctx.move_phase + DRAGON_PHASE_STEP;
    let state = ctx.state.ticked();
    let range = distance(ctx.position, ctx.player_position);

    let step = match state {
        AdversaryState::Patrol { .. } => patrol(&profile, phase, range),
        AdversaryState::Chase { timer } => chase(ctx, &profile, range, timer),
        AdversaryState::Attack { timer } => attack(ctx, &profile, timer, rng),
        AdversaryState::Retreat { timer } => retreat(&profile, phase, timer),
    };

    let mut fire_requests = u8::from(step.fire);
    if range < OPPORTUNISTIC_FIRE_RANGE && rng.gen::<f64>() < profile.opportunistic_fire_chance {
        fire_requests += 1;
    }

    let (new_state, state_changed) = match step.transition {
        Some(kind) => (AdversaryState::enter(kind), true),
        None => (state, false),
    };

    AdversaryUpdate {
        new_state,
        new_position: ctx.bounds.clamp(ctx.position + step.displacement),
        move_phase: phase,
        fire_requests,
        state_changed,
    }
}

/// Dragon attitude for a given phase, advancing yaw from the current rotation.
pub fn attitude(rotation: Vec3, phase: f64) -> Vec3 {
    Vec3::new(
        (phase * DRAGON_PITCH_FREQUENCY).sin() * DRAGON_PITCH_AMPLITUDE,
        rotation.y + DRAGON_YAW_RATE,
        (phase * DRAGON_ROLL_FREQUENCY).sin() * DRAGON_ROLL_AMPLITUDE,
    )
}

struct Step {
    displacement: Vec3,
    transition: Option<BehaviorKind>,
    fire: bool,
}

impl Step {
    fn stay(displacement: Vec3) -> Self {
        Step {
            displacement,
            transition: None,
            fire: false,
        }
    }
}

fn patrol(profile: &AdversaryProfile, phase: f64, range: f64) -> Step {
    let [fx, fy, fz] = PATROL_FREQUENCY;
    let amp = profile.patrol_amplitude;
    let displacement = Vec3::new(
        (phase * fx).sin() * amp.x,
        (phase * fy).cos() * amp.y,
        (phase * fz).sin() * amp.z,
    );
    let mut step = Step::stay(displacement);
    if range < CHASE_TRIGGER_RANGE {
        step.transition = Some(BehaviorKind::Chase);
    }
    step
}

fn chase(ctx: &AdversaryContext, profile: &AdversaryProfile, range: f64, timer: u32) -> Step {
    let chase_speed = ctx.speed * profile.chase_speed_factor;
    let offset = ctx.player_position - ctx.position;

    let mut displacement = Vec3::ZERO;
    if range > CHASE_MIN_RANGE {
        if let Some(dir) = normalize_or_skip(offset) {
            displacement += dir * chase_speed;
        }
    }
    if offset.y.abs() > CHASE_VERTICAL_THRESHOLD {
        displacement.y += offset.y.signum() * chase_speed * CHASE_VERTICAL_FACTOR;
    }

    let mut step = Step::stay(displacement);
    if range < ATTACK_TRIGGER_RANGE {
        step.transition = Some(BehaviorKind::Attack);
    } else if timer > CHASE_TIMEOUT_TICKS {
        step.transition = Some(BehaviorKind::Patrol);
    }
    step
}

fn attack<R: Rng + ?Sized>(
    ctx: &AdversaryContext,
    profile: &AdversaryProfile,
    timer: u32,
    rng: &mut R,
) -> Step {
    if timer < ATTACK_CLIMB_TICKS {
        return Step::stay(Vec3::new(0.0, profile.climb_rate, -profile.pullback_rate));
    }
    if timer < ATTACK_CHARGE_TICKS {
        let charge_speed = ctx.speed * profile.charge_speed_factor;
        let displacement = normalize_or_skip(ctx.player_position - ctx.position)
            .map(|dir| dir * charge_speed)
            .unwrap_or(Vec3::ZERO);
        let mut step = Step::stay(displacement);
        step.fire = rng.gen::<f64>() < profile.attack_fire_chance;
        return step;
    }
    Step {
        displacement: Vec3::ZERO,
        transition: Some(BehaviorKind::Retreat),
        fire: false,
    }
}

fn retreat(profile: &AdversaryProfile, phase: f64, timer: u32) -> Step {
    let [fx, fy] = RETREAT_FREQUENCY;
    let amp = profile.retreat_amplitude;
    let displacement = Vec3::new(
        (phase * fx).sin() * amp.x,
        (phase * fy).cos() * amp.y,
        -amp.z,
    );
    let mut step = Step::stay(displacement);
    if timer > RETREAT_TICKS {
        step.transition = Some(BehaviorKind::Patrol);
    }
    step
}
