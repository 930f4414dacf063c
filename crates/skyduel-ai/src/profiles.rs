//! Intensity-specific behavioral profiles.
//!
//! Consolidates the intensity-scaled parameters for the adversary FSM.

use skyduel_core::constants::*;
use skyduel_core::enums::AiIntensity;
use skyduel_core::types::Vec3;

/// Behavioral profile for an AI intensity tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdversaryProfile {
    /// Raw intensity multiplier (0.7 / 1.0 / 1.4).
    pub multiplier: f64,
    /// Per-axis patrol drift amplitude.
    pub patrol_amplitude: Vec3,
    /// Retreat weave amplitude on x/y; z holds the (positive) withdrawal rate.
    pub retreat_amplitude: Vec3,
    /// Climb and pull-back per tick during the attack wind-up.
    pub climb_rate: f64,
    pub pullback_rate: f64,
    /// Fraction of dragon speed used while chasing.
    pub chase_speed_factor: f64,
    /// Multiple of dragon speed used while charging.
    pub charge_speed_factor: f64,
    /// Per-tick fire probability while charging.
    pub attack_fire_chance: f64,
    /// Per-tick fire probability inside opportunistic range, any state.
    pub opportunistic_fire_chance: f64,
}

/// Get the behavioral profile for a given intensity.
pub fn get_profile(intensity: AiIntensity) -> AdversaryProfile {
    let m = intensity.multiplier();
    AdversaryProfile {
        multiplier: m,
        patrol_amplitude: Vec3::from_array(PATROL_AMPLITUDE) * m,
        retreat_amplitude: Vec3::new(
            RETREAT_AMPLITUDE[0],
            RETREAT_AMPLITUDE[1],
            RETREAT_WITHDRAW_RATE,
        ) * m,
        climb_rate: ATTACK_CLIMB_RATE * m,
        pullback_rate: ATTACK_PULLBACK_RATE * m,
        chase_speed_factor: CHASE_SPEED_FACTOR * m,
        charge_speed_factor: ATTACK_CHARGE_FACTOR * m,
        attack_fire_chance: ATTACK_FIRE_CHANCE * m,
        opportunistic_fire_chance: OPPORTUNISTIC_FIRE_CHANCE * m,
    }
}
