//! Predictive targeting for dragon shots.
//!
//! The dragon leads its shots using the player's currently held movement
//! keys as an intent vector, not the player's measured velocity.

use skyduel_core::constants::*;
use skyduel_core::input::InputState;
use skyduel_core::math::{distance, normalize_or_skip};
use skyduel_core::types::Vec3;

/// Assumed player velocity per axis from the held directional actions.
/// Right, up and forward win when both keys on an axis are held.
pub fn lead_intent(input: &InputState) -> Vec3 {
    let axis = |pos: bool, neg: bool, speed: f64| {
        if pos {
            speed
        } else if neg {
            -speed
        } else {
            0.0
        }
    };
    Vec3::new(
        axis(input.right, input.left, LEAD_LATERAL_SPEED),
        axis(input.up, input.down, LEAD_VERTICAL_SPEED),
        axis(input.forward, input.backward, LEAD_LATERAL_SPEED),
    )
}

/// Where the player is expected to be when a shot fired now arrives.
pub fn predict_target(shooter: Vec3, player: Vec3, input: &InputState) -> Vec3 {
    let lead_time = distance(shooter, player) / LEAD_TIME_DIVISOR;
    player + lead_intent(input) * lead_time
}

/// Velocity for a dragon shot aimed at the predicted target.
///
/// Returns `None` when the predicted target coincides with the shooter.
pub fn predictive_shot(shooter: Vec3, player: Vec3, input: &InputState) -> Option<Vec3> {
    let target = predict_target(shooter, player, input);
    normalize_or_skip(target - shooter).map(|dir| dir * DRAGON_SHOT_SPEED)
}
