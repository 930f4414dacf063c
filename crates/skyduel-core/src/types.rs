//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D vector in simulation space.
/// x = right, y = up (altitude), z = forward (away from the camera).
pub type Vec3 = glam::DVec3;

/// 2D point in screen space (pixels, y grows downward).
pub type ScreenPoint = glam::DVec2;

/// Closed interval on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Axis-aligned box limiting combatant travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

/// Simulation time tracking.
///
/// Ticks are frame-driven with no fixed duration; wall-clock gates
/// read the injected clock instead of deriving time from the tick count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation ticks applied since the last reset.
    pub tick: u64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a scalar into this range.
    ///
    /// Uses `max`/`min` rather than `f64::clamp` so an inverted range
    /// cannot panic; validation rejects those before they get here.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// True if both ends are finite and `min <= max`.
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl Bounds {
    pub const fn new(x: AxisRange, y: AxisRange, z: AxisRange) -> Self {
        Self { x, y, z }
    }

    /// Clamp each axis of `position` independently. Idempotent.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            self.x.clamp(position.x),
            self.y.clamp(position.y),
            self.z.clamp(position.z),
        )
    }

    pub fn contains(&self, position: Vec3) -> bool {
        self.x.contains(position.x) && self.y.contains(position.y) && self.z.contains(position.z)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        use crate::constants::{WORLD_X_EXTENT, WORLD_Y_EXTENT, WORLD_Z_EXTENT};
        Self::new(
            AxisRange::new(-WORLD_X_EXTENT, WORLD_X_EXTENT),
            AxisRange::new(-WORLD_Y_EXTENT, WORLD_Y_EXTENT),
            AxisRange::new(-WORLD_Z_EXTENT, WORLD_Z_EXTENT),
        )
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
