//! Vector and transform math for wireframe models.
//!
//! Pure functions with no shared state. Rotations are right-handed and
//! leave the coordinate on the rotation axis untouched.

use serde::{Deserialize, Serialize};

use crate::constants::{NORMALIZE_EPSILON, PROJECTION_EPSILON};
use crate::types::{ScreenPoint, Vec3};

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Perspective camera looking down +z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye-to-plane distance; larger values flatten perspective.
    pub distance: f64,
    pub viewport: Viewport,
    /// Reference point used for range checks (dragon shot despawn).
    pub position: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            distance: CAMERA_DISTANCE,
            viewport: Viewport {
                width: VIEWPORT_WIDTH,
                height: VIEWPORT_HEIGHT,
            },
            position: Vec3::from_array(CAMERA_POSITION),
        }
    }
}

/// Rotate every vertex about the x axis.
pub fn rotate_x(vertices: &[Vec3], angle: f64) -> Vec<Vec3> {
    let (sin, cos) = angle.sin_cos();
    vertices
        .iter()
        .map(|v| Vec3::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos))
        .collect()
}

/// Rotate every vertex about the y axis.
pub fn rotate_y(vertices: &[Vec3], angle: f64) -> Vec<Vec3> {
    let (sin, cos) = angle.sin_cos();
    vertices
        .iter()
        .map(|v| Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos))
        .collect()
}

/// Rotate every vertex about the z axis.
pub fn rotate_z(vertices: &[Vec3], angle: f64) -> Vec<Vec3> {
    let (sin, cos) = angle.sin_cos();
    vertices
        .iter()
        .map(|v| Vec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z))
        .collect()
}

/// Add a fixed offset to every vertex.
pub fn translate(vertices: &[Vec3], offset: Vec3) -> Vec<Vec3> {
    vertices.iter().map(|v| *v + offset).collect()
}

/// Model space to world space: rotate X, then Y, then Z, then translate.
pub fn transform_model(vertices: &[Vec3], rotation: Vec3, position: Vec3) -> Vec<Vec3> {
    let rotated = rotate_x(vertices, rotation.x);
    let rotated = rotate_y(&rotated, rotation.y);
    let rotated = rotate_z(&rotated, rotation.z);
    translate(&rotated, position)
}

/// Perspective-project a world point to screen space.
///
/// Returns `None` when the point sits on or behind the eye plane
/// (`distance + z` not strictly positive).
pub fn project(point: Vec3, camera: &Camera) -> Option<ScreenPoint> {
    let depth = camera.distance + point.z;
    if depth <= PROJECTION_EPSILON {
        return None;
    }
    let scale = camera.distance / depth;
    Some(ScreenPoint::new(
        point.x * scale + camera.viewport.width / 2.0,
        -point.y * scale + camera.viewport.height / 2.0,
    ))
}

/// Euclidean distance in 3-space.
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    a.distance(b)
}

/// Unit vector along `v`, or `None` if `v` is too short to normalize safely.
pub fn normalize_or_skip(v: Vec3) -> Option<Vec3> {
    let len = v.length();
    if !len.is_finite() || len < NORMALIZE_EPSILON {
        return None;
    }
    Some(v / len)
}
