//! Wireframe model data (model-space vertices plus edge index pairs).

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// Identifies a built-in wireframe model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    /// Small tetrahedral fighter.
    Fighter,
    /// Winged dragon silhouette.
    Dragon,
}

/// Static wireframe: vertices in model space and edges as index pairs.
pub struct WireframeModel {
    pub vertices: &'static [[f64; 3]],
    pub edges: &'static [[usize; 2]],
}

static FIGHTER: WireframeModel = WireframeModel {
    vertices: &[
        [0.0, 0.0, 20.0],
        [-10.0, -5.0, -10.0],
        [10.0, -5.0, -10.0],
        [0.0, 5.0, -10.0],
    ],
    edges: &[[0, 1], [0, 2], [0, 3], [1, 2], [2, 3], [3, 1]],
};

static DRAGON: WireframeModel = WireframeModel {
    vertices: &[
        [0.0, 0.0, 30.0],
        [-5.0, 5.0, 20.0],
        [5.0, 5.0, 20.0],
        [0.0, 10.0, 15.0],
        [0.0, 0.0, 0.0],
        [-8.0, 0.0, -10.0],
        [8.0, 0.0, -10.0],
        [-25.0, 0.0, -5.0],
        [25.0, 0.0, -5.0],
        [-15.0, -10.0, 0.0],
        [15.0, -10.0, 0.0],
    ],
    edges: &[
        [0, 1],
        [0, 2],
        [1, 3],
        [2, 3],
        [1, 2],
        [1, 4],
        [2, 4],
        [3, 4],
        [4, 5],
        [4, 6],
        [5, 6],
        [5, 7],
        [6, 8],
        [5, 9],
        [6, 10],
        [7, 9],
        [8, 10],
        [9, 10],
    ],
};

impl ModelId {
    pub fn model(self) -> &'static WireframeModel {
        match self {
            ModelId::Fighter => &FIGHTER,
            ModelId::Dragon => &DRAGON,
        }
    }
}

impl WireframeModel {
    /// Model-space vertices as vectors.
    pub fn vertices(&self) -> Vec<Vec3> {
        self.vertices.iter().map(|v| Vec3::from_array(*v)).collect()
    }
}
