use serde::{Deserialize, Serialize};

use crate::geometry::{BBox, Vec3, Vector3D};
use crate::settings::{Color, Settings};

/// Shape of a positioned solid, in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned box.
    Box { extents: [f64; 3] },
    /// Square pyramid whose apex lies on +Z before `rotation` (XYZ Euler
    /// angles, radians) is applied.
    Pyramid {
        base: f64,
        height: f64,
        rotation: [f64; 3],
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Pyramid { .. } => ShapeKind::Pyramid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Box,
    Pyramid,
}

/// A positioned, sized, colored solid: the unit handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub shape: Shape,
    /// Center in world units.
    pub position: [f64; 3],
    pub color: Color,
    pub transparent: bool,
    pub opacity: f32,
}

impl Solid {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Conservative world-space bounds. A rotated pyramid is bounded by the
    /// cube that contains it in any orientation.
    pub fn bbox(&self) -> BBox {
        let center = Vec3::from_array(self.position);
        let extents = match &self.shape {
            Shape::Box { extents } => Vec3::from_array(*extents),
            Shape::Pyramid { base, height, .. } => {
                let side = base.max(*height);
                Vec3::new(side, side, side)
            }
        };
        BBox::centered(center, extents)
    }
}

/// Anything that lowers itself into positioned solids.
pub trait Meshable {
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid>;
}
