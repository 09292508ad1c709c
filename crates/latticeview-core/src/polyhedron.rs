use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Pos, Size, Vector3D};
use crate::settings::{Settings, Visuals};
use crate::solid::{Meshable, Shape, Solid};

/// An axis-aligned box given by its center and extents in model units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangular {
    pub pos: Pos,
    pub size: Size,
    pub visuals: Visuals,
}

impl Rectangular {
    pub fn new(pos: Pos, size: Size, visuals: Visuals) -> Self {
        Self { pos, size, visuals }
    }
}

impl Meshable for Rectangular {
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid> {
        vec![Solid {
            shape: Shape::Box {
                extents: self.size.mul(settings.scale).to_array(),
            },
            position: self.pos.mul(settings.scale).to_array(),
            color: self.visuals.color,
            transparent: self.visuals.transparent,
            opacity: self.visuals.opacity,
        }]
    }
}

/// A square pyramid centered on `pos`, its apex pointing along `axis`
/// (or against it when `reverse` is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquarePyramid {
    pub pos: Pos,
    /// `(base, base, height)`.
    pub size: Size,
    pub axis: Axis,
    pub reverse: bool,
    pub visuals: Visuals,
}

impl SquarePyramid {
    pub fn new(
        pos: Pos,
        bottom_len: f64,
        height: f64,
        axis: Axis,
        reverse: bool,
        visuals: Visuals,
    ) -> Self {
        Self {
            pos,
            size: Size::new(bottom_len, bottom_len, height),
            axis,
            reverse,
            visuals,
        }
    }

    pub fn bottom_len(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.z
    }

    /// XYZ Euler angles taking the +Z apex of an unrotated pyramid onto the
    /// requested direction.
    pub fn rotation(&self) -> [f64; 3] {
        let flip = if self.reverse { std::f64::consts::PI } else { 0.0 };
        match self.axis {
            Axis::X => [0.0, FRAC_PI_2 - flip, 0.0],
            Axis::Y => [flip - FRAC_PI_2, 0.0, 0.0],
            Axis::Z => [flip, 0.0, 0.0],
        }
    }

    /// Unit vector from base center to apex.
    pub fn apex_direction(&self) -> Pos {
        let sign = if self.reverse { -1.0 } else { 1.0 };
        Pos::default().with(self.axis, sign)
    }
}

impl Meshable for SquarePyramid {
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid> {
        vec![Solid {
            shape: Shape::Pyramid {
                base: self.bottom_len() * settings.scale,
                height: self.height() * settings.scale,
                rotation: self.rotation(),
            },
            position: self.pos.mul(settings.scale).to_array(),
            color: self.visuals.color,
            transparent: self.visuals.transparent,
            opacity: self.visuals.opacity,
        }]
    }
}
