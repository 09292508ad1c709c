use thiserror::Error;

use crate::geometry::Pos;

/// Construction-time violations of the lattice geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("misaligned endpoints {a} and {b}: they differ on {differing_axes} axes, expected exactly 1")]
    MisalignedEndpoints {
        a: Pos,
        b: Pos,
        differing_axes: usize,
    },
}

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("margin must be at least 1, got {0}")]
    InvalidMargin(u32),

    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("opacity must lie in [0, 1], got {0}")]
    InvalidOpacity(f32),
}
