//! # LatticeView Core
//!
//! Geometric model of a lattice-surgery circuit: integer-lattice vertices,
//! axis-aligned edges (blocks, injectors, caps), logical qubits, modules and
//! the circuit that aggregates them. Every element lowers itself into a list
//! of positioned [`Solid`]s that a renderer can draw without knowing anything
//! about the lattice.

pub mod circuit;
pub mod defect;
pub mod error;
pub mod geometry;
pub mod polyhedron;
pub mod qubit;
pub mod settings;
pub mod solid;

pub use circuit::{Circuit, CircuitStats, Module};
pub use defect::{DefectKind, Edge, Endpoint, Vertex};
pub use error::{GeometryError, SettingsError};
pub use geometry::{Axis, BBox, Pos, Size, Vec3, Vector3D};
pub use polyhedron::{Rectangular, SquarePyramid};
pub use qubit::{Boundary, LogicalQubit};
pub use settings::{Color, ColorSet, Settings, Visuals};
pub use solid::{Meshable, Shape, ShapeKind, Solid};
