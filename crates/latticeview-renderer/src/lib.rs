//! # LatticeView Renderer
//!
//! The boundary between the scene model and whatever actually draws it.
//! [`CircuitDrawer`] walks a circuit's solids and hands them to a [`Scene`];
//! [`RenderFrame`] is a `Scene` that collects everything into a JSON-serializable
//! frame for a frontend to consume.

pub mod drawer;
pub mod render_data;

pub use drawer::{CircuitDrawer, Scene};
pub use render_data::{RenderFrame, RenderSolid};
