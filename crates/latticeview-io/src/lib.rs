//! # LatticeView I/O
//!
//! The JSON circuit document format, the [`CircuitCreator`] that validates a
//! document and builds a [`latticeview_core::Circuit`] from it, and loaders
//! for circuit and settings files.

pub mod creator;
pub mod data;
pub mod error;
pub mod loader;

pub use creator::CircuitCreator;
pub use data::{CircuitData, LogicalQubitData, ModuleData};
pub use error::{CreateError, DataPath};
pub use loader::{load_circuit, load_settings};
