use serde::{Deserialize, Serialize};

use crate::defect::DefectKind;
use crate::geometry::{BBox, Pos, Size};
use crate::polyhedron::Rectangular;
use crate::qubit::{Boundary, LogicalQubit};
use crate::settings::{Settings, Visuals};
use crate::solid::{Meshable, Solid};

/// A free-standing rectangular volume, e.g. a control module. Its position
/// and size are in model units and are not snapped to the lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    body: Rectangular,
}

impl Module {
    pub fn new(pos: Pos, size: Size, visuals: Visuals) -> Self {
        Self {
            body: Rectangular::new(pos, size, visuals),
        }
    }

    /// A module with the configured module color.
    pub fn with_defaults(pos: Pos, size: Size, settings: &Settings) -> Self {
        let visuals = Visuals::defaults(settings).with_color(settings.color_set.module);
        Self::new(pos, size, visuals)
    }

    pub fn pos(&self) -> Pos {
        self.body.pos
    }

    pub fn size(&self) -> Size {
        self.body.size
    }

    pub fn visuals(&self) -> Visuals {
        self.body.visuals
    }
}

impl Meshable for Module {
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid> {
        self.body.create_meshes(settings)
    }
}

/// Element counts for a circuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitStats {
    pub rough_qubits: usize,
    pub smooth_qubits: usize,
    pub blocks: usize,
    pub injectors: usize,
    pub caps: usize,
    pub vertices: usize,
    pub modules: usize,
}

/// The root of the scene: logical qubits and modules, both in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Circuit {
    pub logical_qubits: Vec<LogicalQubit>,
    pub modules: Vec<Module>,
}

impl Circuit {
    pub fn new(logical_qubits: Vec<LogicalQubit>, modules: Vec<Module>) -> Self {
        Self {
            logical_qubits,
            modules,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.logical_qubits.is_empty() && self.modules.is_empty()
    }

    pub fn stats(&self) -> CircuitStats {
        let mut stats = CircuitStats {
            modules: self.modules.len(),
            ..Default::default()
        };
        for qubit in &self.logical_qubits {
            match qubit.boundary() {
                Boundary::Rough => stats.rough_qubits += 1,
                Boundary::Smooth => stats.smooth_qubits += 1,
            }
            for edge in qubit.edges() {
                match edge.kind() {
                    DefectKind::Block => stats.blocks += 1,
                    DefectKind::Injector => stats.injectors += 1,
                    DefectKind::Cap => stats.caps += 1,
                }
            }
            stats.vertices += qubit.vertices().len();
        }
        stats
    }

    /// World-space bounds of every emitted solid, `None` when nothing is drawn.
    pub fn bounds(&self, settings: &Settings) -> Option<BBox> {
        self.create_meshes(settings)
            .iter()
            .map(Solid::bbox)
            .reduce(|acc, bb| acc.union(&bb))
    }
}

impl Meshable for Circuit {
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid> {
        let qubits = self
            .logical_qubits
            .iter()
            .flat_map(|qubit| qubit.create_meshes(settings));
        let modules = self
            .modules
            .iter()
            .flat_map(|module| module.create_meshes(settings));
        qubits.chain(modules).collect()
    }
}
