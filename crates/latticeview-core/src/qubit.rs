use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::defect::{DefectKind, Edge, Vertex};
use crate::settings::{Color, Settings, Visuals};
use crate::solid::{Meshable, Solid};

/// Surface-code boundary type of a logical qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    Rough,
    Smooth,
}

impl Boundary {
    pub fn name(self) -> &'static str {
        match self {
            Boundary::Rough => "rough",
            Boundary::Smooth => "smooth",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rough" => Some(Boundary::Rough),
            "smooth" => Some(Boundary::Smooth),
            _ => None,
        }
    }

    pub fn default_color(self, settings: &Settings) -> Color {
        match self {
            Boundary::Rough => settings.color_set.rough,
            Boundary::Smooth => settings.color_set.smooth,
        }
    }

    pub fn default_visuals(self, settings: &Settings) -> Visuals {
        Visuals::defaults(settings).with_color(self.default_color(settings))
    }
}

/// A logical qubit: a set of blocks, injectors and caps, plus the vertex set
/// those edges imply.
#[derive(Debug, Clone, Serialize)]
pub struct LogicalQubit {
    boundary: Boundary,
    edges: Vec<Edge>,
    vertices: Vec<Vertex>,
    visuals: Visuals,
}

impl LogicalQubit {
    pub fn new(boundary: Boundary, edges: Vec<Edge>, visuals: Visuals) -> Self {
        let vertices = Self::create_vertices(&edges);
        log::debug!(
            "{} qubit: {} edges, {} vertices",
            boundary.name(),
            edges.len(),
            vertices.len()
        );
        Self {
            boundary,
            edges,
            vertices,
            visuals,
        }
    }

    pub fn rough(edges: Vec<Edge>, settings: &Settings) -> Self {
        Self::new(Boundary::Rough, edges, Boundary::Rough.default_visuals(settings))
    }

    pub fn smooth(edges: Vec<Edge>, settings: &Settings) -> Self {
        Self::new(Boundary::Smooth, edges, Boundary::Smooth.default_visuals(settings))
    }

    /// Union of all edge endpoints, deduplicated by position and kept in
    /// [`Pos::compare`](crate::geometry::Pos::compare) order so the result does
    /// not depend on edge order.
    ///
    /// Endpoints shared by several edges keep the visuals that rank first
    /// under [`visuals_rank`], so opaque wins over transparent.
    fn create_vertices(edges: &[Edge]) -> Vec<Vertex> {
        let mut vertices: Vec<Vertex> = edges
            .iter()
            .flat_map(|edge| edge.vertices().iter().cloned())
            .collect();
        vertices.sort_by(Vertex::compare);
        vertices.dedup_by(|later, kept| {
            if later.pos != kept.pos {
                return false;
            }
            if visuals_rank(&later.visuals, &kept.visuals) == Ordering::Less {
                kept.visuals = later.visuals;
            }
            true
        });
        vertices
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn visuals(&self) -> Visuals {
        self.visuals
    }

    pub fn edges_of_kind(&self, kind: DefectKind) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.kind() == kind)
    }
}

/// Total order on visuals: opaque first, then by color, then most opaque.
fn visuals_rank(a: &Visuals, b: &Visuals) -> Ordering {
    a.transparent
        .cmp(&b.transparent)
        .then_with(|| a.color.to_hex().cmp(&b.color.to_hex()))
        .then_with(|| b.opacity.total_cmp(&a.opacity))
}

impl Meshable for LogicalQubit {
    /// Edges first, then vertices, so vertex markers draw over edge geometry.
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid> {
        let edges = self.edges.iter().flat_map(|edge| edge.create_meshes(settings));
        let vertices = self
            .vertices
            .iter()
            .flat_map(|vertex| vertex.create_meshes(settings));
        edges.chain(vertices).collect()
    }
}
