use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Axis, Pos, Size, Vector3D};
use crate::polyhedron::{Rectangular, SquarePyramid};
use crate::settings::{Settings, Visuals};
use crate::solid::{Meshable, Solid};

/// A unit-size defect sitting on a lattice point.
///
/// `pos` is in model units, i.e. the lattice coordinate already multiplied by
/// the pitch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub pos: Pos,
    pub visuals: Visuals,
}

impl Vertex {
    /// Place a vertex at lattice coordinate `lattice_pos`.
    pub fn new(lattice_pos: Pos, visuals: Visuals, settings: &Settings) -> Self {
        Self {
            pos: lattice_pos.mul(settings.pitch()),
            visuals,
        }
    }

    /// Wrap an already pitch-scaled position.
    pub fn from_model_pos(pos: Pos, visuals: Visuals) -> Self {
        Self { pos, visuals }
    }

    /// The vertex `n` lattice steps away along `axis`.
    pub fn get_next(&self, axis: Axis, n: f64, settings: &Settings) -> Self {
        Self {
            pos: self.pos.add_on(n * settings.pitch(), &[axis]),
            visuals: self.visuals,
        }
    }

    /// Lattice coordinate of this vertex.
    pub fn lattice_pos(&self, settings: &Settings) -> Pos {
        self.pos.div(settings.pitch())
    }

    pub fn compare(a: &Vertex, b: &Vertex) -> Ordering {
        Pos::compare(&a.pos, &b.pos)
    }

    pub fn min<'a>(a: &'a Vertex, b: &'a Vertex) -> &'a Vertex {
        if a.pos.is_less_than(&b.pos) {
            a
        } else {
            b
        }
    }

    pub fn max<'a>(a: &'a Vertex, b: &'a Vertex) -> &'a Vertex {
        if a.pos.is_less_than(&b.pos) {
            b
        } else {
            a
        }
    }

    fn body(&self) -> Rectangular {
        Rectangular::new(self.pos, Size::UNIT, self.visuals)
    }
}

/// Vertices are identified by position alone.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Meshable for Vertex {
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid> {
        self.body().create_meshes(settings)
    }
}

/// How an edge endpoint is specified.
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// A raw lattice coordinate.
    Lattice(Pos),
    /// An existing vertex.
    Vertex(Vertex),
}

impl From<Pos> for Endpoint {
    fn from(pos: Pos) -> Self {
        Endpoint::Lattice(pos)
    }
}

impl From<Vertex> for Endpoint {
    fn from(vertex: Vertex) -> Self {
        Endpoint::Vertex(vertex)
    }
}

impl From<&Vertex> for Endpoint {
    fn from(vertex: &Vertex) -> Self {
        Endpoint::Vertex(vertex.clone())
    }
}

impl Endpoint {
    /// Resolve to a vertex. Supplied visuals re-color an existing vertex and
    /// color a freshly placed one; otherwise vertices keep their own colors
    /// and new ones get the configured defaults.
    fn resolve(self, visuals: Option<Visuals>, settings: &Settings) -> Vertex {
        match self {
            Endpoint::Lattice(pos) => Vertex::new(
                pos,
                visuals.unwrap_or_else(|| Visuals::defaults(settings)),
                settings,
            ),
            Endpoint::Vertex(vertex) => match visuals {
                Some(visuals) => Vertex::from_model_pos(vertex.pos, visuals),
                None => vertex,
            },
        }
    }
}

/// The functional role of an edge on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectKind {
    /// A segment of the surface-code fabric, drawn as a box.
    Block,
    /// A coupling structure, drawn as two pyramids meeting apex to apex.
    Injector,
    /// A terminating injector, semi-transparent by default.
    Cap,
}

impl DefectKind {
    pub fn default_visuals(self, settings: &Settings) -> Visuals {
        let visuals = Visuals::defaults(settings);
        match self {
            DefectKind::Block | DefectKind::Injector => visuals,
            DefectKind::Cap => visuals.with_transparent(true),
        }
    }
}

/// An axis-aligned edge spanning two lattice vertices.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    kind: DefectKind,
    vertices: [Vertex; 2],
    axis: Axis,
    pos: Pos,
    size: Size,
    visuals: Visuals,
}

impl Edge {
    /// Build an edge between two endpoints.
    ///
    /// Fails when the endpoints differ on zero or on more than one axis.
    /// The stored endpoints are always ordered lesser-then-greater.
    pub fn new(
        kind: DefectKind,
        a: impl Into<Endpoint>,
        b: impl Into<Endpoint>,
        visuals: Option<Visuals>,
        settings: &Settings,
    ) -> Result<Self, GeometryError> {
        let a = a.into().resolve(visuals, settings);
        let b = b.into().resolve(visuals, settings);
        let visuals = visuals.unwrap_or_else(|| kind.default_visuals(settings));

        let axis = Self::check_params(&a, &b)?;
        let [a, b] = match Vertex::compare(&a, &b) {
            Ordering::Greater => [b, a],
            _ => [a, b],
        };
        Ok(Self::span(kind, a, b, axis, visuals))
    }

    pub fn block(
        a: impl Into<Endpoint>,
        b: impl Into<Endpoint>,
        settings: &Settings,
    ) -> Result<Self, GeometryError> {
        Self::new(DefectKind::Block, a, b, None, settings)
    }

    pub fn injector(
        a: impl Into<Endpoint>,
        b: impl Into<Endpoint>,
        settings: &Settings,
    ) -> Result<Self, GeometryError> {
        Self::new(DefectKind::Injector, a, b, None, settings)
    }

    pub fn cap(
        a: impl Into<Endpoint>,
        b: impl Into<Endpoint>,
        settings: &Settings,
    ) -> Result<Self, GeometryError> {
        Self::new(DefectKind::Cap, a, b, None, settings)
    }

    /// The single axis along which the endpoints differ.
    pub fn check_params(a: &Vertex, b: &Vertex) -> Result<Axis, GeometryError> {
        match a.pos.differing_axes(&b.pos).as_slice() {
            [axis] => Ok(*axis),
            differing => Err(GeometryError::MisalignedEndpoints {
                a: a.pos,
                b: b.pos,
                differing_axes: differing.len(),
            }),
        }
    }

    /// Derive geometry from endpoints already known to be ordered and aligned
    /// on `axis`.
    fn span(kind: DefectKind, a: Vertex, b: Vertex, axis: Axis, visuals: Visuals) -> Self {
        let pos = a.pos.add_on(b.pos, &[axis]).div_on(2.0, &[axis]);
        let size = Size::UNIT.with(axis, (b.pos.get(axis) - a.pos.get(axis) - 1.0).max(0.0));
        Self {
            kind,
            vertices: [a, b],
            axis,
            pos,
            size,
            visuals,
        }
    }

    pub fn kind(&self) -> DefectKind {
        self.kind
    }

    pub fn vertices(&self) -> &[Vertex; 2] {
        &self.vertices
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn visuals(&self) -> Visuals {
        self.visuals
    }

    /// Split into the chain of single-step edges between consecutive lattice
    /// points, from the lesser endpoint to the greater.
    pub fn decompose_to_minimum_units(&self, settings: &Settings) -> Vec<Edge> {
        let [start, end] = &self.vertices;
        let mut units = Vec::new();
        let mut vertex = start.clone();
        while vertex.pos.is_less_than(&end.pos) {
            let mut next = vertex.get_next(self.axis, 1.0, settings);
            if end.pos.is_less_than(&next.pos) {
                next = end.clone();
            }
            units.push(Self::span(
                self.kind,
                vertex,
                next.clone(),
                self.axis,
                self.visuals,
            ));
            vertex = next;
        }
        units
    }

    /// Connect consecutive vertices, closing the loop back to the first
    /// vertex when `is_loop` is set. Fewer than two vertices give no edges.
    pub fn create_edges(
        kind: DefectKind,
        vertices: &[Vertex],
        is_loop: bool,
        settings: &Settings,
    ) -> Result<Vec<Edge>, GeometryError> {
        if vertices.len() < 2 {
            return Ok(Vec::new());
        }
        let mut edges = vertices
            .windows(2)
            .map(|pair| Edge::new(kind, &pair[0], &pair[1], None, settings))
            .collect::<Result<Vec<_>, _>>()?;
        if is_loop {
            let last = &vertices[vertices.len() - 1];
            edges.push(Edge::new(kind, last, &vertices[0], None, settings)?);
        }
        Ok(edges)
    }

    fn injector_meshes(&self, settings: &Settings) -> Vec<Solid> {
        let extent = self.size.get(self.axis);
        let height = extent / 2.0;
        let quarter = extent / 4.0;
        let lower = SquarePyramid::new(
            self.pos.sub_on(quarter, &[self.axis]),
            1.0,
            height,
            self.axis,
            false,
            self.visuals,
        );
        let upper = SquarePyramid::new(
            self.pos.add_on(quarter, &[self.axis]),
            1.0,
            height,
            self.axis,
            true,
            self.visuals,
        );
        let mut meshes = lower.create_meshes(settings);
        meshes.extend(upper.create_meshes(settings));
        meshes
    }
}

impl Meshable for Edge {
    fn create_meshes(&self, settings: &Settings) -> Vec<Solid> {
        match self.kind {
            DefectKind::Block => {
                Rectangular::new(self.pos, self.size, self.visuals).create_meshes(settings)
            }
            DefectKind::Injector | DefectKind::Cap => self.injector_meshes(settings),
        }
    }
}
