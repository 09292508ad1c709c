//! Builds a [`Circuit`] from its JSON document form.
//!
//! All validation happens here, up front. The first bad entry aborts the
//! whole build; no partial circuit is ever returned.

use std::io::Read;

use latticeview_core::{
    Boundary, Circuit, Color, DefectKind, Edge, LogicalQubit, Module, Pos, Settings, Size,
};

use crate::data::{CircuitData, EdgeData, LogicalQubitData, ModuleData, Triple};
use crate::error::{CreateError, DataPath};

pub struct CircuitCreator<'a> {
    settings: &'a Settings,
}

impl<'a> CircuitCreator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Parse and build a circuit from a JSON string.
    pub fn create_from_str(&self, json: &str) -> Result<Circuit, CreateError> {
        self.create(&CircuitData::from_json(json)?)
    }

    /// Parse and build a circuit from any JSON byte stream.
    pub fn create_from_reader<R: Read>(&self, reader: R) -> Result<Circuit, CreateError> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        self.create(&CircuitData::from_value(&value)?)
    }

    pub fn create(&self, data: &CircuitData) -> Result<Circuit, CreateError> {
        self.settings.validate()?;
        log::info!(
            "Building circuit: {} logical qubits, {} modules",
            data.logical_qubits.len(),
            data.modules.len()
        );

        let root = DataPath::root();
        let result = self
            .create_logical_qubits(&data.logical_qubits, &root.field("logical_qubits"))
            .and_then(|logical_qubits| {
                let modules = self.create_modules(&data.modules, &root.field("modules"))?;
                Ok(Circuit::new(logical_qubits, modules))
            });

        match &result {
            Ok(circuit) => log::info!("Circuit built: {:?}", circuit.stats()),
            Err(e) => log::warn!("Circuit rejected: {}", e),
        }
        result
    }

    fn create_logical_qubits(
        &self,
        data: &[LogicalQubitData],
        path: &DataPath,
    ) -> Result<Vec<LogicalQubit>, CreateError> {
        data.iter()
            .enumerate()
            .map(|(i, qubit)| self.create_logical_qubit(qubit, &path.index(i)))
            .collect()
    }

    fn create_logical_qubit(
        &self,
        data: &LogicalQubitData,
        path: &DataPath,
    ) -> Result<LogicalQubit, CreateError> {
        let boundary = Self::parse_boundary(data.kind.as_deref(), &path.field("type"))?;
        let color = boundary.default_color(self.settings);

        let mut edges = self.create_blocks(&data.blocks, &path.field("blocks"), color)?;
        edges.extend(self.create_injectors(&data.injectors, &path.field("injectors"), color)?);
        edges.extend(self.create_caps(&data.caps, &path.field("caps"), color)?);
        log::debug!("{path}: {} qubit with {} edges", boundary.name(), edges.len());

        Ok(LogicalQubit::new(
            boundary,
            edges,
            boundary.default_visuals(self.settings),
        ))
    }

    fn parse_boundary(kind: Option<&str>, path: &DataPath) -> Result<Boundary, CreateError> {
        let kind = kind.ok_or_else(|| CreateError::MissingField { path: path.clone() })?;
        Boundary::parse(kind).ok_or_else(|| CreateError::UnknownQubitType {
            path: path.clone(),
            found: kind.to_string(),
        })
    }

    pub fn create_blocks(
        &self,
        data: &[EdgeData],
        path: &DataPath,
        color: Color,
    ) -> Result<Vec<Edge>, CreateError> {
        self.create_edges(DefectKind::Block, data, path, color)
    }

    pub fn create_injectors(
        &self,
        data: &[EdgeData],
        path: &DataPath,
        color: Color,
    ) -> Result<Vec<Edge>, CreateError> {
        self.create_edges(DefectKind::Injector, data, path, color)
    }

    pub fn create_caps(
        &self,
        data: &[EdgeData],
        path: &DataPath,
        color: Color,
    ) -> Result<Vec<Edge>, CreateError> {
        self.create_edges(DefectKind::Cap, data, path, color)
    }

    fn create_edges(
        &self,
        kind: DefectKind,
        data: &[EdgeData],
        path: &DataPath,
        color: Color,
    ) -> Result<Vec<Edge>, CreateError> {
        let visuals = kind.default_visuals(self.settings).with_color(color);
        data.iter()
            .enumerate()
            .map(|(i, endpoints)| {
                let path = path.index(i);
                let [a, b] = match endpoints.as_slice() {
                    [a, b] => [
                        Self::triple(a, &path.index(0))?,
                        Self::triple(b, &path.index(1))?,
                    ],
                    other => {
                        return Err(CreateError::EndpointCount {
                            path,
                            found: other.len(),
                        })
                    }
                };
                Edge::new(kind, a, b, Some(visuals), self.settings)
                    .map_err(|source| CreateError::Geometry { path, source })
            })
            .collect()
    }

    fn create_modules(
        &self,
        data: &[ModuleData],
        path: &DataPath,
    ) -> Result<Vec<Module>, CreateError> {
        data.iter()
            .enumerate()
            .map(|(i, module)| {
                let path = path.index(i);
                let pos = Self::required_triple(module.position.as_ref(), &path.field("position"))?;
                let size_path = path.field("size");
                let size = Self::required_triple(module.size.as_ref(), &size_path)?;
                let size = Size::new(size.x, size.y, size.z);
                if !size.is_non_negative() {
                    return Err(CreateError::NegativeSize {
                        path: size_path,
                        size,
                    });
                }
                log::debug!("{path}: module at {pos}, size {size}");
                Ok(Module::with_defaults(pos, size, self.settings))
            })
            .collect()
    }

    fn required_triple(value: Option<&Triple>, path: &DataPath) -> Result<Pos, CreateError> {
        let value = value.ok_or_else(|| CreateError::MissingField { path: path.clone() })?;
        Self::triple(value, path)
    }

    fn triple(value: &[f64], path: &DataPath) -> Result<Pos, CreateError> {
        match *value {
            [x, y, z] => Ok(Pos::new(x, y, z)),
            _ => Err(CreateError::CoordinateArity {
                path: path.clone(),
                found: value.len(),
            }),
        }
    }
}
