use serde::Serialize;
use serde_json::{Map, Value};

use latticeview_core::{Circuit, DefectKind, Edge, Settings, Vector3D};

use crate::error::{CreateError, DataPath};

/// A coordinate triple as it appears in the document. Arity is checked by
/// the builder so errors can name the offending entry.
pub type Triple = Vec<f64>;

/// An edge as a pair of lattice coordinates.
pub type EdgeData = Vec<Triple>;

type Object = Map<String, Value>;

/// Top-level circuit document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CircuitData {
    pub logical_qubits: Vec<LogicalQubitData>,
    pub modules: Vec<ModuleData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogicalQubitData {
    /// `"rough"` or `"smooth"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub blocks: Vec<EdgeData>,
    pub injectors: Vec<EdgeData>,
    pub caps: Vec<EdgeData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModuleData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Triple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Triple>,
}

impl CircuitData {
    pub fn from_json(json: &str) -> Result<Self, CreateError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Read a parsed document. Every value is type-checked against its
    /// location so a wrong type is reported with its [`DataPath`]. Absent or
    /// null lists read as empty; unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, CreateError> {
        let root = DataPath::root();
        let object = expect_object(value, &root)?;
        Ok(Self {
            logical_qubits: list(object, "logical_qubits", &root, LogicalQubitData::from_value)?,
            modules: list(object, "modules", &root, ModuleData::from_value)?,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export a built circuit back to document form. Edge endpoints are
    /// written as lattice coordinates.
    pub fn from_circuit(circuit: &Circuit, settings: &Settings) -> Self {
        let logical_qubits = circuit
            .logical_qubits
            .iter()
            .map(|qubit| LogicalQubitData {
                kind: Some(qubit.boundary().name().to_string()),
                blocks: edge_list(qubit.edges_of_kind(DefectKind::Block), settings),
                injectors: edge_list(qubit.edges_of_kind(DefectKind::Injector), settings),
                caps: edge_list(qubit.edges_of_kind(DefectKind::Cap), settings),
            })
            .collect();

        let modules = circuit
            .modules
            .iter()
            .map(|module| ModuleData {
                position: Some(module.pos().to_array().to_vec()),
                size: Some(module.size().to_array().to_vec()),
            })
            .collect();

        Self {
            logical_qubits,
            modules,
        }
    }
}

impl LogicalQubitData {
    fn from_value(value: &Value, path: &DataPath) -> Result<Self, CreateError> {
        let object = expect_object(value, path)?;
        // a non-string discriminator can never name a boundary
        let kind = match object.get("type") {
            None | Some(Value::Null) => None,
            Some(Value::String(kind)) => Some(kind.clone()),
            Some(other) => {
                return Err(CreateError::UnknownQubitType {
                    path: path.field("type"),
                    found: other.to_string(),
                })
            }
        };
        Ok(Self {
            kind,
            blocks: list(object, "blocks", path, edge_data)?,
            injectors: list(object, "injectors", path, edge_data)?,
            caps: list(object, "caps", path, edge_data)?,
        })
    }
}

impl ModuleData {
    fn from_value(value: &Value, path: &DataPath) -> Result<Self, CreateError> {
        let object = expect_object(value, path)?;
        Ok(Self {
            position: optional_triple(object, "position", path)?,
            size: optional_triple(object, "size", path)?,
        })
    }
}

fn invalid(path: &DataPath, expected: &'static str, value: &Value) -> CreateError {
    CreateError::InvalidValue {
        path: path.clone(),
        expected,
        found: value.to_string(),
    }
}

fn expect_object<'v>(value: &'v Value, path: &DataPath) -> Result<&'v Object, CreateError> {
    value
        .as_object()
        .ok_or_else(|| invalid(path, "an object", value))
}

fn expect_array<'v>(value: &'v Value, path: &DataPath) -> Result<&'v [Value], CreateError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid(path, "an array", value))
}

fn list<T>(
    object: &Object,
    key: &'static str,
    path: &DataPath,
    item: fn(&Value, &DataPath) -> Result<T, CreateError>,
) -> Result<Vec<T>, CreateError> {
    let path = path.field(key);
    match object.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => expect_array(value, &path)?
            .iter()
            .enumerate()
            .map(|(i, value)| item(value, &path.index(i)))
            .collect(),
    }
}

fn edge_data(value: &Value, path: &DataPath) -> Result<EdgeData, CreateError> {
    expect_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, endpoint)| triple(endpoint, &path.index(i)))
        .collect()
}

fn optional_triple(
    object: &Object,
    key: &'static str,
    path: &DataPath,
) -> Result<Option<Triple>, CreateError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => triple(value, &path.field(key)).map(Some),
    }
}

fn triple(value: &Value, path: &DataPath) -> Result<Triple, CreateError> {
    expect_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, component)| {
            component
                .as_f64()
                .ok_or_else(|| invalid(&path.index(i), "a number", component))
        })
        .collect()
}

fn edge_list<'a>(edges: impl Iterator<Item = &'a Edge>, settings: &Settings) -> Vec<EdgeData> {
    edges
        .map(|edge| {
            edge.vertices()
                .iter()
                .map(|v| v.lattice_pos(settings).to_array().to_vec())
                .collect()
        })
        .collect()
}
