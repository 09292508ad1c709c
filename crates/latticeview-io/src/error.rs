use std::fmt;
use std::io;

use thiserror::Error;

use latticeview_core::{GeometryError, SettingsError, Size};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Field(&'static str),
    Index(usize),
}

/// Location of a value inside a circuit document, e.g.
/// `logical_qubits[0].blocks[2][1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPath(Vec<Segment>);

impl DataPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &'static str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Field(name));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<document>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{name}")?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum CreateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("{path}: expected {expected}, found {found}")]
    InvalidValue {
        path: DataPath,
        expected: &'static str,
        found: String,
    },

    #[error("{path}: missing required field")]
    MissingField { path: DataPath },

    #[error("{path}: expected a coordinate triple, found {found} component(s)")]
    CoordinateArity { path: DataPath, found: usize },

    #[error("{path}: expected 2 endpoints, found {found}")]
    EndpointCount { path: DataPath, found: usize },

    #[error("{path}: unknown logical qubit type \"{found}\", expected \"rough\" or \"smooth\"")]
    UnknownQubitType { path: DataPath, found: String },

    #[error("{path}: size {size} has a negative component")]
    NegativeSize { path: DataPath, size: Size },

    #[error("{path}: {source}")]
    Geometry {
        path: DataPath,
        #[source]
        source: GeometryError,
    },
}

impl CreateError {
    /// Where in the document the error was found, if it came from the data.
    pub fn path(&self) -> Option<&DataPath> {
        match self {
            CreateError::MissingField { path }
            | CreateError::InvalidValue { path, .. }
            | CreateError::CoordinateArity { path, .. }
            | CreateError::EndpointCount { path, .. }
            | CreateError::UnknownQubitType { path, .. }
            | CreateError::NegativeSize { path, .. }
            | CreateError::Geometry { path, .. } => Some(path),
            CreateError::Io(_) | CreateError::Json(_) | CreateError::Settings(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = DataPath::root()
            .field("logical_qubits")
            .index(0)
            .field("blocks")
            .index(2)
            .index(1);
        assert_eq!(path.to_string(), "logical_qubits[0].blocks[2][1]");
        assert_eq!(DataPath::root().to_string(), "<document>");
    }

    #[test]
    fn test_error_message_names_path() {
        let err = CreateError::UnknownQubitType {
            path: DataPath::root().field("logical_qubits").index(3).field("type"),
            found: "unknown".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("logical_qubits[3].type"));
        assert!(msg.contains("unknown"));
        assert!(err.path().is_some());
    }
}
