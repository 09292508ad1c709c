use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use latticeview_core::{Circuit, Settings};

use crate::creator::CircuitCreator;
use crate::error::CreateError;

/// Read and build a circuit document from disk.
pub fn load_circuit(path: impl AsRef<Path>, settings: &Settings) -> Result<Circuit, CreateError> {
    let path = path.as_ref();
    log::info!("Loading circuit from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    CircuitCreator::new(settings).create_from_reader(reader)
}

/// Read a settings file. Keys that are absent keep their default values.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, CreateError> {
    let path = path.as_ref();
    log::info!("Loading settings from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let settings: Settings = serde_json::from_reader(reader)?;
    settings.validate()?;
    Ok(settings)
}
