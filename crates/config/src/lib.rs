//! Configuration models and loaders for the Galaxy Flight Duration calculator.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub mod server;
pub mod settings;

pub use server::{FleetSpeeds, ServerMetadata};
pub use settings::{PlayerSettings, SETTINGS_VERSION, Setting, ShipSlot};

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load a single document, picking the format from the file extension:
/// `.toml`, `.json`, anything else is read as YAML.
pub fn load_document<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        }
        Some("json") => {
            let reader = File::open(path)?;
            Ok(serde_json::from_reader(reader)?)
        }
        _ => {
            let reader = File::open(path)?;
            Ok(serde_yaml::from_reader(reader)?)
        }
    }
}

/// Load and validate server metadata.
pub fn load_server_metadata<P: AsRef<Path>>(path: P) -> Result<ServerMetadata, ConfigError> {
    let metadata: ServerMetadata = load_document(path)?;
    metadata.validate()?;
    Ok(metadata)
}
