//! Fleet data sources backed by files or in-memory tables.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::cache::{FleetDataError, FleetDataSource};

/// One fleet-table entry: either a bare speed or the game's ship object,
/// of which only `speed` is read.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FleetEntry {
    Speed(u32),
    Ship { speed: u32 },
}

impl FleetEntry {
    fn speed(&self) -> u32 {
        match self {
            Self::Speed(speed) | Self::Ship { speed } => *speed,
        }
    }
}

/// Parse a JSON object mapping ship ids to speeds.
pub fn parse_fleet_table(text: &str) -> Result<HashMap<String, u32>, FleetDataError> {
    let entries: HashMap<String, FleetEntry> = serde_json::from_str(text)?;
    Ok(entries
        .into_iter()
        .map(|(id, entry)| (id, entry.speed()))
        .collect())
}

/// Fleet table exported to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFleetTable {
    path: PathBuf,
}

impl JsonFleetTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FleetDataSource for JsonFleetTable {
    fn ship_speeds(&self) -> Result<HashMap<String, u32>, FleetDataError> {
        if !self.path.exists() {
            return Err(FleetDataError::Unavailable(format!(
                "{} does not exist",
                self.path.display()
            )));
        }
        parse_fleet_table(&fs::read_to_string(&self.path)?)
    }
}

/// Fixed table, handy for callers that already hold the speeds.
#[derive(Debug, Clone, Default)]
pub struct StaticFleetTable(pub HashMap<String, u32>);

impl FleetDataSource for StaticFleetTable {
    fn ship_speeds(&self) -> Result<HashMap<String, u32>, FleetDataError> {
        Ok(self.0.clone())
    }
}
