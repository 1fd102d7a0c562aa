//! Last-known ship speeds, refreshed at most once per in-game day.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::ShipClass;

/// Schema version written into every snapshot. Snapshots carrying any other
/// version are discarded and rebuilt from manufacturer speeds.
pub const CACHE_VERSION: u32 = 1;

/// Speed currently known for one ship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpeedRecord {
    pub ship: ShipClass,
    pub speed: u32,
}

impl ShipSpeedRecord {
    pub fn id(&self) -> &'static str {
        self.ship.id()
    }
}

/// Where fresh per-ship speeds come from (the game's fleet page data).
pub trait FleetDataSource {
    /// Speeds keyed by technical ship id.
    fn ship_speeds(&self) -> Result<HashMap<String, u32>, FleetDataError>;
}

#[derive(Debug, Error)]
pub enum FleetDataError {
    #[error("fleet data unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read fleet data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fleet data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fleet data has no usable speed for ship {0}")]
    MissingShip(&'static str),
}

/// Result of [`ShipSpeedCache::refresh_if_stale`].
#[derive(Debug)]
pub enum RefreshOutcome {
    /// Every record was replaced and the marker stored.
    Refreshed,
    /// The marker matched; the source was not consulted.
    AlreadyCurrent,
    /// The source failed; previous records and marker are untouched.
    Skipped(FleetDataError),
}

/// How current the cached speeds are relative to today's marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Freshness {
    /// Still on manufacturer defaults.
    NeverRefreshed,
    Stale { last: String },
    Current,
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to access cache file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse cache snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipSpeedCache {
    speeds: BTreeMap<ShipClass, u32>,
    last_refreshed: Option<String>,
}

impl Default for ShipSpeedCache {
    fn default() -> Self {
        Self {
            speeds: ShipClass::ALL
                .into_iter()
                .map(|ship| (ship, ship.base_speed()))
                .collect(),
            last_refreshed: None,
        }
    }
}

impl ShipSpeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ship: ShipClass) -> ShipSpeedRecord {
        ShipSpeedRecord {
            ship,
            speed: self
                .speeds
                .get(&ship)
                .copied()
                .unwrap_or_else(|| ship.base_speed()),
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<ShipSpeedRecord> {
        ShipClass::from_id(id).map(|ship| self.get(ship))
    }

    /// All records in selection order.
    pub fn records(&self) -> impl Iterator<Item = ShipSpeedRecord> + '_ {
        ShipClass::ALL.into_iter().map(|ship| self.get(ship))
    }

    pub fn last_refreshed_marker(&self) -> Option<&str> {
        self.last_refreshed.as_deref()
    }

    pub fn freshness(&self, current_marker: &str) -> Freshness {
        match self.last_refreshed.as_deref() {
            None => Freshness::NeverRefreshed,
            Some(last) if last == current_marker => Freshness::Current,
            Some(last) => Freshness::Stale {
                last: last.to_string(),
            },
        }
    }

    /// Replace every speed from `source` unless `day_marker` was already
    /// refreshed. Either all records change together or none do.
    pub fn refresh_if_stale(
        &mut self,
        day_marker: &str,
        source: &dyn FleetDataSource,
    ) -> RefreshOutcome {
        if self.last_refreshed.as_deref() == Some(day_marker) {
            return RefreshOutcome::AlreadyCurrent;
        }

        let table = match source.ship_speeds() {
            Ok(table) => table,
            Err(err) => return RefreshOutcome::Skipped(err),
        };

        let mut speeds = BTreeMap::new();
        for ship in ShipClass::ALL {
            match table.get(ship.id()) {
                Some(&speed) if speed > 0 => {
                    speeds.insert(ship, speed);
                }
                _ => return RefreshOutcome::Skipped(FleetDataError::MissingShip(ship.id())),
            }
        }

        debug!(day_marker, ships = speeds.len(), "ship speeds refreshed");
        self.speeds = speeds;
        self.last_refreshed = Some(day_marker.to_string());
        RefreshOutcome::Refreshed
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            version: CACHE_VERSION,
            last_update: self.last_refreshed.clone(),
            ships: self
                .records()
                .map(|record| {
                    (
                        record.ship,
                        StoredSpeed {
                            id: record.id().to_string(),
                            speed: record.speed,
                        },
                    )
                })
                .collect(),
        }
    }

    /// Rebuild a cache from a stored snapshot, migrating unknown schema
    /// versions to defaults.
    pub fn from_json(text: &str) -> Result<Self, CacheError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let version = value.get("version").and_then(serde_json::Value::as_u64);
        if version != Some(u64::from(CACHE_VERSION)) {
            debug!(?version, expected = CACHE_VERSION, "cache schema changed, rebuilding defaults");
            return Ok(Self::default());
        }
        let snapshot: CacheSnapshot = serde_json::from_value(value)?;
        Ok(Self::from(snapshot))
    }

    pub fn to_json(&self) -> Result<String, CacheError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Load a cache file; a missing file yields defaults.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, CacheError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), CacheError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Persisted form of the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSnapshot {
    pub version: u32,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub ships: BTreeMap<ShipClass, StoredSpeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSpeed {
    pub id: String,
    pub speed: u32,
}

impl From<CacheSnapshot> for ShipSpeedCache {
    fn from(snapshot: CacheSnapshot) -> Self {
        let mut cache = Self {
            last_refreshed: snapshot.last_update.filter(|marker| !marker.is_empty()),
            ..Self::default()
        };
        for (ship, stored) in snapshot.ships {
            if stored.speed > 0 {
                cache.speeds.insert(ship, stored.speed);
            }
        }
        cache
    }
}
