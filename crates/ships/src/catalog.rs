//! Ship classes, their technical ids, and manufacturer base speeds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every ship class a player can pick in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShipClass {
    LightFighter,
    HeavyFighter,
    Cruiser,
    Battleship,
    Battlecruiser,
    Bomber,
    Destroyer,
    Deathstar,
    Reaper,
    Pathfinder,
    SmallCargo,
    LargeCargo,
    ColonyShip,
    Recycler,
    EspionageProbe,
}

impl ShipClass {
    /// Selection order used when cycling through ships.
    pub const ALL: [Self; 15] = [
        Self::LightFighter,
        Self::HeavyFighter,
        Self::Cruiser,
        Self::Battleship,
        Self::Battlecruiser,
        Self::Bomber,
        Self::Destroyer,
        Self::Deathstar,
        Self::Reaper,
        Self::Pathfinder,
        Self::SmallCargo,
        Self::LargeCargo,
        Self::ColonyShip,
        Self::Recycler,
        Self::EspionageProbe,
    ];

    /// Technical id the game keys fleet data by.
    pub fn id(self) -> &'static str {
        match self {
            Self::LightFighter => "204",
            Self::HeavyFighter => "205",
            Self::Cruiser => "206",
            Self::Battleship => "207",
            Self::Battlecruiser => "215",
            Self::Bomber => "211",
            Self::Destroyer => "213",
            Self::Deathstar => "214",
            Self::Reaper => "218",
            Self::Pathfinder => "219",
            Self::SmallCargo => "202",
            Self::LargeCargo => "203",
            Self::ColonyShip => "208",
            Self::Recycler => "209",
            Self::EspionageProbe => "210",
        }
    }

    /// Speed without any drive research or class bonuses.
    pub fn base_speed(self) -> u32 {
        match self {
            Self::LightFighter => 12_500,
            Self::HeavyFighter => 10_000,
            Self::Cruiser => 15_000,
            Self::Battleship => 10_000,
            Self::Battlecruiser => 10_000,
            Self::Bomber => 5_000,
            Self::Destroyer => 5_000,
            Self::Deathstar => 100,
            Self::Reaper => 7_000,
            Self::Pathfinder => 12_000,
            Self::SmallCargo => 10_000,
            Self::LargeCargo => 7_500,
            Self::ColonyShip => 2_500,
            Self::Recycler => 6_000,
            Self::EspionageProbe => 100_000_000,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ship| ship.id() == id)
    }

    /// Stable key used in persisted snapshots and command lines.
    pub fn key(self) -> &'static str {
        match self {
            Self::LightFighter => "lightFighter",
            Self::HeavyFighter => "heavyFighter",
            Self::Cruiser => "cruiser",
            Self::Battleship => "battleship",
            Self::Battlecruiser => "battlecruiser",
            Self::Bomber => "bomber",
            Self::Destroyer => "destroyer",
            Self::Deathstar => "deathstar",
            Self::Reaper => "reaper",
            Self::Pathfinder => "pathfinder",
            Self::SmallCargo => "smallCargo",
            Self::LargeCargo => "largeCargo",
            Self::ColonyShip => "colonyShip",
            Self::Recycler => "recycler",
            Self::EspionageProbe => "espionageProbe",
        }
    }

    /// Position in [`ShipClass::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|ship| *ship == self)
            .unwrap_or_default()
    }

    /// Ship at a selection index, wrapping past the end.
    pub fn at(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Accepts the snapshot key (case-insensitive) or the technical id.
impl FromStr for ShipClass {
    type Err = UnknownShip;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|ship| ship.key().eq_ignore_ascii_case(wanted) || ship.id() == wanted)
            .ok_or_else(|| UnknownShip(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ship `{0}`")]
pub struct UnknownShip(pub String);
