//! Mission categories and what a displayed flight value represents.

use serde::{Deserialize, Serialize};

/// Whether a shown value is a relative duration or an absolute clock time,
/// and whether it covers one leg or the round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripDirective {
    #[default]
    OneWay,
    TwoWay,
    Arrival,
    Return,
}

impl TripDirective {
    pub const ALL: [Self; 4] = [Self::OneWay, Self::TwoWay, Self::Arrival, Self::Return];

    /// Legs flown: 1 for one-way and arrival, 2 for two-way and return.
    pub fn trip_factor(self) -> u32 {
        match self {
            Self::OneWay | Self::Arrival => 1,
            Self::TwoWay | Self::Return => 2,
        }
    }

    /// Arrival and return render as wall-clock times.
    pub fn is_absolute(self) -> bool {
        matches!(self, Self::Arrival | Self::Return)
    }
}

/// Mission category selecting which server fleet-speed multiplier applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FleetSpeedType {
    /// Expedition, colonisation, transport, deployment.
    Peaceful,
    /// Recycling, espionage, attacks, moon destruction.
    #[default]
    War,
    /// Alliance defend.
    Holding,
}

impl FleetSpeedType {
    pub const ALL: [Self; 3] = [Self::Peaceful, Self::War, Self::Holding];
}
