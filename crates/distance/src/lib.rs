//! Coordinate difference and distance engine.
//!
//! Distances follow the game's piecewise rules: the dominant non-zero
//! component of the coordinate difference decides which linear formula
//! applies. Systems and galaxies may wrap around ("donut" topology), in
//! which case the shorter way round is used.

use gfd_core::constants::{
    GALAXY_BASE_DISTANCE, PER_GALAXY_DISTANCE, PER_POSITION_DISTANCE, PER_SYSTEM_DISTANCE,
    SAME_POSITION_DISTANCE, SYSTEM_BASE_DISTANCE, SYSTEMS_PER_GALAXY,
};
use gfd_core::{Coordinate, CoordsDifference, TopologyConfig};
use serde::Serialize;

/// Difference between two coordinates, evaluated in priority order:
/// same position, same system, same galaxy, then across galaxies.
pub fn coords_difference(
    origin: &Coordinate,
    destination: &Coordinate,
    topology: &TopologyConfig,
) -> CoordsDifference {
    if origin.galaxy == destination.galaxy {
        if origin.system == destination.system {
            if origin.position == destination.position {
                return CoordsDifference::ZERO;
            }
            return CoordsDifference {
                g: 0,
                s: 0,
                p: origin.position.abs_diff(destination.position),
            };
        }
        let systems = origin.system.abs_diff(destination.system);
        let s = if topology.donut_system {
            shortest_way_round(systems, SYSTEMS_PER_GALAXY)
        } else {
            systems
        };
        return CoordsDifference { g: 0, s, p: 0 };
    }

    let galaxies = origin.galaxy.abs_diff(destination.galaxy);
    let g = if topology.donut_galaxy {
        shortest_way_round(galaxies, topology.max_galaxies)
    } else {
        galaxies
    };
    CoordsDifference { g, s: 0, p: 0 }
}

/// `min(delta, span - delta)`; out-of-range deltas are returned unchanged.
fn shortest_way_round(delta: u32, span: u32) -> u32 {
    if delta >= span {
        delta
    } else {
        delta.min(span - delta)
    }
}

/// Distance units for a coordinate difference. Saturates at `u32::MAX`.
pub fn distance(delta: &CoordsDifference) -> u32 {
    match *delta {
        CoordsDifference { g: 0, s: 0, p: 0 } => SAME_POSITION_DISTANCE,
        CoordsDifference { g: 0, s: 0, p } => {
            SYSTEM_BASE_DISTANCE.saturating_add(PER_POSITION_DISTANCE.saturating_mul(p))
        }
        CoordsDifference { g: 0, s, .. } => {
            GALAXY_BASE_DISTANCE.saturating_add(PER_SYSTEM_DISTANCE.saturating_mul(s))
        }
        CoordsDifference { g, .. } => PER_GALAXY_DISTANCE.saturating_mul(g),
    }
}

/// Empty and inactive systems a fleet may skip on servers that allow it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IgnoredSystems {
    pub empty: u32,
    pub inactive: u32,
}

impl IgnoredSystems {
    pub fn total(&self) -> u32 {
        self.empty.saturating_add(self.inactive)
    }
}

/// How a distance should be emphasised when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistanceHighlight {
    Normal,
    /// Ignore-systems mode removed at least one system from the path.
    Reduced,
    /// The destination lies in another galaxy.
    InterGalactic,
}

/// Distance together with the deltas it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    pub distance: u32,
    /// Delta between the two coordinates as the game addresses them.
    pub raw: CoordsDifference,
    /// Delta after skipping ignored systems, when that mode applies.
    pub adjusted: Option<CoordsDifference>,
    pub ignored: Option<IgnoredSystems>,
}

impl DistanceReport {
    /// Delta the distance was actually computed from.
    pub fn effective(&self) -> CoordsDifference {
        self.adjusted.unwrap_or(self.raw)
    }

    pub fn highlight(&self) -> DistanceHighlight {
        if self.distance >= PER_GALAXY_DISTANCE {
            DistanceHighlight::InterGalactic
        } else if self.ignored.is_some_and(|ignored| ignored.total() > 0) {
            DistanceHighlight::Reduced
        } else {
            DistanceHighlight::Normal
        }
    }
}

/// Raw delta with the system component reduced by the skipped systems.
pub fn skip_ignored_systems(raw: &CoordsDifference, ignored: &IgnoredSystems) -> CoordsDifference {
    CoordsDifference {
        s: raw.s.saturating_sub(ignored.total()),
        ..*raw
    }
}

/// Compute the distance between two coordinates, optionally skipping
/// empty and inactive systems along the way.
pub fn measure(
    origin: &Coordinate,
    destination: &Coordinate,
    topology: &TopologyConfig,
    ignored: Option<IgnoredSystems>,
) -> DistanceReport {
    let raw = coords_difference(origin, destination, topology);
    let adjusted = ignored.map(|ignored| skip_ignored_systems(&raw, &ignored));
    let distance = distance(&adjusted.unwrap_or(raw));
    DistanceReport {
        distance,
        raw,
        adjusted,
        ignored,
    }
}
