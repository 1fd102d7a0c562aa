//! Core coordinate, clock, and constant types shared across the Galaxy Flight Duration workspace.

use thiserror::Error;

/// Errors raised while parsing coordinates or clock readings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("malformed coordinate `{0}`, expected `galaxy:system:position`")]
    MalformedCoordinate(String),
    #[error("coordinate component `{component}` must be at least 1")]
    ZeroComponent { component: &'static str },
    #[error("malformed clock reading `{0}`, expected `HH:MM:SS`")]
    MalformedClock(String),
    #[error("clock field `{field}` out of range: {value}")]
    ClockOutOfRange { field: &'static str, value: u32 },
}

/// Fixed game-engine parameters.
pub mod constants {
    /// Number of solar systems in every galaxy. Not server-configurable.
    pub const SYSTEMS_PER_GALAXY: u32 = 499;
    /// Position the galaxy view always reports for its selection.
    pub const GALAXY_VIEW_POSITION: u32 = 16;

    /// Distance between two bodies sharing the exact same coordinate.
    pub const SAME_POSITION_DISTANCE: u32 = 5;
    /// Base distance inside one system.
    pub const SYSTEM_BASE_DISTANCE: u32 = 1_000;
    /// Additional distance per position inside one system.
    pub const PER_POSITION_DISTANCE: u32 = 5;
    /// Base distance between two systems of one galaxy.
    pub const GALAXY_BASE_DISTANCE: u32 = 2_700;
    /// Additional distance per system crossed.
    pub const PER_SYSTEM_DISTANCE: u32 = 95;
    /// Distance per galaxy crossed.
    pub const PER_GALAXY_DISTANCE: u32 = 20_000;

    pub const SECONDS_PER_MINUTE: u64 = 60;
    pub const SECONDS_PER_HOUR: u64 = 3_600;
    pub const HOURS_PER_DAY: u64 = 24;
}

/// Galaxy / system / position addressing.
pub mod coords {
    use std::fmt;
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};

    use super::CoreError;

    /// A location in the game's three-level address space.
    ///
    /// Ranges are not enforced here; callers are expected to hand in
    /// coordinates read from the game itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Coordinate {
        pub galaxy: u32,
        pub system: u32,
        pub position: u32,
    }

    impl Coordinate {
        pub const fn new(galaxy: u32, system: u32, position: u32) -> Self {
            Self {
                galaxy,
                system,
                position,
            }
        }
    }

    impl fmt::Display for Coordinate {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}:{}:{}", self.galaxy, self.system, self.position)
        }
    }

    /// Parses the `g:s:p` form used by the game's planet coordinate tag.
    impl FromStr for Coordinate {
        type Err = CoreError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let malformed = || CoreError::MalformedCoordinate(s.to_string());
            let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
            let mut parts = trimmed.split(':');
            let mut next = |component: &'static str| -> Result<u32, CoreError> {
                let value: u32 = parts
                    .next()
                    .ok_or_else(malformed)?
                    .trim()
                    .parse()
                    .map_err(|_| malformed())?;
                if value == 0 {
                    return Err(CoreError::ZeroComponent { component });
                }
                Ok(value)
            };
            let galaxy = next("galaxy")?;
            let system = next("system")?;
            let position = next("position")?;
            if parts.next().is_some() {
                return Err(malformed());
            }
            Ok(Self::new(galaxy, system, position))
        }
    }

    /// Non-negative difference between two coordinates.
    ///
    /// At most one component is non-zero; all three are zero when both
    /// coordinates are identical.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CoordsDifference {
        pub g: u32,
        pub s: u32,
        pub p: u32,
    }

    impl CoordsDifference {
        pub const ZERO: Self = Self { g: 0, s: 0, p: 0 };

        pub fn is_zero(&self) -> bool {
            *self == Self::ZERO
        }
    }

    /// Wraparound flags and galaxy count for one server.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TopologyConfig {
        pub max_galaxies: u32,
        pub donut_system: bool,
        pub donut_galaxy: bool,
    }

    impl TopologyConfig {
        /// Linear topology with no wraparound.
        pub const fn linear(max_galaxies: u32) -> Self {
            Self {
                max_galaxies,
                donut_system: false,
                donut_galaxy: false,
            }
        }

        /// Full torus: both systems and galaxies wrap.
        pub const fn donut(max_galaxies: u32) -> Self {
            Self {
                max_galaxies,
                donut_system: true,
                donut_galaxy: true,
            }
        }
    }
}

/// Wall-clock readings.
pub mod clock {
    use std::fmt;
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};

    use super::CoreError;

    /// A time of day as shown by the in-game clock.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "RawClock")]
    pub struct ClockTime {
        h: u8,
        m: u8,
        s: u8,
    }

    /// Unchecked wire form; ranges are enforced through [`ClockTime::new`].
    #[derive(Deserialize)]
    struct RawClock {
        h: u32,
        m: u32,
        s: u32,
    }

    impl TryFrom<RawClock> for ClockTime {
        type Error = CoreError;

        fn try_from(raw: RawClock) -> Result<Self, Self::Error> {
            Self::new(raw.h, raw.m, raw.s)
        }
    }

    impl ClockTime {
        pub fn new(h: u32, m: u32, s: u32) -> Result<Self, CoreError> {
            let check = |field: &'static str, value: u32, limit: u32| {
                if value < limit {
                    Ok(value as u8)
                } else {
                    Err(CoreError::ClockOutOfRange { field, value })
                }
            };
            Ok(Self {
                h: check("hours", h, 24)?,
                m: check("minutes", m, 60)?,
                s: check("seconds", s, 60)?,
            })
        }

        pub fn midnight() -> Self {
            Self { h: 0, m: 0, s: 0 }
        }

        pub fn hours(&self) -> u32 {
            u32::from(self.h)
        }

        pub fn minutes(&self) -> u32 {
            u32::from(self.m)
        }

        pub fn seconds(&self) -> u32 {
            u32::from(self.s)
        }
    }

    impl fmt::Display for ClockTime {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:02}:{:02}:{:02}", self.h, self.m, self.s)
        }
    }

    impl FromStr for ClockTime {
        type Err = CoreError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let malformed = || CoreError::MalformedClock(s.to_string());
            let fields: Vec<u32> = s
                .trim()
                .split(':')
                .map(|part| part.trim().parse::<u32>().map_err(|_| malformed()))
                .collect::<Result<_, _>>()?;
            match fields.as_slice() {
                [h, m, s] => Self::new(*h, *m, *s),
                _ => Err(malformed()),
            }
        }
    }
}

pub use clock::ClockTime;
pub use coords::{Coordinate, CoordsDifference, TopologyConfig};
