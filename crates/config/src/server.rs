//! Universe settings published by the game server.

use gfd_core::TopologyConfig;
use gfd_flight::FleetSpeedType;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ConfigError;

/// Server-wide fleet speed multipliers per mission category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSpeeds {
    pub peaceful: u32,
    pub war: u32,
    pub holding: u32,
}

impl Default for FleetSpeeds {
    fn default() -> Self {
        Self {
            peaceful: 1,
            war: 1,
            holding: 1,
        }
    }
}

/// Universe settings the calculator depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMetadata {
    #[serde(alias = "galaxy_count", alias = "galaxies")]
    pub galaxy_count: u32,
    #[serde(default, alias = "fleet_speed")]
    pub fleet_speed: FleetSpeeds,
    #[serde(default, alias = "donut_galaxy", deserialize_with = "flag")]
    pub donut_galaxy: bool,
    #[serde(default, alias = "donut_system", deserialize_with = "flag")]
    pub donut_system: bool,
    #[serde(
        default,
        alias = "ignore_empty_systems",
        alias = "fleetIgnoreEmptySystems",
        deserialize_with = "flag"
    )]
    pub ignore_empty_systems: bool,
    #[serde(
        default,
        alias = "ignore_inactive_systems",
        alias = "fleetIgnoreInactiveSystems",
        deserialize_with = "flag"
    )]
    pub ignore_inactive_systems: bool,
}

impl ServerMetadata {
    pub fn topology(&self) -> TopologyConfig {
        TopologyConfig {
            max_galaxies: self.galaxy_count,
            donut_system: self.donut_system,
            donut_galaxy: self.donut_galaxy,
        }
    }

    pub fn fleet_speed_for(&self, kind: FleetSpeedType) -> u32 {
        match kind {
            FleetSpeedType::Peaceful => self.fleet_speed.peaceful,
            FleetSpeedType::War => self.fleet_speed.war,
            FleetSpeedType::Holding => self.fleet_speed.holding,
        }
    }

    /// Whether fleets may skip empty or inactive systems on this server.
    pub fn ignore_systems_enabled(&self) -> bool {
        self.ignore_empty_systems || self.ignore_inactive_systems
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.galaxy_count == 0 {
            return Err(ConfigError::Invalid("galaxy count must be at least 1".into()));
        }
        for kind in FleetSpeedType::ALL {
            if self.fleet_speed_for(kind) == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{kind:?} fleet speed must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

/// Servers publish switches as `0`/`1`; booleans are accepted as well.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(u64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Number(0) => Ok(false),
        Flag::Number(1) => Ok(true),
        Flag::Number(other) => Err(D::Error::custom(format!(
            "expected 0 or 1, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_flags_and_aliases_parse() {
        let metadata: ServerMetadata = serde_json::from_str(
            r#"{
                "galaxies": 7,
                "fleetSpeed": {"peaceful": 3, "war": 2, "holding": 1},
                "donutGalaxy": 1,
                "donutSystem": 0,
                "fleetIgnoreEmptySystems": 1
            }"#,
        )
        .unwrap();
        assert_eq!(metadata.galaxy_count, 7);
        assert!(metadata.donut_galaxy);
        assert!(!metadata.donut_system);
        assert!(metadata.ignore_systems_enabled());
        assert_eq!(metadata.fleet_speed_for(FleetSpeedType::Peaceful), 3);
        assert_eq!(metadata.topology(), TopologyConfig {
            max_galaxies: 7,
            donut_system: false,
            donut_galaxy: true,
        });
    }

    #[test]
    fn out_of_range_flag_is_rejected() {
        let text = r#"{"galaxyCount": 9, "donutGalaxy": 2}"#;
        assert!(serde_json::from_str::<ServerMetadata>(text).is_err());
    }

    #[test]
    fn zero_fleet_speed_fails_validation() {
        let metadata = ServerMetadata {
            galaxy_count: 9,
            fleet_speed: FleetSpeeds {
                peaceful: 1,
                war: 0,
                holding: 1,
            },
            donut_galaxy: true,
            donut_system: true,
            ignore_empty_systems: false,
            ignore_inactive_systems: false,
        };
        assert!(matches!(metadata.validate(), Err(ConfigError::Invalid(_))));
    }
}
