//! Player preferences for the overlay, persisted between sessions.

use std::fs;
use std::path::Path;

use gfd_flight::{FleetSpeedType, SpeedModifier, SpeedScale, TripDirective};
use gfd_ships::ShipClass;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConfigError;

/// Bump whenever the stored layout changes; older files reset to defaults.
pub const SETTINGS_VERSION: u32 = 2;

/// The three ship selections shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShipSlot {
    First,
    Second,
    Third,
}

impl ShipSlot {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

/// A user-adjustable selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    FleetSpeedType,
    Briefing,
    SpeedModifier,
    Ship(ShipSlot),
}

/// Selected options, stored as indices into their fixed option lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSettings {
    pub version: u32,
    pub fleet_speed_type: usize,
    pub briefing: usize,
    pub speed_modifier: usize,
    pub ships: [usize; 3],
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            fleet_speed_type: 1,
            briefing: 0,
            speed_modifier: 0,
            ships: [0; 3],
        }
    }
}

impl PlayerSettings {
    pub fn fleet_speed_type(&self) -> FleetSpeedType {
        FleetSpeedType::ALL[self.fleet_speed_type % FleetSpeedType::ALL.len()]
    }

    pub fn directive(&self) -> TripDirective {
        TripDirective::ALL[self.briefing % TripDirective::ALL.len()]
    }

    pub fn speed_modifier(&self, scale: SpeedScale) -> SpeedModifier {
        scale.modifier_at(self.speed_modifier)
    }

    pub fn ship(&self, slot: ShipSlot) -> ShipClass {
        ShipClass::at(self.ships[slot.index()])
    }

    pub fn select_ship(&mut self, slot: ShipSlot, ship: ShipClass) {
        self.ships[slot.index()] = ship.index();
    }

    /// Drop a fine-grained modifier step the active scale cannot show.
    pub fn normalize(&mut self, scale: SpeedScale) {
        self.speed_modifier = scale.normalize_index(self.speed_modifier);
    }

    /// Advance a selector, wrapping after the last option.
    pub fn next(&mut self, setting: Setting, scale: SpeedScale) {
        self.step(setting, scale, true);
    }

    /// Step a selector back, wrapping before the first option.
    pub fn previous(&mut self, setting: Setting, scale: SpeedScale) {
        self.step(setting, scale, false);
    }

    fn step(&mut self, setting: Setting, scale: SpeedScale, forward: bool) {
        self.normalize(scale);
        let (index, len) = match setting {
            Setting::FleetSpeedType => (&mut self.fleet_speed_type, FleetSpeedType::ALL.len()),
            Setting::Briefing => (&mut self.briefing, TripDirective::ALL.len()),
            Setting::SpeedModifier => (&mut self.speed_modifier, scale.len()),
            Setting::Ship(slot) => (&mut self.ships[slot.index()], ShipClass::ALL.len()),
        };
        let current = *index % len;
        *index = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
    }

    /// Restore settings from storage; unknown versions or layouts reset to
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let version = value.get("version").and_then(serde_json::Value::as_u64);
        if version != Some(u64::from(SETTINGS_VERSION)) {
            debug!(
                ?version,
                expected = SETTINGS_VERSION,
                "settings schema changed, using defaults"
            );
            return Ok(Self::default());
        }
        match serde_json::from_value(value) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                debug!(%err, "stored settings unreadable, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings; a missing file yields defaults.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
