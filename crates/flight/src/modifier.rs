//! Player speed modifiers and the discrete scales they are picked from.

use serde::Serialize;

use crate::FlightError;

/// Fraction of full speed a fleet is sent with, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SpeedModifier(f64);

impl SpeedModifier {
    pub const FULL: Self = Self(1.0);

    pub fn new(fraction: f64) -> Result<Self, FlightError> {
        if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(FlightError::InvalidInput(format!(
                "speed modifier must lie in (0, 1], got {fraction}"
            )))
        }
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Whole percent shown to the player.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for SpeedModifier {
    fn default() -> Self {
        Self::FULL
    }
}

const STANDARD_STEPS: [f64; 10] = [1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1];
const GENERAL_STEPS: [f64; 20] = [
    1.0, 0.95, 0.9, 0.85, 0.8, 0.75, 0.7, 0.65, 0.6, 0.55, 0.5, 0.45, 0.4, 0.35, 0.3, 0.25, 0.2,
    0.15, 0.1, 0.05,
];

/// Ordered set of modifiers a player can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedScale {
    /// 10% steps.
    Standard,
    /// 5% steps, available to the General class.
    General,
}

impl SpeedScale {
    pub fn for_general_class(is_general: bool) -> Self {
        if is_general {
            Self::General
        } else {
            Self::Standard
        }
    }

    fn steps(self) -> &'static [f64] {
        match self {
            Self::Standard => &STANDARD_STEPS,
            Self::General => &GENERAL_STEPS,
        }
    }

    pub fn len(self) -> usize {
        self.steps().len()
    }

    /// Index clamped into this scale; indices beyond it fall back to 100%.
    pub fn normalize_index(self, index: usize) -> usize {
        if index < self.len() { index } else { 0 }
    }

    pub fn modifier_at(self, index: usize) -> SpeedModifier {
        SpeedModifier(self.steps()[self.normalize_index(index)])
    }

    pub fn modifiers(self) -> impl Iterator<Item = SpeedModifier> {
        self.steps().iter().map(|&fraction| SpeedModifier(fraction))
    }
}
