//! Flight duration engine.
//!
//! Durations follow the game's formula
//!
//! ```text
//! round(((10 + (3500 / modifier) * sqrt(10 * distance / speed)) / fleet_speed) * trips)
//! ```
//!
//! Exact half seconds round away from zero (`f64::round`).

pub mod directive;
pub mod modifier;

use gfd_core::ClockTime;
use gfd_core::constants::{HOURS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use thiserror::Error;

pub use directive::{FleetSpeedType, TripDirective};
pub use modifier::{SpeedModifier, SpeedScale};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlightError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("arrival and return times need the current clock reading")]
    MissingClock,
    #[error("malformed duration `{0}`, expected `H:MM:SSh`")]
    MalformedDuration(String),
}

/// Flight duration in whole seconds.
pub fn flight_seconds(
    trip_factor: u32,
    distance: u32,
    ship_speed: u32,
    modifier: SpeedModifier,
    fleet_speed: u32,
) -> Result<u64, FlightError> {
    if !(1..=2).contains(&trip_factor) {
        return Err(FlightError::InvalidInput(format!(
            "trip factor must be 1 or 2, got {trip_factor}"
        )));
    }
    if distance == 0 {
        return Err(FlightError::InvalidInput("distance must be positive".into()));
    }
    if ship_speed == 0 {
        return Err(FlightError::InvalidInput("ship speed must be positive".into()));
    }
    if fleet_speed == 0 {
        return Err(FlightError::InvalidInput(
            "fleet speed multiplier must be positive".into(),
        ));
    }

    let travel = (10.0 * f64::from(distance) / f64::from(ship_speed)).sqrt();
    let one_way = (10.0 + (3500.0 / modifier.fraction()) * travel) / f64::from(fleet_speed);
    let seconds = (one_way * f64::from(trip_factor)).round();
    if !seconds.is_finite() || seconds < 0.0 || seconds > u64::MAX as f64 {
        return Err(FlightError::InvalidInput(format!(
            "flight duration is not representable: {seconds}"
        )));
    }
    Ok(seconds as u64)
}

/// Flight duration for a trip directive.
pub fn flight_seconds_for(
    directive: TripDirective,
    distance: u32,
    ship_speed: u32,
    modifier: SpeedModifier,
    fleet_speed: u32,
) -> Result<u64, FlightError> {
    flight_seconds(
        directive.trip_factor(),
        distance,
        ship_speed,
        modifier,
        fleet_speed,
    )
}

/// Elapsed time as `H:MM:SSh`; hours are unpadded and may exceed 24.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds / SECONDS_PER_MINUTE) % 60;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    format!("{hours}:{minutes:02}:{seconds:02}h")
}

/// Inverse of [`format_duration`].
pub fn parse_duration(text: &str) -> Result<u64, FlightError> {
    let malformed = || FlightError::MalformedDuration(text.to_string());
    let body = text.trim().strip_suffix('h').ok_or_else(malformed)?;
    let mut parts = body.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    if minutes.len() != 2 || seconds.len() != 2 {
        return Err(malformed());
    }
    if ![hours, minutes, seconds].into_iter().all(is_digits) {
        return Err(malformed());
    }
    let hours: u64 = hours.parse().map_err(|_| malformed())?;
    let minutes: u64 = minutes.parse().map_err(|_| malformed())?;
    let seconds: u64 = seconds.parse().map_err(|_| malformed())?;
    if minutes >= 60 || seconds >= 60 {
        return Err(malformed());
    }
    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes * SECONDS_PER_MINUTE + seconds))
        .ok_or_else(malformed)
}

/// `u64::from_str` accepts a leading `+`; durations never carry a sign.
fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Wall-clock time `offset_seconds` after `now`, as `HH:MM:SS`.
///
/// Hours wrap at midnight; the day is not reported.
pub fn absolute_time(now: ClockTime, offset_seconds: u64) -> String {
    let seconds = u64::from(now.seconds()) + offset_seconds;
    let minutes = u64::from(now.minutes()) + seconds / SECONDS_PER_MINUTE;
    let hours = u64::from(now.hours()) + minutes / 60;
    format!(
        "{:02}:{:02}:{:02}",
        hours % HOURS_PER_DAY,
        minutes % 60,
        seconds % SECONDS_PER_MINUTE
    )
}

/// Text shown for a flight: a duration for one/two-way directives, a clock
/// time for arrival/return.
pub fn briefing(
    directive: TripDirective,
    seconds: u64,
    now: Option<ClockTime>,
) -> Result<String, FlightError> {
    if directive.is_absolute() {
        let now = now.ok_or(FlightError::MissingClock)?;
        Ok(absolute_time(now, seconds))
    } else {
        Ok(format_duration(seconds))
    }
}
