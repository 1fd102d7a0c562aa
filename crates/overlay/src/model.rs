//! Everything the overlay displays, derived from the current inputs in one
//! synchronous pass.

use gfd_config::{ConfigError, PlayerSettings, ServerMetadata, ShipSlot};
use gfd_core::constants::GALAXY_VIEW_POSITION;
use gfd_core::{ClockTime, Coordinate};
use gfd_distance::{DistanceHighlight, DistanceReport, IgnoredSystems};
use gfd_flight::{
    FleetSpeedType, FlightError, SpeedModifier, SpeedScale, TripDirective, briefing,
    flight_seconds_for,
};
use gfd_ships::{Freshness, ShipClass, ShipSpeedCache};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::locale::{Localizer, NameForm, TextKey};
use crate::signal::RecomputeTrigger;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("flight calculation failed: {0}")]
    Flight(#[from] FlightError),
    #[error("server metadata rejected: {0}")]
    Server(#[from] ConfigError),
}

/// System currently open in the galaxy view. The view has no position, so
/// the destination always sits at position 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalaxyView {
    pub galaxy: u32,
    pub system: u32,
}

impl GalaxyView {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.galaxy, self.system, GALAXY_VIEW_POSITION)
    }
}

/// Inputs gathered by the caller for one recompute.
#[derive(Debug, Clone)]
pub struct OverlayInputs<'a> {
    pub server: &'a ServerMetadata,
    pub origin: Coordinate,
    pub view: GalaxyView,
    pub settings: &'a PlayerSettings,
    /// Player has the General class and may pick 5% modifier steps.
    pub general_class: bool,
    /// Skippable systems along the path; only used when the server allows it.
    pub ignored: Option<IgnoredSystems>,
    pub now: Option<ClockTime>,
    /// Today's in-game date, used to tell whether cached speeds are stale.
    pub day_marker: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceView {
    pub report: DistanceReport,
    pub highlight: DistanceHighlight,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSpeedView {
    pub kind: FleetSpeedType,
    pub multiplier: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifierView {
    pub modifier: SpeedModifier,
    pub percent: u32,
    pub scale: SpeedScale,
}

/// One-leg values are shown prominently, round trips muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    Primary,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShipWarning {
    /// Speeds are manufacturer defaults; no fleet data was ever read.
    SpeedNeverRefreshed,
    /// Speeds were read on an earlier day.
    SpeedStale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipLine {
    pub slot: Option<ShipSlot>,
    pub ship: ShipClass,
    pub label: String,
    pub speed: u32,
    pub seconds: u64,
    pub briefing: String,
    pub emphasis: Emphasis,
    pub warning: Option<ShipWarning>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub trigger: RecomputeTrigger,
    pub distance: DistanceView,
    pub fleet_speed: FleetSpeedView,
    pub directive: TripDirective,
    pub directive_title: String,
    pub speed_modifier: ModifierView,
    pub ships: Vec<ShipLine>,
    pub freshness: Freshness,
    /// Arrival and return times go stale every second.
    pub wants_clock_ticks: bool,
}

/// Shared per-recompute values every ship line is computed from.
struct FlightContext<'a> {
    distance: u32,
    directive: TripDirective,
    modifier: SpeedModifier,
    fleet_speed: u32,
    now: Option<ClockTime>,
    warning: Option<ShipWarning>,
    locale: &'a dyn Localizer,
}

impl FlightContext<'_> {
    fn line(
        &self,
        slot: Option<ShipSlot>,
        ship: ShipClass,
        cache: &ShipSpeedCache,
    ) -> Result<ShipLine, OverlayError> {
        let speed = cache.get(ship).speed;
        let seconds = flight_seconds_for(
            self.directive,
            self.distance,
            speed,
            self.modifier,
            self.fleet_speed,
        )?;
        let title = match (self.warning, slot) {
            (Some(ShipWarning::SpeedNeverRefreshed), _) => {
                self.locale.text(TextKey::SpeedNeverRefreshed).to_string()
            }
            (_, Some(slot)) => format!(
                "{} {}{}  {}\n{}:  {}",
                self.locale.text(TextKey::Selected),
                self.locale.text(TextKey::for_slot(slot)),
                self.locale.text(TextKey::ShipSuffix),
                self.locale.ship_name(ship, NameForm::Full),
                self.locale.text(TextKey::Speed),
                speed
            ),
            (_, None) => format!(
                "{}\n{}:  {}",
                self.locale.ship_name(ship, NameForm::Full),
                self.locale.text(TextKey::Speed),
                speed
            ),
        };
        Ok(ShipLine {
            slot,
            ship,
            label: self.locale.ship_name(ship, NameForm::Short).to_string(),
            speed,
            seconds,
            briefing: briefing(self.directive, seconds, self.now)?,
            emphasis: if self.directive.trip_factor() == 1 {
                Emphasis::Primary
            } else {
                Emphasis::Muted
            },
            warning: self.warning,
            title,
        })
    }
}

fn freshness(cache: &ShipSpeedCache, day_marker: Option<&str>) -> Freshness {
    match day_marker {
        Some(marker) => cache.freshness(marker),
        None if cache.last_refreshed_marker().is_some() => Freshness::Current,
        None => Freshness::NeverRefreshed,
    }
}

fn warning_for(freshness: &Freshness) -> Option<ShipWarning> {
    match freshness {
        Freshness::NeverRefreshed => Some(ShipWarning::SpeedNeverRefreshed),
        Freshness::Stale { .. } => Some(ShipWarning::SpeedStale),
        Freshness::Current => None,
    }
}

fn flight_context<'a>(
    inputs: &OverlayInputs<'_>,
    distance: u32,
    freshness: &Freshness,
    locale: &'a dyn Localizer,
) -> FlightContext<'a> {
    let scale = SpeedScale::for_general_class(inputs.general_class);
    FlightContext {
        distance,
        directive: inputs.settings.directive(),
        modifier: inputs.settings.speed_modifier(scale),
        fleet_speed: inputs
            .server
            .fleet_speed_for(inputs.settings.fleet_speed_type()),
        now: inputs.now,
        warning: warning_for(freshness),
        locale,
    }
}

fn measure(inputs: &OverlayInputs<'_>) -> DistanceReport {
    let ignored = inputs
        .ignored
        .filter(|_| inputs.server.ignore_systems_enabled());
    gfd_distance::measure(
        &inputs.origin,
        &inputs.view.coordinate(),
        &inputs.server.topology(),
        ignored,
    )
}

/// Localized summary of a coordinate difference, e.g. `3 systems`.
pub fn describe_difference(report: &DistanceReport, locale: &dyn Localizer) -> String {
    let shown = report.effective();
    if shown.g > 0 {
        let unit = if shown.g == 1 {
            TextKey::Galaxy
        } else {
            TextKey::Galaxies
        };
        return format!("{} {}", shown.g, locale.text(unit));
    }
    if shown.s == 0 {
        return format!(
            "0 {}\n\n{}",
            locale.text(TextKey::Systems),
            locale.text(TextKey::PositionFixed)
        );
    }
    let unit = if shown.s == 1 {
        TextKey::System
    } else {
        TextKey::Systems
    };
    match report.adjusted {
        Some(_) => format!("{} ({}) {}", shown.s, report.raw.s, locale.text(unit)),
        None => format!("{} {}", shown.s, locale.text(unit)),
    }
}

fn distance_title(report: &DistanceReport, locale: &dyn Localizer) -> String {
    let mut title = format!(
        "{}:  {}\n{}:  {}",
        locale.text(TextKey::Distance),
        report.distance,
        locale.text(TextKey::CoordsDifference),
        describe_difference(report, locale)
    );
    if let Some(ignored) = report.ignored {
        title.push_str(&format!(
            "\n\n{}:  {}  ({} / {})",
            locale.text(TextKey::IgnoreSystems),
            ignored.total(),
            ignored.empty,
            ignored.inactive
        ));
    }
    title
}

/// Derive the full overlay state for the current inputs.
pub fn recompute(
    trigger: RecomputeTrigger,
    inputs: &OverlayInputs<'_>,
    cache: &ShipSpeedCache,
    locale: &dyn Localizer,
) -> Result<RenderModel, OverlayError> {
    inputs.server.validate()?;

    let report = measure(inputs);
    let freshness = freshness(cache, inputs.day_marker);
    let context = flight_context(inputs, report.distance, &freshness, locale);

    let ships = ShipSlot::ALL
        .into_iter()
        .map(|slot| context.line(Some(slot), inputs.settings.ship(slot), cache))
        .collect::<Result<Vec<_>, _>>()?;

    let kind = inputs.settings.fleet_speed_type();
    let scale = SpeedScale::for_general_class(inputs.general_class);
    debug!(
        ?trigger,
        distance = report.distance,
        directive = ?context.directive,
        "overlay recomputed"
    );

    Ok(RenderModel {
        trigger,
        distance: DistanceView {
            report,
            highlight: report.highlight(),
            title: distance_title(&report, locale),
        },
        fleet_speed: FleetSpeedView {
            kind,
            multiplier: context.fleet_speed,
            title: format!(
                "{}: {} {}",
                locale.text(TextKey::SelectedSpeed),
                locale.text(TextKey::for_fleet_speed(kind)),
                locale.text(TextKey::FleetSpeed)
            ),
        },
        directive: context.directive,
        directive_title: locale
            .text(TextKey::for_directive(context.directive))
            .to_string(),
        speed_modifier: ModifierView {
            modifier: context.modifier,
            percent: context.modifier.percent(),
            scale,
        },
        ships,
        freshness,
        wants_clock_ticks: context.directive.is_absolute(),
    })
}

/// Flight values for every ship class at the current settings.
pub fn fleet_table(
    inputs: &OverlayInputs<'_>,
    cache: &ShipSpeedCache,
    locale: &dyn Localizer,
) -> Result<Vec<ShipLine>, OverlayError> {
    inputs.server.validate()?;
    let report = measure(inputs);
    let freshness = freshness(cache, inputs.day_marker);
    let context = flight_context(inputs, report.distance, &freshness, locale);
    ShipClass::ALL
        .into_iter()
        .map(|ship| context.line(None, ship, cache))
        .collect()
}
