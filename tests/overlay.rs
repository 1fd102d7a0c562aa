use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::rc::Rc;

use galaxy_flight_duration::config::{FleetSpeeds, PlayerSettings, ServerMetadata, ShipSlot};
use galaxy_flight_duration::core::{ClockTime, Coordinate};
use galaxy_flight_duration::distance::{DistanceHighlight, IgnoredSystems};
use galaxy_flight_duration::flight::{
    FleetSpeedType, FlightError, SpeedModifier, TripDirective, flight_seconds, format_duration,
};
use galaxy_flight_duration::overlay::{
    BuiltinLocale, Catalog, Emphasis, GalaxyView, Localizer, NameForm, NavigationWatcher,
    OverlayError, OverlayInputs, RecomputeTrigger, ShipWarning, SignalHub, TextKey,
    describe_difference, fleet_table, recompute,
};
use galaxy_flight_duration::ships::{ShipClass, ShipSpeedCache, StaticFleetTable};

fn server() -> ServerMetadata {
    ServerMetadata {
        galaxy_count: 9,
        fleet_speed: FleetSpeeds {
            peaceful: 3,
            war: 2,
            holding: 1,
        },
        donut_galaxy: true,
        donut_system: true,
        ignore_empty_systems: false,
        ignore_inactive_systems: false,
    }
}

fn origin() -> Coordinate {
    Coordinate::new(1, 100, 8)
}

fn inputs<'a>(
    server: &'a ServerMetadata,
    settings: &'a PlayerSettings,
    view: GalaxyView,
) -> OverlayInputs<'a> {
    OverlayInputs {
        server,
        origin: origin(),
        view,
        settings,
        general_class: false,
        ignored: None,
        now: Some(ClockTime::new(10, 0, 0).expect("clock")),
        day_marker: Some("day-1"),
    }
}

fn refreshed_cache(marker: &str) -> ShipSpeedCache {
    let table: HashMap<String, u32> = ShipClass::ALL
        .into_iter()
        .map(|ship| (ship.id().to_string(), ship.base_speed()))
        .collect();
    let mut cache = ShipSpeedCache::new();
    cache.refresh_if_stale(marker, &StaticFleetTable(table));
    cache
}

const NEXT_SYSTEM: GalaxyView = GalaxyView {
    galaxy: 1,
    system: 101,
};

#[test]
fn default_settings_render_three_light_fighters() {
    let server = server();
    let settings = PlayerSettings::default();
    let model = recompute(
        RecomputeTrigger::InitialLoad,
        &inputs(&server, &settings, NEXT_SYSTEM),
        &ShipSpeedCache::new(),
        &BuiltinLocale::English,
    )
    .expect("model");

    let expected = flight_seconds(1, 2795, 12500, SpeedModifier::FULL, 2).expect("seconds");
    assert_eq!(model.distance.report.distance, 2795);
    assert_eq!(model.distance.highlight, DistanceHighlight::Normal);
    assert!(model.distance.title.starts_with("Distance:  2795"));
    assert_eq!(model.fleet_speed.kind, FleetSpeedType::War);
    assert_eq!(model.fleet_speed.multiplier, 2);
    assert_eq!(model.directive, TripDirective::OneWay);
    assert_eq!(model.speed_modifier.percent, 100);
    assert!(!model.wants_clock_ticks);

    assert_eq!(model.ships.len(), 3);
    for (line, slot) in model.ships.iter().zip(ShipSlot::ALL) {
        assert_eq!(line.slot, Some(slot));
        assert_eq!(line.ship, ShipClass::LightFighter);
        assert_eq!(line.label, "LF");
        assert_eq!(line.seconds, expected);
        assert_eq!(line.briefing, format_duration(expected));
        assert_eq!(line.emphasis, Emphasis::Primary);
        assert_eq!(line.warning, Some(ShipWarning::SpeedNeverRefreshed));
    }
}

#[test]
fn destination_position_is_always_sixteen() {
    let server = server();
    let settings = PlayerSettings::default();
    let same_system = GalaxyView {
        galaxy: 1,
        system: 100,
    };
    let model = recompute(
        RecomputeTrigger::GalaxyNavigated,
        &inputs(&server, &settings, same_system),
        &ShipSpeedCache::new(),
        &BuiltinLocale::English,
    )
    .expect("model");
    assert_eq!(model.distance.report.raw.p, 8);
    assert_eq!(model.distance.report.distance, 1000 + 5 * 8);
}

#[test]
fn ignored_systems_apply_only_when_server_allows() {
    let mut server = server();
    let settings = PlayerSettings::default();
    let far = GalaxyView {
        galaxy: 1,
        system: 110,
    };
    let mut overlay = inputs(&server, &settings, far);
    overlay.ignored = Some(IgnoredSystems {
        empty: 2,
        inactive: 1,
    });
    let cache = ShipSpeedCache::new();

    let model = recompute(RecomputeTrigger::InitialLoad, &overlay, &cache, &BuiltinLocale::English)
        .expect("model");
    assert_eq!(model.distance.report.ignored, None);
    assert_eq!(model.distance.report.distance, 2700 + 95 * 10);

    server.ignore_inactive_systems = true;
    let mut overlay = inputs(&server, &settings, far);
    overlay.ignored = Some(IgnoredSystems {
        empty: 2,
        inactive: 1,
    });
    let model = recompute(RecomputeTrigger::InitialLoad, &overlay, &cache, &BuiltinLocale::English)
        .expect("model");
    assert_eq!(model.distance.report.distance, 2700 + 95 * 7);
    assert_eq!(model.distance.highlight, DistanceHighlight::Reduced);
    assert_eq!(
        describe_difference(&model.distance.report, &BuiltinLocale::English),
        "7 (10) systems"
    );
    assert!(model.distance.title.contains("(empty/inactive):  3  (2 / 1)"));
}

#[test]
fn absolute_directives_need_the_clock() {
    let server = server();
    let mut settings = PlayerSettings::default();
    settings.briefing = 2;
    let cache = refreshed_cache("day-1");

    let overlay = inputs(&server, &settings, NEXT_SYSTEM);
    let model = recompute(RecomputeTrigger::ClockTick, &overlay, &cache, &BuiltinLocale::English)
        .expect("model");
    assert_eq!(model.directive, TripDirective::Arrival);
    assert!(model.wants_clock_ticks);
    let line = &model.ships[0];
    assert_eq!(line.warning, None);
    assert_eq!(line.briefing.len(), "HH:MM:SS".len());
    assert!(line.briefing.starts_with("10:"));

    let mut without_clock = overlay.clone();
    without_clock.now = None;
    let err = recompute(
        RecomputeTrigger::ClockTick,
        &without_clock,
        &cache,
        &BuiltinLocale::English,
    )
    .expect_err("clock required");
    assert!(matches!(err, OverlayError::Flight(FlightError::MissingClock)));
}

#[test]
fn round_trips_are_muted() {
    let server = server();
    let mut settings = PlayerSettings::default();
    settings.briefing = 1;
    settings.select_ship(ShipSlot::Second, ShipClass::Deathstar);
    let model = recompute(
        RecomputeTrigger::SettingChanged,
        &inputs(&server, &settings, NEXT_SYSTEM),
        &refreshed_cache("day-1"),
        &BuiltinLocale::English,
    )
    .expect("model");
    assert!(model.ships.iter().all(|line| line.emphasis == Emphasis::Muted));
    assert_eq!(model.ships[1].ship, ShipClass::Deathstar);
    assert!(model.ships[1].seconds > model.ships[0].seconds);
    assert!(model.ships[1].title.contains("Deathstar"));
}

#[test]
fn stale_speeds_are_flagged() {
    let server = server();
    let settings = PlayerSettings::default();
    let mut overlay = inputs(&server, &settings, NEXT_SYSTEM);
    overlay.day_marker = Some("day-2");
    let model = recompute(
        RecomputeTrigger::InitialLoad,
        &overlay,
        &refreshed_cache("day-1"),
        &BuiltinLocale::English,
    )
    .expect("model");
    assert_eq!(model.ships[0].warning, Some(ShipWarning::SpeedStale));
}

#[test]
fn fleet_table_lists_every_ship_class() {
    let server = server();
    let settings = PlayerSettings::default();
    let lines = fleet_table(
        &inputs(&server, &settings, NEXT_SYSTEM),
        &ShipSpeedCache::new(),
        &BuiltinLocale::German,
    )
    .expect("table");
    assert_eq!(lines.len(), ShipClass::ALL.len());
    assert!(lines.iter().all(|line| line.slot.is_none()));
    assert_eq!(lines[10].label, "KT");
}

#[test]
fn invalid_server_metadata_is_reported() {
    let mut server = server();
    server.fleet_speed.war = 0;
    let settings = PlayerSettings::default();
    let result = recompute(
        RecomputeTrigger::InitialLoad,
        &inputs(&server, &settings, NEXT_SYSTEM),
        &ShipSpeedCache::new(),
        &BuiltinLocale::English,
    );
    assert!(matches!(result, Err(OverlayError::Server(_))));
}

#[test]
fn locales_fall_back_to_english() {
    assert_eq!(BuiltinLocale::for_language("DE").text(TextKey::Distance), "Entfernung");
    assert_eq!(BuiltinLocale::for_language("it"), BuiltinLocale::Italian);
    assert_eq!(BuiltinLocale::for_language("si").text(TextKey::Distance), "Razdalja");
    assert_eq!(
        BuiltinLocale::for_language("br").ship_name(ShipClass::Deathstar, NameForm::Short),
        "EdM"
    );
    assert_eq!(
        BuiltinLocale::for_language("fr").text(TextKey::CoordsDifference),
        "Différence de position"
    );
    assert_eq!(BuiltinLocale::for_language("es").text(TextKey::Distance), "Distance");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yaml");
    fs::write(
        &path,
        concat!(
            "texts:\n  distance: Distanza\n",
            "ships:\n  lightFighter:\n    full: Caccia Leggero\n    short: CL\n",
        ),
    )
    .expect("write");
    let catalog = Catalog::load(&path).expect("catalog");
    assert_eq!(catalog.text(TextKey::Distance), "Distanza");
    assert_eq!(catalog.text(TextKey::Speed), "Speed");
    assert_eq!(catalog.ship_name(ShipClass::LightFighter, NameForm::Short), "CL");
    assert_eq!(catalog.ship_name(ShipClass::Cruiser, NameForm::Full), "Cruiser");
}

#[test]
fn signal_hub_drives_recompute() {
    let server = server();
    let mut settings = PlayerSettings::default();
    settings.briefing = 3;
    let cache = ShipSpeedCache::new();

    let triggers = Rc::new(RefCell::new(Vec::new()));
    let mut hub = SignalHub::new();
    let sink = Rc::clone(&triggers);
    hub.subscribe(move |trigger| sink.borrow_mut().push(trigger));

    let mut watcher = NavigationWatcher::new();
    for loading in [true, false] {
        if let Some(trigger) = watcher.observe(loading) {
            hub.emit(trigger);
        }
    }
    assert_eq!(*triggers.borrow(), vec![RecomputeTrigger::GalaxyNavigated]);

    let model = recompute(
        triggers.borrow()[0],
        &inputs(&server, &settings, NEXT_SYSTEM),
        &cache,
        &BuiltinLocale::English,
    )
    .expect("model");
    hub.set_clock_ticks(model.wants_clock_ticks);
    assert_eq!(hub.emit(RecomputeTrigger::ClockTick), 1);
    assert_eq!(triggers.borrow().len(), 2);
}
