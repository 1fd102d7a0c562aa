use std::cell::Cell;
use std::collections::HashMap;
use std::fs;

use galaxy_flight_duration::ships::{
    CACHE_VERSION, FleetDataError, FleetDataSource, Freshness, JsonFleetTable, RefreshOutcome,
    ShipClass, ShipSpeedCache,
};

/// Fleet source that counts how often it is asked.
struct CountingSource {
    calls: Cell<usize>,
    speeds: HashMap<String, u32>,
}

impl CountingSource {
    fn boosted(percent: u32) -> Self {
        Self {
            calls: Cell::new(0),
            speeds: ShipClass::ALL
                .into_iter()
                .map(|ship| (ship.id().to_string(), ship.base_speed() / 100 * percent))
                .collect(),
        }
    }
}

impl FleetDataSource for CountingSource {
    fn ship_speeds(&self) -> Result<HashMap<String, u32>, FleetDataError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.speeds.clone())
    }
}

struct FailingSource;

impl FleetDataSource for FailingSource {
    fn ship_speeds(&self) -> Result<HashMap<String, u32>, FleetDataError> {
        Err(FleetDataError::Unavailable("fleet page not open".into()))
    }
}

#[test]
fn defaults_are_manufacturer_speeds() {
    let cache = ShipSpeedCache::new();
    assert_eq!(cache.get(ShipClass::SmallCargo).speed, 10_000);
    assert_eq!(cache.get(ShipClass::Deathstar).speed, 100);
    assert_eq!(cache.get_by_id("210").map(|record| record.speed), Some(100_000_000));
    assert_eq!(cache.get_by_id("999"), None);
    assert_eq!(cache.records().count(), 15);
    assert_eq!(cache.freshness("2026-01-01"), Freshness::NeverRefreshed);
}

#[test]
fn refresh_fetches_once_per_day_marker() {
    let source = CountingSource::boosted(150);
    let mut cache = ShipSpeedCache::new();

    assert!(matches!(cache.refresh_if_stale("day-1", &source), RefreshOutcome::Refreshed));
    assert!(matches!(
        cache.refresh_if_stale("day-1", &source),
        RefreshOutcome::AlreadyCurrent
    ));
    assert_eq!(source.calls.get(), 1);

    assert!(matches!(cache.refresh_if_stale("day-2", &source), RefreshOutcome::Refreshed));
    assert_eq!(source.calls.get(), 2);

    assert_eq!(cache.get(ShipClass::LightFighter).speed, 18_750);
    assert_eq!(cache.last_refreshed_marker(), Some("day-2"));
    assert_eq!(cache.freshness("day-2"), Freshness::Current);
    assert_eq!(
        cache.freshness("day-3"),
        Freshness::Stale {
            last: "day-2".to_string()
        }
    );
}

#[test]
fn failed_refresh_keeps_previous_state() {
    let mut cache = ShipSpeedCache::new();
    cache.refresh_if_stale("day-1", &CountingSource::boosted(200));
    let before = cache.clone();

    let outcome = cache.refresh_if_stale("day-2", &FailingSource);
    assert!(matches!(
        outcome,
        RefreshOutcome::Skipped(FleetDataError::Unavailable(_))
    ));
    assert_eq!(cache, before);
    assert_eq!(cache.last_refreshed_marker(), Some("day-1"));
}

#[test]
fn incomplete_fleet_table_changes_nothing() {
    let mut source = CountingSource::boosted(100);
    source.speeds.remove(ShipClass::Reaper.id());
    let mut cache = ShipSpeedCache::new();

    let outcome = cache.refresh_if_stale("day-1", &source);
    assert!(matches!(
        outcome,
        RefreshOutcome::Skipped(FleetDataError::MissingShip("218"))
    ));
    assert_eq!(cache, ShipSpeedCache::new());
}

#[test]
fn snapshot_survives_a_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("speeds.json");
    let mut cache = ShipSpeedCache::new();
    cache.refresh_if_stale("day-7", &CountingSource::boosted(300));

    cache.save_json(&path).expect("save");
    let restored = ShipSpeedCache::load_json(&path).expect("load");
    assert_eq!(restored, cache);
}

#[test]
fn other_schema_versions_reset_to_defaults() {
    let ships = r#"{"lightFighter": {"id": "204", "speed": 99}}"#;
    let stored = format!(
        r#"{{"version": {}, "lastUpdate": "day-1", "ships": {ships}}}"#,
        CACHE_VERSION + 1
    );
    let cache = ShipSpeedCache::from_json(&stored).expect("migrated");
    assert_eq!(cache, ShipSpeedCache::new());

    let current =
        format!(r#"{{"version": {CACHE_VERSION}, "lastUpdate": "day-1", "ships": {ships}}}"#);
    let cache = ShipSpeedCache::from_json(&current).expect("current");
    assert_eq!(cache.get(ShipClass::LightFighter).speed, 99);
    assert_eq!(cache.get(ShipClass::HeavyFighter).speed, 10_000);
    assert_eq!(cache.last_refreshed_marker(), Some("day-1"));
}

#[test]
fn malformed_snapshot_is_an_error() {
    assert!(ShipSpeedCache::from_json("{not json").is_err());
}

#[test]
fn missing_cache_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = ShipSpeedCache::load_json(dir.path().join("absent.json")).expect("defaults");
    assert_eq!(cache, ShipSpeedCache::new());
}

#[test]
fn json_fleet_table_feeds_the_cache() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fleet.json");
    let table: serde_json::Map<String, serde_json::Value> = ShipClass::ALL
        .into_iter()
        .map(|ship| {
            (
                ship.id().to_string(),
                serde_json::json!({ "speed": ship.base_speed() * 2, "name": ship.key() }),
            )
        })
        .collect();
    fs::write(&path, serde_json::to_string(&table).expect("json")).expect("write");

    let mut cache = ShipSpeedCache::new();
    let outcome = cache.refresh_if_stale("day-1", &JsonFleetTable::new(&path));
    assert!(matches!(outcome, RefreshOutcome::Refreshed));
    assert_eq!(cache.get(ShipClass::Recycler).speed, 12_000);
}
