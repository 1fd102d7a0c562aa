use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_server(dir: &Path) -> String {
    let path = dir.join("server.toml");
    fs::write(
        &path,
        concat!(
            "galaxy_count = 9\ndonut_galaxy = 1\ndonut_system = 1\n\n",
            "[fleet_speed]\npeaceful = 1\nwar = 1\nholding = 1\n",
        ),
    )
    .expect("server");
    path.to_str().expect("utf8 path").to_string()
}

fn write_fleet(dir: &Path, factor: u32) -> String {
    let ids = [
        ("204", 12_500),
        ("205", 10_000),
        ("206", 15_000),
        ("207", 10_000),
        ("215", 10_000),
        ("211", 5_000),
        ("213", 5_000),
        ("214", 100),
        ("218", 7_000),
        ("219", 12_000),
        ("202", 10_000),
        ("203", 7_500),
        ("208", 2_500),
        ("209", 6_000),
        ("210", 100_000_000),
    ];
    let table: serde_json::Map<String, serde_json::Value> = ids
        .into_iter()
        .map(|(id, speed)| (id.to_string(), serde_json::json!({ "speed": speed * factor })))
        .collect();
    let path = dir.join("fleet.json");
    fs::write(&path, serde_json::to_string(&table).expect("json")).expect("fleet");
    path.to_str().expect("utf8 path").to_string()
}

#[test]
fn flight_prints_durations_for_selected_ships() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = write_server(dir.path());

    Command::cargo_bin("flight")
        .expect("flight bin")
        .args([
            "--server",
            server.as_str(),
            "--from",
            "1:100:16",
            "--to",
            "1:101",
            "--ship",
            "smallCargo",
            "--day",
            "2026-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 2795  (0:1:0)"))
        .stdout(predicate::str::contains("SC"))
        .stdout(predicate::str::contains("WARNING: Ship's speed is not updated!"));
}

#[test]
fn flight_arrival_uses_given_clock() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = write_server(dir.path());

    // 5 distance units at 12500 take 231 s
    Command::cargo_bin("flight")
        .expect("flight bin")
        .args([
            "--server",
            server.as_str(),
            "--from",
            "1:100:16",
            "--to",
            "1:100",
            "--directive",
            "arrival",
            "--now",
            "23:59:00",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ship,id,speed,seconds,briefing\n"))
        .stdout(predicate::str::contains("lightFighter,204,12500,231,00:02:51"));
}

#[test]
fn flight_json_reports_render_model() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = write_server(dir.path());

    let output = Command::cargo_bin("flight")
        .expect("flight bin")
        .args([
            "--server",
            server.as_str(),
            "--from",
            "1:1:1",
            "--to",
            "8:1",
            "--lang",
            "de",
            "--format",
            "json",
            "--now",
            "12:00:00",
        ])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["distance"]["report"]["raw"]["g"], 2);
    assert_eq!(value["distance"]["report"]["distance"], 40000);
    assert_eq!(value["ships"][0]["label"], "L. Jäger");
}

#[test]
fn flight_writes_csv_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = write_server(dir.path());
    let target = dir.path().join("out").join("table.csv");

    Command::cargo_bin("flight")
        .expect("flight bin")
        .args([
            "--server",
            server.as_str(),
            "--from",
            "1:100:16",
            "--to",
            "1:100",
            "--format",
            "csv",
            "--all-ships",
            "--output",
            target.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&target).expect("csv file");
    assert!(written.starts_with("ship,id,speed,seconds,briefing\n"));
    assert!(written.contains("lightFighter,204,12500,231,0:03:51h"));
    assert_eq!(written.lines().count(), 16);
}

#[test]
fn flight_rejects_bad_coordinates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let server = write_server(dir.path());

    Command::cargo_bin("flight")
        .expect("flight bin")
        .args(["--server", server.as_str(), "--from", "1:0:3", "--to", "1:1"])
        .assert()
        .failure();
}

#[test]
fn refresh_updates_cache_once_per_day() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fleet = write_fleet(dir.path(), 2);
    let cache = dir.path().join("speeds.json");
    let cache_arg = cache.to_str().expect("utf8 path");

    Command::cargo_bin("refresh_speeds")
        .expect("refresh bin")
        .args(["--cache", cache_arg, "--fleet", fleet.as_str(), "--day", "2026-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refreshed ship speeds for 2026-03-01"));

    Command::cargo_bin("refresh_speeds")
        .expect("refresh bin")
        .args(["--cache", cache_arg, "--fleet", fleet.as_str(), "--day", "2026-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already current"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&cache).expect("cache")).expect("json");
    assert_eq!(stored["lastUpdate"], "2026-03-01");
    assert_eq!(stored["ships"]["lightFighter"]["speed"], 25_000);

    let server = write_server(dir.path());
    Command::cargo_bin("flight")
        .expect("flight bin")
        .args(["--server", server.as_str(), "--cache", cache_arg, "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved speed values (2026-03-01):"))
        .stdout(predicate::str::contains("Light Fighter: 25000"));
}

#[test]
fn refresh_skips_missing_fleet_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = dir.path().join("speeds.json");
    let missing = dir.path().join("absent.json");

    Command::cargo_bin("refresh_speeds")
        .expect("refresh bin")
        .args([
            "--cache",
            cache.to_str().expect("utf8 path"),
            "--fleet",
            missing.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("not refreshed"));
    assert!(!cache.exists());
}
