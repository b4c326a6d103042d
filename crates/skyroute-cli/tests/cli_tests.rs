//! End-to-end tests for dataset resolution and the browsing commands.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/routes.csv")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("skyroute-cli");
    cmd.env_remove("SKYROUTE_DATA_DIR").env("RUST_LOG", "error");
    cmd
}

/// Temporary data directory holding a copy of the fixture as `routes.csv`.
fn data_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("create temp dir");
    fs::copy(fixture_path(), temp_dir.path().join("routes.csv")).expect("copy fixture");
    temp_dir
}

#[test]
fn data_directory_resolves_routes_csv() {
    let temp = data_dir();
    cli()
        .arg("--data")
        .arg(temp.path())
        .arg("airports")
        .assert()
        .success()
        .stdout(predicate::str::contains("Countries (5):"));
}

#[test]
fn environment_variable_locates_dataset() {
    let temp = data_dir();
    cli()
        .env("SKYROUTE_DATA_DIR", temp.path())
        .args(["route", "--from", "SIN", "--to", "NRT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost: $470.00"));
}

#[test]
fn missing_dataset_fails_with_path() {
    let temp = TempDir::new().expect("create temp dir");
    cli()
        .arg("--data")
        .arg(temp.path())
        .args(["route", "--from", "SIN", "--to", "NRT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("route dataset unavailable"))
        .stderr(predicate::str::contains("routes.csv"));
}

#[test]
fn invalid_layout_is_reported() {
    let temp = data_dir();
    let layout = temp.path().join("layout.json");
    fs::write(&layout, "{ not json").expect("write layout");

    cli()
        .arg("--data")
        .arg(temp.path())
        .arg("--layout")
        .arg(&layout)
        .arg("airports")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load column layout"));
}

#[test]
fn airports_lists_sorted_countries() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .arg("airports")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Countries (5):\n  Hong Kong\n  Japan\n  Malaysia\n  Singapore\n  Thailand\n",
        ));
}

#[test]
fn airports_by_country_lists_cities() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .args(["airports", "--country", "Japan"])
        .assert()
        .success()
        .stdout("Cities in Japan (1):\n  Tokyo\n");
}

#[test]
fn airports_by_city_as_json() {
    let output = cli()
        .arg("--data")
        .arg(fixture_path())
        .args(["--format", "json", "airports", "--city", "Tokyo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let names: Vec<String> = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(
        names,
        vec!["Tokyo Haneda Airport", "Narita International Airport"]
    );
}

#[test]
fn airports_filters_conflict() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .args(["airports", "--country", "Japan", "--city", "Tokyo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_country_has_no_matches() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .args(["airports", "--country", "Atlantis"])
        .assert()
        .success()
        .stdout("No matches found.\n");
}

#[test]
fn airlines_between_airports() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .args(["airlines", "--from", "SIN", "--to", "KUL"])
        .assert()
        .success()
        .stdout("Airlines from SIN to KUL (2):\n  Malaysia Airlines\n  AirAsia\n");
}

#[test]
fn airlines_accept_airport_names() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .args([
            "airlines",
            "--from",
            "Suvarnabhumi Airport",
            "--to",
            "Hong Kong International Airport",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cathay Pacific"));
}

#[test]
fn airlines_without_direct_flight() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .args(["airlines", "--from", "KUL", "--to", "SIN"])
        .assert()
        .success()
        .stdout("No direct flights from KUL to SIN.\n");
}

#[test]
fn airlines_unknown_airport() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .args(["airlines", "--from", "QQQ", "--to", "SIN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown airport 'QQQ'"));
}
