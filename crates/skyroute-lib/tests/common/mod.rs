#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use skyroute_lib::{ColumnLayout, CsvFileSource, FlightNetwork};
use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("routes.csv")
}

pub fn fixture_source() -> CsvFileSource {
    CsvFileSource::new(fixture_path())
}

pub fn fixture_network() -> FlightNetwork {
    FlightNetwork::new(fixture_source(), ColumnLayout::default())
}

/// Write `contents` to a CSV file inside a fresh temporary directory.
///
/// The directory is returned so it outlives the test's use of the file.
pub fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("routes.csv");
    fs::write(&path, contents).expect("write csv");
    (dir, path)
}

pub fn steps(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}
