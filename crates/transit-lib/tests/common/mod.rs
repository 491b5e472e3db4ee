//! Common test utilities and fixture helpers.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use transit_lib::{
    load_network, ConnectionRecord, DatasetPaths, LineRecord, NetworkGraph, NetworkRecords,
    StationRecord,
};

/// Path to the checked-in Boston subway dataset.
#[allow(dead_code)]
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/boston_subway")
}

/// Load the fixture dataset into a network.
#[allow(dead_code)]
pub fn boston() -> NetworkGraph {
    load_network(&DatasetPaths::for_dir(fixture_dir())).expect("fixture dataset loads")
}

/// Copy selected fixture files into a temporary directory.
#[allow(dead_code)]
pub fn copy_fixture(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for file in files {
        fs::copy(fixture_dir().join(file), dir.path().join(file)).expect("copy fixture file");
    }
    dir
}

/// Write a CSV file into `dir`.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture file");
}

/// Single line A-B-C-D with 2-minute hops in both directions.
#[allow(dead_code)]
pub fn abcd() -> NetworkGraph {
    let names = ["A", "B", "C", "D"];
    let mut connections = Vec::new();
    for pair in names.windows(2) {
        connections.push(ConnectionRecord::new(pair[0], pair[1], "red", 2.0));
        connections.push(ConnectionRecord::new(pair[1], pair[0], "red", 2.0));
    }
    NetworkGraph::build(NetworkRecords {
        stations: names.into_iter().map(StationRecord::new).collect(),
        lines: vec![LineRecord::simple("red", "Red Line", names)],
        connections,
        ..NetworkRecords::default()
    })
    .expect("valid A-B-C-D network")
}
