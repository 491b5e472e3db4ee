//! Validation performed by `NetworkGraph::build` on hand-built records.

use transit_lib::{
    ConnectionRecord, Error, GraphLoadError, LineRecord, NetworkGraph, NetworkRecords,
    StationRecord, TransferTable,
};

fn records() -> NetworkRecords {
    NetworkRecords {
        stations: ["Alewife", "Harvard", "Park Street", "Copley"]
            .into_iter()
            .map(StationRecord::new)
            .collect(),
        lines: vec![
            LineRecord::simple("red", "Red Line", ["Alewife", "Harvard", "Park Street"]),
            LineRecord::branch("green", "Green Line", "B", ["Park Street", "Copley"]),
        ],
        connections: vec![
            ConnectionRecord::new("Alewife", "Harvard", "red", 4.0),
            ConnectionRecord::new("Park Street", "Copley", "green", 2.0),
        ],
        ..NetworkRecords::default()
    }
}

fn build_error(records: NetworkRecords) -> GraphLoadError {
    match NetworkGraph::build(records) {
        Err(Error::GraphLoad(err)) => err,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("records should be rejected"),
    }
}

#[test]
fn valid_records_build() {
    let network = NetworkGraph::build(records()).expect("valid records");
    assert_eq!(network.stations().len(), 4);
    assert_eq!(network.lines().len(), 2);
}

#[test]
fn negative_travel_time_is_rejected() {
    let mut records = records();
    records
        .connections
        .push(ConnectionRecord::new("Harvard", "Park Street", "red", -1.5));
    assert_eq!(
        build_error(records),
        GraphLoadError::InvalidTravelTime {
            from: "Harvard".into(),
            to: "Park Street".into(),
            minutes: "-1.5".into(),
        }
    );
}

#[test]
fn non_finite_travel_time_is_rejected() {
    for minutes in [f64::NAN, f64::INFINITY] {
        let mut records = records();
        records
            .connections
            .push(ConnectionRecord::new("Harvard", "Park Street", "red", minutes));
        assert!(matches!(
            build_error(records),
            GraphLoadError::InvalidTravelTime { .. }
        ));
    }
}

#[test]
fn zero_minute_connection_is_allowed() {
    let mut records = records();
    records
        .connections
        .push(ConnectionRecord::new("Harvard", "Park Street", "red", 0.0));
    assert!(NetworkGraph::build(records).is_ok());
}

#[test]
fn transfer_station_must_be_on_a_line() {
    let mut records = records();
    records.stations.push(StationRecord::new("Bowdoin"));
    records.transfers = TransferTable::new().with("Bowdoin", ["red"]);
    assert_eq!(
        build_error(records),
        GraphLoadError::TransferStationNotOnLine {
            station: "Bowdoin".into()
        }
    );
}

#[test]
fn inactive_transfer_station_is_not_on_a_line() {
    let mut records = records();
    records.stations[1].active = false;
    records.transfers = TransferTable::new().with("Harvard", ["red"]);
    assert!(matches!(
        build_error(records),
        GraphLoadError::TransferStationNotOnLine { station } if station == "Harvard"
    ));
}

#[test]
fn line_station_must_be_registered() {
    let mut records = records();
    records
        .lines
        .push(LineRecord::simple("orange", "Orange Line", ["Park Street", "Haymarket"]));
    assert_eq!(
        build_error(records),
        GraphLoadError::UnknownLineStation {
            line: "orange".into(),
            station: "Haymarket".into(),
        }
    );
}

#[test]
fn duplicate_station_name_is_rejected() {
    let mut records = records();
    records.stations.push(StationRecord::new(" harvard "));
    assert_eq!(
        build_error(records),
        GraphLoadError::DuplicateStation {
            name: "harvard".into()
        }
    );
}

#[test]
fn duplicate_simple_line_is_rejected() {
    let mut records = records();
    records
        .lines
        .push(LineRecord::simple("RED", "Red Line", ["Harvard"]));
    assert_eq!(
        build_error(records),
        GraphLoadError::DuplicateLine { line: "red".into() }
    );
}

#[test]
fn duplicate_branch_is_rejected() {
    let mut records = records();
    records
        .lines
        .push(LineRecord::branch("green", "Green Line", "b", ["Copley"]));
    assert_eq!(
        build_error(records),
        GraphLoadError::DuplicateBranch {
            line: "green".into(),
            branch: "b".into(),
        }
    );
}

#[test]
fn blank_connection_color_is_rejected() {
    let mut records = records();
    records
        .connections
        .push(ConnectionRecord::new("Harvard", "Alewife", "  ", 4.0));
    assert_eq!(
        build_error(records),
        GraphLoadError::EmptyConnectionColor {
            from: "Harvard".into(),
            to: "Alewife".into(),
        }
    );
}
