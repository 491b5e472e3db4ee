mod common;

use std::collections::BTreeMap;

use transit_lib::dataset::{CONNECTIONS_FILE, LINES_FILE, STATIONS_FILE};
use transit_lib::{
    load_network, station_profiles, Amenity, AmenityFilter, AmenityReport, DatasetPaths,
};

#[test]
fn fixture_profiles_join_lines_and_amenities() {
    let network = common::boston();
    let profiles = station_profiles(&network);
    assert_eq!(profiles.len(), 43);

    let park = profiles
        .iter()
        .find(|p| p.station == "Park Street")
        .expect("Park Street profile");
    assert_eq!(park.lines, vec!["green", "red"]);
    assert_eq!(park.line_count, 2);
    assert!(park.amenities.underground);
    assert!(!park.amenities.parking);

    assert_eq!(profiles[0].station, "Airport");
    assert_eq!(profiles[1].station, "Alewife");
}

#[test]
fn fixture_report_matches_amenity_table() {
    let network = common::boston();
    let report = AmenityReport::from_profiles(&station_profiles(&network));

    assert_eq!(report.total_stations, 43);
    assert_eq!(report.multi_line_stations, 6);
    assert_eq!(
        (report.parking, report.ramp, report.lift, report.underground),
        (8, 33, 28, 26)
    );
    assert_eq!(report.max_lines, 2);
    assert!((report.average_lines - 49.0 / 43.0).abs() < 1e-9);
    assert!((report.parking_coverage - 800.0 / 43.0).abs() < 1e-9);
    assert_eq!(report.fully_accessible.len(), 28);
    assert_eq!(report.line_distribution, BTreeMap::from([(1, 37), (2, 6)]));
    assert_eq!(report.parking_by_line.get("orange"), Some(&4));
    assert_eq!(report.parking_by_line.get("blue"), Some(&2));

    let top: Vec<_> = report
        .top_connected
        .iter()
        .map(|p| p.station.as_str())
        .collect();
    assert_eq!(
        top,
        vec![
            "Downtown Crossing",
            "Government Center",
            "Haymarket",
            "North Station",
            "Park Street",
            "State",
            "Airport",
            "Alewife",
            "Aquarium",
            "Arlington",
        ]
    );
}

#[test]
fn fixture_filter_by_line_and_amenity() {
    let network = common::boston();
    let profiles = station_profiles(&network);

    let green_lifts = AmenityFilter {
        lines: vec!["green".into()],
        required: vec![Amenity::Lift],
        ..AmenityFilter::default()
    };
    assert_eq!(green_lifts.apply(&profiles).len(), 8);

    let parking = AmenityFilter {
        required: vec![Amenity::Parking],
        ..AmenityFilter::default()
    };
    let names: Vec<_> = parking
        .apply(&profiles)
        .into_iter()
        .map(|p| p.station)
        .collect();
    assert_eq!(
        names,
        vec![
            "Alewife",
            "Forest Hills",
            "Malden Center",
            "Oak Grove",
            "Revere Beach",
            "Riverside",
            "Sullivan Square",
            "Wonderland",
        ]
    );
}

#[test]
fn dataset_without_amenities_has_none() {
    let dir = common::copy_fixture(&[STATIONS_FILE, LINES_FILE, CONNECTIONS_FILE]);
    let network = load_network(&DatasetPaths::for_dir(dir.path())).expect("network loads");
    let report = AmenityReport::from_profiles(&station_profiles(&network));
    assert_eq!(report.total_stations, 43);
    assert_eq!(report.parking, 0);
    assert!(report.fully_accessible.is_empty());
}
