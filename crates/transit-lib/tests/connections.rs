mod common;

use transit_lib::connections::connection_colors;
use transit_lib::{ConnectionFilter, ConnectionStats};

#[test]
fn colors_are_sorted_and_distinct() {
    let network = common::boston();
    assert_eq!(
        connection_colors(&network),
        vec!["blue", "green", "orange", "red"]
    );
}

#[test]
fn line_filter_matches_case_insensitively() {
    let network = common::boston();
    let filter = ConnectionFilter {
        lines: vec!["Blue".into()],
        ..ConnectionFilter::default()
    };
    let views = filter.apply(&network);
    assert_eq!(views.len(), 14);
    assert!(views.iter().all(|view| view.color == "blue"));
}

#[test]
fn minute_window_is_inclusive() {
    let network = common::boston();
    let filter = ConnectionFilter {
        min_minutes: Some(2.0),
        max_minutes: Some(2.0),
        ..ConnectionFilter::default()
    };
    let views = filter.apply(&network);
    assert!(!views.is_empty());
    assert!(views.iter().all(|view| view.minutes == 2.0));
}

#[test]
fn search_matches_either_endpoint() {
    let network = common::boston();
    let filter = ConnectionFilter {
        search: Some("ALEWIFE".into()),
        ..ConnectionFilter::default()
    };
    let views = filter.apply(&network);
    assert_eq!(views.len(), 2);
    assert!(views
        .iter()
        .all(|view| view.from == "Alewife" || view.to == "Alewife"));

    let stats = ConnectionStats::from_views(&views);
    assert_eq!(stats.connections, 2);
    assert_eq!(stats.active_lines, 1);
    assert_eq!(stats.average_minutes, 2.0);
}

#[test]
fn filter_with_no_matches_has_zero_stats() {
    let network = common::boston();
    let filter = ConnectionFilter {
        lines: vec!["silver".into()],
        ..ConnectionFilter::default()
    };
    let stats = ConnectionStats::from_views(&filter.apply(&network));
    assert_eq!(stats.connections, 0);
    assert_eq!(stats.average_minutes, 0.0);
}
