//! Plain-text renderings of analytics results and catalogue listings.

use std::fmt::{self, Write};

use crate::analytics::{
    CentralityRow, Diameter, LineStats, NetworkInsights, NetworkSummary, StationDegree,
};
use crate::amenities::{AmenityReport, StationProfile};
use crate::connections::{ConnectionStats, ConnectionView};
use crate::network::{LineListing, Station};

impl fmt::Display for Diameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diameter::Minutes(minutes) => write!(f, "{minutes:.1} min"),
            Diameter::Disconnected => f.write_str("disconnected"),
        }
    }
}

pub fn render_summary(summary: &NetworkSummary) -> String {
    let mut buffer = String::new();
    let rows: [(&str, String); 9] = [
        ("Stations", summary.total_stations.to_string()),
        ("Connections", summary.total_connections.to_string()),
        ("Average degree", format!("{:.2}", summary.average_degree)),
        ("Density", format!("{:.4}", summary.density)),
        ("Diameter", summary.diameter.to_string()),
        ("Average clustering", format!("{:.4}", summary.average_clustering)),
        (
            "Strongly connected components",
            summary.strongly_connected_components.to_string(),
        ),
        (
            "Average connection time",
            format!("{:.2} min", summary.average_connection_minutes),
        ),
        (
            "Average shortest path",
            format!("{:.2} min", summary.average_shortest_path_minutes),
        ),
    ];
    for (label, value) in rows {
        let _ = writeln!(buffer, "{label:<30} {value}");
    }
    buffer
}

pub fn render_insights(insights: &NetworkInsights) -> String {
    let mut buffer = String::new();
    if let Some(line) = &insights.most_efficient_line {
        let _ = writeln!(buffer, "Most efficient line: {line}");
    }
    if let Some(station) = &insights.busiest_station {
        let _ = writeln!(
            buffer,
            "Busiest station: {station} ({} connections)",
            insights.busiest_station_degree
        );
    }
    if let Some(longest) = &insights.longest_connection {
        let _ = writeln!(
            buffer,
            "Longest connection: {} -> {} on {} ({:.1} min)",
            longest.from, longest.to, longest.color, longest.minutes
        );
    }
    let _ = writeln!(
        buffer,
        "Average travel time: {:.2} min",
        insights.average_travel_time
    );
    buffer
}

pub fn render_line_stats(stats: &[LineStats]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{:<10} {:>11} {:>8} {:>6} {:>6} {:>8} {:>8} {:>10}",
        "Line", "Connections", "Mean", "Min", "Max", "Total", "Stations", "Efficiency"
    );
    for line in stats {
        let _ = writeln!(
            buffer,
            "{:<10} {:>11} {:>8.2} {:>6.1} {:>6.1} {:>8.1} {:>8} {:>10.3}",
            line.color,
            line.connections,
            line.mean_minutes,
            line.min_minutes,
            line.max_minutes,
            line.total_minutes,
            line.stations,
            line.efficiency
        );
    }
    buffer
}

pub fn render_centrality(rows: &[CentralityRow]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{:<28} {:>6} {:>8} {:>11} {:>9}",
        "Station", "Degree", "Degree C", "Betweenness", "Closeness"
    );
    for row in rows {
        let _ = writeln!(
            buffer,
            "{:<28} {:>6} {:>8.4} {:>11.4} {:>9.4}",
            row.station, row.degree, row.degree_centrality, row.betweenness, row.closeness
        );
    }
    buffer
}

pub fn render_degrees(degrees: &[StationDegree]) -> String {
    let mut buffer = String::new();
    for (rank, station) in degrees.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "{:>3}. {} ({} in, {} out, {} total)",
            rank + 1,
            station.station,
            station.in_degree,
            station.out_degree,
            station.degree
        );
    }
    buffer
}

pub fn render_connections(views: &[ConnectionView], stats: &ConnectionStats) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{} connections on {} lines, average {:.2} min",
        stats.connections, stats.active_lines, stats.average_minutes
    );
    for view in views {
        let _ = writeln!(
            buffer,
            "{} -> {} [{}] {:.1} min",
            view.from, view.to, view.color, view.minutes
        );
    }
    buffer
}

pub fn render_line_catalogue(lines: &[LineListing]) -> String {
    let mut buffer = String::new();
    for line in lines {
        let _ = write!(
            buffer,
            "{:<12} {:<14} {:>3} stations",
            line.code, line.name, line.station_count
        );
        if !line.branches.is_empty() {
            let _ = write!(buffer, " (branches {})", line.branches.join(", "));
        }
        buffer.push('\n');
    }
    buffer
}

pub fn render_stations(stations: &[&Station]) -> String {
    let mut buffer = String::new();
    for station in stations {
        match &station.stop_code {
            Some(code) => {
                let _ = writeln!(buffer, "{:<28} {code}", station.name);
            }
            None => {
                let _ = writeln!(buffer, "{}", station.name);
            }
        }
    }
    buffer
}

fn flag(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

pub fn render_station_profiles(profiles: &[StationProfile]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{:<28} {:<16} {:>7} {:>4} {:>4} {:>11}",
        "Station", "Lines", "Parking", "Ramp", "Lift", "Underground"
    );
    for profile in profiles {
        let _ = writeln!(
            buffer,
            "{:<28} {:<16} {:>7} {:>4} {:>4} {:>11}",
            profile.station,
            profile.lines.join(", "),
            flag(profile.amenities.parking),
            flag(profile.amenities.ramp),
            flag(profile.amenities.lift),
            flag(profile.amenities.underground)
        );
    }
    buffer
}

pub fn render_amenity_report(report: &AmenityReport) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{} stations, {} served by more than one line",
        report.total_stations, report.multi_line_stations
    );
    let _ = writeln!(
        buffer,
        "Parking: {} ({:.1}%) | Ramp: {} ({:.1}%) | Lift: {} ({:.1}%) | Underground: {}",
        report.parking,
        report.parking_coverage,
        report.ramp,
        report.ramp_coverage,
        report.lift,
        report.lift_coverage,
        report.underground
    );
    let _ = writeln!(
        buffer,
        "Lines per station: average {:.2}, max {}",
        report.average_lines, report.max_lines
    );
    let _ = writeln!(
        buffer,
        "Fully accessible (ramp and lift): {}",
        report.fully_accessible.len()
    );
    if !report.parking_by_line.is_empty() {
        let by_line: Vec<String> = report
            .parking_by_line
            .iter()
            .map(|(line, count)| format!("{line} {count}"))
            .collect();
        let _ = writeln!(
            buffer,
            "Parking by line: {} (average {:.2} lines per parking station)",
            by_line.join(", "),
            report.parking_average_lines
        );
    }
    if !report.top_connected.is_empty() {
        let _ = writeln!(buffer, "Most connected:");
        for (rank, profile) in report.top_connected.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{:>3}. {} ({} lines)",
                rank + 1,
                profile.station,
                profile.line_count
            );
        }
    }
    buffer
}
