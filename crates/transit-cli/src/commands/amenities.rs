use anyhow::Result;
use serde::Serialize;

use transit_cli::output::print_json;
use transit_lib::output::{render_amenity_report, render_station_profiles};
use transit_lib::{station_profiles, AmenityFilter, AmenityReport, StationProfile};

use super::Session;

#[derive(Debug, Serialize)]
struct AmenitiesOutput<'a> {
    report: &'a AmenityReport,
    stations: &'a [StationProfile],
}

/// Print the stations matching `filter` and their amenity coverage.
pub fn handle_amenities_command(session: &Session, filter: &AmenityFilter) -> Result<()> {
    if let (Some(min), Some(max)) = (filter.min_lines, filter.max_lines) {
        if min > max {
            anyhow::bail!("--min-lines ({min}) must not exceed --max-lines ({max})");
        }
    }

    let stations = filter.apply(&station_profiles(&session.network));
    let report = AmenityReport::from_profiles(&stations);
    if session.format.is_json() {
        return print_json(&AmenitiesOutput {
            report: &report,
            stations: &stations,
        });
    }
    print!("{}", render_amenity_report(&report));
    println!();
    print!("{}", render_station_profiles(&stations));
    Ok(())
}
