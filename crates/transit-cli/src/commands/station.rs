use anyhow::Result;
use serde::Serialize;

use transit_cli::output::print_json;
use transit_lib::{AnalyticsEngine, CentralityRow};

use super::{handle_lib_error, Session};

#[derive(Debug, Serialize)]
struct StationReport<'a> {
    station: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_code: Option<&'a str>,
    lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    centrality: Option<CentralityRow>,
}

/// List the lines serving a station together with its centrality.
pub fn handle_station_command(session: &Session, name: &str) -> Result<()> {
    let network = &session.network;
    let lines = network.station_lines(name).map_err(handle_lib_error)?;
    let station = network
        .station_by_name(name)
        .ok_or_else(|| anyhow::anyhow!("station '{name}' disappeared after lookup"))?;
    let centrality = AnalyticsEngine::new(network)
        .centrality_for(name)
        .map_err(handle_lib_error)?;

    let report = StationReport {
        station: &station.name,
        stop_code: station.stop_code.as_deref(),
        lines,
        centrality,
    };

    if session.format.is_json() {
        return print_json(&report);
    }

    let palette = &session.palette;
    let painted: Vec<String> = report
        .lines
        .iter()
        .map(|label| palette.paint_line(label))
        .collect();
    println!(
        "{}{}{}: {}",
        palette.white_bold,
        report.station,
        palette.reset,
        painted.join(", ")
    );
    if let Some(row) = &report.centrality {
        println!(
            "Degree {} | degree centrality {:.4} | betweenness {:.4} | closeness {:.4}",
            row.degree, row.degree_centrality, row.betweenness, row.closeness
        );
    }
    Ok(())
}
