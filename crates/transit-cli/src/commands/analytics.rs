use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use transit_cli::output::print_json;
use transit_lib::output::{
    render_centrality, render_degrees, render_insights, render_line_stats, render_summary,
};
use transit_lib::{AnalyticsEngine, CentralityRow, Diameter, NetworkInsights, NetworkSummary};

use super::{handle_lib_error, Session};

#[derive(Subcommand, Debug)]
pub enum AnalyticsCommand {
    /// Network-wide metrics and headline insights.
    Summary,
    /// Per-line connection statistics.
    Lines,
    /// Degree, betweenness and closeness centrality per station.
    Centrality {
        /// Only show the N stations with the most connections.
        #[arg(long)]
        top: Option<usize>,
    },
    /// In, out and total degree per station, busiest first.
    Degrees {
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Shortest travel times, network-wide or from one station.
    Paths {
        /// Origin station; omit for network-wide figures.
        #[arg(long = "from")]
        from: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    summary: NetworkSummary,
    insights: NetworkInsights,
}

#[derive(Debug, Serialize)]
struct NetworkPaths {
    reachable_pairs: usize,
    average_minutes: f64,
    diameter: Diameter,
}

#[derive(Debug, Serialize)]
struct Destination {
    station: String,
    minutes: f64,
}

#[derive(Debug, Serialize)]
struct StationPaths {
    origin: String,
    average_minutes: Option<f64>,
    destinations: Vec<Destination>,
}

pub fn handle_analytics_command(session: &Session, command: &AnalyticsCommand) -> Result<()> {
    let engine = AnalyticsEngine::new(&session.network);
    let json = session.format.is_json();

    match command {
        AnalyticsCommand::Summary => {
            let report = SummaryReport {
                summary: engine.summary(),
                insights: engine.insights(),
            };
            if json {
                return print_json(&report);
            }
            print!("{}", render_summary(&report.summary));
            println!();
            print!("{}", render_insights(&report.insights));
        }
        AnalyticsCommand::Lines => {
            let stats = engine.line_stats();
            if json {
                return print_json(&stats);
            }
            print!("{}", render_line_stats(&stats));
            if let Some(best) = engine.most_efficient_line() {
                println!("\nMost efficient line: {}", session.palette.paint_line(&best.color));
            }
        }
        AnalyticsCommand::Centrality { top } => {
            let rows = centrality_rows(&engine, *top);
            if json {
                return print_json(&rows);
            }
            print!("{}", render_centrality(&rows));
        }
        AnalyticsCommand::Degrees { top } => {
            let degrees = engine.top_connected(*top);
            if json {
                return print_json(&degrees);
            }
            print!("{}", render_degrees(&degrees));
        }
        AnalyticsCommand::Paths { from: None } => {
            let paths = engine.shortest_paths();
            let report = NetworkPaths {
                reachable_pairs: paths.reachable_pairs(),
                average_minutes: paths.average().unwrap_or(0.0),
                diameter: engine.summary().diameter,
            };
            if json {
                return print_json(&report);
            }
            println!("Reachable pairs: {}", report.reachable_pairs);
            println!("Average shortest path: {:.2} min", report.average_minutes);
            println!("Diameter: {}", report.diameter);
        }
        AnalyticsCommand::Paths { from: Some(origin) } => {
            let report = station_paths(&engine, origin)?;
            if json {
                return print_json(&report);
            }
            match report.average_minutes {
                Some(average) => println!(
                    "Average travel time from {}: {:.2} min",
                    report.origin, average
                ),
                None => println!("{} reaches no other station.", report.origin),
            }
            for destination in &report.destinations {
                println!("{:>6.1} min  {}", destination.minutes, destination.station);
            }
        }
    }
    Ok(())
}

fn centrality_rows(engine: &AnalyticsEngine<'_>, top: Option<usize>) -> Vec<CentralityRow> {
    let table = engine.centrality_table();
    let Some(top) = top else {
        return table;
    };
    engine
        .top_connected(top)
        .into_iter()
        .filter_map(|degree| table.iter().find(|row| row.station == degree.station).cloned())
        .collect()
}

fn station_paths(engine: &AnalyticsEngine<'_>, origin: &str) -> Result<StationPaths> {
    let network = engine.network();
    let average_minutes = engine
        .average_travel_time_from(origin)
        .map_err(handle_lib_error)?;
    let source = network
        .station_by_name(origin)
        .ok_or_else(|| anyhow::anyhow!("station '{origin}' disappeared after lookup"))?;

    let paths = engine.shortest_paths();
    let mut destinations: Vec<Destination> = network
        .stations()
        .iter()
        .filter(|station| station.id != source.id)
        .filter_map(|station| {
            paths.distance(source.id, station.id).map(|minutes| Destination {
                station: station.name.clone(),
                minutes,
            })
        })
        .collect();
    destinations.sort_by(|a, b| {
        a.minutes
            .total_cmp(&b.minutes)
            .then_with(|| a.station.cmp(&b.station))
    });

    Ok(StationPaths {
        origin: source.name.clone(),
        average_minutes,
        destinations,
    })
}
