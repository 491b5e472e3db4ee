mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use transit_cli::logging::{init_logging, LogFormat};
use transit_cli::output::OutputFormat;
use transit_lib::{Amenity, AmenityFilter, ConnectionFilter, RouteRequest};

use commands::amenities::handle_amenities_command;
use commands::analytics::{handle_analytics_command, AnalyticsCommand};
use commands::ask::handle_ask_command;
use commands::catalogue::{handle_lines_command, handle_stations_command};
use commands::connections::handle_connections_command;
use commands::line::handle_line_command;
use commands::route::handle_route_command;
use commands::station::handle_station_command;
use commands::Session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Transit network route planner and analytics")]
struct Cli {
    /// Dataset directory containing stations.csv, lines.csv and connections.csv.
    #[arg(long, global = true, env = "TRANSIT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two stations with at most one transfer.
    Route {
        /// Origin station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
    },
    /// Describe a line and its stations.
    Line {
        /// Line code or name, e.g. `red` or `Green Line`.
        name: String,
    },
    /// Show the lines serving a station.
    Station {
        name: String,
    },
    /// List directed connections, optionally filtered.
    Connections {
        /// Keep only these line colors (repeatable).
        #[arg(long = "line")]
        lines: Vec<String>,
        /// Minimum travel time in minutes.
        #[arg(long)]
        min: Option<f64>,
        /// Maximum travel time in minutes.
        #[arg(long)]
        max: Option<f64>,
        /// Substring matched against either station name.
        #[arg(long)]
        search: Option<String>,
        /// Write CSV to stdout instead of a table.
        #[arg(long)]
        csv: bool,
    },
    /// List every line with its station count.
    Lines,
    /// List active stations.
    Stations,
    /// Station amenities (parking, ramp, lift, underground) and coverage.
    Amenities {
        /// Keep stations served by any of these line colors (repeatable).
        #[arg(long = "line")]
        lines: Vec<String>,
        /// Keep stations offering this amenity (repeatable).
        #[arg(long = "require")]
        required: Vec<Amenity>,
        /// Minimum number of lines serving the station.
        #[arg(long)]
        min_lines: Option<usize>,
        /// Maximum number of lines serving the station.
        #[arg(long)]
        max_lines: Option<usize>,
    },
    /// Network analytics.
    Analytics {
        #[command(subcommand)]
        command: AnalyticsCommand,
    },
    /// Ask a free-text question, e.g. "how do I get from Harvard to Kenmore?".
    Ask {
        question: String,
    },
}

fn main() -> Result<()> {
    init_logging(LogFormat::from_env());
    let cli = Cli::parse();
    let session = Session::open(cli.data_dir.as_deref(), cli.format)?;

    match cli.command {
        Command::Route { from, to } => {
            handle_route_command(&session, &RouteRequest::new(from, to))
        }
        Command::Line { name } => handle_line_command(&session, &name),
        Command::Station { name } => handle_station_command(&session, &name),
        Command::Connections {
            lines,
            min,
            max,
            search,
            csv,
        } => {
            let filter = ConnectionFilter {
                lines,
                min_minutes: min,
                max_minutes: max,
                search,
            };
            handle_connections_command(&session, &filter, csv)
        }
        Command::Lines => handle_lines_command(&session),
        Command::Stations => handle_stations_command(&session),
        Command::Amenities {
            lines,
            required,
            min_lines,
            max_lines,
        } => {
            let filter = AmenityFilter {
                lines,
                required,
                min_lines,
                max_lines,
            };
            handle_amenities_command(&session, &filter)
        }
        Command::Analytics { command } => handle_analytics_command(&session, &command),
        Command::Ask { question } => handle_ask_command(&session, &question),
    }
}
