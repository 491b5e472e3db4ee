use anyhow::Result;
use serde::Serialize;

use transit_cli::output::{print_json, write_connections_csv};
use transit_lib::output::render_connections;
use transit_lib::{ConnectionFilter, ConnectionStats, ConnectionView};

use super::Session;

#[derive(Debug, Serialize)]
struct ConnectionsReport<'a> {
    stats: &'a ConnectionStats,
    connections: &'a [ConnectionView],
}

/// Print the connections matching `filter`, or export them as CSV.
pub fn handle_connections_command(
    session: &Session,
    filter: &ConnectionFilter,
    csv: bool,
) -> Result<()> {
    if let (Some(min), Some(max)) = (filter.min_minutes, filter.max_minutes) {
        if min > max {
            anyhow::bail!("--min ({min}) must not exceed --max ({max})");
        }
    }

    let views = filter.apply(&session.network);
    if csv {
        return write_connections_csv(std::io::stdout().lock(), &views);
    }

    let stats = ConnectionStats::from_views(&views);
    if session.format.is_json() {
        return print_json(&ConnectionsReport {
            stats: &stats,
            connections: &views,
        });
    }
    print!("{}", render_connections(&views, &stats));
    Ok(())
}
