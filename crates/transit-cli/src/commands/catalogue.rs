use anyhow::Result;

use transit_cli::output::print_json;
use transit_lib::output::{render_line_catalogue, render_stations};

use super::Session;

/// List every line with its station count.
pub fn handle_lines_command(session: &Session) -> Result<()> {
    let catalogue = session.network.line_catalogue();
    if session.format.is_json() {
        return print_json(&catalogue);
    }
    print!("{}", render_line_catalogue(&catalogue));
    Ok(())
}

/// List active stations in dataset order.
pub fn handle_stations_command(session: &Session) -> Result<()> {
    let stations = session.network.active_stations();
    if session.format.is_json() {
        return print_json(&stations);
    }
    print!("{}", render_stations(&stations));
    Ok(())
}
