use anyhow::Result;

use transit_cli::output::{format_route, print_json};
use transit_lib::{plan_route, RouteRequest};

use super::{handle_lib_error, Session};

/// Plan a route and print it. A missing route is reported, not an error.
pub fn handle_route_command(session: &Session, request: &RouteRequest) -> Result<()> {
    let outcome = plan_route(&session.network, request).map_err(handle_lib_error)?;

    if session.format.is_json() {
        return print_json(&outcome);
    }
    println!("{}", format_route(&outcome, &session.palette));
    Ok(())
}
