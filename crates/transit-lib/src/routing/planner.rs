//! Route planning strategies implementing the Strategy pattern.
//!
//! Each strategy inspects the resolved origin and destination and either
//! produces an outcome or declines, letting the next strategy try.

use crate::network::{NetworkGraph, StationId};

use super::{DirectRoute, Direction, ResolvedStation, RouteOutcome, TransferRoute};

/// Trait for route planning strategies.
pub trait PlanningStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Return `Some(outcome)` when this strategy can serve the trip.
    fn plan(
        &self,
        network: &NetworkGraph,
        origin: &ResolvedStation,
        destination: &ResolvedStation,
    ) -> Option<RouteOutcome>;
}

/// Both stations on one line sequence.
#[derive(Debug, Clone, Default)]
pub struct SameLinePlanner;

impl PlanningStrategy for SameLinePlanner {
    fn name(&self) -> &'static str {
        "same-line"
    }

    fn plan(
        &self,
        network: &NetworkGraph,
        origin: &ResolvedStation,
        destination: &ResolvedStation,
    ) -> Option<RouteOutcome> {
        for start in &origin.placements {
            for end in &destination.placements {
                if start.family() != end.family() {
                    continue;
                }
                if let Some(route) = direct_route(network, start.family(), origin.id, destination.id)
                {
                    return Some(RouteOutcome::Direct(route));
                }
            }
        }
        None
    }
}

/// One change of line at a curated transfer station.
#[derive(Debug, Clone, Default)]
pub struct TransferPlanner;

impl PlanningStrategy for TransferPlanner {
    fn name(&self) -> &'static str {
        "transfer"
    }

    fn plan(
        &self,
        network: &NetworkGraph,
        origin: &ResolvedStation,
        destination: &ResolvedStation,
    ) -> Option<RouteOutcome> {
        for transfer in network.transfers() {
            let serves = |family: &str| transfer.lines.iter().any(|line| line == family);
            let from_line = origin
                .placements
                .iter()
                .map(|placement| placement.family())
                .find(|family| serves(family));
            let to_line = destination
                .placements
                .iter()
                .map(|placement| placement.family())
                .find(|family| serves(family));

            let (Some(from_line), Some(to_line)) = (from_line, to_line) else {
                continue;
            };
            if from_line == to_line {
                continue;
            }

            let transfer_station = network.station_name(transfer.station)?.to_string();
            return Some(RouteOutcome::Transfer(TransferRoute {
                from_line: from_line.to_string(),
                from_line_name: line_name(network, from_line),
                to_line: to_line.to_string(),
                to_line_name: line_name(network, to_line),
                origin: origin.name.clone(),
                transfer_station,
                destination: destination.name.clone(),
                first_leg: direct_route(network, from_line, origin.id, transfer.station),
                second_leg: direct_route(network, to_line, transfer.station, destination.id),
            }));
        }
        None
    }
}

/// Strategies in the order the planner tries them.
pub fn default_strategies() -> Vec<Box<dyn PlanningStrategy>> {
    vec![Box::new(SameLinePlanner), Box::new(TransferPlanner)]
}

fn line_name(network: &NetworkGraph, code: &str) -> String {
    network
        .line(code)
        .map(|line| line.name.clone())
        .unwrap_or_else(|| code.to_string())
}

/// Ride between two stations on the first sequence of `family` that holds
/// both of them.
fn direct_route(
    network: &NetworkGraph,
    family: &str,
    from: StationId,
    to: StationId,
) -> Option<DirectRoute> {
    let line = network.line(family)?;
    line.sequences().into_iter().find_map(|(branch, stations)| {
        let start = stations.iter().position(|id| *id == from)?;
        let end = stations.iter().position(|id| *id == to)?;
        let direction = if end > start {
            Direction::Outbound
        } else {
            Direction::Inbound
        };
        Some(DirectRoute {
            line: line.code.clone(),
            line_name: line.name.clone(),
            branch: branch.map(str::to_string),
            origin: network.station_name(from)?.to_string(),
            destination: network.station_name(to)?.to_string(),
            direction,
            stops: start.abs_diff(end),
        })
    })
}
