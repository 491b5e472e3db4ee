//! Route planning between two named stations.
//!
//! This module provides:
//! - [`RouteRequest`] - origin and destination names
//! - [`RouteOutcome`] - a direct route, a single-transfer route, or no route
//! - [`RoutePlanner`] - planner bound to one [`NetworkGraph`]
//! - [`plan_route`] - free-function entry point
//!
//! # Strategy Pattern
//!
//! Planning runs an ordered list of [`PlanningStrategy`] implementations and
//! returns the first outcome any of them produces. The same-line strategy runs
//! before the transfer strategy, so a transfer is only suggested when no single
//! line serves both stations.
//!
//! # Example
//!
//! ```ignore
//! use transit_lib::{plan_route, RouteRequest};
//!
//! let outcome = plan_route(&network, &RouteRequest::new("Harvard", "Park Street"))?;
//! println!("{}", outcome.describe());
//! ```

mod planner;

pub use planner::{default_strategies, PlanningStrategy, SameLinePlanner, TransferPlanner};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::network::{NetworkGraph, StationId, StationPlacement};

/// Travel direction along a line sequence.
///
/// `Outbound` follows the registered station order, `Inbound` runs against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        };
        f.write_str(value)
    }
}

/// Ride along a single line (or branch) without changing trains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectRoute {
    pub line: String,
    pub line_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub origin: String,
    pub destination: String,
    pub direction: Direction,
    pub stops: usize,
}

impl DirectRoute {
    pub fn describe(&self) -> String {
        let line = match &self.branch {
            Some(branch) => format!("{} ({} branch)", self.line_name, branch),
            None => self.line_name.clone(),
        };
        format!(
            "Take {} {} from {} to {}. ({} stops)",
            line, self.direction, self.origin, self.destination, self.stops
        )
    }
}

/// Two rides joined at a transfer station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRoute {
    pub from_line: String,
    pub from_line_name: String,
    pub to_line: String,
    pub to_line_name: String,
    pub origin: String,
    pub transfer_station: String,
    pub destination: String,
    /// Origin to transfer station, when one sequence holds both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_leg: Option<DirectRoute>,
    /// Transfer station to destination, when one sequence holds both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_leg: Option<DirectRoute>,
}

impl TransferRoute {
    pub fn describe(&self) -> String {
        format!(
            "Take {} from {} to {}, then transfer to {} to {}.",
            self.from_line_name,
            self.origin,
            self.transfer_station,
            self.to_line_name,
            self.destination
        )
    }
}

/// Result of planning a route. `NoRoute` is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteOutcome {
    Direct(DirectRoute),
    Transfer(TransferRoute),
    NoRoute { origin: String, destination: String },
}

impl RouteOutcome {
    /// Human-readable sentence describing the outcome.
    pub fn describe(&self) -> String {
        match self {
            RouteOutcome::Direct(route) => route.describe(),
            RouteOutcome::Transfer(route) => route.describe(),
            RouteOutcome::NoRoute { .. } => {
                "No direct route found. Multiple transfers (2+) may be required.".to_string()
            }
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, RouteOutcome::Direct(_))
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// A station name resolved to its identifier and line placements.
#[derive(Debug, Clone)]
pub struct ResolvedStation {
    pub id: StationId,
    pub name: String,
    pub placements: Vec<StationPlacement>,
}

/// Route planner bound to one network.
pub struct RoutePlanner<'a> {
    network: &'a NetworkGraph,
    strategies: Vec<Box<dyn PlanningStrategy>>,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(network: &'a NetworkGraph) -> Self {
        Self {
            network,
            strategies: default_strategies(),
        }
    }

    /// Resolve both stations (origin first), then run each strategy in order.
    pub fn plan_route(&self, origin: &str, destination: &str) -> Result<RouteOutcome> {
        let origin = self.resolve(origin)?;
        let destination = self.resolve(destination)?;

        for strategy in &self.strategies {
            if let Some(outcome) = strategy.plan(self.network, &origin, &destination) {
                debug!(
                    strategy = strategy.name(),
                    origin = %origin.name,
                    destination = %destination.name,
                    "route found"
                );
                return Ok(outcome);
            }
        }

        debug!(
            origin = %origin.name,
            destination = %destination.name,
            "no single-transfer route"
        );
        Ok(RouteOutcome::NoRoute {
            origin: origin.name,
            destination: destination.name,
        })
    }

    fn resolve(&self, name: &str) -> Result<ResolvedStation> {
        let placements = self.network.require_station(name)?;
        let station = self
            .network
            .station_by_name(name)
            .ok_or_else(|| self.network.unknown_station(name))?;
        Ok(ResolvedStation {
            id: station.id,
            name: station.name.clone(),
            placements,
        })
    }
}

/// Plan a route for `request` over `network`.
pub fn plan_route(network: &NetworkGraph, request: &RouteRequest) -> Result<RouteOutcome> {
    RoutePlanner::new(network).plan_route(&request.origin, &request.destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_route_sentence_mentions_branch() {
        let route = DirectRoute {
            line: "green".into(),
            line_name: "Green Line".into(),
            branch: Some("B".into()),
            origin: "Park Street".into(),
            destination: "Kenmore".into(),
            direction: Direction::Outbound,
            stops: 5,
        };
        assert_eq!(
            route.describe(),
            "Take Green Line (B branch) outbound from Park Street to Kenmore. (5 stops)"
        );
    }

    #[test]
    fn no_route_sentence() {
        let outcome = RouteOutcome::NoRoute {
            origin: "A".into(),
            destination: "B".into(),
        };
        assert_eq!(
            outcome.to_string(),
            "No direct route found. Multiple transfers (2+) may be required."
        );
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let outcome = RouteOutcome::NoRoute {
            origin: "A".into(),
            destination: "B".into(),
        };
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["kind"], "no_route");
    }
}
