//! Filtering and summarising the directed connection set.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::network::{normalize_name, Connection, NetworkGraph};

/// Criteria for selecting connections. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionFilter {
    /// Line colors to keep, matched case-insensitively.
    pub lines: Vec<String>,
    pub min_minutes: Option<f64>,
    pub max_minutes: Option<f64>,
    /// Substring matched against either endpoint's station name.
    pub search: Option<String>,
}

/// A connection with its endpoints resolved to station names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionView {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Minutes")]
    pub minutes: f64,
}

/// Headline numbers for a set of connections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionStats {
    pub connections: usize,
    pub active_lines: usize,
    pub average_minutes: f64,
}

impl ConnectionFilter {
    pub fn matches(&self, network: &NetworkGraph, connection: &Connection) -> bool {
        if !self.lines.is_empty()
            && !self
                .lines
                .iter()
                .any(|line| normalize_name(line) == connection.color)
        {
            return false;
        }
        if self.min_minutes.is_some_and(|min| connection.minutes < min) {
            return false;
        }
        if self.max_minutes.is_some_and(|max| connection.minutes > max) {
            return false;
        }
        match self.search.as_deref().map(normalize_name) {
            Some(query) if !query.is_empty() => [connection.from, connection.to]
                .into_iter()
                .filter_map(|id| network.station_name(id))
                .any(|name| name.to_lowercase().contains(&query)),
            _ => true,
        }
    }

    /// Connections that pass the filter, in record order.
    pub fn apply(&self, network: &NetworkGraph) -> Vec<ConnectionView> {
        network
            .edges()
            .iter()
            .filter(|connection| self.matches(network, connection))
            .map(|connection| ConnectionView {
                from: network
                    .station_name(connection.from)
                    .unwrap_or_default()
                    .to_string(),
                to: network
                    .station_name(connection.to)
                    .unwrap_or_default()
                    .to_string(),
                color: connection.color.clone(),
                minutes: connection.minutes,
            })
            .collect()
    }
}

impl ConnectionStats {
    pub fn from_views(views: &[ConnectionView]) -> Self {
        let active_lines: BTreeSet<&str> = views.iter().map(|view| view.color.as_str()).collect();
        let average_minutes = if views.is_empty() {
            0.0
        } else {
            views.iter().map(|view| view.minutes).sum::<f64>() / views.len() as f64
        };
        Self {
            connections: views.len(),
            active_lines: active_lines.len(),
            average_minutes,
        }
    }
}

/// Distinct connection colors, sorted.
pub fn connection_colors(network: &NetworkGraph) -> Vec<String> {
    network
        .edges()
        .iter()
        .map(|connection| connection.color.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
