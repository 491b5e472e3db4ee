//! Whole-network scalars and headline insights.

use petgraph::algo::tarjan_scc;
use serde::Serialize;

use crate::graph::{Graph, NodeIndex};

use super::paths::Diameter;

/// Network-wide structural and travel-time metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub total_stations: usize,
    pub total_connections: usize,
    pub average_degree: f64,
    pub density: f64,
    pub diameter: Diameter,
    pub average_clustering: f64,
    pub strongly_connected_components: usize,
    pub average_connection_minutes: f64,
    pub average_shortest_path_minutes: f64,
}

/// The slowest single connection in the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongestConnection {
    pub from: String,
    pub to: String,
    pub color: String,
    pub minutes: f64,
}

/// Headline findings surfaced alongside the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkInsights {
    pub most_efficient_line: Option<String>,
    pub busiest_station: Option<String>,
    pub busiest_station_degree: usize,
    pub longest_connection: Option<LongestConnection>,
    pub average_travel_time: f64,
}

/// `2|E| / |V|`, zero for an empty graph.
pub fn average_degree(graph: &Graph) -> f64 {
    match graph.node_count() {
        0 => 0.0,
        n => 2.0 * graph.edge_count() as f64 / n as f64,
    }
}

/// `|E| / (|V| (|V| - 1))`, zero below two stations.
pub fn density(graph: &Graph) -> f64 {
    let n = graph.node_count();
    if n < 2 {
        return 0.0;
    }
    graph.edge_count() as f64 / (n * (n - 1)) as f64
}

/// Mean local clustering coefficient over the undirected projection.
pub fn average_clustering(graph: &Graph) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = (0..n).map(|node| local_clustering(graph, node)).sum();
    total / n as f64
}

fn local_clustering(graph: &Graph, node: NodeIndex) -> f64 {
    let neighbours = graph.undirected_neighbours(node);
    let k = neighbours.len();
    if k < 2 {
        return 0.0;
    }
    let mut links = 0usize;
    for (i, &a) in neighbours.iter().enumerate() {
        let adjacent = graph.undirected_neighbours(a);
        links += neighbours[i + 1..]
            .iter()
            .filter(|b| adjacent.binary_search(b).is_ok())
            .count();
    }
    2.0 * links as f64 / (k * (k - 1)) as f64
}

/// Number of strongly connected components of the directed graph.
pub fn strongly_connected_components(graph: &Graph) -> usize {
    tarjan_scc(&graph.to_digraph()).len()
}
