use std::collections::HashMap;
use std::sync::Arc;

use petgraph::graph::DiGraph;
use tracing::debug;

use crate::network::{NetworkGraph, StationId};

/// Dense index of a station inside a [`Graph`].
pub type NodeIndex = usize;

/// Directed edge within the analytics graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub minutes: f64,
    pub color: String,
}

/// Directed, time-weighted graph used by the analytics algorithms.
///
/// Nodes are the stations that appear as an endpoint of at least one
/// connection, ordered by station registration. Parallel connections between
/// the same ordered pair collapse into one edge; the connection listed last
/// supplies its travel time and color.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<StationId>,
    index: HashMap<StationId, NodeIndex>,
    adjacency: Arc<Vec<Vec<Edge>>>,
    undirected: Arc<Vec<Vec<NodeIndex>>>,
    edge_count: usize,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of distinct ordered (from, to) pairs.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station identifier of a node.
    pub fn station(&self, node: NodeIndex) -> StationId {
        self.stations[node]
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn node_of(&self, station: StationId) -> Option<NodeIndex> {
        self.index.get(&station).copied()
    }

    /// Outgoing edges of a node.
    pub fn neighbours(&self, node: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct neighbours of a node in the undirected projection, sorted.
    pub fn undirected_neighbours(&self, node: NodeIndex) -> &[NodeIndex] {
        self.undirected
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.neighbours(node).len()
    }

    /// Petgraph copy of the graph, for algorithms taken from `petgraph::algo`.
    /// Node weights are station identifiers and edge weights travel minutes;
    /// node `i` of the result is node `i` of `self`.
    pub fn to_digraph(&self) -> DiGraph<StationId, f64> {
        let mut digraph = DiGraph::with_capacity(self.node_count(), self.edge_count);
        let nodes: Vec<_> = self
            .stations
            .iter()
            .map(|station| digraph.add_node(*station))
            .collect();
        for (from, edges) in self.adjacency.iter().enumerate() {
            for edge in edges {
                digraph.add_edge(nodes[from], nodes[edge.target], edge.minutes);
            }
        }
        digraph
    }

    /// In-degree of every node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count()];
        for edges in self.adjacency.iter() {
            for edge in edges {
                degrees[edge.target] += 1;
            }
        }
        degrees
    }
}

/// Build the directed analytics graph from the network's connection set.
pub fn build_graph(network: &NetworkGraph) -> Graph {
    let mut stations: Vec<StationId> = network
        .edges()
        .iter()
        .flat_map(|connection| [connection.from, connection.to])
        .collect();
    stations.sort_unstable();
    stations.dedup();

    let index: HashMap<StationId, NodeIndex> = stations
        .iter()
        .enumerate()
        .map(|(node, station)| (*station, node))
        .collect();

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); stations.len()];
    let mut edge_count = 0usize;
    for connection in network.edges() {
        let (Some(&from), Some(&to)) = (index.get(&connection.from), index.get(&connection.to))
        else {
            continue;
        };
        let edges = &mut adjacency[from];
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
            existing.minutes = connection.minutes;
            existing.color.clone_from(&connection.color);
            continue;
        }
        edges.push(Edge {
            target: to,
            minutes: connection.minutes,
            color: connection.color.clone(),
        });
        edge_count += 1;
    }

    let mut undirected: Vec<Vec<NodeIndex>> = vec![Vec::new(); stations.len()];
    for (from, edges) in adjacency.iter().enumerate() {
        for edge in edges {
            if edge.target == from {
                continue;
            }
            undirected[from].push(edge.target);
            undirected[edge.target].push(from);
        }
    }
    for neighbours in &mut undirected {
        neighbours.sort_unstable();
        neighbours.dedup();
    }

    debug!(
        nodes = stations.len(),
        edges = edge_count,
        "built analytics graph"
    );

    Graph {
        stations,
        index,
        adjacency: Arc::new(adjacency),
        undirected: Arc::new(undirected),
        edge_count,
    }
}
