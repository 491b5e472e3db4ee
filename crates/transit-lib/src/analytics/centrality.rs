//! Degree, betweenness, and closeness centrality over the directed graph.

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::path::{shortest_path_dag, CancelToken};

use super::paths::ShortestPathTable;

/// Directed degree counts of one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationDegree {
    pub station: String,
    pub in_degree: usize,
    pub out_degree: usize,
    /// `in_degree + out_degree`.
    pub degree: usize,
}

/// All centrality scores of one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityRow {
    pub station: String,
    pub degree: usize,
    pub degree_centrality: f64,
    pub betweenness: f64,
    pub closeness: f64,
}

/// Distinct neighbours in the undirected projection divided by `N - 1`.
pub fn degree_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    let scale = (n - 1) as f64;
    (0..n)
        .map(|node| graph.undirected_neighbours(node).len() as f64 / scale)
        .collect()
}

/// Wasserman-Faust closeness over outgoing shortest travel times.
pub fn closeness_centrality(graph: &Graph, paths: &ShortestPathTable) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|node| {
            let (reachable, total) = paths.reach(node);
            if reachable == 0 || total <= 0.0 {
                return 0.0;
            }
            let reachable = reachable as f64;
            (reachable / total) * (reachable / (n - 1) as f64)
        })
        .collect()
}

/// Brandes' betweenness centrality, time-weighted, normalised by the number of
/// ordered pairs that exclude the station.
pub fn betweenness_centrality(graph: &Graph) -> Vec<f64> {
    let mut scores = vec![0.0; graph.node_count()];
    for source in 0..graph.node_count() {
        accumulate_dependencies(graph, source, &mut scores);
    }
    normalise_betweenness(scores)
}

/// Interruptible variant of [`betweenness_centrality`].
pub fn betweenness_centrality_cancellable(graph: &Graph, token: &CancelToken) -> Result<Vec<f64>> {
    let mut scores = vec![0.0; graph.node_count()];
    for source in 0..graph.node_count() {
        token.check()?;
        accumulate_dependencies(graph, source, &mut scores);
    }
    Ok(normalise_betweenness(scores))
}

fn accumulate_dependencies(graph: &Graph, source: NodeIndex, scores: &mut [f64]) {
    let dag = shortest_path_dag(graph, source);
    let mut delta = vec![0.0; graph.node_count()];

    for &node in dag.order.iter().rev() {
        for &predecessor in &dag.predecessors[node] {
            delta[predecessor] += dag.sigma[predecessor] / dag.sigma[node] * (1.0 + delta[node]);
        }
        if node != source {
            scores[node] += delta[node];
        }
    }
}

fn normalise_betweenness(mut scores: Vec<f64>) -> Vec<f64> {
    let n = scores.len();
    if n <= 2 {
        return vec![0.0; n];
    }
    let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
    for score in &mut scores {
        *score *= scale;
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::paths::all_pairs_shortest_paths;
    use crate::graph::build_graph;
    use crate::network::{ConnectionRecord, LineRecord, NetworkGraph, NetworkRecords, StationRecord};

    fn star() -> Graph {
        // Hub connected both ways to three leaves.
        let mut connections = Vec::new();
        for leaf in ["A", "B", "C"] {
            connections.push(ConnectionRecord::new("Hub", leaf, "x", 1.0));
            connections.push(ConnectionRecord::new(leaf, "Hub", "x", 1.0));
        }
        let network = NetworkGraph::build(NetworkRecords {
            stations: ["Hub", "A", "B", "C"]
                .into_iter()
                .map(StationRecord::new)
                .collect(),
            lines: vec![LineRecord::simple("x", "X", ["Hub", "A", "B", "C"])],
            connections,
            ..NetworkRecords::default()
        })
        .expect("valid network");
        build_graph(&network)
    }

    #[test]
    fn hub_has_full_degree_centrality() {
        let scores = degree_centrality(&star());
        assert_eq!(scores[0], 1.0);
        assert!((scores[1] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn hub_lies_on_every_leaf_pair() {
        let scores = betweenness_centrality(&star());
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert_eq!(&scores[1..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn closeness_rewards_short_average_time() {
        let graph = star();
        let paths = all_pairs_shortest_paths(&graph);
        let scores = closeness_centrality(&graph, &paths);
        assert!((scores[0] - 1.0).abs() < 1e-12);
        // Leaf reaches 3 stations in 1 + 2 + 2 = 5 minutes.
        assert!((scores[1] - 3.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn cancelled_betweenness_is_interrupted() {
        let token = CancelToken::new();
        token.cancel();
        assert!(betweenness_centrality_cancellable(&star(), &token).is_err());
    }
}
