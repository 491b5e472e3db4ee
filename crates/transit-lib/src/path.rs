use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};

/// Shared flag used to interrupt long-running graph computations.
///
/// Computations check the token between sources, so cancellation latency is
/// bounded by a single Dijkstra run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }

    /// Fail with [`Error::Interrupted`] once the token has been cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Shortest travel time from `source` to every node; `None` when unreachable.
pub fn dijkstra_from(graph: &Graph, source: NodeIndex) -> Vec<Option<f64>> {
    let mut distances: Vec<Option<f64>> = vec![None; graph.node_count()];
    let mut settled = vec![false; graph.node_count()];
    let mut queue = BinaryHeap::new();

    distances[source] = Some(0.0);
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;

        for edge in graph.neighbours(entry.node) {
            let next_cost = entry.cost.0 + edge.minutes;
            let improves = distances[edge.target].map_or(true, |current| next_cost < current);
            if improves {
                distances[edge.target] = Some(next_cost);
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    distances
}

/// Shortest-path DAG rooted at one source, as needed by Brandes' algorithm.
#[derive(Debug, Clone)]
pub struct ShortestPathDag {
    /// Nodes in non-decreasing distance order (settling order).
    pub order: Vec<NodeIndex>,
    /// Number of distinct shortest paths from the source to each node.
    pub sigma: Vec<f64>,
    /// Predecessors of each node on some shortest path.
    pub predecessors: Vec<Vec<NodeIndex>>,
    pub distances: Vec<Option<f64>>,
}

/// Run Dijkstra from `source` while counting shortest paths.
pub fn shortest_path_dag(graph: &Graph, source: NodeIndex) -> ShortestPathDag {
    let n = graph.node_count();
    let mut distances: Vec<Option<f64>> = vec![None; n];
    let mut sigma = vec![0.0; n];
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut settled = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = BinaryHeap::new();

    distances[source] = Some(0.0);
    sigma[source] = 1.0;
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        let node = entry.node;
        if settled[node] {
            continue;
        }
        settled[node] = true;
        order.push(node);

        for edge in graph.neighbours(node) {
            let next = edge.target;
            if settled[next] {
                continue;
            }
            let next_cost = entry.cost.0 + edge.minutes;
            match distances[next] {
                Some(current) if next_cost > current => {}
                Some(current) if next_cost == current => {
                    sigma[next] += sigma[node];
                    predecessors[next].push(node);
                }
                _ => {
                    distances[next] = Some(next_cost);
                    sigma[next] = sigma[node];
                    predecessors[next] = vec![node];
                    queue.push(QueueEntry::new(next, next_cost));
                }
            }
        }
    }

    ShortestPathDag {
        order,
        sigma,
        predecessors,
        distances,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::network::{ConnectionRecord, LineRecord, NetworkGraph, NetworkRecords, StationRecord};

    fn diamond() -> Graph {
        // A -> B -> D and A -> C -> D, both 2 minutes.
        let network = NetworkGraph::build(NetworkRecords {
            stations: ["A", "B", "C", "D"]
                .into_iter()
                .map(StationRecord::new)
                .collect(),
            lines: vec![LineRecord::simple("x", "X", ["A", "B", "C", "D"])],
            connections: vec![
                ConnectionRecord::new("A", "B", "x", 1.0),
                ConnectionRecord::new("B", "D", "x", 1.0),
                ConnectionRecord::new("A", "C", "x", 1.5),
                ConnectionRecord::new("C", "D", "x", 0.5),
            ],
            ..NetworkRecords::default()
        })
        .expect("valid network");
        build_graph(&network)
    }

    #[test]
    fn dijkstra_reports_unreachable_nodes() {
        let graph = diamond();
        let distances = dijkstra_from(&graph, 3);
        assert_eq!(distances, vec![None, None, None, Some(0.0)]);
    }

    #[test]
    fn dag_counts_equal_length_paths() {
        let graph = diamond();
        let dag = shortest_path_dag(&graph, 0);
        assert_eq!(dag.distances[3], Some(2.0));
        assert_eq!(dag.sigma[3], 2.0);
        assert_eq!(dag.predecessors[3].len(), 2);
        assert_eq!(dag.order.first(), Some(&0));
        assert_eq!(dag.order.last(), Some(&3));
    }

    #[test]
    fn cancel_token_interrupts() {
        let token = CancelToken::new();
        assert!(token.check().is_ok());
        token.clone().cancel();
        assert!(matches!(token.check(), Err(Error::Interrupted)));
    }
}
