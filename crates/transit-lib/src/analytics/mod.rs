//! Network analytics: centrality, shortest-path efficiency, per-line
//! statistics and summary metrics.
//!
//! [`AnalyticsEngine`] borrows a [`NetworkGraph`] and derives the directed,
//! time-weighted [`Graph`] once. Expensive results are computed on first use
//! and cached for the lifetime of the engine; each also has a free function
//! taking a [`CancelToken`] for callers that need to bound latency.

mod centrality;
mod lines;
mod paths;
mod summary;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::error::Result;
use crate::graph::{build_graph, Graph};
use crate::network::{Connection, NetworkGraph};
use crate::path::CancelToken;

pub use centrality::{
    betweenness_centrality, betweenness_centrality_cancellable, closeness_centrality,
    degree_centrality, CentralityRow, StationDegree,
};
pub use lines::{line_stats, most_efficient_line, LineStats};
pub use paths::{
    all_pairs_shortest_paths, all_pairs_shortest_paths_cancellable, Diameter, ShortestPath,
    ShortestPathTable,
};
pub use summary::{
    average_clustering, average_degree, density, strongly_connected_components, LongestConnection,
    NetworkInsights, NetworkSummary,
};

/// Lazily computed analytics over one network.
pub struct AnalyticsEngine<'a> {
    network: &'a NetworkGraph,
    graph: Graph,
    shortest_paths: OnceCell<ShortestPathTable>,
    betweenness: OnceCell<Vec<f64>>,
    closeness: OnceCell<Vec<f64>>,
    components: OnceCell<usize>,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(network: &'a NetworkGraph) -> Self {
        Self {
            network,
            graph: build_graph(network),
            shortest_paths: OnceCell::new(),
            betweenness: OnceCell::new(),
            closeness: OnceCell::new(),
            components: OnceCell::new(),
        }
    }

    pub fn network(&self) -> &'a NetworkGraph {
        self.network
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn node_name(&self, node: usize) -> String {
        self.network
            .station_name(self.graph.station(node))
            .unwrap_or_default()
            .to_string()
    }

    /// In, out and total degree of every graph station, in registration order.
    pub fn station_degrees(&self) -> Vec<StationDegree> {
        let in_degrees = self.graph.in_degrees();
        (0..self.graph.node_count())
            .map(|node| {
                let out_degree = self.graph.out_degree(node);
                StationDegree {
                    station: self.node_name(node),
                    in_degree: in_degrees[node],
                    out_degree,
                    degree: in_degrees[node] + out_degree,
                }
            })
            .collect()
    }

    pub fn degree_centrality(&self) -> Vec<f64> {
        degree_centrality(&self.graph)
    }

    pub fn betweenness_centrality(&self) -> &[f64] {
        self.betweenness.get_or_init(|| {
            debug!(nodes = self.graph.node_count(), "computing betweenness");
            betweenness_centrality(&self.graph)
        })
    }

    pub fn closeness_centrality(&self) -> &[f64] {
        self.closeness
            .get_or_init(|| closeness_centrality(&self.graph, self.shortest_paths()))
    }

    /// Every centrality measure per station, in registration order.
    pub fn centrality_table(&self) -> Vec<CentralityRow> {
        let degrees = self.station_degrees();
        let degree_centrality = self.degree_centrality();
        let betweenness = self.betweenness_centrality();
        let closeness = self.closeness_centrality();

        degrees
            .into_iter()
            .enumerate()
            .map(|(node, degree)| CentralityRow {
                station: degree.station,
                degree: degree.degree,
                degree_centrality: degree_centrality[node],
                betweenness: betweenness[node],
                closeness: closeness[node],
            })
            .collect()
    }

    /// Centrality of a single station; `None` when it has no connections.
    pub fn centrality_for(&self, name: &str) -> Result<Option<CentralityRow>> {
        let station = self
            .network
            .station_by_name(name)
            .ok_or_else(|| self.network.unknown_station(name))?;
        let Some(node) = self.graph.node_of(station.id) else {
            return Ok(None);
        };
        Ok(self.centrality_table().into_iter().nth(node))
    }

    /// Stations with the highest total degree; ties keep registration order.
    pub fn top_connected(&self, n: usize) -> Vec<StationDegree> {
        let mut degrees = self.station_degrees();
        degrees.sort_by(|a, b| b.degree.cmp(&a.degree));
        degrees.truncate(n);
        degrees
    }

    pub fn shortest_paths(&self) -> &ShortestPathTable {
        self.shortest_paths.get_or_init(|| {
            debug!(nodes = self.graph.node_count(), "computing all-pairs shortest paths");
            all_pairs_shortest_paths(&self.graph)
        })
    }

    /// Like [`Self::shortest_paths`], but abandons the computation once the
    /// token is cancelled. A completed table is cached.
    pub fn try_shortest_paths(&self, token: &CancelToken) -> Result<&ShortestPathTable> {
        if let Some(table) = self.shortest_paths.get() {
            return Ok(table);
        }
        let table = all_pairs_shortest_paths_cancellable(&self.graph, token)?;
        Ok(self.shortest_paths.get_or_init(|| table))
    }

    /// Mean shortest travel time from the named station.
    pub fn average_travel_time_from(&self, name: &str) -> Result<Option<f64>> {
        let station = self
            .network
            .station_by_name(name)
            .ok_or_else(|| self.network.unknown_station(name))?;
        Ok(self.shortest_paths().average_from(station.id))
    }

    pub fn line_stats(&self) -> Vec<LineStats> {
        line_stats(self.network.edges())
    }

    pub fn most_efficient_line(&self) -> Option<LineStats> {
        most_efficient_line(&self.line_stats()).cloned()
    }

    pub fn strongly_connected_components(&self) -> usize {
        *self
            .components
            .get_or_init(|| strongly_connected_components(&self.graph))
    }

    fn average_connection_minutes(&self) -> f64 {
        let edges = self.network.edges();
        if edges.is_empty() {
            return 0.0;
        }
        edges.iter().map(|edge| edge.minutes).sum::<f64>() / edges.len() as f64
    }

    pub fn summary(&self) -> NetworkSummary {
        let paths = self.shortest_paths();
        let diameter = if self.graph.node_count() <= 1 {
            Diameter::Minutes(0.0)
        } else {
            paths.diameter()
        };

        let summary = NetworkSummary {
            total_stations: self.graph.node_count(),
            total_connections: self.graph.edge_count(),
            average_degree: average_degree(&self.graph),
            density: density(&self.graph),
            diameter,
            average_clustering: average_clustering(&self.graph),
            strongly_connected_components: self.strongly_connected_components(),
            average_connection_minutes: self.average_connection_minutes(),
            average_shortest_path_minutes: paths.average().unwrap_or(0.0),
        };
        info!(
            stations = summary.total_stations,
            connections = summary.total_connections,
            components = summary.strongly_connected_components,
            "computed network summary"
        );
        summary
    }

    pub fn insights(&self) -> NetworkInsights {
        let busiest = self
            .station_degrees()
            .into_iter()
            .fold(None, |best: Option<StationDegree>, candidate| match best {
                Some(best) if best.degree >= candidate.degree => Some(best),
                _ => Some(candidate),
            });

        let longest_connection = self
            .network
            .edges()
            .iter()
            .fold(None, |best: Option<&Connection>, edge| match best {
                Some(best) if best.minutes >= edge.minutes => Some(best),
                _ => Some(edge),
            })
            .map(|edge| LongestConnection {
                from: self
                    .network
                    .station_name(edge.from)
                    .unwrap_or_default()
                    .to_string(),
                to: self
                    .network
                    .station_name(edge.to)
                    .unwrap_or_default()
                    .to_string(),
                color: edge.color.clone(),
                minutes: edge.minutes,
            });

        NetworkInsights {
            most_efficient_line: self.most_efficient_line().map(|stats| stats.color),
            busiest_station_degree: busiest.as_ref().map_or(0, |station| station.degree),
            busiest_station: busiest.map(|station| station.station),
            longest_connection,
            average_travel_time: self.average_connection_minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{ConnectionRecord, LineRecord, NetworkRecords, StationRecord};

    fn chain() -> NetworkGraph {
        let names = ["A", "B", "C", "D"];
        let mut connections = Vec::new();
        for pair in names.windows(2) {
            connections.push(ConnectionRecord::new(pair[0], pair[1], "red", 2.0));
            connections.push(ConnectionRecord::new(pair[1], pair[0], "red", 2.0));
        }
        NetworkGraph::build(NetworkRecords {
            stations: names.into_iter().map(StationRecord::new).collect(),
            lines: vec![LineRecord::simple("red", "Red Line", names)],
            connections,
            ..NetworkRecords::default()
        })
        .expect("valid network")
    }

    #[test]
    fn summary_of_chain() {
        let network = chain();
        let engine = AnalyticsEngine::new(&network);
        let summary = engine.summary();
        assert_eq!(summary.total_stations, 4);
        assert_eq!(summary.total_connections, 6);
        assert_eq!(summary.diameter, Diameter::Minutes(6.0));
        assert_eq!(summary.strongly_connected_components, 1);
        assert_eq!(summary.average_connection_minutes, 2.0);
        assert!((summary.average_degree - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_network_is_all_zero() {
        let network = NetworkGraph::build(NetworkRecords::default()).expect("empty network");
        let engine = AnalyticsEngine::new(&network);
        let summary = engine.summary();
        assert_eq!(summary.total_stations, 0);
        assert_eq!(summary.diameter, Diameter::Minutes(0.0));
        assert_eq!(summary.average_shortest_path_minutes, 0.0);
        assert!(engine.centrality_table().is_empty());
        assert!(engine.insights().busiest_station.is_none());
    }

    #[test]
    fn top_connected_prefers_inner_stations() {
        let network = chain();
        let engine = AnalyticsEngine::new(&network);
        let top: Vec<_> = engine
            .top_connected(2)
            .into_iter()
            .map(|degree| degree.station)
            .collect();
        assert_eq!(top, vec!["B", "C"]);
    }

    #[test]
    fn cancelled_shortest_paths_do_not_poison_cache() {
        let network = chain();
        let engine = AnalyticsEngine::new(&network);
        let token = CancelToken::new();
        token.cancel();
        assert!(engine.try_shortest_paths(&token).is_err());
        assert_eq!(engine.shortest_paths().reachable_pairs(), 12);
    }
}
