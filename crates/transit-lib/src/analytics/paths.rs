//! All-pairs shortest travel times.

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::network::StationId;
use crate::path::{dijkstra_from, CancelToken};

/// Longest shortest-path travel time across the network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diameter {
    Minutes(f64),
    /// At least one ordered pair of stations has no path.
    Disconnected,
}

/// One reachable ordered pair and its shortest travel time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShortestPath {
    pub from: StationId,
    pub to: StationId,
    pub minutes: f64,
}

/// Shortest travel time between every ordered pair of stations in a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct ShortestPathTable {
    stations: Vec<StationId>,
    rows: Vec<Vec<Option<f64>>>,
}

impl ShortestPathTable {
    fn from_rows(graph: &Graph, rows: Vec<Vec<Option<f64>>>) -> Self {
        Self {
            stations: graph.stations().to_vec(),
            rows,
        }
    }

    fn node_of(&self, station: StationId) -> Option<NodeIndex> {
        self.stations.binary_search(&station).ok()
    }

    /// Shortest travel time between two stations; `None` when unreachable or
    /// when either station has no connections.
    pub fn distance(&self, from: StationId, to: StationId) -> Option<f64> {
        let from = self.node_of(from)?;
        let to = self.node_of(to)?;
        self.rows[from][to]
    }

    /// Reachable ordered pairs, excluding each station paired with itself.
    pub fn pairs(&self) -> impl Iterator<Item = ShortestPath> + '_ {
        self.rows.iter().enumerate().flat_map(move |(from, row)| {
            row.iter().enumerate().filter_map(move |(to, minutes)| {
                if from == to {
                    return None;
                }
                minutes.map(|minutes| ShortestPath {
                    from: self.stations[from],
                    to: self.stations[to],
                    minutes,
                })
            })
        })
    }

    /// Reachable stations (excluding the source) and their summed travel time.
    pub(crate) fn reach(&self, node: NodeIndex) -> (usize, f64) {
        self.rows[node]
            .iter()
            .enumerate()
            .filter(|(target, _)| *target != node)
            .filter_map(|(_, minutes)| *minutes)
            .fold((0, 0.0), |(count, total), minutes| (count + 1, total + minutes))
    }

    /// Mean shortest travel time from a station to every station it reaches.
    pub fn average_from(&self, station: StationId) -> Option<f64> {
        let (count, total) = self.reach(self.node_of(station)?);
        (count > 0).then(|| total / count as f64)
    }

    /// Mean shortest travel time over all reachable ordered pairs.
    pub fn average(&self) -> Option<f64> {
        let (count, total) = (0..self.rows.len())
            .map(|node| self.reach(node))
            .fold((0, 0.0), |(count, total), (c, t)| (count + c, total + t));
        (count > 0).then(|| total / count as f64)
    }

    pub fn reachable_pairs(&self) -> usize {
        (0..self.rows.len()).map(|node| self.reach(node).0).sum()
    }

    pub fn diameter(&self) -> Diameter {
        let mut longest = 0.0f64;
        for (from, row) in self.rows.iter().enumerate() {
            for (to, minutes) in row.iter().enumerate() {
                if from == to {
                    continue;
                }
                match minutes {
                    Some(minutes) => longest = longest.max(*minutes),
                    None => return Diameter::Disconnected,
                }
            }
        }
        Diameter::Minutes(longest)
    }
}

/// Run Dijkstra from every node.
pub fn all_pairs_shortest_paths(graph: &Graph) -> ShortestPathTable {
    let rows = (0..graph.node_count())
        .map(|source| dijkstra_from(graph, source))
        .collect();
    ShortestPathTable::from_rows(graph, rows)
}

/// Interruptible variant of [`all_pairs_shortest_paths`]; the token is checked
/// before each source.
pub fn all_pairs_shortest_paths_cancellable(
    graph: &Graph,
    token: &CancelToken,
) -> Result<ShortestPathTable> {
    let rows = (0..graph.node_count())
        .map(|source| {
            token.check()?;
            Ok(dijkstra_from(graph, source))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ShortestPathTable::from_rows(graph, rows))
}
