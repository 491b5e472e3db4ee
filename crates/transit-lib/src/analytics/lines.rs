use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::network::{Connection, StationId};

/// Aggregate travel statistics for the connections of one line color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStats {
    pub color: String,
    pub connections: usize,
    pub mean_minutes: f64,
    pub min_minutes: f64,
    pub max_minutes: f64,
    pub total_minutes: f64,
    pub unique_from: usize,
    pub unique_to: usize,
    pub stations: usize,
    /// Total minutes per connection; lower is better.
    pub efficiency: f64,
}

#[derive(Default)]
struct Accumulator {
    connections: usize,
    total: f64,
    min: f64,
    max: f64,
    from: HashSet<StationId>,
    to: HashSet<StationId>,
}

impl Accumulator {
    fn push(&mut self, connection: &Connection) {
        if self.connections == 0 {
            self.min = connection.minutes;
            self.max = connection.minutes;
        } else {
            self.min = self.min.min(connection.minutes);
            self.max = self.max.max(connection.minutes);
        }
        self.connections += 1;
        self.total += connection.minutes;
        self.from.insert(connection.from);
        self.to.insert(connection.to);
    }

    fn finish(self, color: String) -> LineStats {
        let count = self.connections as f64;
        LineStats {
            color,
            connections: self.connections,
            mean_minutes: self.total / count,
            min_minutes: self.min,
            max_minutes: self.max,
            total_minutes: self.total,
            unique_from: self.from.len(),
            unique_to: self.to.len(),
            stations: self.from.len().max(self.to.len()),
            efficiency: self.total / count,
        }
    }
}

/// Group connection records by color, sorted by color.
pub fn line_stats(connections: &[Connection]) -> Vec<LineStats> {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for connection in connections {
        groups
            .entry(connection.color.as_str())
            .or_default()
            .push(connection);
    }
    groups
        .into_iter()
        .map(|(color, accumulator)| accumulator.finish(color.to_string()))
        .collect()
}

/// Line with the lowest efficiency value; ties go to the first color.
pub fn most_efficient_line(stats: &[LineStats]) -> Option<&LineStats> {
    stats.iter().fold(None, |best: Option<&LineStats>, candidate| match best {
        Some(best) if best.efficiency <= candidate.efficiency => Some(best),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(from: StationId, to: StationId, color: &str, minutes: f64) -> Connection {
        Connection {
            from,
            to,
            color: color.to_string(),
            minutes,
        }
    }

    #[test]
    fn groups_are_sorted_by_color() {
        let stats = line_stats(&[
            connection(0, 1, "red", 2.0),
            connection(1, 2, "blue", 3.0),
            connection(1, 0, "red", 4.0),
        ]);
        let colors: Vec<_> = stats.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["blue", "red"]);

        let red = &stats[1];
        assert_eq!(red.connections, 2);
        assert_eq!(red.min_minutes, 2.0);
        assert_eq!(red.max_minutes, 4.0);
        assert_eq!(red.total_minutes, 6.0);
        assert_eq!(red.mean_minutes, 3.0);
        assert_eq!(red.stations, 2);
    }

    #[test]
    fn lowest_efficiency_wins() {
        let stats = line_stats(&[
            connection(0, 1, "red", 2.0),
            connection(1, 2, "blue", 1.0),
        ]);
        assert_eq!(
            most_efficient_line(&stats).map(|s| s.color.as_str()),
            Some("blue")
        );
        assert!(most_efficient_line(&[]).is_none());
    }
}
