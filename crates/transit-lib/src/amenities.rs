//! Station amenities joined with the lines that serve each station.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::network::{normalize_name, Amenities, NetworkGraph, StationId};

/// Number of stations kept in [`AmenityReport::top_connected`].
pub const TOP_CONNECTED: usize = 10;

/// A single amenity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Parking,
    Ramp,
    Lift,
    Underground,
}

impl Amenity {
    pub const ALL: [Amenity; 4] = [
        Amenity::Parking,
        Amenity::Ramp,
        Amenity::Lift,
        Amenity::Underground,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Amenity::Parking => "parking",
            Amenity::Ramp => "ramp",
            Amenity::Lift => "lift",
            Amenity::Underground => "underground",
        }
    }

    /// Whether `amenities` has this flag set.
    pub fn present(self, amenities: &Amenities) -> bool {
        match self {
            Amenity::Parking => amenities.parking,
            Amenity::Ramp => amenities.ramp,
            Amenity::Lift => amenities.lift,
            Amenity::Underground => amenities.underground,
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Amenity {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = normalize_name(value);
        let key = if key == "elevator" { "lift".to_string() } else { key };
        Amenity::ALL
            .into_iter()
            .find(|amenity| amenity.as_str() == key)
            .ok_or_else(|| Error::UnknownAmenity {
                name: value.trim().to_string(),
            })
    }
}

/// A station with the lines that serve it and its amenities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationProfile {
    pub station: String,
    /// Distinct connection colors touching the station, sorted.
    pub lines: Vec<String>,
    pub line_count: usize,
    pub amenities: Amenities,
}

impl StationProfile {
    pub fn has(&self, amenity: Amenity) -> bool {
        amenity.present(&self.amenities)
    }

    /// Ramp and lift both available.
    pub fn fully_accessible(&self) -> bool {
        self.amenities.ramp && self.amenities.lift
    }
}

/// One profile per station that is an endpoint of a connection, sorted by
/// station name.
pub fn station_profiles(network: &NetworkGraph) -> Vec<StationProfile> {
    let mut served: BTreeMap<StationId, BTreeSet<&str>> = BTreeMap::new();
    for connection in network.edges() {
        for id in [connection.from, connection.to] {
            served.entry(id).or_default().insert(connection.color.as_str());
        }
    }

    let mut profiles: Vec<StationProfile> = served
        .into_iter()
        .filter_map(|(id, colors)| {
            let station = network.station_name(id)?.to_string();
            Some(StationProfile {
                station,
                line_count: colors.len(),
                lines: colors.into_iter().map(str::to_string).collect(),
                amenities: network.amenities(id),
            })
        })
        .collect();
    profiles.sort_by(|a, b| a.station.cmp(&b.station));
    profiles
}

/// Criteria for selecting station profiles. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenityFilter {
    /// Keep stations served by any of these line colors.
    pub lines: Vec<String>,
    /// Keep stations offering every one of these amenities.
    pub required: Vec<Amenity>,
    pub min_lines: Option<usize>,
    pub max_lines: Option<usize>,
}

impl AmenityFilter {
    pub fn matches(&self, profile: &StationProfile) -> bool {
        if !self.lines.is_empty()
            && !self
                .lines
                .iter()
                .any(|line| profile.lines.contains(&normalize_name(line)))
        {
            return false;
        }
        if !self.required.iter().all(|amenity| profile.has(*amenity)) {
            return false;
        }
        if self.min_lines.is_some_and(|min| profile.line_count < min) {
            return false;
        }
        !self.max_lines.is_some_and(|max| profile.line_count > max)
    }

    pub fn apply(&self, profiles: &[StationProfile]) -> Vec<StationProfile> {
        profiles
            .iter()
            .filter(|profile| self.matches(profile))
            .cloned()
            .collect()
    }
}

/// Coverage figures for a set of station profiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmenityReport {
    pub total_stations: usize,
    /// Stations served by more than one line.
    pub multi_line_stations: usize,
    pub parking: usize,
    pub ramp: usize,
    pub lift: usize,
    pub underground: usize,
    /// Percentages of `total_stations`; 0 for an empty set.
    pub parking_coverage: f64,
    pub ramp_coverage: f64,
    pub lift_coverage: f64,
    pub average_lines: f64,
    pub max_lines: usize,
    /// Mean line count of the stations with parking.
    pub parking_average_lines: f64,
    pub fully_accessible: Vec<String>,
    /// Line count to number of stations with that many lines.
    pub line_distribution: BTreeMap<usize, usize>,
    /// Line color to number of stations on it with parking.
    pub parking_by_line: BTreeMap<String, usize>,
    pub top_connected: Vec<StationProfile>,
}

impl AmenityReport {
    pub fn from_profiles(profiles: &[StationProfile]) -> Self {
        let total = profiles.len();
        let count = |amenity: Amenity| profiles.iter().filter(|p| p.has(amenity)).count();
        let percent = |n: usize| {
            if total == 0 {
                0.0
            } else {
                n as f64 * 100.0 / total as f64
            }
        };
        let (parking, ramp, lift, underground) = (
            count(Amenity::Parking),
            count(Amenity::Ramp),
            count(Amenity::Lift),
            count(Amenity::Underground),
        );

        let mut line_distribution = BTreeMap::new();
        let mut parking_by_line: BTreeMap<String, usize> = BTreeMap::new();
        for profile in profiles {
            *line_distribution.entry(profile.line_count).or_insert(0) += 1;
            if profile.amenities.parking {
                for line in &profile.lines {
                    *parking_by_line.entry(line.clone()).or_insert(0) += 1;
                }
            }
        }

        let mut top_connected = profiles.to_vec();
        top_connected.sort_by(|a, b| b.line_count.cmp(&a.line_count));
        top_connected.truncate(TOP_CONNECTED);

        Self {
            total_stations: total,
            multi_line_stations: profiles.iter().filter(|p| p.line_count > 1).count(),
            parking,
            ramp,
            lift,
            underground,
            parking_coverage: percent(parking),
            ramp_coverage: percent(ramp),
            lift_coverage: percent(lift),
            average_lines: mean(profiles.iter().map(|p| p.line_count)),
            max_lines: profiles.iter().map(|p| p.line_count).max().unwrap_or(0),
            parking_average_lines: mean(
                profiles
                    .iter()
                    .filter(|p| p.amenities.parking)
                    .map(|p| p.line_count),
            ),
            fully_accessible: profiles
                .iter()
                .filter(|p| p.fully_accessible())
                .map(|p| p.station.clone())
                .collect(),
            line_distribution,
            parking_by_line,
            top_connected,
        }
    }
}

fn mean(values: impl Iterator<Item = usize>) -> f64 {
    let (sum, count) = values.fold((0usize, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(station: &str, lines: &[&str], amenities: Amenities) -> StationProfile {
        StationProfile {
            station: station.to_string(),
            lines: lines.iter().map(|line| line.to_string()).collect(),
            line_count: lines.len(),
            amenities,
        }
    }

    fn sample() -> Vec<StationProfile> {
        let accessible = Amenities {
            ramp: true,
            lift: true,
            ..Amenities::default()
        };
        vec![
            profile(
                "Alewife",
                &["red"],
                Amenities {
                    parking: true,
                    ramp: true,
                    ..Amenities::default()
                },
            ),
            profile("Park Street", &["green", "red"], accessible),
            profile("Porter", &["red"], Amenities::default()),
            profile(
                "State",
                &["blue", "orange"],
                Amenities {
                    parking: true,
                    underground: true,
                    ..accessible
                },
            ),
        ]
    }

    #[test]
    fn amenity_names_parse() {
        assert_eq!("Lift".parse::<Amenity>().expect("lift"), Amenity::Lift);
        assert_eq!(" elevator ".parse::<Amenity>().expect("lift"), Amenity::Lift);
        assert!(matches!(
            "escalator".parse::<Amenity>(),
            Err(Error::UnknownAmenity { name }) if name == "escalator"
        ));
    }

    #[test]
    fn filter_combines_lines_amenities_and_line_counts() {
        let profiles = sample();
        let names = |filter: &AmenityFilter| -> Vec<String> {
            filter
                .apply(&profiles)
                .into_iter()
                .map(|p| p.station)
                .collect()
        };

        let red = AmenityFilter {
            lines: vec!["RED".into()],
            ..AmenityFilter::default()
        };
        assert_eq!(names(&red), vec!["Alewife", "Park Street", "Porter"]);

        let parked_ramps = AmenityFilter {
            required: vec![Amenity::Parking, Amenity::Ramp],
            ..AmenityFilter::default()
        };
        assert_eq!(names(&parked_ramps), vec!["Alewife", "State"]);

        let transfers = AmenityFilter {
            lines: vec!["red".into(), "blue".into()],
            min_lines: Some(2),
            ..AmenityFilter::default()
        };
        assert_eq!(names(&transfers), vec!["Park Street", "State"]);

        let single = AmenityFilter {
            max_lines: Some(1),
            ..AmenityFilter::default()
        };
        assert_eq!(names(&single), vec!["Alewife", "Porter"]);
    }

    #[test]
    fn report_counts_and_coverage() {
        let report = AmenityReport::from_profiles(&sample());
        assert_eq!(report.total_stations, 4);
        assert_eq!(report.multi_line_stations, 2);
        assert_eq!(
            (report.parking, report.ramp, report.lift, report.underground),
            (2, 3, 2, 1)
        );
        assert_eq!(report.parking_coverage, 50.0);
        assert_eq!(report.ramp_coverage, 75.0);
        assert_eq!(report.lift_coverage, 50.0);
        assert_eq!(report.average_lines, 1.5);
        assert_eq!(report.max_lines, 2);
        assert_eq!(report.parking_average_lines, 1.5);
        assert_eq!(report.fully_accessible, vec!["Park Street", "State"]);
        assert_eq!(report.line_distribution, BTreeMap::from([(1, 2), (2, 2)]));
        assert_eq!(
            report.parking_by_line,
            BTreeMap::from([
                ("blue".to_string(), 1),
                ("orange".to_string(), 1),
                ("red".to_string(), 1),
            ])
        );
        let top: Vec<_> = report
            .top_connected
            .iter()
            .map(|p| p.station.as_str())
            .collect();
        assert_eq!(top, vec!["Park Street", "State", "Alewife", "Porter"]);
    }

    #[test]
    fn empty_report_has_zero_coverage() {
        let report = AmenityReport::from_profiles(&[]);
        assert_eq!(report.total_stations, 0);
        assert_eq!(report.parking_coverage, 0.0);
        assert_eq!(report.average_lines, 0.0);
        assert_eq!(report.max_lines, 0);
        assert!(report.top_connected.is_empty());
    }
}
