//! Canonical in-memory model of the transit network.
//!
//! [`NetworkGraph`] is built once from loader-supplied [`NetworkRecords`] and
//! is read-only afterwards. Construction validates every record and fails
//! closed: a malformed record aborts the build and no partially built graph
//! is ever returned.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, GraphLoadError, Result};

/// Index of a station inside a [`NetworkGraph`].
pub type StationId = usize;

/// Minimum Jaro-Winkler similarity for a station to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

/// Normalise a station or line name into its case-insensitive match key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Display coordinate for a station on the schematic map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StationPosition {
    pub x: f64,
    pub y: f64,
}

/// A station shared by every line that stops there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<StationPosition>,
    pub active: bool,
}

/// Loader-supplied station row.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub name: String,
    pub stop_code: Option<String>,
    pub position: Option<StationPosition>,
    pub active: bool,
}

impl StationRecord {
    /// Active station with no stop code or coordinates.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stop_code: None,
            position: None,
            active: true,
        }
    }
}

/// Loader-supplied line or branch: an ordered sequence of station names.
///
/// Records sharing a `code` and carrying a `branch` are merged into one
/// branched line, in the order the records are supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub code: String,
    pub name: String,
    pub branch: Option<String>,
    pub stations: Vec<String>,
}

impl LineRecord {
    pub fn simple<S: Into<String>>(
        code: impl Into<String>,
        name: impl Into<String>,
        stations: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            branch: None,
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn branch<S: Into<String>>(
        code: impl Into<String>,
        name: impl Into<String>,
        branch: impl Into<String>,
        stations: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            branch: Some(branch.into()),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Loader-supplied directed connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    pub color: String,
    pub minutes: f64,
}

impl ConnectionRecord {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        color: impl Into<String>,
        minutes: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            color: color.into(),
            minutes,
        }
    }
}

/// One curated transfer-table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferEntry {
    pub station: String,
    pub lines: Vec<String>,
}

/// Curated station -> lines table. Definition order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferTable {
    entries: Vec<TransferEntry>,
}

impl TransferTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning the table for chaining.
    pub fn with<S: Into<String>>(
        mut self,
        station: impl Into<String>,
        lines: impl IntoIterator<Item = S>,
    ) -> Self {
        self.push(station, lines);
        self
    }

    pub fn push<S: Into<String>>(
        &mut self,
        station: impl Into<String>,
        lines: impl IntoIterator<Item = S>,
    ) {
        self.entries.push(TransferEntry {
            station: station.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        });
    }

    pub fn entries(&self) -> &[TransferEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Curated transfer table of the Boston subway.
    pub fn boston_subway() -> Self {
        Self::new()
            .with("Park Street", ["red", "green"])
            .with("Downtown Crossing", ["red", "orange"])
            .with("State", ["orange", "blue"])
            .with("Government Center", ["blue", "green"])
            .with("Haymarket", ["orange", "green"])
            .with("North Station", ["orange", "green"])
            .with("Copley", ["green"])
            .with("Arlington", ["green"])
            .with("Boylston", ["green"])
    }
}

/// Parking and accessibility flags of a station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Amenities {
    pub parking: bool,
    pub ramp: bool,
    pub lift: bool,
    pub underground: bool,
}

/// Loader-supplied amenity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityRecord {
    pub station: String,
    pub amenities: Amenities,
}

impl AmenityRecord {
    pub fn new(station: impl Into<String>, amenities: Amenities) -> Self {
        Self {
            station: station.into(),
            amenities,
        }
    }
}

/// Everything the loader supplies to build a [`NetworkGraph`].
#[derive(Debug, Clone, Default)]
pub struct NetworkRecords {
    pub stations: Vec<StationRecord>,
    pub lines: Vec<LineRecord>,
    pub connections: Vec<ConnectionRecord>,
    pub transfers: TransferTable,
    pub amenities: Vec<AmenityRecord>,
}

/// Named branch of a line family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub id: String,
    pub stations: Vec<StationId>,
}

/// Station layout of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineLayout {
    Simple(Vec<StationId>),
    Branched(Vec<Branch>),
}

/// A registered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub code: String,
    pub name: String,
    pub layout: LineLayout,
}

impl Line {
    /// Every ordered sequence of the line with its branch id, in registration
    /// order.
    pub fn sequences(&self) -> Vec<(Option<&str>, &[StationId])> {
        match &self.layout {
            LineLayout::Simple(stations) => vec![(None, stations.as_slice())],
            LineLayout::Branched(branches) => branches
                .iter()
                .map(|branch| (Some(branch.id.as_str()), branch.stations.as_slice()))
                .collect(),
        }
    }

    /// Label for one of the line's sequences (`red`, `green-B`).
    pub fn label(&self, branch: Option<&str>) -> String {
        match branch {
            Some(branch) => format!("{}-{}", self.code, branch),
            None => self.code.clone(),
        }
    }

    pub fn is_branched(&self) -> bool {
        matches!(self.layout, LineLayout::Branched(_))
    }
}

/// Directed, timed connection between two stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    pub color: String,
    pub minutes: f64,
}

/// Position of a station within one line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPlacement {
    pub line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub index: usize,
}

impl StationPlacement {
    /// Line label, e.g. `red` or `green-B`.
    pub fn label(&self) -> String {
        match &self.branch {
            Some(branch) => format!("{}-{}", self.line, branch),
            None => self.line.clone(),
        }
    }

    /// Line family shared by all branches of a line.
    pub fn family(&self) -> &str {
        &self.line
    }
}

/// Transfer-table row resolved against the registered stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub station: StationId,
    pub lines: Vec<String>,
}

/// Station list of one line sequence, as returned by [`NetworkGraph::line_info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub station_count: usize,
    pub first: String,
    pub last: String,
    pub stations: Vec<String>,
}

/// Description of a line and each of its sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub code: String,
    pub name: String,
    pub sequences: Vec<SequenceSummary>,
}

impl LineSummary {
    pub fn is_branched(&self) -> bool {
        self.sequences.iter().any(|sequence| sequence.branch.is_some())
    }

    /// One-paragraph description, listing each branch on its own line.
    pub fn describe(&self) -> String {
        if !self.is_branched() {
            let (count, first, last) = self
                .sequences
                .first()
                .map(|s| (s.station_count, s.first.as_str(), s.last.as_str()))
                .unwrap_or((0, "", ""));
            return format!(
                "{} has {} stations from {} to {}.",
                self.name, count, first, last
            );
        }

        let branches: Vec<&str> = self
            .sequences
            .iter()
            .filter_map(|s| s.branch.as_deref())
            .collect();
        let mut response = format!(
            "{} has {} branches ({}):\n",
            self.name,
            branches.len(),
            branches.join(", ")
        );
        for sequence in &self.sequences {
            response.push_str(&format!(
                "\n{} Branch: {} stations from {} to {}",
                sequence.branch.as_deref().unwrap_or_default(),
                sequence.station_count,
                sequence.first,
                sequence.last
            ));
        }
        response
    }
}

/// Catalogue entry for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineListing {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
    /// Distinct active stations across every sequence of the line.
    pub station_count: usize,
}

/// Immutable transit network.
///
/// Inactive stations are registered (connections and analytics see them) but
/// never appear in a line sequence, so they cannot be routed to.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    stations: Vec<Station>,
    name_to_id: HashMap<String, StationId>,
    lines: Vec<Line>,
    connections: Vec<Connection>,
    transfers: Vec<Transfer>,
    placements: HashMap<StationId, Vec<StationPlacement>>,
    amenities: HashMap<StationId, Amenities>,
}

impl NetworkGraph {
    /// Validate the records and build the network.
    pub fn build(records: NetworkRecords) -> Result<Self> {
        let NetworkRecords {
            stations,
            lines,
            connections,
            transfers,
            amenities,
        } = records;

        let (stations, name_to_id) = register_stations(stations)?;
        let lines = register_lines(&stations, &name_to_id, lines)?;
        let connections = register_connections(&name_to_id, connections)?;
        let placements = index_placements(&lines);
        let transfers = register_transfers(&name_to_id, &lines, &placements, &transfers)?;
        let amenities = register_amenities(&name_to_id, amenities)?;

        info!(
            stations = stations.len(),
            lines = lines.len(),
            connections = connections.len(),
            transfers = transfers.len(),
            amenities = amenities.len(),
            "built transit network"
        );

        Ok(Self {
            stations,
            name_to_id,
            lines,
            connections,
            transfers,
            placements,
            amenities,
        })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Lookup a station by its case-insensitive, trimmed name.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.name_to_id
            .get(&normalize_name(name))
            .and_then(|id| self.stations.get(*id))
    }

    /// Canonical station name for an identifier.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.stations.get(id).map(|station| station.name.as_str())
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lookup a line by exact (case-insensitive) code.
    pub fn line(&self, code: &str) -> Option<&Line> {
        let key = normalize_name(code);
        self.lines.iter().find(|line| line.code == key)
    }

    /// The directed connection set used by graph algorithms.
    pub fn edges(&self) -> &[Connection] {
        &self.connections
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Amenities of a station; stations without a record have none.
    pub fn amenities(&self, id: StationId) -> Amenities {
        self.amenities.get(&id).copied().unwrap_or_default()
    }

    /// Every active station in registration order.
    pub fn active_stations(&self) -> Vec<&Station> {
        self.stations.iter().filter(|station| station.active).collect()
    }

    /// Every line with its branches and station count, in registration order.
    pub fn line_catalogue(&self) -> Vec<LineListing> {
        self.lines
            .iter()
            .map(|line| {
                let sequences = line.sequences();
                let distinct: HashSet<StationId> = sequences
                    .iter()
                    .flat_map(|(_, ids)| ids.iter().copied())
                    .collect();
                LineListing {
                    code: line.code.clone(),
                    name: line.name.clone(),
                    branches: sequences
                        .iter()
                        .filter_map(|(branch, _)| branch.map(str::to_string))
                        .collect(),
                    station_count: distinct.len(),
                }
            })
            .collect()
    }

    /// Every line sequence containing the station, in line then branch
    /// registration order. Empty when the name is unknown.
    pub fn resolve_station(&self, name: &str) -> Vec<StationPlacement> {
        self.name_to_id
            .get(&normalize_name(name))
            .and_then(|id| self.placements.get(id))
            .cloned()
            .unwrap_or_default()
    }

    /// Resolve a station, failing with [`Error::UnknownStation`] when no line
    /// sequence contains it.
    pub fn require_station(&self, name: &str) -> Result<Vec<StationPlacement>> {
        let placements = self.resolve_station(name);
        if placements.is_empty() {
            return Err(self.unknown_station(name));
        }
        Ok(placements)
    }

    /// Labels of the lines serving a station (`red`, `green-B`, ...).
    pub fn station_lines(&self, name: &str) -> Result<Vec<String>> {
        Ok(self
            .require_station(name)?
            .iter()
            .map(StationPlacement::label)
            .collect())
    }

    /// Ordered stations of a line, or of one branch of a branched line.
    pub fn station_sequence(&self, line: &str, branch: Option<&str>) -> Result<Vec<&Station>> {
        let registered = self.line(line).ok_or_else(|| self.unknown_line(line))?;
        let ids = match (&registered.layout, branch) {
            (LineLayout::Simple(stations), None) => stations,
            (LineLayout::Branched(branches), Some(branch)) => {
                let key = normalize_name(branch);
                &branches
                    .iter()
                    .find(|candidate| normalize_name(&candidate.id) == key)
                    .ok_or_else(|| self.unknown_line(&registered.label(Some(branch))))?
                    .stations
            }
            (_, branch) => return Err(self.unknown_line(&registered.label(branch))),
        };
        Ok(ids.iter().filter_map(|id| self.stations.get(*id)).collect())
    }

    /// Describe a line. Exact code matches win; otherwise the first line whose
    /// code or display name contains the query is returned.
    pub fn line_info(&self, query: &str) -> Result<LineSummary> {
        let key = normalize_name(query);
        if key.is_empty() {
            return Err(self.unknown_line(query));
        }

        let line = self
            .lines
            .iter()
            .find(|line| line.code == key)
            .or_else(|| {
                self.lines.iter().find(|line| {
                    line.code.contains(&key) || line.name.to_lowercase().contains(&key)
                })
            })
            .ok_or_else(|| self.unknown_line(query))?;

        let sequences = line
            .sequences()
            .into_iter()
            .map(|(branch, ids)| {
                let stations: Vec<String> = ids
                    .iter()
                    .filter_map(|id| self.station_name(*id))
                    .map(str::to_string)
                    .collect();
                SequenceSummary {
                    branch: branch.map(str::to_string),
                    station_count: stations.len(),
                    first: stations.first().cloned().unwrap_or_default(),
                    last: stations.last().cloned().unwrap_or_default(),
                    stations,
                }
            })
            .collect();

        Ok(LineSummary {
            code: line.code.clone(),
            name: line.name.clone(),
            sequences,
        })
    }

    /// Suggest registered station names similar to `name`.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let key = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .stations
            .iter()
            .filter(|station| self.placements.contains_key(&station.id))
            .map(|station| {
                let score = strsim::jaro_winkler(&key, &normalize_name(&station.name));
                (score, station.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    pub(crate) fn unknown_station(&self, name: &str) -> Error {
        Error::UnknownStation {
            name: name.trim().to_string(),
            suggestions: self.fuzzy_station_matches(name, MAX_SUGGESTIONS),
        }
    }

    fn unknown_line(&self, name: &str) -> Error {
        Error::UnknownLine {
            name: name.trim().to_string(),
            available: self.lines.iter().map(|line| line.name.clone()).collect(),
        }
    }
}

type StationIndex = (Vec<Station>, HashMap<String, StationId>);

fn register_stations(
    records: Vec<StationRecord>,
) -> std::result::Result<StationIndex, GraphLoadError> {
    let mut stations = Vec::with_capacity(records.len());
    let mut name_to_id = HashMap::with_capacity(records.len());

    for record in records {
        let name = record.name.trim().to_string();
        if name.is_empty() {
            return Err(GraphLoadError::EmptyStationName);
        }
        let id = stations.len();
        if name_to_id.insert(normalize_name(&name), id).is_some() {
            return Err(GraphLoadError::DuplicateStation { name });
        }
        stations.push(Station {
            id,
            name,
            stop_code: record.stop_code.filter(|code| !code.trim().is_empty()),
            position: record.position,
            active: record.active,
        });
    }

    debug!(count = stations.len(), "registered stations");
    Ok((stations, name_to_id))
}

fn register_lines(
    stations: &[Station],
    name_to_id: &HashMap<String, StationId>,
    records: Vec<LineRecord>,
) -> std::result::Result<Vec<Line>, GraphLoadError> {
    let mut lines: Vec<Line> = Vec::new();

    for record in records {
        let code = normalize_name(&record.code);
        if code.is_empty() {
            return Err(GraphLoadError::EmptyLineCode);
        }
        let branch = record
            .branch
            .as_deref()
            .map(str::trim)
            .filter(|branch| !branch.is_empty())
            .map(str::to_string);
        let label = match &branch {
            Some(branch) => format!("{code}-{branch}"),
            None => code.clone(),
        };

        if record.stations.is_empty() {
            return Err(GraphLoadError::EmptyLine { line: label });
        }

        let mut sequence = Vec::with_capacity(record.stations.len());
        let mut seen = HashSet::new();
        for station in &record.stations {
            let id = *name_to_id.get(&normalize_name(station)).ok_or_else(|| {
                GraphLoadError::UnknownLineStation {
                    line: label.clone(),
                    station: station.trim().to_string(),
                }
            })?;
            if !seen.insert(id) {
                return Err(GraphLoadError::DuplicateSequenceStation {
                    line: label,
                    station: stations[id].name.clone(),
                });
            }
            if stations[id].active {
                sequence.push(id);
            }
        }
        if sequence.is_empty() {
            return Err(GraphLoadError::EmptyLine { line: label });
        }

        match lines.iter_mut().find(|line| line.code == code) {
            Some(existing) => match (&mut existing.layout, branch) {
                (LineLayout::Simple(_), None) => {
                    return Err(GraphLoadError::DuplicateLine { line: code })
                }
                (LineLayout::Branched(branches), Some(branch)) => {
                    if branches
                        .iter()
                        .any(|candidate| candidate.id.eq_ignore_ascii_case(&branch))
                    {
                        return Err(GraphLoadError::DuplicateBranch { line: code, branch });
                    }
                    branches.push(Branch {
                        id: branch,
                        stations: sequence,
                    });
                }
                _ => return Err(GraphLoadError::MixedLineLayout { line: code }),
            },
            None => {
                let layout = match branch {
                    Some(branch) => LineLayout::Branched(vec![Branch {
                        id: branch,
                        stations: sequence,
                    }]),
                    None => LineLayout::Simple(sequence),
                };
                let name = match record.name.trim() {
                    "" => code.clone(),
                    name => name.to_string(),
                };
                lines.push(Line { code, name, layout });
            }
        }
    }

    debug!(count = lines.len(), "registered lines");
    Ok(lines)
}

fn register_connections(
    name_to_id: &HashMap<String, StationId>,
    records: Vec<ConnectionRecord>,
) -> std::result::Result<Vec<Connection>, GraphLoadError> {
    records
        .into_iter()
        .map(|record| -> std::result::Result<Connection, GraphLoadError> {
            let lookup = |station: &str| {
                name_to_id.get(&normalize_name(station)).copied().ok_or_else(|| {
                    GraphLoadError::UnknownConnectionStation {
                        from: record.from.trim().to_string(),
                        to: record.to.trim().to_string(),
                        station: station.trim().to_string(),
                    }
                })
            };
            let from = lookup(&record.from)?;
            let to = lookup(&record.to)?;

            let color = normalize_name(&record.color);
            if color.is_empty() {
                return Err(GraphLoadError::EmptyConnectionColor {
                    from: record.from.trim().to_string(),
                    to: record.to.trim().to_string(),
                });
            }
            if !record.minutes.is_finite() || record.minutes < 0.0 {
                return Err(GraphLoadError::InvalidTravelTime {
                    from: record.from.trim().to_string(),
                    to: record.to.trim().to_string(),
                    minutes: record.minutes.to_string(),
                });
            }

            Ok(Connection {
                from,
                to,
                color,
                minutes: record.minutes,
            })
        })
        .collect()
}

fn index_placements(lines: &[Line]) -> HashMap<StationId, Vec<StationPlacement>> {
    let mut placements: HashMap<StationId, Vec<StationPlacement>> = HashMap::new();
    for line in lines {
        for (branch, stations) in line.sequences() {
            for (index, id) in stations.iter().enumerate() {
                placements.entry(*id).or_default().push(StationPlacement {
                    line: line.code.clone(),
                    branch: branch.map(str::to_string),
                    index,
                });
            }
        }
    }
    placements
}

fn register_transfers(
    name_to_id: &HashMap<String, StationId>,
    lines: &[Line],
    placements: &HashMap<StationId, Vec<StationPlacement>>,
    table: &TransferTable,
) -> std::result::Result<Vec<Transfer>, GraphLoadError> {
    let mut transfers = Vec::with_capacity(table.entries().len());

    for entry in table.entries() {
        let station = *name_to_id
            .get(&normalize_name(&entry.station))
            .ok_or_else(|| GraphLoadError::UnknownTransferStation {
                station: entry.station.trim().to_string(),
            })?;
        if !placements.contains_key(&station) {
            return Err(GraphLoadError::TransferStationNotOnLine {
                station: entry.station.trim().to_string(),
            });
        }

        let mut codes: Vec<String> = Vec::with_capacity(entry.lines.len());
        for line in &entry.lines {
            let code = normalize_name(line);
            if !lines.iter().any(|registered| registered.code == code) {
                return Err(GraphLoadError::UnknownTransferLine {
                    station: entry.station.trim().to_string(),
                    line: line.trim().to_string(),
                });
            }
            if !codes.contains(&code) {
                codes.push(code);
            }
        }

        transfers.push(Transfer {
            station,
            lines: codes,
        });
    }

    Ok(transfers)
}

fn register_amenities(
    name_to_id: &HashMap<String, StationId>,
    records: Vec<AmenityRecord>,
) -> std::result::Result<HashMap<StationId, Amenities>, GraphLoadError> {
    let mut amenities = HashMap::with_capacity(records.len());
    for record in records {
        let station = record.station.trim().to_string();
        let id = *name_to_id
            .get(&normalize_name(&station))
            .ok_or_else(|| GraphLoadError::UnknownAmenityStation {
                station: station.clone(),
            })?;
        if amenities.insert(id, record.amenities).is_some() {
            return Err(GraphLoadError::DuplicateAmenityStation { station });
        }
    }
    Ok(amenities)
}
