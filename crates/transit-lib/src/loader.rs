//! CSV dataset loading.
//!
//! Each reader accepts any [`Read`] source so tests can feed in-memory data.
//! Header names are matched case-insensitively after stripping punctuation.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::dataset::{
    DatasetPaths, AMENITIES_FILE, CONNECTIONS_FILE, LINES_FILE, STATIONS_FILE, TRANSFERS_FILE,
};
use crate::error::{Error, Result};
use crate::network::{
    Amenities, AmenityRecord, ConnectionRecord, LineRecord, NetworkGraph, NetworkRecords,
    StationPosition, StationRecord, TransferTable,
};

/// Column lookup for one CSV file.
struct Columns {
    file: &'static str,
    index: HashMap<&'static str, usize>,
}

impl Columns {
    fn resolve(
        file: &'static str,
        headers: &StringRecord,
        fields: &[(&'static str, &[&str], bool)],
    ) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut index = HashMap::new();
        let mut missing = Vec::new();

        for (field, synonyms, required) in fields {
            let position = synonyms
                .iter()
                .find_map(|alt| normalized.iter().position(|header| header == alt));
            match position {
                Some(position) => {
                    index.insert(*field, position);
                }
                None if *required => missing.push(*field),
                None => {}
            }
        }

        if !missing.is_empty() {
            return Err(Error::InvalidRecord {
                file: file.to_string(),
                row: 1,
                message: format!(
                    "missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }
        Ok(Self { file, index })
    }

    fn get<'r>(&self, record: &'r StringRecord, field: &str) -> Option<&'r str> {
        self.index
            .get(field)
            .and_then(|&i| record.get(i))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn require<'r>(&self, record: &'r StringRecord, row: usize, field: &str) -> Result<&'r str> {
        self.get(record, field)
            .ok_or_else(|| self.invalid(row, format!("missing {field}")))
    }

    /// Optional yes/no flag; blank or missing cells read as `false`.
    fn flag(&self, record: &StringRecord, row: usize, field: &str) -> Result<bool> {
        match self.get(record, field) {
            None => Ok(false),
            Some(value) => parse_bool(value)
                .ok_or_else(|| self.invalid(row, format!("invalid {field} flag '{value}'"))),
        }
    }

    fn number(&self, record: &StringRecord, row: usize, field: &str) -> Result<Option<f64>> {
        self.get(record, field)
            .map(|value| {
                value
                    .parse::<f64>()
                    .map_err(|err| self.invalid(row, format!("invalid {field} '{value}': {err}")))
            })
            .transpose()
    }

    fn invalid(&self, row: usize, message: String) -> Error {
        Error::InvalidRecord {
            file: self.file.to_string(),
            row,
            message,
        }
    }
}

fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader)
}

/// Iterate records with their 1-based file row (the header is row 1).
fn rows<R: Read>(
    reader: &mut csv::Reader<R>,
) -> impl Iterator<Item = (usize, csv::Result<StringRecord>)> + '_ {
    reader
        .records()
        .enumerate()
        .map(|(offset, record)| (offset + 2, record))
}

pub fn read_stations<R: Read>(reader: R) -> Result<Vec<StationRecord>> {
    let mut reader = csv_reader(reader);
    let columns = Columns::resolve(
        STATIONS_FILE,
        reader.headers()?,
        &[
            ("name", &["name", "station", "station_name"], true),
            ("stop_code", &["stop_code", "stopcode", "code"], false),
            ("x", &["x"], false),
            ("y", &["y"], false),
            ("active", &["active"], false),
        ],
    )?;

    let mut stations = Vec::new();
    for (row, record) in rows(&mut reader) {
        let record = record?;
        let name = columns.require(&record, row, "name")?;
        let position = match (
            columns.number(&record, row, "x")?,
            columns.number(&record, row, "y")?,
        ) {
            (Some(x), Some(y)) => Some(StationPosition { x, y }),
            (None, None) => None,
            _ => return Err(columns.invalid(row, "x and y must be given together".into())),
        };
        let active = match columns.get(&record, "active") {
            None => true,
            Some(value) => parse_bool(value)
                .ok_or_else(|| columns.invalid(row, format!("invalid active flag '{value}'")))?,
        };
        stations.push(StationRecord {
            name: name.to_string(),
            stop_code: columns.get(&record, "stop_code").map(str::to_string),
            position,
            active,
        });
    }
    debug!(count = stations.len(), "read stations");
    Ok(stations)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Read one row per stop; rows sharing `(line, branch)` form one sequence in
/// file order.
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<LineRecord>> {
    let mut reader = csv_reader(reader);
    let columns = Columns::resolve(
        LINES_FILE,
        reader.headers()?,
        &[
            ("line", &["line", "code", "line_code"], true),
            ("name", &["name", "line_name"], false),
            ("branch", &["branch"], false),
            ("station", &["station", "stop", "station_name"], true),
        ],
    )?;

    let mut lines: Vec<LineRecord> = Vec::new();
    let mut positions: HashMap<(String, Option<String>), usize> = HashMap::new();
    for (row, record) in rows(&mut reader) {
        let record = record?;
        let code = columns.require(&record, row, "line")?.to_lowercase();
        let branch = columns.get(&record, "branch").map(str::to_string);
        let station = columns.require(&record, row, "station")?.to_string();
        let name = columns.get(&record, "name");

        let key = (code.clone(), branch.clone());
        let position = *positions.entry(key).or_insert_with(|| {
            lines.push(LineRecord {
                code,
                name: String::new(),
                branch,
                stations: Vec::new(),
            });
            lines.len() - 1
        });
        let line = &mut lines[position];
        if line.name.is_empty() {
            if let Some(name) = name {
                line.name = name.to_string();
            }
        }
        line.stations.push(station);
    }
    debug!(count = lines.len(), "read line sequences");
    Ok(lines)
}

pub fn read_connections<R: Read>(reader: R) -> Result<Vec<ConnectionRecord>> {
    let mut reader = csv_reader(reader);
    let columns = Columns::resolve(
        CONNECTIONS_FILE,
        reader.headers()?,
        &[
            ("from", &["from", "source"], true),
            ("to", &["to", "target"], true),
            ("color", &["color", "colour", "line"], true),
            ("minutes", &["minutes", "time", "travel_time"], true),
        ],
    )?;

    let mut connections = Vec::new();
    for (row, record) in rows(&mut reader) {
        let record = record?;
        let minutes = columns
            .number(&record, row, "minutes")?
            .ok_or_else(|| columns.invalid(row, "missing minutes".into()))?;
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(columns.invalid(row, format!("travel time must be non-negative, got {minutes}")));
        }
        connections.push(ConnectionRecord::new(
            columns.require(&record, row, "from")?,
            columns.require(&record, row, "to")?,
            columns.require(&record, row, "color")?,
            minutes,
        ));
    }
    debug!(count = connections.len(), "read connections");
    Ok(connections)
}

/// Read `station,lines` rows with line codes separated by `;`.
pub fn read_transfers<R: Read>(reader: R) -> Result<TransferTable> {
    let mut reader = csv_reader(reader);
    let columns = Columns::resolve(
        TRANSFERS_FILE,
        reader.headers()?,
        &[
            ("station", &["station", "name"], true),
            ("lines", &["lines", "line"], true),
        ],
    )?;

    let mut table = TransferTable::new();
    for (row, record) in rows(&mut reader) {
        let record = record?;
        let station = columns.require(&record, row, "station")?;
        let lines: Vec<&str> = columns
            .require(&record, row, "lines")?
            .split(';')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(columns.invalid(row, format!("transfer station {station} lists no lines")));
        }
        table.push(station, lines);
    }
    Ok(table)
}

/// Read `Station,Parking,Ramp,Lift,Underground` rows of `Yes`/`No` flags.
pub fn read_amenities<R: Read>(reader: R) -> Result<Vec<AmenityRecord>> {
    let mut reader = csv_reader(reader);
    let columns = Columns::resolve(
        AMENITIES_FILE,
        reader.headers()?,
        &[
            ("station", &["station", "name", "station_name"], true),
            ("parking", &["parking"], false),
            ("ramp", &["ramp"], false),
            ("lift", &["lift", "elevator"], false),
            ("underground", &["underground"], false),
        ],
    )?;

    let mut amenities = Vec::new();
    for (row, record) in rows(&mut reader) {
        let record = record?;
        let station = columns.require(&record, row, "station")?;
        amenities.push(AmenityRecord::new(
            station,
            Amenities {
                parking: columns.flag(&record, row, "parking")?,
                ramp: columns.flag(&record, row, "ramp")?,
                lift: columns.flag(&record, row, "lift")?,
                underground: columns.flag(&record, row, "underground")?,
            },
        ));
    }
    debug!(count = amenities.len(), "read station amenities");
    Ok(amenities)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::DatasetNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })
}

/// Read every CSV file of a dataset directory.
pub fn load_records(paths: &DatasetPaths) -> Result<NetworkRecords> {
    let stations = read_stations(open(&paths.stations)?)?;
    let lines = read_lines(open(&paths.lines)?)?;
    let connections = read_connections(open(&paths.connections)?)?;
    let transfers = match &paths.transfers {
        Some(path) => read_transfers(open(path)?)?,
        None => {
            debug!("no transfers file; using built-in transfer table");
            TransferTable::boston_subway()
        }
    };
    let amenities = match &paths.amenities {
        Some(path) => read_amenities(open(path)?)?,
        None => Vec::new(),
    };

    Ok(NetworkRecords {
        stations,
        lines,
        connections,
        transfers,
        amenities,
    })
}

/// Read a dataset directory and build the network.
pub fn load_network(paths: &DatasetPaths) -> Result<NetworkGraph> {
    info!(path = %paths.root.display(), "loading transit dataset");
    NetworkGraph::build(load_records(paths)?)
}
