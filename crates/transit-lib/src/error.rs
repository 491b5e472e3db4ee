use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the transit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a station name does not appear in any line sequence.
    #[error("unknown station '{name}'{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an amenity name is not one of parking, ramp, lift or
    /// underground.
    #[error("unknown amenity '{name}'. Available amenities: parking, ramp, lift, underground")]
    UnknownAmenity { name: String },

    /// Raised when a line lookup matches no registered line.
    #[error("unknown line '{name}'. Available lines: {}", .available.join(", "))]
    UnknownLine {
        name: String,
        available: Vec<String>,
    },

    /// Raised when the network records are malformed. The graph is never
    /// built in this case.
    #[error("failed to build transit network: {0}")]
    GraphLoad(#[from] GraphLoadError),

    /// Raised when a dataset row cannot be parsed.
    #[error("invalid record in {file} at row {row}: {message}")]
    InvalidRecord {
        file: String,
        row: usize,
        message: String,
    },

    /// Dataset directory or required file could not be located.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the transit dataset")]
    DataDirUnavailable,

    /// Raised when a cancellable computation observed its cancel token.
    #[error("computation interrupted")]
    Interrupted,

    /// Wrapper for CSV errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Validation failures raised while building a [`crate::NetworkGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphLoadError {
    #[error("station record has an empty name")]
    EmptyStationName,

    #[error("duplicate station name: {name}")]
    DuplicateStation { name: String },

    #[error("line record has an empty code")]
    EmptyLineCode,

    #[error("line {line} has no stations")]
    EmptyLine { line: String },

    #[error("duplicate line code: {line}")]
    DuplicateLine { line: String },

    #[error("duplicate branch {branch} on line {line}")]
    DuplicateBranch { line: String, branch: String },

    #[error("line {line} mixes branched and unbranched records")]
    MixedLineLayout { line: String },

    #[error("line {line} references unknown station {station}")]
    UnknownLineStation { line: String, station: String },

    #[error("station {station} appears more than once on {line}")]
    DuplicateSequenceStation { line: String, station: String },

    #[error("connection {from} -> {to} references unknown station {station}")]
    UnknownConnectionStation {
        from: String,
        to: String,
        station: String,
    },

    #[error("connection {from} -> {to} has an empty line color")]
    EmptyConnectionColor { from: String, to: String },

    #[error("connection {from} -> {to} has invalid travel time {minutes}")]
    InvalidTravelTime {
        from: String,
        to: String,
        minutes: String,
    },

    #[error("transfer station {station} is not a registered station")]
    UnknownTransferStation { station: String },

    #[error("transfer station {station} is not on any line")]
    TransferStationNotOnLine { station: String },

    #[error("transfer station {station} lists unknown line {line}")]
    UnknownTransferLine { station: String, line: String },

    #[error("amenity record names unknown station {station}")]
    UnknownAmenityStation { station: String },

    #[error("station {station} has more than one amenity record")]
    DuplicateAmenityStation { station: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
