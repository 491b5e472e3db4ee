use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "TRANSIT_DATA_DIR";

pub const STATIONS_FILE: &str = "stations.csv";
pub const LINES_FILE: &str = "lines.csv";
pub const CONNECTIONS_FILE: &str = "connections.csv";
pub const TRANSFERS_FILE: &str = "transfers.csv";
pub const AMENITIES_FILE: &str = "amenities.csv";

/// Paths to the CSV files of one dataset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub root: PathBuf,
    pub stations: PathBuf,
    pub lines: PathBuf,
    pub connections: PathBuf,
    /// Curated transfer table; the built-in table is used when absent.
    pub transfers: Option<PathBuf>,
    /// Station amenity flags; no station has amenities when absent.
    pub amenities: Option<PathBuf>,
}

impl DatasetPaths {
    /// Paths for a dataset directory, without checking that it exists.
    pub fn for_dir(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let transfers = root.join(TRANSFERS_FILE);
        let amenities = root.join(AMENITIES_FILE);
        Self {
            stations: root.join(STATIONS_FILE),
            lines: root.join(LINES_FILE),
            connections: root.join(CONNECTIONS_FILE),
            transfers: transfers.is_file().then_some(transfers),
            amenities: amenities.is_file().then_some(amenities),
            root,
        }
    }

    /// Fail with [`Error::DatasetNotFound`] naming the first missing file.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(Error::DatasetNotFound {
                path: self.root.clone(),
            });
        }
        for required in [&self.stations, &self.lines, &self.connections] {
            if !required.is_file() {
                return Err(Error::DatasetNotFound {
                    path: required.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Platform data directory for the dataset, e.g. `~/.local/share/transit`.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "transit", "transit").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the dataset directory and check its required files.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `TRANSIT_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    let root = match target {
        Some(explicit) => explicit.to_path_buf(),
        None => match env::var_os(DATA_DIR_ENV) {
            Some(env_path) => PathBuf::from(env_path),
            None => default_data_dir()?,
        },
    };
    debug!(path = %root.display(), "resolved dataset directory");

    let paths = DatasetPaths::for_dir(root);
    paths.validate()?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let err = resolve_dataset(Some(&missing)).expect_err("missing dir");
        assert!(matches!(err, Error::DatasetNotFound { path } if path == missing));
    }

    #[test]
    fn transfers_and_amenities_are_optional() {
        let dir = tempfile::tempdir().expect("tempdir");
        for file in [STATIONS_FILE, LINES_FILE, CONNECTIONS_FILE] {
            fs::write(dir.path().join(file), "").expect("write");
        }
        let paths = resolve_dataset(Some(dir.path())).expect("dataset");
        assert!(paths.transfers.is_none());
        assert!(paths.amenities.is_none());

        fs::write(dir.path().join(TRANSFERS_FILE), "").expect("write");
        fs::write(dir.path().join(AMENITIES_FILE), "").expect("write");
        let paths = DatasetPaths::for_dir(dir.path());
        assert!(paths.transfers.is_some());
        assert_eq!(paths.amenities, Some(dir.path().join(AMENITIES_FILE)));
    }

    #[test]
    fn missing_required_file_is_named() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(STATIONS_FILE), "").expect("write");
        let err = resolve_dataset(Some(dir.path())).expect_err("incomplete");
        assert!(
            matches!(err, Error::DatasetNotFound { path } if path.ends_with(LINES_FILE))
        );
    }
}
