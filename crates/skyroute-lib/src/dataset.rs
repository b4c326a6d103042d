use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Default filename for the route dataset.
pub const DATASET_FILENAME: &str = "routes.csv";

/// Environment variable overriding the dataset location.
pub const DATA_DIR_ENV: &str = "SKYROUTE_DATA_DIR";

/// Zero-based column positions within the route dataset.
///
/// Every field falls back to the stock layout when omitted from a JSON
/// override, so a partial file only needs the columns that moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub source_code: usize,
    pub source_name: usize,
    pub source_city: usize,
    pub source_country: usize,
    pub source_latitude: usize,
    pub source_longitude: usize,
    pub airline: usize,
    pub destination_code: usize,
    pub destination_name: usize,
    pub destination_city: usize,
    pub destination_country: usize,
    pub destination_latitude: usize,
    pub destination_longitude: usize,
    pub distance: usize,
    pub cost: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            source_code: 0,
            source_name: 2,
            source_city: 3,
            source_country: 4,
            source_latitude: 5,
            source_longitude: 6,
            airline: 10,
            destination_code: 11,
            destination_name: 13,
            destination_city: 14,
            destination_country: 15,
            destination_latitude: 16,
            destination_longitude: 17,
            distance: 20,
            cost: 24,
        }
    }
}

impl ColumnLayout {
    /// Load a layout override from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let layout = serde_json::from_str(&contents).map_err(|err| Error::LayoutConfig {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        debug!(path = %path.display(), "loaded column layout override");
        Ok(layout)
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "skyroute", "skyroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve which dataset file to read.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `SKYROUTE_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
///
/// Directories resolve to the `routes.csv` file inside them. Existence is not
/// checked here; opening a missing file surfaces as
/// [`Error::SourceUnavailable`] when the dataset is first read.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(canonical_dataset_path(explicit));
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        let resolved = canonical_dataset_path(Path::new(&env_path));
        info!(path = %resolved.display(), "using dataset from {}", DATA_DIR_ENV);
        return Ok(resolved);
    }

    default_dataset_path()
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.extension().is_some() && !path.is_dir() {
        return path.to_path_buf();
    }

    path.join(DATASET_FILENAME)
}
