//! Backing tabular sources for the route dataset.
//!
//! Graph construction never talks to the filesystem directly; it asks a
//! [`RecordSource`] for the data rows. [`CsvFileSource`] re-reads the file on
//! every request, while [`SnapshotSource`] parses once and hands out the same
//! immutable rows until it is explicitly reloaded.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};

/// Provider of data rows (header excluded) for graph construction.
pub trait RecordSource: Send + Sync {
    /// Return every data row in file order.
    fn records(&self) -> Result<Cow<'_, [StringRecord]>>;
}

/// Dataset backed by a CSV file that is fully re-read on each call.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<StringRecord>> {
        let file = File::open(&self.path).map_err(|source| Error::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        let rows = read_records(file)?;
        debug!(
            path = %self.path.display(),
            rows = rows.len(),
            "scanned route dataset"
        );
        Ok(rows)
    }
}

impl RecordSource for CsvFileSource {
    fn records(&self) -> Result<Cow<'_, [StringRecord]>> {
        Ok(Cow::Owned(self.read_all()?))
    }
}

/// Parsed, immutable copy of a dataset shared across queries.
///
/// Cloning is cheap: clones share the same rows. [`SnapshotSource::reload`]
/// swaps in a fresh parse without disturbing clones taken earlier.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    origin: Option<CsvFileSource>,
    rows: Arc<[StringRecord]>,
}

impl SnapshotSource {
    /// Parse the file at `path` once.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let origin = CsvFileSource::new(path);
        let rows = origin.read_all()?;
        Ok(Self {
            origin: Some(origin),
            rows: rows.into(),
        })
    }

    /// Parse CSV content (with a header row) from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self {
            origin: None,
            rows: read_records(reader)?.into(),
        })
    }

    /// Re-read the originating file, replacing the cached rows.
    ///
    /// Snapshots built from a reader have nothing to reload and are left as-is.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(origin) = &self.origin {
            self.rows = origin.read_all()?.into();
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordSource for SnapshotSource {
    fn records(&self) -> Result<Cow<'_, [StringRecord]>> {
        Ok(Cow::Borrowed(&self.rows[..]))
    }
}

/// Line number of a data row, for error reporting.
pub(crate) fn row_number(index: usize, record: &StringRecord) -> usize {
    record
        .position()
        .map(|position| position.line() as usize)
        .unwrap_or(index + 2)
}

fn read_records<R: Read>(reader: R) -> Result<Vec<StringRecord>> {
    // Short rows are accepted here and rejected per-column by the graph
    // builder so the error can name the missing column.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        rows.push(result?);
    }
    Ok(rows)
}
