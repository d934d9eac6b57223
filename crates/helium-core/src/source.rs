// Rust guideline compliant 2026-10-14

//! Record sources.
//!
//! A [`RecordSource`] stands in for the Helium API client. The bundled
//! [`SnapshotSource`] reads JSON:API documents saved from the API into a
//! directory:
//!
//! ```text
//! <dir>/sensor.json            {"data": [ ...sensors... ]}
//! <dir>/label.json             {"data": [ ...labels... ]}
//! <dir>/timeseries/<id>.json   {"data": [ ...datapoints of sensor <id>... ]}
//! ```

use crate::{Document, Error, Record, ResourceKind, Result};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Supplier of API records.
pub trait RecordSource {
    /// Returns every record of `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be fetched or decoded.
    fn list(&self, kind: ResourceKind) -> Result<Vec<Record>>;

    /// Returns the timeseries datapoints of a sensor.
    ///
    /// # Errors
    ///
    /// Returns an error if the datapoints cannot be fetched or decoded.
    fn timeseries(&self, sensor_id: &str) -> Result<Vec<Record>>;

    /// Returns the records of `kind` related to `parent`.
    ///
    /// Related ids are read from `relationships/<kind>/data` of the parent.
    /// Ids that `list(kind)` does not know are returned as bare
    /// `{"id", "type"}` records so the relationship stays complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the related records cannot be fetched.
    fn related(&self, parent: &Record, kind: ResourceKind) -> Result<Vec<Record>> {
        let ids = parent.related_ids(kind.name());
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let all = self.list(kind)?;
        ids.into_iter()
            .map(|id| match all.iter().find(|record| record.id() == id) {
                Some(record) => Ok(record.clone()),
                None => Record::new(json!({ "id": id, "type": kind.api_type() })),
            })
            .collect()
    }
}

/// File-backed record source.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    root: PathBuf,
}

impl SnapshotSource {
    /// Creates a source reading from `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` exists but is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(Error::Config(format!(
                "snapshot path is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Returns the path of the list document for `kind`.
    pub fn list_path(&self, kind: ResourceKind) -> PathBuf {
        self.root.join(format!("{}.json", kind.name()))
    }

    /// Returns the path of the timeseries document for a sensor.
    pub fn timeseries_path(&self, sensor_id: &str) -> PathBuf {
        self.root.join("timeseries").join(format!("{}.json", sensor_id))
    }

    fn load(&self, path: &Path) -> Result<Vec<Record>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "snapshot document missing, treating as empty");
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(path)?;
        let records = Document::parse(&content)?.into_records()?;
        tracing::debug!(path = %path.display(), count = records.len(), "loaded snapshot document");
        Ok(records)
    }
}

impl RecordSource for SnapshotSource {
    fn list(&self, kind: ResourceKind) -> Result<Vec<Record>> {
        self.load(&self.list_path(kind))
    }

    fn timeseries(&self, sensor_id: &str) -> Result<Vec<Record>> {
        self.load(&self.timeseries_path(sensor_id))
    }
}
