// Rust guideline compliant 2026-10-14

//! Field maps: the columns displayed for each resource kind.

use crate::context::OutputContext;
use helium_core::{Record, ResourceKind};
use serde_json::Value;

type Extractor = Box<dyn Fn(&Record, &OutputContext) -> String>;

/// A named column and the function extracting its value from a record.
pub struct Column {
    header: &'static str,
    extract: Extractor,
}

impl Column {
    /// Creates a column from an extractor function.
    pub fn new<F>(header: &'static str, extract: F) -> Self
    where
        F: Fn(&Record, &OutputContext) -> String + 'static,
    {
        Self {
            header,
            extract: Box::new(extract),
        }
    }

    /// The id column, shortened unless full ids are requested.
    pub fn id() -> Self {
        Self::new("id", |record, ctx| ctx.id(record.id()).to_string())
    }

    /// A column showing the value at a slash-delimited path.
    pub fn path(header: &'static str, path: &'static str) -> Self {
        Self::new(header, move |record, _| {
            record.get(path).map(value_to_string).unwrap_or_default()
        })
    }

    /// A column counting the related records of `kind`.
    pub fn related_count(header: &'static str, kind: ResourceKind) -> Self {
        Self::new(header, move |record, _| {
            record.related_ids(kind.name()).len().to_string()
        })
    }

    /// Returns the column header.
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Extracts the column value from a record.
    pub fn value(&self, record: &Record, ctx: &OutputContext) -> String {
        (self.extract)(record, ctx)
    }
}

/// Ordered list of columns.
pub type FieldMap = Vec<Column>;

/// Returns the field map for a resource kind.
pub fn field_map(kind: ResourceKind) -> FieldMap {
    match kind {
        ResourceKind::Sensor => vec![
            Column::id(),
            Column::path("mac", "meta/mac"),
            Column::path("name", "attributes/name"),
            Column::path("ports", "meta/ports"),
            Column::new("scripts", |record, _| map_script_filenames(record)),
        ],
        ResourceKind::Element => vec![
            Column::id(),
            Column::path("mac", "meta/mac"),
            Column::path("name", "attributes/name"),
            Column::path("version", "meta/versions/element"),
        ],
        ResourceKind::Label => vec![
            Column::id(),
            Column::path("name", "attributes/name"),
            Column::related_count("sensors", ResourceKind::Sensor),
        ],
        ResourceKind::User => vec![
            Column::id(),
            Column::path("name", "attributes/name"),
            Column::path("email", "attributes/email"),
        ],
        ResourceKind::Organization => vec![
            Column::id(),
            Column::path("name", "attributes/name"),
            Column::related_count("users", ResourceKind::User),
        ],
        ResourceKind::Timeseries => vec![
            Column::id(),
            Column::path("timestamp", "attributes/timestamp"),
            Column::path("port", "attributes/port"),
            Column::path("value", "attributes/value"),
        ],
    }
}

/// Renders a JSON value as a cell.
///
/// Strings are shown without quotes, arrays are joined with `, ` and null
/// is empty.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Returns the file names of the scripts loaded on a sensor.
pub fn map_script_filenames(record: &Record) -> String {
    let urls: Vec<&str> = record
        .get("meta/scripts")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    extract_script_filenames(&urls).join(", ")
}

/// Returns the last path segment of each URL.
///
/// Scheme, authority, query and fragment are ignored.
pub fn extract_script_filenames(urls: &[&str]) -> Vec<String> {
    urls.iter()
        .map(|url| {
            let without_fragment = url.split('#').next().unwrap_or_default();
            let without_query = without_fragment.split('?').next().unwrap_or_default();
            let path = match without_query.split_once("://") {
                Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or(""),
                None => without_query,
            };
            path.rsplit('/').next().unwrap_or_default().to_string()
        })
        .collect()
}
