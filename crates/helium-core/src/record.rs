// Rust guideline compliant 2026-10-14

//! API records and JSON:API documents.
//!
//! Records are opaque JSON objects as returned by the Helium API. The only
//! field the library relies on is `id`; everything else is reached through
//! slash-delimited paths such as `attributes/name` or `meta/mac`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single API resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wraps a JSON value as a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object with a string `id`.
    pub fn new(value: Value) -> Result<Self> {
        match value.get("id") {
            Some(Value::String(_)) => Ok(Self(value)),
            Some(other) => Err(Error::InvalidRecord(format!(
                "record id must be a string, got {}",
                other
            ))),
            None => Err(Error::InvalidRecord("record has no id".to_string())),
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> &str {
        self.0.get("id").and_then(Value::as_str).unwrap_or_default()
    }

    /// Looks up a nested value by slash-delimited path.
    ///
    /// Object segments are keys, array segments are decimal indexes. Empty
    /// segments are ignored, so `"/meta/mac"` and `"meta/mac"` are the same.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.0, path)
    }

    /// Looks up a nested string value by slash-delimited path.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Returns the ids listed under `relationships/<name>/data`.
    pub fn related_ids(&self, name: &str) -> Vec<&str> {
        self.get(&format!("relationships/{}/data", name))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("id").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// A JSON:API document carrying either one record or a list of records.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    data: Value,
}

impl Document {
    /// Parses a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or has no `data` member.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Converts the document payload into records.
    ///
    /// A single object yields one record; `null` yields none.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not a valid record.
    pub fn into_records(self) -> Result<Vec<Record>> {
        match self.data {
            Value::Array(items) => items.into_iter().map(Record::new).collect(),
            Value::Null => Ok(Vec::new()),
            value @ Value::Object(_) => Ok(vec![Record::new(value)?]),
            other => Err(Error::InvalidRecord(format!(
                "document data must be an object or array, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sensor() -> Record {
        Record::new(json!({
            "id": "aa11bb22-0000-0000-0000-000000000001",
            "type": "sensor",
            "attributes": { "name": "Kitchen" },
            "meta": { "mac": "6081f9fffe000123", "ports": ["t", "h"] },
            "relationships": {
                "label": { "data": [{ "id": "l1", "type": "label" }, { "type": "label" }] }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_get_nested_path() {
        let record = sensor();
        assert_eq!(record.get_str("attributes/name"), Some("Kitchen"));
        assert_eq!(record.get_str("/meta/mac"), Some("6081f9fffe000123"));
        assert_eq!(record.get_str("meta/ports/1"), Some("h"));
    }

    #[test]
    fn test_get_missing_path_is_none() {
        let record = sensor();
        assert!(record.get("attributes/missing").is_none());
        assert!(record.get("meta/ports/9").is_none());
        assert!(record.get("attributes/name/deeper").is_none());
    }

    #[test]
    fn test_related_ids_skips_entries_without_id() {
        assert_eq!(sensor().related_ids("label"), vec!["l1"]);
        assert!(sensor().related_ids("element").is_empty());
    }

    #[test]
    fn test_record_requires_string_id() {
        assert!(Record::new(json!({ "name": "x" })).is_err());
        assert!(Record::new(json!({ "id": 5 })).is_err());
    }

    #[test]
    fn test_document_single_and_list() {
        let single = Document::parse(r#"{"data": {"id": "a"}}"#).unwrap();
        assert_eq!(single.into_records().unwrap().len(), 1);

        let list = Document::parse(r#"{"data": [{"id": "a"}, {"id": "b"}]}"#).unwrap();
        let ids: Vec<String> = list
            .into_records()
            .unwrap()
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);

        let empty = Document::parse(r#"{"data": null}"#).unwrap();
        assert!(empty.into_records().unwrap().is_empty());
    }

    #[test]
    fn test_document_rejects_scalar_data() {
        let doc = Document::parse(r#"{"data": 3}"#).unwrap();
        assert!(doc.into_records().is_err());
    }
}
