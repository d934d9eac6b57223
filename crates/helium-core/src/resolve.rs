// Rust guideline compliant 2026-10-14

//! Resolution of user-supplied references to resource ids.
//!
//! A reference is one of:
//! - a full UUID, matched exactly against record ids
//! - a short id, the part of an id before its first hyphen
//! - a case-insensitive prefix of the record name
//! - a case-insensitive suffix of the record MAC address (MAC mode only)
//!
//! Resolution succeeds only when exactly one record matches.

use crate::identity::{is_uuid, shorten_id};
use crate::{Error, Record, Result};

/// Default path of the name field inside a record.
pub const DEFAULT_NAME_PATH: &str = "attributes/name";

/// Path of the MAC address field inside a record.
pub const MAC_PATH: &str = "meta/mac";

/// Options controlling how references are matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Slash-delimited path of the name field.
    pub name_path: String,
    /// Match references against the end of the MAC address instead of
    /// ids and names.
    pub match_by_mac: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            name_path: DEFAULT_NAME_PATH.to_string(),
            match_by_mac: false,
        }
    }
}

impl ResolveOptions {
    /// Returns options that match by MAC suffix.
    #[must_use]
    pub fn by_mac() -> Self {
        Self {
            match_by_mac: true,
            ..Self::default()
        }
    }

    /// Overrides the name path.
    #[must_use]
    pub fn with_name_path(mut self, path: impl Into<String>) -> Self {
        self.name_path = path.into();
        self
    }
}

/// Resolves `reference` against `records`.
///
/// # Arguments
///
/// * `records` - Candidate records, scanned in order
/// * `reference` - Full UUID, short id, name prefix or MAC suffix
/// * `options` - Name path and MAC mode
///
/// # Returns
///
/// The id of the single matching record.
///
/// # Errors
///
/// Returns `Error::NotFound` when nothing matches and
/// `Error::AmbiguousReference` when more than one record matches.
pub fn resolve(records: &[Record], reference: &str, options: &ResolveOptions) -> Result<String> {
    let exact = !options.match_by_mac && is_uuid(reference);
    let reference_lower = reference.to_lowercase();
    let reference_len = reference.chars().count();
    let mut matches: Vec<&str> = Vec::new();

    for record in records {
        let id = record.id();
        if exact {
            if id == reference {
                tracing::debug!(reference, id, "resolved full uuid");
                return Ok(id.to_string());
            }
        } else if options.match_by_mac {
            let Some(mac) = record.get_str(MAC_PATH) else {
                continue;
            };
            if suffix_matches(mac, &reference_lower, reference_len) {
                matches.push(id);
            }
        } else if shorten_id(id) == reference {
            matches.push(id);
        } else if let Some(name) = record.get_str(&options.name_path) {
            if prefix_matches(name, &reference_lower, reference_len) {
                matches.push(id);
            }
        }
    }

    match matches.as_slice() {
        [] => Err(Error::NotFound(reference.to_string())),
        [id] => {
            tracing::debug!(reference, id = *id, "resolved reference");
            Ok((*id).to_string())
        }
        many => Err(Error::AmbiguousReference {
            reference: reference.to_string(),
            matches: many.iter().map(|id| shorten_id(id).to_string()).collect(),
        }),
    }
}

/// Resolves `reference` against the records produced by `supplier`.
///
/// The supplier is invoked exactly once; its error is returned unchanged.
///
/// # Errors
///
/// Returns the supplier error, or any error of [`resolve`].
pub fn resolve_with<F>(supplier: F, reference: &str, options: &ResolveOptions) -> Result<String>
where
    F: FnOnce() -> Result<Vec<Record>>,
{
    let records = supplier()?;
    resolve(&records, reference, options)
}

/// A candidate list bound to resolution options.
///
/// Used wherever many references are resolved against the same records,
/// such as when building relationship updates.
#[derive(Debug, Clone)]
pub struct Resolver {
    records: Vec<Record>,
    options: ResolveOptions,
}

impl Resolver {
    /// Creates a resolver over `records`.
    pub fn new(records: Vec<Record>, options: ResolveOptions) -> Self {
        Self { records, options }
    }

    /// Creates a resolver over the records produced by `supplier`.
    ///
    /// # Errors
    ///
    /// Returns the supplier error.
    pub fn from_supplier<F>(supplier: F, options: ResolveOptions) -> Result<Self>
    where
        F: FnOnce() -> Result<Vec<Record>>,
    {
        Ok(Self::new(supplier()?, options))
    }

    /// Resolves a single reference.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, reference: &str) -> Result<String> {
        resolve(&self.records, reference, &self.options)
    }

    /// Returns the record with the given id.
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns the candidate records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

fn prefix_matches(value: &str, reference_lower: &str, reference_len: usize) -> bool {
    let prefix: String = value.chars().take(reference_len).collect();
    prefix.to_lowercase() == reference_lower
}

fn suffix_matches(value: &str, reference_lower: &str, reference_len: usize) -> bool {
    let skip = value.chars().count().saturating_sub(reference_len);
    let suffix: String = value.chars().skip(skip).collect();
    suffix.to_lowercase() == reference_lower
}
