// Rust guideline compliant 2026-10-14

//! Relationship list updates.
//!
//! A relationship is the set of ids of records attached to a parent
//! resource, such as the sensors carrying a label. Updates are expressed as
//! references to add and remove; this module turns them into the complete
//! replacement list the API expects.

use crate::{Record, ResourceKind, Result};
use serde_json::{json, Value};
use std::collections::HashSet;

/// The outcome of applying add/remove requests to a relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipUpdate {
    /// Neither additions nor removals were requested; no update must be sent.
    Unchanged,
    /// The relationship must be replaced with these ids.
    Replace(Vec<String>),
}

impl RelationshipUpdate {
    /// Returns the replacement ids, or `None` when unchanged.
    pub fn ids(&self) -> Option<&[String]> {
        match self {
            RelationshipUpdate::Unchanged => None,
            RelationshipUpdate::Replace(ids) => Some(ids),
        }
    }

    /// Renders the JSON:API request body replacing the relationship.
    ///
    /// # Arguments
    ///
    /// * `kind` - Resource kind of the related records
    ///
    /// # Returns
    ///
    /// `None` when the relationship is unchanged.
    pub fn to_request_body(&self, kind: ResourceKind) -> Option<Value> {
        self.ids().map(|ids| {
            let data: Vec<Value> = ids
                .iter()
                .map(|id| json!({ "id": id, "type": kind.api_type() }))
                .collect();
            json!({ "data": data })
        })
    }
}

/// Computes the new relationship list.
///
/// # Arguments
///
/// * `current` - Records currently in the relationship
/// * `resolve` - Resolves a reference to an id of the related kind
/// * `add` - References to add, if any
/// * `remove` - References to remove, if any
///
/// # Returns
///
/// `RelationshipUpdate::Unchanged` when neither `add` nor `remove` holds a
/// reference, otherwise the full replacement list. The list keeps the
/// current order, drops removed ids and appends added ids in request order.
///
/// # Errors
///
/// Returns the first resolution error. Nothing is computed in that case.
pub fn build_diff<F>(
    current: &[Record],
    mut resolve: F,
    add: Option<&[String]>,
    remove: Option<&[String]>,
) -> Result<RelationshipUpdate>
where
    F: FnMut(&str) -> Result<String>,
{
    let add = add.filter(|refs| !refs.is_empty());
    let remove = remove.filter(|refs| !refs.is_empty());
    if add.is_none() && remove.is_none() {
        return Ok(RelationshipUpdate::Unchanged);
    }

    let removed: HashSet<String> = remove
        .unwrap_or_default()
        .iter()
        .map(|reference| resolve(reference))
        .collect::<Result<_>>()?;
    let added: Vec<String> = add
        .unwrap_or_default()
        .iter()
        .map(|reference| resolve(reference))
        .collect::<Result<_>>()?;

    let mut seen = HashSet::new();
    let ids: Vec<String> = current
        .iter()
        .map(Record::id)
        .filter(|id| !id.is_empty() && !removed.contains(*id))
        .map(str::to_string)
        .chain(added)
        .filter(|id| seen.insert(id.clone()))
        .collect();

    tracing::debug!(
        current = current.len(),
        removed = removed.len(),
        result = ids.len(),
        "built relationship update"
    );
    Ok(RelationshipUpdate::Replace(ids))
}
