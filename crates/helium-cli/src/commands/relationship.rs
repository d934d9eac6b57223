// Rust guideline compliant 2026-10-14

//! Implementation of relationship updates such as `label update`.
//!
//! The new member list is computed by [`helium_core::build_diff`] and
//! printed as the JSON:API body replacing the relationship.

use crate::commands::resolver_for;
use anyhow::{Context, Result};
use helium_core::{build_diff, RecordSource, RelationshipUpdate, ResourceKind};
use std::io::Write;

/// Requested changes to a relationship.
#[derive(Debug, Clone, Default)]
pub struct RelationshipChange {
    /// References to add.
    pub add: Option<Vec<String>>,
    /// References to remove.
    pub remove: Option<Vec<String>>,
}

/// Computes the relationship update for the `parent` record.
///
/// Add and remove references resolve against every `member` record, not
/// just the current members.
///
/// # Errors
///
/// Returns an error if the parent or any add/remove reference does not
/// resolve to exactly one record.
pub fn plan(
    source: &dyn RecordSource,
    parent: ResourceKind,
    member: ResourceKind,
    reference: &str,
    change: &RelationshipChange,
) -> Result<RelationshipUpdate> {
    let parents = resolver_for(source, parent, false)?;
    let parent_id = parents.resolve(reference)?;
    let record = parents
        .find(&parent_id)
        .with_context(|| format!("{} '{}' vanished from the source", parent, parent_id))?;
    let current = source.related(record, member)?;

    let candidates = resolver_for(source, member, false)?;
    let update = build_diff(
        &current,
        |r| candidates.resolve(r),
        change.add.as_deref(),
        change.remove.as_deref(),
    )?;
    tracing::info!(
        parent = %parent,
        id = %parent_id,
        changed = update != RelationshipUpdate::Unchanged,
        "planned relationship update"
    );
    Ok(update)
}

/// Plans a relationship update and writes its request body.
///
/// Writes `No changes` when neither additions nor removals were requested.
///
/// # Errors
///
/// See [`plan`]; also returns an error if writing fails.
pub fn execute(
    source: &dyn RecordSource,
    parent: ResourceKind,
    member: ResourceKind,
    reference: &str,
    change: &RelationshipChange,
    out: &mut dyn Write,
) -> Result<()> {
    let update = plan(source, parent, member, reference, change)?;
    match update.to_request_body(member) {
        Some(body) => writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?,
        None => writeln!(out, "No changes")?,
    }
    Ok(())
}
