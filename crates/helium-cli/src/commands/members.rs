// Rust guideline compliant 2026-10-14

//! Implementation of relationship listings such as `label sensors`.

use crate::commands::resolver_for;
use crate::context::OutputContext;
use crate::fields::field_map;
use crate::output::tabulate;
use anyhow::{Context, Result};
use helium_core::{RecordSource, ResourceKind};
use std::io::Write;

/// Lists the `member` records related to the `parent` record.
///
/// # Arguments
///
/// * `source` - Record source
/// * `parent` - Kind of the parent resource
/// * `member` - Kind of the related resources
/// * `reference` - Reference to the parent
/// * `ctx` - Output settings
/// * `out` - Destination
///
/// # Errors
///
/// Returns an error if the parent does not resolve or the related records
/// cannot be fetched.
pub fn execute(
    source: &dyn RecordSource,
    parent: ResourceKind,
    member: ResourceKind,
    reference: &str,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> Result<()> {
    let parents = resolver_for(source, parent, false)?;
    let id = parents.resolve(reference)?;
    let record = parents
        .find(&id)
        .with_context(|| format!("{} '{}' vanished from the source", parent, id))?;
    let related = source.related(record, member)?;
    tabulate(&related, &field_map(member), ctx, out)
}
