// Rust guideline compliant 2026-10-14

//! Implementation of the `<kind> show` commands.

use crate::commands::resolver_for;
use crate::context::OutputContext;
use crate::fields::field_map;
use crate::output::tabulate;
use anyhow::Result;
use helium_core::{RecordSource, ResourceKind};
use std::io::Write;

/// Shows the records named by `references`.
///
/// All references are resolved before anything is written; the first
/// failure aborts the command.
///
/// # Errors
///
/// Returns an error if any reference does not resolve to exactly one record.
pub fn execute(
    source: &dyn RecordSource,
    kind: ResourceKind,
    references: &[String],
    mac: bool,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> Result<()> {
    let resolver = resolver_for(source, kind, mac)?;
    let mut records = Vec::with_capacity(references.len());
    for reference in references {
        let id = resolver.resolve(reference)?;
        if let Some(record) = resolver.find(&id) {
            records.push(record.clone());
        }
    }
    tabulate(&records, &field_map(kind), ctx, out)
}
