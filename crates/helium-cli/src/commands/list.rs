// Rust guideline compliant 2026-10-14

//! Implementation of the `<kind> list` commands.

use crate::context::OutputContext;
use crate::fields::field_map;
use crate::output::{sort_records, tabulate};
use anyhow::Result;
use helium_core::{RecordSource, ResourceKind};
use std::io::Write;

/// Lists every record of a kind.
///
/// # Arguments
///
/// * `source` - Record source
/// * `kind` - Resource kind to list
/// * `sort` - Optional column to sort by
/// * `reverse` - Reverse the sort order
/// * `ctx` - Output settings
/// * `out` - Destination
///
/// # Errors
///
/// Returns an error if the records cannot be fetched, the sort column is
/// unknown, or writing fails.
pub fn execute(
    source: &dyn RecordSource,
    kind: ResourceKind,
    sort: Option<&str>,
    reverse: bool,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> Result<()> {
    let mut records = source.list(kind)?;
    let map = field_map(kind);
    match sort {
        Some(column) => sort_records(&mut records, &map, column, reverse, ctx)?,
        None if reverse => records.reverse(),
        None => {}
    }
    tracing::debug!(kind = %kind, count = records.len(), "listing records");
    tabulate(&records, &map, ctx, out)
}
