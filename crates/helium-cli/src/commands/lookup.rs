// Rust guideline compliant 2026-10-14

//! Implementation of the `<kind> lookup` commands.

use crate::commands::resolver_for;
use crate::context::OutputContext;
use anyhow::Result;
use helium_core::{RecordSource, ResourceKind};
use std::io::Write;

/// Prints the id a reference resolves to.
///
/// # Errors
///
/// Returns an error if the reference does not resolve to exactly one record.
pub fn execute(
    source: &dyn RecordSource,
    kind: ResourceKind,
    reference: &str,
    mac: bool,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> Result<()> {
    let id = resolver_for(source, kind, mac)?.resolve(reference)?;
    writeln!(out, "{}", ctx.id(&id))?;
    Ok(())
}
