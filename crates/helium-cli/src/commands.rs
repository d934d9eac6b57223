// Rust guideline compliant 2026-10-14

//! Command implementations for the Helium CLI.
//!
//! Every command renders to a caller-supplied writer so it can be exercised
//! without a terminal.

use helium_core::{RecordSource, ResolveOptions, Resolver, ResourceKind};

pub mod list;
pub mod lookup;
pub mod members;
pub mod relationship;
pub mod show;
pub mod timeseries;

/// A top-level command and its one-line summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    /// Command name as typed on the command line.
    pub name: &'static str,
    /// Summary shown by `helium commands`.
    pub about: &'static str,
}

/// Every top-level command, sorted by name.
pub const REGISTRY: &[CommandInfo] = &[
    CommandInfo {
        name: "commands",
        about: "List available commands",
    },
    CommandInfo {
        name: "element",
        about: "Operations on elements",
    },
    CommandInfo {
        name: "label",
        about: "Operations on labels",
    },
    CommandInfo {
        name: "organization",
        about: "Operations on the organization",
    },
    CommandInfo {
        name: "sensor",
        about: "Operations on sensors",
    },
    CommandInfo {
        name: "timeseries",
        about: "Operations on timeseries data",
    },
    CommandInfo {
        name: "user",
        about: "Operations on users",
    },
];

/// Writes the command registry, one `name  summary` line per command.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_registry(out: &mut dyn std::io::Write) -> anyhow::Result<()> {
    let width = REGISTRY.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for command in REGISTRY {
        writeln!(out, "{:width$}  {}", command.name, command.about, width = width)?;
    }
    Ok(())
}

/// Returns resolution options for `kind`, matching by MAC when requested.
pub fn resolve_options(kind: ResourceKind, mac: bool) -> ResolveOptions {
    if mac && kind.has_mac() {
        ResolveOptions::by_mac()
    } else {
        ResolveOptions::default()
    }
}

/// Fetches every record of `kind` and binds them to a resolver.
///
/// # Errors
///
/// Returns the source error.
pub fn resolver_for(
    source: &dyn RecordSource,
    kind: ResourceKind,
    mac: bool,
) -> helium_core::Result<Resolver> {
    Resolver::from_supplier(|| source.list(kind), resolve_options(kind, mac))
}
