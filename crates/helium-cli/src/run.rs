// Rust guideline compliant 2026-10-14

//! Command dispatch.

use crate::args::{
    Cli, Commands, DeviceAction, LabelAction, OrganizationAction, ResourceAction, TimeseriesAction,
};
use crate::commands::{self, relationship::RelationshipChange};
use crate::context::OutputContext;
use crate::params::{parse_resource_list, parse_resource_lists, parse_single_resource};
use anyhow::{Context, Result};
use helium_core::{Config, RecordSource, ResourceKind, SnapshotSource};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Snapshot directory used when neither flags nor configuration name one.
pub const DEFAULT_DATA_DIR: &str = ".helium";

/// Everything a command needs besides its own arguments.
pub struct Session {
    /// Where records come from.
    pub source: Box<dyn RecordSource>,
    /// Output settings.
    pub ctx: OutputContext,
}

impl Session {
    /// Builds a session from global flags.
    ///
    /// The configuration file is `--config`, else `config.toml` inside the
    /// `--data-dir` (or the default directory). The snapshot directory is
    /// `--data-dir`, else the configured one, else [`DEFAULT_DATA_DIR`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the snapshot
    /// directory is unusable.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match (&cli.config, &cli.data_dir) {
            (Some(path), _) => path.clone(),
            (None, Some(dir)) => dir.join("config.toml"),
            (None, None) => Path::new(DEFAULT_DATA_DIR).join("config.toml"),
        };
        let config = Config::load(&config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?;

        let data_dir: PathBuf = cli
            .data_dir
            .clone()
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        tracing::debug!(data_dir = %data_dir.display(), "using snapshot directory");

        Ok(Self {
            source: Box::new(SnapshotSource::new(data_dir)?),
            ctx: OutputContext::from_flags(cli.format.map(Into::into), cli.uuid, &config),
        })
    }
}

/// Runs the parsed command line, writing results to `out`.
///
/// # Errors
///
/// Returns the first error raised by the command.
pub fn run(mut cli: Cli, out: &mut dyn Write) -> Result<()> {
    let Some(command) = cli.command.take() else {
        writeln!(out, "Use --help for usage information")?;
        return Ok(());
    };
    if let Commands::Commands = command {
        return commands::print_registry(out);
    }

    let session = Session::from_cli(&cli)?;
    dispatch(command, &session, out)
}

/// Dispatches a command within a session.
///
/// # Errors
///
/// Returns the first error raised by the command.
pub fn dispatch(command: Commands, session: &Session, out: &mut dyn Write) -> Result<()> {
    let source = session.source.as_ref();
    let ctx = &session.ctx;

    match command {
        Commands::Commands => commands::print_registry(out),
        Commands::Sensor { action } => device(source, ResourceKind::Sensor, action, ctx, out),
        Commands::Element { action } => device(source, ResourceKind::Element, action, ctx, out),
        Commands::User { action } => resource(source, ResourceKind::User, action, ctx, out),
        Commands::Label { action } => match action {
            LabelAction::Resource(action) => resource(source, ResourceKind::Label, action, ctx, out),
            LabelAction::Sensors { label } => commands::members::execute(
                source,
                ResourceKind::Label,
                ResourceKind::Sensor,
                &parse_single_resource(&label)?,
                ctx,
                out,
            ),
            LabelAction::Update { label, add, remove } => commands::relationship::execute(
                source,
                ResourceKind::Label,
                ResourceKind::Sensor,
                &parse_single_resource(&label)?,
                &change(add, remove)?,
                out,
            ),
        },
        Commands::Organization { action } => match action {
            OrganizationAction::Resource(action) => {
                resource(source, ResourceKind::Organization, action, ctx, out)
            }
            OrganizationAction::Users { organization } => commands::members::execute(
                source,
                ResourceKind::Organization,
                ResourceKind::User,
                &parse_single_resource(&organization)?,
                ctx,
                out,
            ),
            OrganizationAction::Update {
                organization,
                add,
                remove,
            } => commands::relationship::execute(
                source,
                ResourceKind::Organization,
                ResourceKind::User,
                &parse_single_resource(&organization)?,
                &change(add, remove)?,
                out,
            ),
        },
        Commands::Timeseries { action } => match action {
            TimeseriesAction::List { sensor, port, mac } => {
                commands::timeseries::execute(source, &sensor, port.as_deref(), mac, ctx, out)
            }
        },
    }
}

fn device(
    source: &dyn RecordSource,
    kind: ResourceKind,
    action: DeviceAction,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        DeviceAction::List(list) => {
            commands::list::execute(source, kind, list.sort.as_deref(), list.reverse, ctx, out)
        }
        DeviceAction::Show { ids, mac } => {
            commands::show::execute(source, kind, &parse_resource_lists(&ids)?, mac, ctx, out)
        }
        DeviceAction::Lookup { reference, mac } => {
            commands::lookup::execute(source, kind, &reference, mac, ctx, out)
        }
    }
}

fn resource(
    source: &dyn RecordSource,
    kind: ResourceKind,
    action: ResourceAction,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ResourceAction::List(list) => {
            commands::list::execute(source, kind, list.sort.as_deref(), list.reverse, ctx, out)
        }
        ResourceAction::Show { ids } => {
            commands::show::execute(source, kind, &parse_resource_lists(&ids)?, false, ctx, out)
        }
        ResourceAction::Lookup { reference } => {
            commands::lookup::execute(source, kind, &reference, false, ctx, out)
        }
    }
}

fn change(add: Option<String>, remove: Option<String>) -> Result<RelationshipChange> {
    Ok(RelationshipChange {
        add: add.as_deref().map(parse_resource_list).transpose()?,
        remove: remove.as_deref().map(parse_resource_list).transpose()?,
    })
}
