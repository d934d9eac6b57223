// Rust guideline compliant 2026-10-14

//! Command-line argument model.
//!
//! The `Commands` enum is the command registry: every top-level command is a
//! variant, and dispatch is an exhaustive `match` over it.

use crate::params::RESOURCE_LIST_METAVAR;
use clap::{Args, Parser, Subcommand};
use helium_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "helium",
    version,
    about = "Helium Commander: inspect and manage Helium resources",
    long_about = "Helium Commander resolves short ids, names and MAC addresses to Helium resources and renders them as tables, CSV or JSON. Resources are read from a snapshot directory of JSON:API documents.",
    after_help = "Examples:\n  helium sensor list --sort name\n  helium sensor show kitchen,ab12cd34\n  helium sensor lookup 0aa --mac\n  helium label update home --add @sensors.txt --remove garage\n  helium --format csv timeseries list kitchen --port t\n"
)]
pub struct Cli {
    /// Display full identifiers instead of short ids
    #[arg(long, global = true)]
    pub uuid: bool,

    /// Output format (default 'tabular')
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Snapshot directory holding JSON:API documents
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Custom config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
    Tabular,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Tabular => OutputFormat::Tabular,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available commands
    Commands,

    /// Operations on elements
    Element {
        #[command(subcommand)]
        action: DeviceAction,
    },

    /// Operations on labels
    Label {
        #[command(subcommand)]
        action: LabelAction,
    },

    /// Operations on the organization
    Organization {
        #[command(subcommand)]
        action: OrganizationAction,
    },

    /// Operations on sensors
    Sensor {
        #[command(subcommand)]
        action: DeviceAction,
    },

    /// Operations on timeseries data
    Timeseries {
        #[command(subcommand)]
        action: TimeseriesAction,
    },

    /// Operations on users
    User {
        #[command(subcommand)]
        action: ResourceAction,
    },
}

/// Sorting options shared by list commands.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Column to sort the result by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort in reverse order
    #[arg(long)]
    pub reverse: bool,
}

/// Actions on resources that carry a MAC address.
#[derive(Debug, Subcommand)]
pub enum DeviceAction {
    /// List all resources
    List(ListArgs),

    /// Show one or more resources
    Show {
        /// Resource references (short id, name prefix, UUID)
        #[arg(required = true, value_name = RESOURCE_LIST_METAVAR)]
        ids: Vec<String>,

        /// Match references against the end of the MAC address
        #[arg(long)]
        mac: bool,
    },

    /// Print the id a reference resolves to
    Lookup {
        /// Resource reference
        reference: String,

        /// Match the reference against the end of the MAC address
        #[arg(long)]
        mac: bool,
    },
}

/// Actions available on every resource kind.
#[derive(Debug, Subcommand)]
pub enum ResourceAction {
    /// List all resources
    List(ListArgs),

    /// Show one or more resources
    Show {
        /// Resource references (short id, name prefix, UUID)
        #[arg(required = true, value_name = RESOURCE_LIST_METAVAR)]
        ids: Vec<String>,
    },

    /// Print the id a reference resolves to
    Lookup {
        /// Resource reference
        reference: String,
    },
}

/// Actions on labels.
#[derive(Debug, Subcommand)]
pub enum LabelAction {
    #[command(flatten)]
    Resource(ResourceAction),

    /// List the sensors carrying a label
    Sensors {
        /// Label reference
        label: String,
    },

    /// Add sensors to or remove sensors from a label
    Update {
        /// Label reference
        label: String,

        /// Sensors to add
        #[arg(long, value_name = RESOURCE_LIST_METAVAR)]
        add: Option<String>,

        /// Sensors to remove
        #[arg(long, value_name = RESOURCE_LIST_METAVAR)]
        remove: Option<String>,
    },
}

/// Actions on organizations.
#[derive(Debug, Subcommand)]
pub enum OrganizationAction {
    #[command(flatten)]
    Resource(ResourceAction),

    /// List the users of an organization
    Users {
        /// Organization reference
        organization: String,
    },

    /// Add users to or remove users from an organization
    Update {
        /// Organization reference
        organization: String,

        /// Users to add
        #[arg(long, value_name = RESOURCE_LIST_METAVAR)]
        add: Option<String>,

        /// Users to remove
        #[arg(long, value_name = RESOURCE_LIST_METAVAR)]
        remove: Option<String>,
    },
}

/// Actions on timeseries data.
#[derive(Debug, Subcommand)]
pub enum TimeseriesAction {
    /// List the datapoints of a sensor
    List {
        /// Sensor reference
        sensor: String,

        /// Only show datapoints of this port
        #[arg(long)]
        port: Option<String>,

        /// Match the sensor reference against the end of the MAC address
        #[arg(long)]
        mac: bool,
    },
}
