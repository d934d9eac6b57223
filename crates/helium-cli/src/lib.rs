// Rust guideline compliant 2026-10-14

//! Helium Commander CLI
//!
//! Command-line interface for inspecting Helium resources held in a local
//! JSON:API snapshot.

pub mod args;
pub mod commands;
pub mod context;
pub mod fields;
pub mod logging;
pub mod output;
pub mod params;
pub mod run;
pub mod terminal;

pub use args::{Cli, Commands};
pub use context::OutputContext;
pub use output::{format_error, tabulate};
pub use run::{dispatch, run, Session};
pub use terminal::should_use_color;
