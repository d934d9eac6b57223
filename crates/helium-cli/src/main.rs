// Rust guideline compliant 2026-10-14

//! Helium Commander entry point.

use clap::Parser;
use helium_cli::{logging, output, run, should_use_color, terminal, Cli};
use helium_core::OutputFormat;
use std::io::Write;

/// Set to any value to print full error chains with debug formatting.
const DEBUG_ENV: &str = "HELIUM_COMMANDER_DEBUG";

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_tracing(cli.log_level.as_deref()) {
        terminal::print_warning(&format!("{}", err), should_use_color());
    }

    let format = cli.format.map(OutputFormat::from).unwrap_or_default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = run(cli, &mut out).and_then(|()| out.flush().map_err(Into::into));
    if let Err(err) = result {
        if std::env::var_os(DEBUG_ENV).is_some() {
            eprintln!("{:?}", err);
        } else {
            terminal::print_error(&output::format_error(&err, format), should_use_color());
        }
        std::process::exit(1);
    }
}
