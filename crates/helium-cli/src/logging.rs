// Rust guideline compliant 2026-10-14

//! Logging setup for the Helium CLI.

use helium_core::Error;
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable consulted when no log level is given on the command line.
pub const LOG_ENV: &str = "HELIUM_LOG";

/// Installs the global tracing subscriber writing to stderr.
///
/// The level comes from `level`, then `HELIUM_LOG`, then defaults to `warn`.
/// Installing twice is not an error; the first subscriber stays active.
///
/// # Errors
///
/// Returns an error if the level name is not recognised.
pub fn init_tracing(level: Option<&str>) -> helium_core::Result<()> {
    let from_env = std::env::var(LOG_ENV).ok();
    let level = parse_log_level(level.or(from_env.as_deref()).unwrap_or("warn"))?;

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns `Error::InvalidInput` for unknown names.
pub fn parse_log_level(level: &str) -> helium_core::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(Error::InvalidInput(format!("unknown log level '{}'", other))),
    }
}
