// Rust guideline compliant 2026-10-14

//! Terminal UI utilities for the Helium CLI.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used on stderr.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    color_enabled(env::var_os("NO_COLOR").is_some(), atty::is(atty::Stream::Stderr))
}

fn color_enabled(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}

fn stderr(use_color: bool) -> StandardStream {
    StandardStream::stderr(if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    })
}

/// Prints a message to stderr in the given color.
///
/// # Arguments
/// * `message` - The message to print
/// * `color` - The color to use
/// * `use_color` - Whether color is enabled
pub fn print_colored(message: &str, color: Color, use_color: bool) {
    let mut stderr = stderr(use_color);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = writeln!(stderr, "{}", message);
    let _ = stderr.reset();
}

/// Prints an error message in red.
pub fn print_error(message: &str, use_color: bool) {
    print_colored(message, Color::Red, use_color);
}

/// Prints a warning message in yellow.
pub fn print_warning(message: &str, use_color: bool) {
    print_colored(message, Color::Yellow, use_color);
}
