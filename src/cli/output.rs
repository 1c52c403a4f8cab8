//! Shared CLI output helpers.
//!
//! Progress and diagnostics go to stderr so the child's stdout is never mixed
//! with launcher chatter. Reports the user asked for (`--check`) go to stdout.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: paths, keys, hints
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Same check for stdout.
fn colors_enabled_stdout() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Print a success message with checkmark to stderr.
///
/// Example: `✓ loaded 3 secrets from secrets.json`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green().for_stderr(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message to stderr.
///
/// Example: `✗ missing secrets file: secrets.json`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr.
///
/// Example: `→ check the command name and your PATH`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed step message to stderr.
///
/// Example: `launching sh`
pub fn step(msg: &str) {
    if colors_enabled() {
        eprintln!("{}", style(msg).dim().for_stderr());
    } else {
        eprintln!("{}", msg);
    }
}

/// Format a path for inline use.
pub fn path(p: impl Display) -> String {
    if colors_enabled() {
        style(p).cyan().for_stderr().to_string()
    } else {
        p.to_string()
    }
}

/// Print a list item with bullet to stdout.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a plain header line to stdout.
pub fn header(title: &str) {
    if colors_enabled_stdout() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}
