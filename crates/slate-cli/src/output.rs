//! CLI output formatting with colors and styling.
//!
//! Colors follow `--color`; with `auto` the `colored` crate decides from
//! the terminal and `NO_COLOR`/`FORCE_COLOR` have already been folded into
//! the configuration.

use colored::{ColoredString, Colorize};

use crate::config::ColorChoice;

/// Initialize color support. Call once at startup.
pub fn init(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }
}

pub fn error_label() -> ColoredString {
    "error".red().bold()
}

pub fn file_path(path: &str) -> ColoredString {
    path.underline()
}

pub fn section(title: &str) -> String {
    format!("{} {} {}", "===".dimmed(), title, "===".dimmed())
}

pub fn banner_ok(phase: &str) -> String {
    format!(
        "{} {} {}",
        "===".dimmed(),
        format!("{} OK", phase).green().bold(),
        "===".dimmed()
    )
}

pub fn banner_fail(phase: &str, count: usize) -> String {
    let msg = if count == 1 {
        format!("{} FAILED: 1 error", phase)
    } else {
        format!("{} FAILED: {} errors", phase, count)
    };
    format!("{} {} {}", "===".dimmed(), msg.red().bold(), "===".dimmed())
}

pub fn code(code: &str) -> ColoredString {
    code.red().bold()
}
