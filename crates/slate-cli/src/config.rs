// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Run configuration: command-line options merged with the environment.

use clap::ValueEnum;

use crate::logging::LogLevel;

/// How diagnostics and results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: Format,
    pub max_errors: usize,
    pub color: ColorChoice,
    pub log_level: LogLevel,
}

impl Config {
    /// Merge options with environment variables read through `env`.
    ///
    /// `SLATE_LOG` sets the base log level (default `warn`), raised once per
    /// `-v`. With `--color auto`, `NO_COLOR` disables color and
    /// `FORCE_COLOR` forces it.
    pub fn new(
        format: Format,
        max_errors: usize,
        color: ColorChoice,
        verbose: u8,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let base = match env("SLATE_LOG") {
            Some(value) => value.parse().unwrap_or_else(|e: String| {
                eprintln!("warning: SLATE_LOG: {e}, using `warn`");
                LogLevel::Warn
            }),
            None => LogLevel::Warn,
        };

        let color = match color {
            ColorChoice::Auto if env("NO_COLOR").is_some() => ColorChoice::Never,
            ColorChoice::Auto if env("FORCE_COLOR").is_some() => ColorChoice::Always,
            other => other,
        };

        Self {
            format,
            max_errors: max_errors.max(1),
            color,
            log_level: base.raised_by(verbose),
        }
    }

    /// Same as [`Config::new`] reading the process environment.
    pub fn from_env(format: Format, max_errors: usize, color: ColorChoice, verbose: u8) -> Self {
        Self::new(format, max_errors, color, verbose, |key| std::env::var(key).ok())
    }
}
