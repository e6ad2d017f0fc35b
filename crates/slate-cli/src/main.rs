// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Slate CLI - runs the compiler front end phase by phase.

mod commands;
mod config;
mod logging;
mod output;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use config::{ColorChoice, Config, Format};

#[derive(Parser)]
#[command(name = "slate", version, about = "Slate compiler front end")]
struct Cli {
    /// Output format for results and diagnostics
    #[arg(long, global = true, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Stop reporting after this many errors
    #[arg(long, global = true, default_value_t = slate_parser::MAX_ERRORS)]
    max_errors: usize,

    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Raise log verbosity (-v, -vv, ...)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize a file and print tokens
    Lex { file: String },
    /// Parse a file and print its statements
    Parse { file: String },
    /// Resolve names and print what each identifier refers to
    Resolve { file: String },
    /// Resolve, then print function signatures
    Check { file: String },
    /// Describe an error code
    Explain { code: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env(cli.format, cli.max_errors, cli.color, cli.verbose);

    output::init(config.color);
    logging::init_with_level(config.log_level);
    tracing::debug!(?config, "starting");

    match &cli.command {
        Command::Lex { file } => commands::cmd_lex(file, &config),
        Command::Parse { file } => commands::cmd_parse(file, &config),
        Command::Resolve { file } => commands::cmd_resolve(file, &config),
        Command::Check { file } => commands::cmd_check(file, &config),
        Command::Explain { code } => commands::cmd_explain(code),
    }
}
