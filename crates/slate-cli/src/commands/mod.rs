// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Command implementations and the shared front-end pipeline.

mod explain;
mod phase;

pub use explain::cmd_explain;
pub use phase::{cmd_check, cmd_lex, cmd_parse, cmd_resolve};

use std::fs;
use std::process::ExitCode;

use slate_diagnostics::formatter::DiagnosticFormatter;
use slate_diagnostics::{json, sort_by_position, Diagnostic, ToDiagnostic};
use slate_parser::{ParseResult, Parser};
use slate_resolve::Resolutions;

use crate::config::{Config, Format};
use crate::output;

/// The first phase that reported errors, with its diagnostics.
pub(crate) struct Failure {
    phase: &'static str,
    diagnostics: Vec<Diagnostic>,
}

impl Failure {
    fn new<E: ToDiagnostic>(phase: &'static str, errors: &[E]) -> Self {
        Self {
            phase,
            diagnostics: errors.iter().map(ToDiagnostic::to_diagnostic).collect(),
        }
    }
}

pub(crate) fn read_source(path: &str) -> Option<String> {
    tracing::info!(path, "reading source");
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("{}: reading {}: {}", output::error_label(), output::file_path(path), e);
            None
        }
    }
}

/// Lex and parse. Lexical errors take precedence over syntax errors.
pub(crate) fn parse_stage(source: &str, config: &Config) -> Result<ParseResult, Failure> {
    let result = Parser::new(source).with_max_errors(config.max_errors).parse();
    tracing::info!(
        stmts = result.file.stmts.len(),
        lex_errors = result.lex_errors.len(),
        parse_errors = result.errors.len(),
        "parsed"
    );
    if !result.lex_errors.is_empty() {
        return Err(Failure::new("lex", &result.lex_errors));
    }
    if !result.errors.is_empty() {
        return Err(Failure::new("parse", &result.errors));
    }
    Ok(result)
}

pub(crate) fn resolve_stage(parsed: &ParseResult) -> Result<Resolutions, Failure> {
    let resolved = slate_resolve::resolve(&parsed.arena, &parsed.file);
    match &resolved {
        Ok(resolutions) => tracing::info!(resolved = resolutions.len(), "resolved"),
        Err(errors) => tracing::info!(errors = errors.len(), "resolution failed"),
    }
    resolved.map_err(|errors| Failure::new("resolve", &errors))
}

/// Print a phase's diagnostics, at most `max_errors` of them, ordered by
/// position.
pub(crate) fn report_failure(failure: Failure, source: &str, path: &str, config: &Config) -> ExitCode {
    let Failure { phase, mut diagnostics } = failure;
    sort_by_position(&mut diagnostics);
    diagnostics.truncate(config.max_errors);
    tracing::debug!(phase, count = diagnostics.len(), "reporting diagnostics");

    match config.format {
        Format::Human => {
            let formatter = DiagnosticFormatter::new(source).with_file_name(path);
            for diagnostic in &diagnostics {
                eprintln!("{}", formatter.format(diagnostic));
            }
            eprintln!("{}", output::banner_fail(&title_case(phase), diagnostics.len()));
        }
        Format::Json => {
            let report = json::to_json_report(&diagnostics, source, path, phase);
            println!("{}", json::to_json_string(&report));
        }
    }

    ExitCode::from(1)
}

/// In JSON mode a clean run still prints a (successful) report.
pub(crate) fn report_success(source: &str, path: &str, phase: &str, config: &Config) -> ExitCode {
    if config.format == Format::Json {
        let report = json::to_json_report(&[], source, path, phase);
        println!("{}", json::to_json_string(&report));
    } else {
        println!("\n{}", output::banner_ok(&title_case(phase)));
    }
    ExitCode::SUCCESS
}

fn title_case(phase: &str) -> String {
    let mut chars = phase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
