// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Compiler phase inspection commands: lex, parse, resolve, check.

use std::process::ExitCode;

use slate_ast::print;
use slate_ast::token::Token;
use slate_check::Checker;
use slate_lexer::Lexer;

use super::{parse_stage, read_source, report_failure, report_success, resolve_stage, Failure};
use crate::config::{Config, Format};
use crate::output;

pub fn cmd_lex(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::from(1);
    };

    let mut lexer = Lexer::new(&source);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    let errors = lexer.take_errors();

    if !errors.is_empty() {
        return report_failure(Failure::new("lex", &errors), &source, path, config);
    }

    if config.format == Format::Human {
        println!("{}\n", output::section(&format!("Tokens ({})", tokens.len())));
        for token in &tokens {
            println!("{:>8}  {:?}", token.pos.to_string(), token.kind);
        }
    }
    report_success(&source, path, "lex", config)
}

pub fn cmd_parse(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::from(1);
    };

    let parsed = match parse_stage(&source, config) {
        Ok(parsed) => parsed,
        Err(failure) => return report_failure(failure, &source, path, config),
    };

    if config.format == Format::Human {
        println!("{}\n", output::section(&format!("AST ({} statements)", parsed.file.stmts.len())));
        for &stmt in &parsed.file.stmts {
            println!("{}", print::stmt_to_string(&parsed.arena, stmt));
        }
    }
    report_success(&source, path, "parse", config)
}

pub fn cmd_resolve(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::from(1);
    };

    let parsed = match parse_stage(&source, config) {
        Ok(parsed) => parsed,
        Err(failure) => return report_failure(failure, &source, path, config),
    };
    let resolutions = match resolve_stage(&parsed) {
        Ok(resolutions) => resolutions,
        Err(failure) => return report_failure(failure, &source, path, config),
    };

    if config.format == Format::Human {
        println!("{}\n", output::section(&format!("Resolutions ({})", resolutions.len())));
        print!("{}", resolutions.dump(&parsed.arena));
    }
    report_success(&source, path, "resolve", config)
}

pub fn cmd_check(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::from(1);
    };

    let parsed = match parse_stage(&source, config) {
        Ok(parsed) => parsed,
        Err(failure) => return report_failure(failure, &source, path, config),
    };
    let resolutions = match resolve_stage(&parsed) {
        Ok(resolutions) => resolutions,
        Err(failure) => return report_failure(failure, &source, path, config),
    };

    let mut checker = Checker::new(&parsed.arena, &resolutions);
    let fns = checker.fn_stmts(&parsed.file);

    if config.format == Format::Human {
        println!("{}\n", output::section(&format!("Signatures ({})", fns.len())));
        for id in fns {
            let (Some(func), Some(sig)) = (parsed.arena.fn_stmt(id), checker.fn_sig(id)) else {
                continue;
            };
            let params: Vec<_> = func
                .params
                .iter()
                .zip(&sig.params)
                .map(|(param, &ty)| format!("{}: {}", param.name, checker.display(ty)))
                .collect();
            println!(
                "{:>8}  fn {}({}) -> {}",
                parsed.arena[id].pos.to_string(),
                func.name,
                params.join(", "),
                checker.display(sig.ret)
            );
        }
    }
    report_success(&source, path, "check", config)
}
