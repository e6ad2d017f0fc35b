// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! `slate explain <code>`

use std::process::ExitCode;

use slate_diagnostics::codes::ErrorCodeRegistry;

use crate::output;

pub fn cmd_explain(code: &str) -> ExitCode {
    let registry = ErrorCodeRegistry::default();
    let code = code.trim().to_ascii_uppercase();

    match registry.get(&code) {
        Some(info) => {
            println!("{}: {} ({})", output::code(info.code), info.title, info.category);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{}: unknown error code `{}`", output::error_label(), code);
            eprintln!("known codes:");
            for info in registry.all() {
                eprintln!("  {}  {}", info.code, info.title);
            }
            ExitCode::from(1)
        }
    }
}
