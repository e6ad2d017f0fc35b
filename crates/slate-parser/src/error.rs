// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parse error type.

use slate_ast::token::TokenKind;
use slate_ast::Pos;

/// A parser error with location and friendly message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub pos: Pos,
    pub message: String,
    pub hint: Option<String>,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, pos: Pos) -> Self {
        Self { pos, message: message.into(), hint: None }
    }

    /// `expected` is a display name such as `"';'"` or `"expression"`;
    /// `found` is `None` at end of input.
    pub(crate) fn expected(expected: &str, found: Option<&TokenKind>, pos: Pos) -> Self {
        let message = format_expected_message(expected, found);
        let hint = crate::hints::for_expected(expected, found).map(String::from);
        Self { pos, message, hint }
    }

    pub(crate) fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn found_name(found: Option<&TokenKind>) -> &'static str {
    found.map_or("end of file", TokenKind::display_name)
}

/// Format a user-friendly "expected X, found Y" message.
fn format_expected_message(expected: &str, found: Option<&TokenKind>) -> String {
    match expected {
        "';'" => format!("expected ';' after statement, found {}", found_name(found)),
        "'{'" => format!("expected '{{' to start block, found {}", found_name(found)),
        "'}'" => match found {
            None => "unclosed '{' - missing '}'".to_string(),
            Some(kind) => format!("expected '}}' to close block, found {}", kind.display_name()),
        },
        "')'" if found.is_none() => "unclosed '(' - missing ')'".to_string(),
        "']'" if found.is_none() => "unclosed '[' - missing ']'".to_string(),
        "a name" => format!("expected name, found {}", found_name(found)),
        "element index" => format!(
            "expected element index after '.', found {}",
            found_name(found)
        ),
        _ => format!("expected {}, found {}", expected, found_name(found)),
    }
}
