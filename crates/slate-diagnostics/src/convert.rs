// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Conversions from compiler error types to `Diagnostic`.
//!
//! The `ToDiagnostic` trait is implemented for every front-end error type.

use slate_check::CheckError;
use slate_lexer::{LexError, LexErrorKind};
use slate_parser::ParseError;
use slate_resolve::{ResolveError, ResolveErrorKind};

use crate::{Diagnostic, Span, ToDiagnostic};

// ============================================================================
// Lex Errors
// ============================================================================

impl ToDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        let (code, label) = match self.kind {
            LexErrorKind::InvalidChar(_) => ("E0001", "unexpected character"),
            LexErrorKind::UnterminatedString => ("E0002", "input ends inside a string"),
            LexErrorKind::IntTooLarge => ("E0003", "does not fit in 64 bits"),
        };

        let mut diag = Diagnostic::error(self.to_string())
            .with_code(code)
            .with_primary(Span::at(self.pos), label);

        if let Some(hint) = self.hint() {
            diag = diag.with_help(hint);
        }

        diag
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

impl ToDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(&self.message)
            .with_code("E0100")
            .with_primary(Span::at(self.pos), "here");

        if let Some(ref hint) = self.hint {
            diag = diag.with_help(hint.as_str());
        }

        diag
    }
}

// ============================================================================
// Resolve Errors
// ============================================================================

fn name_span(error: &ResolveError, name: &str) -> Span {
    Span::new(error.pos, name.chars().count().max(1))
}

impl ToDiagnostic for ResolveError {
    fn to_diagnostic(&self) -> Diagnostic {
        use ResolveErrorKind::*;

        match &self.kind {
            UndefinedValue { name } => Diagnostic::error(self.to_string())
                .with_code("E0200")
                .with_primary(name_span(self, name), "not found in this scope"),

            DuplicateFn { previous, .. } => Diagnostic::error(self.to_string())
                .with_code("E0201")
                .with_primary(Span::new(self.pos, 2), "redefined here")
                .with_secondary(Span::new(*previous, 2), "previously defined here")
                .with_help("functions in the same block must have distinct names"),

            DuplicateParam { name, previous } => Diagnostic::error(self.to_string())
                .with_code("E0202")
                .with_primary(name_span(self, name), "redefined here")
                .with_secondary(Span::new(*previous, name.chars().count()), "first declared here"),

            UndefinedType { name } => Diagnostic::error(self.to_string())
                .with_code("E0203")
                .with_primary(name_span(self, name), "not found in this scope")
                .with_note("the built-in types are `int`, `bool` and `str`"),
        }
    }
}

// ============================================================================
// Check Errors
// ============================================================================

impl ToDiagnostic for CheckError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CheckError::Unsupported { .. } => Diagnostic::error(self.to_string())
                .with_code("E0300")
                .with_primary(Span::at(self.pos()), "cannot infer a type here")
                .with_note("only unit and error expressions are typed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LabelStyle;
    use slate_ast::Pos;

    #[test]
    fn lex_error_carries_hint() {
        let error = LexError::new(LexErrorKind::UnterminatedString, Pos::new(3, 1, 4));
        let diag = error.to_diagnostic();
        assert_eq!(diag.message, "unterminated string literal");
        assert_eq!(diag.code.map(|c| c.0), Some("E0002".to_string()));
        assert_eq!(diag.help.as_deref(), Some("add a closing '\"'"));
    }

    #[test]
    fn parse_error_uses_message_and_hint() {
        let result = slate_parser::parse("let x: int 5;");
        let diag = result.errors[0].to_diagnostic();
        assert_eq!(diag.message, "expected '=', found a number");
        assert_eq!(diag.primary_span(), Some(Span::at(Pos::new(11, 1, 12))));
    }

    #[test]
    fn undefined_name_underlines_whole_name() {
        let error = ResolveError::undefined_value("count", Pos::new(0, 1, 1));
        let diag = error.to_diagnostic();
        assert_eq!(diag.message, "use of undefined value `count`");
        assert_eq!(diag.primary_span().map(|s| s.len), Some(5));
    }

    #[test]
    fn duplicate_fn_points_at_both_definitions() {
        let error = ResolveError::duplicate_fn("f", Pos::new(10, 2, 1), Pos::new(0, 1, 1));
        let diag = error.to_diagnostic();
        let styles: Vec<_> = diag.labels.iter().map(|l| (l.style, l.span.pos.line)).collect();
        assert_eq!(styles, vec![(LabelStyle::Primary, 2), (LabelStyle::Secondary, 1)]);
    }

    #[test]
    fn check_error_code() {
        let error = CheckError::Unsupported { what: "call", pos: Pos::new(1, 1, 2) };
        let diag = error.to_diagnostic();
        assert_eq!(diag.code.map(|c| c.0), Some("E0300".to_string()));
        assert_eq!(diag.notes.len(), 1);
    }
}
