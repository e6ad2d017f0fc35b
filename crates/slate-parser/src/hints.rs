// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error hints - suggestions for fixing common mistakes.
//!
//! Kept separate from the grammar modules to avoid clutter.

use slate_ast::token::TokenKind;

/// Get a hint for an "expected X" error based on what was found instead.
pub fn for_expected(expected: &str, found: Option<&TokenKind>) -> Option<&'static str> {
    match (expected, found) {
        // Colon hints
        ("':'", Some(TokenKind::Eq)) => Some("use ':' for types, '=' for values"),
        ("':'", _) => Some("parameters are written 'name: type'"),

        // Assignment in let
        ("'='", Some(TokenKind::Semi)) => Some("every 'let' needs an initial value"),
        ("'='", Some(TokenKind::EqEq)) => Some("'let' binds with a single '='"),

        // Block hints
        ("'{'", _) => Some("blocks start with '{'"),
        ("'}'", None) => Some("every '{' needs a matching '}'"),

        // Parentheses and brackets
        ("'('", _) => Some("function parameters go in parentheses"),
        ("')'", None) => Some("add ')' to close the parenthesis"),
        ("']'", None) => Some("add ']' to close the bracket"),
        ("']'", Some(TokenKind::Comma)) => Some("array types take one element type: '[T]' or '[T; n]'"),

        // Statement terminator
        ("';'", _) => Some("end statements with ';'"),

        // Expression hints
        ("expression", Some(TokenKind::Eq)) => Some("put the value after '='"),
        ("expression", Some(TokenKind::Semi)) => Some("statement is incomplete"),
        ("expression", Some(TokenKind::Bang)) => Some("logical negation is written 'not'"),
        ("expression", _) => Some("try a value, variable, or function call"),

        // Projection
        ("element index", Some(TokenKind::Ident(_))) => {
            Some("only positional projections like 'pair.0' exist")
        }

        // Name hints
        ("a name", Some(TokenKind::Int(_))) => Some("names can't start with a number"),
        ("a name", Some(kind)) if is_keyword(kind) => Some("keywords can't be used as names"),
        ("a name", _) => Some("names start with a letter or '_'"),

        // Type hints
        ("type", _) => Some("try a type like 'int', 'bool', 'str', '(int, str)' or '[int]'"),

        _ => None,
    }
}

fn is_keyword(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Fn
            | TokenKind::Return
            | TokenKind::Let
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Loop
            | TokenKind::Break
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::Not
    )
}
