// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lexer error types.

use slate_ast::Pos;

/// A lexer error with location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("invalid character '{0}'")]
    InvalidChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("integer literal is too large")]
    IntTooLarge,
}

impl LexError {
    pub fn new(kind: LexErrorKind, pos: Pos) -> Self {
        Self { kind, pos }
    }

    /// A short suggestion for fixing the error, if there is an obvious one.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::InvalidChar(_) => None,
            LexErrorKind::UnterminatedString => Some("add a closing '\"'"),
            LexErrorKind::IntTooLarge => Some("integers must fit in a signed 64-bit value"),
        }
    }
}
