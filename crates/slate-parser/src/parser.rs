// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parser context shared by the statement, expression and type grammars.
//!
//! The three grammars are `impl Parser` blocks in `stmt.rs`, `expr.rs` and
//! `ty.rs`. Each exposes a public entry point (`parse_stmt`, `parse_expr`,
//! `parse_ty`) that never fails: a syntax error is recorded and an `Error`
//! node is returned in place of the construct. Internally the grammars
//! propagate `ParseError` with `?` up to the nearest entry point.

use slate_ast::stmt::File;
use slate_ast::token::{Token, TokenKind};
use slate_ast::{AstArena, Pos};
use slate_lexer::{LexError, Lexer};

use crate::error::ParseError;

/// Default number of errors to collect before giving up.
pub const MAX_ERRORS: usize = 20;

/// Default limit on how deeply expressions, blocks and types may nest.
pub const MAX_DEPTH: usize = 128;

pub(crate) type PResult<T> = Result<T, ParseError>;

/// The parser for slate source code.
///
/// Pulls tokens lazily from a [`Lexer`] with one token of lookahead and
/// allocates every node it builds in its [`AstArena`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
    pub(crate) arena: AstArena,
    errors: Vec<ParseError>,
    max_errors: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next();
        Self {
            lexer,
            current,
            arena: AstArena::new(),
            errors: Vec::new(),
            max_errors: MAX_ERRORS,
            depth: 0,
            max_depth: MAX_DEPTH,
        }
    }

    /// Stop recording (and stop parsing new statements) after `max` errors.
    pub fn with_max_errors(mut self, max: usize) -> Self {
        self.max_errors = max.max(1);
        self
    }

    /// Reject input nested more than `max` levels deep.
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max.max(1);
        self
    }

    /// Parse a whole file: statements until end of input.
    pub fn parse(mut self) -> ParseResult {
        let mut stmts = Vec::new();

        while !self.at_end() && !self.too_many_errors() {
            let before = self.offset();
            stmts.push(self.parse_stmt());
            if self.offset() == before {
                self.advance();
            }
        }

        tracing::debug!(
            stmts = stmts.len(),
            nodes = self.arena.len(),
            errors = self.errors.len(),
            "parsed file"
        );

        ParseResult {
            file: File { stmts },
            arena: self.arena,
            errors: self.errors,
            lex_errors: self.lexer.take_errors(),
        }
    }

    /// The arena holding every node built so far.
    pub fn arena(&self) -> &AstArena {
        &self.arena
    }

    /// Syntax errors recorded so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Lexical errors recorded so far by the underlying lexer.
    pub fn lex_errors(&self) -> &[LexError] {
        self.lexer.errors()
    }

    /// True once every token has been consumed.
    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    // =========================================================================
    // Error Handling
    // =========================================================================

    /// Record error, return if should continue.
    pub(crate) fn record_error(&mut self, error: ParseError) -> bool {
        if self.errors.len() < self.max_errors {
            tracing::debug!(pos = %error.pos, message = %error.message, "parse error");
            self.errors.push(error);
        }
        !self.too_many_errors()
    }

    pub(crate) fn too_many_errors(&self) -> bool {
        self.errors.len() >= self.max_errors
    }

    /// Error for a missing `expected` at the current token.
    pub(crate) fn expected(&self, expected: &str) -> ParseError {
        ParseError::expected(expected, self.current_kind(), self.pos())
    }

    /// Run `f` one nesting level deeper, failing once `max_depth` levels
    /// are already open.
    pub(crate) fn nested<T>(
        &mut self,
        what: &str,
        f: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(format!("{what} nested too deeply"), self.pos())
                .with_hint(format!("nesting is limited to {} levels", self.max_depth)));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Skip to the next statement boundary after an error.
    ///
    /// A `;` at nesting depth zero is consumed; a `}` that would close the
    /// enclosing block or a token that starts a statement is left in place.
    /// Brace groups opened during the skip are skipped as a whole.
    pub(crate) fn synchronize(&mut self) {
        let mut brace_depth = 0usize;

        while let Some(kind) = self.current_kind().cloned() {
            match kind {
                TokenKind::LBrace => brace_depth += 1,
                TokenKind::RBrace if brace_depth == 0 => return,
                TokenKind::RBrace => {
                    brace_depth -= 1;
                    if brace_depth == 0 {
                        self.advance();
                        return;
                    }
                }
                TokenKind::Semi if brace_depth == 0 => {
                    self.advance();
                    return;
                }
                ref kind if brace_depth == 0 && kind.starts_statement() => return,
                _ => {}
            }
            self.advance();
        }
    }

    // =========================================================================
    // Token Navigation
    // =========================================================================

    pub(crate) fn current_kind(&self) -> Option<&TokenKind> {
        self.current.as_ref().map(|t| &t.kind)
    }

    /// Position of the current token, or of end of input.
    pub(crate) fn pos(&self) -> Pos {
        match &self.current {
            Some(token) => token.pos,
            None => self.lexer.end_pos(),
        }
    }

    fn offset(&self) -> usize {
        self.pos().index
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let next = self.lexer.next();
        std::mem::replace(&mut self.current, next)
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind()
            .is_some_and(|k| std::mem::discriminant(k) == std::mem::discriminant(kind))
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail; returns the position of the consumed token.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> PResult<Pos> {
        if self.check(kind) {
            let pos = self.pos();
            self.advance();
            Ok(pos)
        } else {
            Err(self.expected(kind.display_name()))
        }
    }

    pub(crate) fn expect_ident(&mut self) -> PResult<(String, Pos)> {
        let pos = self.pos();
        match self.current_kind() {
            Some(TokenKind::Ident(name)) => {
                let name = name.clone();
                self.advance();
                Ok((name, pos))
            }
            _ => Err(self.expected("a name")),
        }
    }

    /// A missing `;` is reported but does not abandon the statement.
    pub(crate) fn expect_semi(&mut self) {
        if !self.match_token(&TokenKind::Semi) {
            let error = self.expected("';'");
            self.record_error(error);
        }
    }
}

/// Result of parsing: the file, its arena, plus any errors found.
#[derive(Debug)]
pub struct ParseResult {
    pub file: File,
    pub arena: AstArena,
    pub errors: Vec<ParseError>,
    pub lex_errors: Vec<LexError>,
}

impl ParseResult {
    /// Returns true if lexing and parsing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.lex_errors.is_empty()
    }
}
