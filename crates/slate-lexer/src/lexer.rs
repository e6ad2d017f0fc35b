// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The lexer implementation using logos.

use logos::Logos;
use slate_ast::token::{Token, TokenKind};
use slate_ast::Pos;

use crate::error::{LexError, LexErrorKind};

/// Raw token type for logos - literal values are decoded in `convert`.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    // === Keywords ===
    #[token("fn")]
    Fn,
    #[token("return")]
    Return,
    #[token("let")]
    Let,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("loop")]
    Loop,
    #[token("break")]
    Break,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,

    // === Operators (two-character first) ===
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token(".")]
    Dot,
    #[token("#")]
    Hash,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,

    // === Comments (skip them) ===
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    // === Literals ===
    // A lone `0` is a complete token, so `012` lexes as `0` then `12`.
    #[token("0")]
    #[regex(r"[1-9][0-9_]*")]
    Int,

    #[token("\"", string_body)]
    Str(StrBody),

    // === Identifier (keywords win on exact match) ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Decoded contents of a string literal.
#[derive(Debug, Clone, PartialEq)]
enum StrBody {
    Closed(String),
    /// Input ended before the closing quote.
    Unterminated,
}

/// Scan a string body after the opening quote, decoding escapes.
fn string_body(lexer: &mut logos::Lexer<RawToken>) -> StrBody {
    let mut value = String::new();
    let mut chars = lexer.remainder().chars();
    let mut consumed = 0;

    let closed = loop {
        match chars.next() {
            Some('"') => {
                consumed += 1;
                break true;
            }
            Some('\\') => {
                consumed += 1;
                match chars.next() {
                    Some(c) => {
                        consumed += c.len_utf8();
                        value.push(unescape(c));
                    }
                    None => break false,
                }
            }
            Some(c) => {
                consumed += c.len_utf8();
                value.push(c);
            }
            None => break false,
        }
    };

    lexer.bump(consumed);
    if closed {
        StrBody::Closed(value)
    } else {
        StrBody::Unterminated
    }
}

/// Map the character after a backslash to the character it denotes.
fn unescape(c: char) -> char {
    match c {
        '0' => '\0',
        't' => '\t',
        'r' => '\r',
        'n' => '\n',
        other => other,
    }
}

/// Lazy lexer for slate source code.
///
/// Yields one token per call to `next`; malformed input produces a
/// `TokenKind::Error` token and a recorded `LexError`, and scanning goes on.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, RawToken>,
    /// Position of the last token start; tokens only move forward.
    cursor: Pos,
    end: Pos,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source),
            cursor: Pos::START,
            end: Pos::START.advance_to(source, source.len()),
            errors: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Position just past the end of the input.
    pub fn end_pos(&self) -> Pos {
        self.end
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Drain the errors recorded so far.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    fn pos_at(&mut self, offset: usize) -> Pos {
        self.cursor = self.cursor.advance_to(self.source, offset);
        self.cursor
    }

    fn report(&mut self, kind: LexErrorKind, pos: Pos) {
        tracing::debug!(%pos, error = %kind, "lex error");
        self.errors.push(LexError::new(kind, pos));
    }

    /// Convert a raw logos token to our TokenKind, decoding literals.
    fn convert(&mut self, raw: RawToken, slice: &str) -> Result<TokenKind, LexErrorKind> {
        Ok(match raw {
            RawToken::Fn => TokenKind::Fn,
            RawToken::Return => TokenKind::Return,
            RawToken::Let => TokenKind::Let,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::While => TokenKind::While,
            RawToken::Loop => TokenKind::Loop,
            RawToken::Break => TokenKind::Break,
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::Not => TokenKind::Not,

            RawToken::Arrow => TokenKind::Arrow,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::BangEq => TokenKind::BangEq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Hash => TokenKind::Hash,

            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semi => TokenKind::Semi,

            RawToken::Int => {
                let cleaned: String = slice.chars().filter(|c| *c != '_').collect();
                let value = cleaned.parse::<i64>().map_err(|_| LexErrorKind::IntTooLarge)?;
                TokenKind::Int(value)
            }
            RawToken::Str(StrBody::Closed(value)) => TokenKind::Str(value),
            RawToken::Str(StrBody::Unterminated) => {
                let end = self.end_pos();
                self.report(LexErrorKind::UnterminatedString, end);
                TokenKind::Error
            }
            RawToken::Ident => TokenKind::Ident(slice.to_string()),

            RawToken::LineComment => unreachable!("comments are skipped"),
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let pos = self.pos_at(span.start);

        let kind = match result {
            Ok(raw) => {
                let slice = self.inner.slice();
                match self.convert(raw, slice) {
                    Ok(kind) => kind,
                    Err(error) => {
                        self.report(error, pos);
                        TokenKind::Error
                    }
                }
            }
            Err(()) => {
                let ch = self.source[span.start..].chars().next().unwrap_or('?');
                self.report(LexErrorKind::InvalidChar(ch), pos);
                TokenKind::Error
            }
        };

        Some(Token { kind, pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).map(|t| t.kind).collect()
    }

    #[test]
    fn every_single_token_spelling() {
        let cases = [
            ("fn", TokenKind::Fn),
            ("return", TokenKind::Return),
            ("let", TokenKind::Let),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("loop", TokenKind::Loop),
            ("break", TokenKind::Break),
            ("and", TokenKind::And),
            ("or", TokenKind::Or),
            ("not", TokenKind::Not),
            ("->", TokenKind::Arrow),
            ("==", TokenKind::EqEq),
            ("!=", TokenKind::BangEq),
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Star),
            ("/", TokenKind::Slash),
            ("<", TokenKind::Lt),
            (">", TokenKind::Gt),
            ("=", TokenKind::Eq),
            ("!", TokenKind::Bang),
            (".", TokenKind::Dot),
            ("#", TokenKind::Hash),
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
            ("[", TokenKind::LBracket),
            ("]", TokenKind::RBracket),
            ("{", TokenKind::LBrace),
            ("}", TokenKind::RBrace),
            (",", TokenKind::Comma),
            (":", TokenKind::Colon),
            (";", TokenKind::Semi),
        ];
        for (src, expected) in cases {
            assert_eq!(kinds(src), vec![expected], "lexing {src:?}");
        }
    }

    #[test]
    fn identifiers_and_keyword_prefixes() {
        assert_eq!(
            kinds("fnord _x true iffy"),
            vec![
                TokenKind::Ident("fnord".into()),
                TokenKind::Ident("_x".into()),
                TokenKind::Ident("true".into()),
                TokenKind::Ident("iffy".into()),
            ]
        );
    }

    #[test]
    fn integers() {
        assert_eq!(kinds("42"), vec![TokenKind::Int(42)]);
        assert_eq!(kinds("1_000_000"), vec![TokenKind::Int(1_000_000)]);
        assert_eq!(kinds("0"), vec![TokenKind::Int(0)]);
        assert_eq!(kinds("012"), vec![TokenKind::Int(0), TokenKind::Int(12)]);
    }

    #[test]
    fn integer_overflow_is_reported() {
        let mut lexer = Lexer::new("99999999999999999999");
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Error));
        assert_eq!(lexer.errors()[0].kind, LexErrorKind::IntTooLarge);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            kinds(r#""a\tb\n\0\q\"\\""#),
            vec![TokenKind::Str("a\tb\n\0q\"\\".into())]
        );
    }

    #[test]
    fn unterminated_string() {
        let src = "let s = \"abc";
        let mut lexer = Lexer::new(src);
        let tokens: Vec<_> = lexer.by_ref().collect();
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Error);
        assert_eq!(last.pos, Pos::new(8, 1, 9));

        let errors = lexer.take_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexErrorKind::UnterminatedString);
        assert_eq!(errors[0].pos, Pos::new(12, 1, 13));
    }

    #[test]
    fn comments_and_whitespace_skipped() {
        assert_eq!(
            kinds("a // comment ; ;\r\n\tb"),
            vec![TokenKind::Ident("a".into()), TokenKind::Ident("b".into())]
        );
    }

    #[test]
    fn invalid_character_recovers() {
        let mut lexer = Lexer::new("a @ b");
        let tokens: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
        assert_eq!(
            tokens,
            vec![TokenKind::Ident("a".into()), TokenKind::Error, TokenKind::Ident("b".into())]
        );
        assert_eq!(lexer.errors().len(), 1);
        assert_eq!(lexer.errors()[0].kind, LexErrorKind::InvalidChar('@'));
        assert_eq!(lexer.errors()[0].pos, Pos::new(2, 1, 3));
    }

    #[test]
    fn positions_track_lines() {
        let tokens: Vec<_> = Lexer::new("fn\n  main").collect();
        assert_eq!(tokens[0].pos, Pos::new(0, 1, 1));
        assert_eq!(tokens[1].pos, Pos::new(5, 2, 3));
    }

    #[test]
    fn two_char_operators_first() {
        assert_eq!(
            kinds("a->b==c!=!d"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Arrow,
                TokenKind::Ident("b".into()),
                TokenKind::EqEq,
                TokenKind::Ident("c".into()),
                TokenKind::BangEq,
                TokenKind::Bang,
                TokenKind::Ident("d".into()),
            ]
        );
    }

    #[test]
    fn end_of_input() {
        let lexer = Lexer::new("ab\nc");
        assert_eq!(lexer.end_pos(), Pos::new(4, 2, 2));
        assert_eq!(Lexer::new("   ").count(), 0);
    }
}
