//! Token definitions for the lexer.

use crate::Pos;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

/// The kind of token. Literal payloads live inside the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Str(String),

    // Identifier
    Ident(String),

    // Keywords
    Fn,
    Return,
    Let,
    If,
    Else,
    While,
    Loop,
    Break,
    And,
    Or,
    Not,

    // Operators
    Arrow,
    EqEq,
    BangEq,
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,
    Eq,
    Bang,
    Dot,
    Hash,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semi,

    /// Malformed input; the lexer has already reported it.
    Error,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "a number",
            TokenKind::Str(_) => "a string",
            TokenKind::Ident(_) => "a name",

            TokenKind::Fn => "'fn'",
            TokenKind::Return => "'return'",
            TokenKind::Let => "'let'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::Loop => "'loop'",
            TokenKind::Break => "'break'",
            TokenKind::And => "'and'",
            TokenKind::Or => "'or'",
            TokenKind::Not => "'not'",

            TokenKind::Arrow => "'->'",
            TokenKind::EqEq => "'=='",
            TokenKind::BangEq => "'!='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::Eq => "'='",
            TokenKind::Bang => "'!'",
            TokenKind::Dot => "'.'",
            TokenKind::Hash => "'#'",

            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semi => "';'",

            TokenKind::Error => "an invalid token",
        }
    }

    /// Returns true for tokens that begin a statement form.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Hash
        )
    }
}
