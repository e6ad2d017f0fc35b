//! Lexer for the slate language.
//!
//! Tokenizes source code lazily into a stream of tokens for the parser.

mod error;
mod lexer;

pub use error::{LexError, LexErrorKind};
pub use lexer::Lexer;
