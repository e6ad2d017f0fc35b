// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type checker error types.

use slate_ast::Pos;

/// A type error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("cannot type {what} expressions yet")]
    Unsupported { what: &'static str, pos: Pos },
}

impl CheckError {
    pub fn pos(&self) -> Pos {
        match self {
            CheckError::Unsupported { pos, .. } => *pos,
        }
    }
}
