// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Resolution error types.

use slate_ast::Pos;
use thiserror::Error;

/// A name resolution error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
    pub pos: Pos,
}

impl ResolveError {
    pub fn undefined_value(name: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind: ResolveErrorKind::UndefinedValue { name: name.into() },
            pos,
        }
    }

    pub fn undefined_type(name: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind: ResolveErrorKind::UndefinedType { name: name.into() },
            pos,
        }
    }

    pub fn duplicate_fn(name: impl Into<String>, pos: Pos, previous: Pos) -> Self {
        Self {
            kind: ResolveErrorKind::DuplicateFn { name: name.into(), previous },
            pos,
        }
    }

    pub fn duplicate_param(name: impl Into<String>, pos: Pos, previous: Pos) -> Self {
        Self {
            kind: ResolveErrorKind::DuplicateParam { name: name.into(), previous },
            pos,
        }
    }

    /// Where the clashing name was first bound, for duplicate definitions.
    pub fn previous(&self) -> Option<Pos> {
        match self.kind {
            ResolveErrorKind::DuplicateFn { previous, .. }
            | ResolveErrorKind::DuplicateParam { previous, .. } => Some(previous),
            _ => None,
        }
    }
}

/// The kind of resolution error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveErrorKind {
    #[error("use of undefined value `{name}`")]
    UndefinedValue { name: String },

    #[error("use of undefined type `{name}`")]
    UndefinedType { name: String },

    #[error("redefinition of function `{name}`")]
    DuplicateFn { name: String, previous: Pos },

    #[error("redefinition of parameter `{name}`")]
    DuplicateParam { name: String, previous: Pos },
}
