//! Syntactic type AST nodes.

use crate::{ExprId, Pos, TyId};

/// A type as written in the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ty {
    pub id: TyId,
    pub kind: TyKind,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TyKind {
    /// Placeholder left behind after a reported syntax error.
    Error,
    /// A named, non-primitive type.
    Ident(String),
    Unit,
    Int,
    Bool,
    Str,
    Tuple(Vec<TyId>),
    /// `[T]`
    Slice(TyId),
    /// `[T; len]`; the length is an arbitrary expression.
    Array { elem: TyId, len: ExprId },
}

impl TyKind {
    /// Primitive type for a reserved type name, if any.
    pub fn primitive(name: &str) -> Option<TyKind> {
        match name {
            "int" => Some(TyKind::Int),
            "bool" => Some(TyKind::Bool),
            "str" => Some(TyKind::Str),
            _ => None,
        }
    }
}
