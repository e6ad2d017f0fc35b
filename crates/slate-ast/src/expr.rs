//! Expression AST nodes.

use std::fmt;

use crate::{ExprId, Pos};

/// An expression in the AST.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
    pub pos: Pos,
}

/// The kind of expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExprKind {
    /// Placeholder left behind after a reported syntax error.
    Error,
    Ident(String),
    /// `()`
    Unit,
    Int(i64),
    Bool(bool),
    Str(String),
    /// `(a, b)` or `(a,)`
    Tuple(Vec<ExprId>),
    /// `[value; len]`
    Repeat { value: ExprId, len: ExprId },
    /// `[a, b, c]`
    Array(Vec<ExprId>),
    /// Positional projection: `expr.2`
    Elem { expr: ExprId, index: u32 },
    /// `expr[index]`
    Index { expr: ExprId, index: ExprId },
    /// `callee(args)`
    Call { callee: ExprId, args: Vec<ExprId> },
    Unary { op: UnaryOp, expr: ExprId },
    Binary { op: BinOp, left: ExprId, right: ExprId },
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Gt,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Pratt binding powers `(left, right)`. Every tier is left-associative.
    pub fn binding_power(self) -> (u8, u8) {
        match self {
            BinOp::Or | BinOp::And => (1, 2),
            BinOp::Eq | BinOp::Ne => (3, 4),
            BinOp::Lt | BinOp::Gt => (5, 6),
            BinOp::Add | BinOp::Sub => (7, 8),
            BinOp::Mul | BinOp::Div => (9, 10),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Or => "or",
            BinOp::And => "and",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    /// Logical not: `not x`
    Not,
    /// Negation: `-x`
    Neg,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
            UnaryOp::Neg => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
