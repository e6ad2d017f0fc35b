//! Statement AST nodes.

use crate::{ExprId, Pos, StmtId, TyId};

/// A statement in the AST.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stmt {
    pub id: StmtId,
    pub kind: StmtKind,
    pub pos: Pos,
    pub attrs: Vec<Attr>,
}

/// An attribute annotation: `#[name]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attr {
    pub name: String,
    pub pos: Pos,
}

/// The kind of statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StmtKind {
    /// Placeholder left behind after a reported syntax error.
    Error,
    Fn(FnStmt),
    Let(LetStmt),
    Block(Block),
    If(IfStmt),
    While { cond: ExprId, body: Block },
    Return(Option<ExprId>),
    Break,
    Assign { dest: ExprId, src: ExprId },
    /// Expression statement
    Expr(ExprId),
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FnStmt {
    pub name: String,
    pub params: Vec<Param>,
    /// Absent return type means unit.
    pub ret_ty: Option<TyId>,
    pub body: Block,
}

/// A function parameter: `name: ty`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Param {
    pub name: String,
    pub ty: TyId,
    pub pos: Pos,
}

/// `let name: ty = init;`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LetStmt {
    pub name: String,
    pub ty: Option<TyId>,
    pub init: ExprId,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IfStmt {
    pub cond: ExprId,
    pub truthy: Block,
    pub falsy: Option<IfTail>,
}

/// What follows `else`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IfTail {
    Block(Block),
    /// `else if ...`; always an `If` statement.
    If(StmtId),
}

/// A braced statement list with an optional trailing value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Block {
    pub stmts: Vec<StmtId>,
    pub tail: Option<ExprId>,
    pub pos: Pos,
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct File {
    pub stmts: Vec<StmtId>,
}
