// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Abstract Syntax Tree types for the slate language.
//!
//! This crate defines the tokens and AST nodes shared between the lexer,
//! parser, resolver, and type checker. Nodes live in an [`AstArena`] and
//! refer to each other through typed ids.

pub mod arena;
pub mod expr;
pub mod print;
pub mod span;
pub mod stmt;
pub mod token;
pub mod ty;

pub use arena::{AstArena, ExprId, StmtId, TyId};
pub use span::{LineMap, Pos};

/// Unique identifier for AST nodes.
///
/// Used by semantic analysis passes to key their side tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeId(pub u32);
