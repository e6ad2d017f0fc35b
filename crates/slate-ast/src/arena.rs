// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Arena owning every syntax node.
//!
//! All statements, expressions and types share one id space: ids are handed
//! out from a single counter in allocation order and are never reused. Nodes
//! are write-once; the arena has no mutation or removal API, so an id stays
//! valid for the arena's lifetime and can key side tables in later passes.

use std::fmt;
use std::ops::Index;

use crate::expr::{Expr, ExprKind};
use crate::stmt::{Attr, FnStmt, Stmt, StmtKind};
use crate::ty::{Ty, TyKind};
use crate::{NodeId, Pos};

macro_rules! typed_ids {
    ($($(#[$meta:meta])* $name:ident => $what:literal),* $(,)?) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name(NodeId);

        impl $name {
            /// The untyped node id.
            pub fn node(self) -> NodeId {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($what, "#{}"), self.0 .0)
            }
        }
    )*};
}

typed_ids! {
    /// Handle to a statement node.
    StmtId => "stmt",
    /// Handle to an expression node.
    ExprId => "expr",
    /// Handle to a type node.
    TyId => "ty",
}

#[derive(Debug, Clone)]
enum Node {
    Stmt(Stmt),
    Expr(Expr),
    Ty(Ty),
}

/// Owner of all syntax nodes of one compilation.
#[derive(Debug, Clone, Default)]
pub struct AstArena {
    nodes: Vec<Node>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> NodeId {
        NodeId(self.nodes.len() as u32)
    }

    pub fn alloc_stmt(&mut self, kind: StmtKind, pos: Pos, attrs: Vec<Attr>) -> StmtId {
        let id = StmtId(self.next_id());
        self.nodes.push(Node::Stmt(Stmt { id, kind, pos, attrs }));
        id
    }

    pub fn alloc_expr(&mut self, kind: ExprKind, pos: Pos) -> ExprId {
        let id = ExprId(self.next_id());
        self.nodes.push(Node::Expr(Expr { id, kind, pos }));
        id
    }

    pub fn alloc_ty(&mut self, kind: TyKind, pos: Pos) -> TyId {
        let id = TyId(self.next_id());
        self.nodes.push(Node::Ty(Ty { id, kind, pos }));
        id
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every allocated id, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|node| match node {
            Node::Stmt(s) => s.id.node(),
            Node::Expr(e) => e.id.node(),
            Node::Ty(t) => t.id.node(),
        })
    }

    /// The function declaration behind `id`, if it is one.
    pub fn fn_stmt(&self, id: StmtId) -> Option<&FnStmt> {
        match &self[id].kind {
            StmtKind::Fn(func) => Some(func),
            _ => None,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }
}

impl Index<StmtId> for AstArena {
    type Output = Stmt;

    fn index(&self, id: StmtId) -> &Stmt {
        match self.node(id.node()) {
            Node::Stmt(stmt) => stmt,
            _ => panic!("{id} does not name a statement in this arena"),
        }
    }
}

impl Index<ExprId> for AstArena {
    type Output = Expr;

    fn index(&self, id: ExprId) -> &Expr {
        match self.node(id.node()) {
            Node::Expr(expr) => expr,
            _ => panic!("{id} does not name an expression in this arena"),
        }
    }
}

impl Index<TyId> for AstArena {
    type Output = Ty;

    fn index(&self, id: TyId) -> &Ty {
        match self.node(id.node()) {
            Node::Ty(ty) => ty,
            _ => panic!("{id} does not name a type in this arena"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_shared_across_kinds() {
        let mut arena = AstArena::new();
        let e = arena.alloc_expr(ExprKind::Int(1), Pos::default());
        let t = arena.alloc_ty(TyKind::Int, Pos::default());
        let s = arena.alloc_stmt(StmtKind::Expr(e), Pos::default(), Vec::new());

        assert_eq!(e.node(), NodeId(0));
        assert_eq!(t.node(), NodeId(1));
        assert_eq!(s.node(), NodeId(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn ids_strictly_increase() {
        let mut arena = AstArena::new();
        for i in 0..50 {
            if i % 3 == 0 {
                arena.alloc_ty(TyKind::Unit, Pos::default());
            } else {
                arena.alloc_expr(ExprKind::Unit, Pos::default());
            }
        }
        let ids: Vec<_> = arena.ids().collect();
        assert!(ids.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn index_returns_node_with_matching_id() {
        let mut arena = AstArena::new();
        let pos = Pos::new(4, 1, 5);
        let e = arena.alloc_expr(ExprKind::Ident("x".into()), pos);
        assert_eq!(arena[e].id, e);
        assert_eq!(arena[e].pos, pos);
        assert_eq!(arena[e].kind, ExprKind::Ident("x".into()));
    }

    #[test]
    fn fn_stmt_lookup() {
        let mut arena = AstArena::new();
        let e = arena.alloc_expr(ExprKind::Unit, Pos::default());
        let not_fn = arena.alloc_stmt(StmtKind::Expr(e), Pos::default(), Vec::new());
        assert!(arena.fn_stmt(not_fn).is_none());
    }
}
