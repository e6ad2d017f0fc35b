// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Resolution records and the side table keyed by node id.

use std::collections::HashMap;

use slate_ast::stmt::{Param, StmtKind};
use slate_ast::{AstArena, ExprId, Pos, StmtId, TyId};

/// What a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Res {
    /// A function declared by this statement.
    Fn(StmtId),
    /// Parameter `index` of function `func`.
    FnParam { func: StmtId, index: usize },
    /// A local introduced by this `let` statement.
    Let(StmtId),
}

impl Res {
    /// The declaring statement.
    pub fn decl(self) -> StmtId {
        match self {
            Res::Fn(stmt) | Res::Let(stmt) => stmt,
            Res::FnParam { func, .. } => func,
        }
    }

    /// The parameter this record points at, if it is a parameter.
    pub fn param(self, arena: &AstArena) -> Option<&Param> {
        match self {
            Res::FnParam { func, index } => arena.fn_stmt(func)?.params.get(index),
            _ => None,
        }
    }

    /// Params and lets live in a function body and do not cross into
    /// nested functions.
    pub fn is_local(self) -> bool {
        matches!(self, Res::FnParam { .. } | Res::Let(_))
    }

    /// Where the bound name was introduced.
    pub(crate) fn pos(self, arena: &AstArena) -> Pos {
        match self.param(arena) {
            Some(param) => param.pos,
            None => arena[self.decl()].pos,
        }
    }

    pub(crate) fn describe(self, arena: &AstArena) -> String {
        match (self, &arena[self.decl()].kind) {
            (Res::Fn(_), StmtKind::Fn(func)) => format!("fn {}", func.name),
            (Res::Let(_), StmtKind::Let(local)) => format!("let {}", local.name),
            (Res::FnParam { index, .. }, _) => match self.param(arena) {
                Some(param) => format!("param {} #{index}", param.name),
                None => format!("param #{index}"),
            },
            _ => "<unknown>".to_string(),
        }
    }
}

/// Name resolutions of one file: one map for expressions, one for types.
///
/// An id with no entry either names nothing or its error was already
/// reported.
#[derive(Debug, Clone, Default)]
pub struct Resolutions {
    pub(crate) exprs: HashMap<ExprId, Res>,
    pub(crate) tys: HashMap<TyId, Res>,
}

impl Resolutions {
    pub fn expr(&self, id: ExprId) -> Option<Res> {
        self.exprs.get(&id).copied()
    }

    pub fn ty(&self, id: TyId) -> Option<Res> {
        self.tys.get(&id).copied()
    }

    /// Total number of records in both maps.
    pub fn len(&self) -> usize {
        self.exprs.len() + self.tys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expression records ordered by id.
    pub fn exprs(&self) -> Vec<(ExprId, Res)> {
        let mut entries: Vec<_> = self.exprs.iter().map(|(&id, &res)| (id, res)).collect();
        entries.sort_by_key(|&(id, _)| id);
        entries
    }

    /// Render the table one record per line, in id order.
    pub fn dump(&self, arena: &AstArena) -> String {
        let mut out = String::new();
        for (id, res) in self.exprs() {
            let expr = &arena[id];
            out.push_str(&format!("{} {id} -> {}\n", expr.pos, res.describe(arena)));
        }
        let mut tys: Vec<_> = self.tys.iter().collect();
        tys.sort_by_key(|(&id, _)| id);
        for (&id, &res) in tys {
            out.push_str(&format!("{} {id} -> {}\n", arena[id].pos, res.describe(arena)));
        }
        out
    }
}
