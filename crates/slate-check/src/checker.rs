// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Signature lowering and expression typing over a resolved tree.

use std::collections::HashMap;

use slate_ast::expr::ExprKind;
use slate_ast::stmt::{Block, File, IfTail, StmtKind};
use slate_ast::ty::TyKind;
use slate_ast::{AstArena, ExprId, StmtId, TyId};
use slate_resolve::{Res, Resolutions};

use crate::error::CheckError;
use crate::types::{TyCx, TyRef, Type};

/// Parameter and return types of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnSig {
    pub params: Vec<TyRef>,
    pub ret: TyRef,
}

/// Answers type queries about one file.
pub struct Checker<'a> {
    arena: &'a AstArena,
    resolutions: &'a Resolutions,
    cx: TyCx,
    ty_tys: HashMap<TyId, TyRef>,
    expr_tys: HashMap<ExprId, TyRef>,
}

impl<'a> Checker<'a> {
    pub fn new(arena: &'a AstArena, resolutions: &'a Resolutions) -> Self {
        Self {
            arena,
            resolutions,
            cx: TyCx::new(),
            ty_tys: HashMap::new(),
            expr_tys: HashMap::new(),
        }
    }

    pub fn cx(&self) -> &TyCx {
        &self.cx
    }

    /// Render a type, including array length expressions.
    pub fn display(&self, ty: TyRef) -> String {
        self.cx.display(self.arena, ty)
    }

    /// Lower a syntactic type. Results are cached per node.
    pub fn lower_ty(&mut self, id: TyId) -> TyRef {
        if let Some(&ty) = self.ty_tys.get(&id) {
            return ty;
        }

        let arena = self.arena;
        let ty = match &arena[id].kind {
            TyKind::Error => Type::Error,
            TyKind::Unit => Type::Unit,
            TyKind::Int => Type::Int,
            TyKind::Bool => Type::Bool,
            TyKind::Str => Type::Str,
            // Unresolved names were reported by the resolver.
            TyKind::Ident(name) => match self.resolutions.ty(id) {
                Some(_) => Type::Named(name.clone()),
                None => Type::Error,
            },
            TyKind::Tuple(elems) => Type::Tuple(elems.iter().map(|&e| self.lower_ty(e)).collect()),
            TyKind::Slice(elem) => Type::Slice(self.lower_ty(*elem)),
            TyKind::Array { elem, len } => Type::Array {
                elem: self.lower_ty(*elem),
                len: *len,
            },
        };

        let ty = self.cx.intern(ty);
        self.ty_tys.insert(id, ty);
        ty
    }

    /// Signature of the function declared by `stmt`, or `None` if `stmt` is
    /// not a function. A missing return type is unit.
    pub fn fn_sig(&mut self, stmt: StmtId) -> Option<FnSig> {
        let arena = self.arena;
        let func = arena.fn_stmt(stmt)?;
        let params = func.params.iter().map(|p| self.lower_ty(p.ty)).collect();
        let ret = match func.ret_ty {
            Some(ty) => self.lower_ty(ty),
            None => self.cx.unit(),
        };
        tracing::trace!(%stmt, name = %func.name, "lowered signature");
        Some(FnSig { params, ret })
    }

    /// Declared type of a resolved name. Functions and unannotated lets have
    /// none.
    pub fn res_ty(&mut self, res: Res) -> Option<TyRef> {
        let arena = self.arena;
        match res {
            Res::Fn(_) => None,
            Res::FnParam { .. } => {
                let param = res.param(arena)?;
                Some(self.lower_ty(param.ty))
            }
            Res::Let(stmt) => match &arena[stmt].kind {
                StmtKind::Let(local) => local.ty.map(|ty| self.lower_ty(ty)),
                _ => None,
            },
        }
    }

    /// Type of an expression. Results are cached per node.
    pub fn expr_ty(&mut self, id: ExprId) -> Result<TyRef, CheckError> {
        if let Some(&ty) = self.expr_tys.get(&id) {
            return Ok(ty);
        }

        let arena = self.arena;
        let expr = &arena[id];
        let ty = match expr.kind {
            ExprKind::Error => self.cx.error(),
            ExprKind::Unit => self.cx.unit(),
            ref kind => {
                return Err(CheckError::Unsupported {
                    what: describe(kind),
                    pos: expr.pos,
                })
            }
        };

        self.expr_tys.insert(id, ty);
        Ok(ty)
    }

    /// Every function declared in `file`, nested ones included, in source
    /// order.
    pub fn fn_stmts(&self, file: &File) -> Vec<StmtId> {
        let mut out = Vec::new();
        for &stmt in &file.stmts {
            self.collect_fns(stmt, &mut out);
        }
        out
    }

    fn collect_fns(&self, id: StmtId, out: &mut Vec<StmtId>) {
        let arena = self.arena;
        let block = |block: &Block, out: &mut Vec<StmtId>| {
            for &stmt in &block.stmts {
                self.collect_fns(stmt, out);
            }
        };
        match &arena[id].kind {
            StmtKind::Fn(func) => {
                out.push(id);
                block(&func.body, out);
            }
            StmtKind::Block(body) | StmtKind::While { body, .. } => block(body, out),
            StmtKind::If(stmt) => {
                block(&stmt.truthy, out);
                match &stmt.falsy {
                    Some(IfTail::Block(falsy)) => block(falsy, out),
                    Some(IfTail::If(nested)) => self.collect_fns(*nested, out),
                    None => {}
                }
            }
            _ => {}
        }
    }
}

fn describe(kind: &ExprKind) -> &'static str {
    match kind {
        ExprKind::Error => "error",
        ExprKind::Ident(_) => "name",
        ExprKind::Unit => "unit",
        ExprKind::Int(_) => "integer",
        ExprKind::Bool(_) => "boolean",
        ExprKind::Str(_) => "string",
        ExprKind::Tuple(_) => "tuple",
        ExprKind::Repeat { .. } => "array repeat",
        ExprKind::Array(_) => "array",
        ExprKind::Elem { .. } => "element",
        ExprKind::Index { .. } => "index",
        ExprKind::Call { .. } => "call",
        ExprKind::Unary { .. } => "unary",
        ExprKind::Binary { .. } => "binary",
    }
}
