// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The name resolver.
//!
//! Every block (the file included) is resolved in two passes. The first walks
//! the statements in order: a `fn` binds its name at once, has its signature
//! types resolved, and its body queued; everything else resolves in place.
//! The second pass resolves the queued bodies, each behind a function rib, so
//! sibling functions can call each other regardless of order.

use slate_ast::expr::ExprKind;
use slate_ast::stmt::{Block, File, FnStmt, IfTail, LetStmt, StmtKind};
use slate_ast::ty::TyKind;
use slate_ast::{AstArena, ExprId, StmtId, TyId};

use crate::error::ResolveError;
use crate::resolution::{Res, Resolutions};
use crate::rib::{RibKind, RibStack};

/// Resolves names in one file.
pub struct Resolver<'a> {
    arena: &'a AstArena,
    values: RibStack,
    types: RibStack,
    /// One list of queued function bodies per block being resolved.
    late_fn_bodies: Vec<Vec<StmtId>>,
    resolutions: Resolutions,
    errors: Vec<ResolveError>,
}

impl<'a> Resolver<'a> {
    pub fn new(arena: &'a AstArena) -> Self {
        Self {
            arena,
            values: RibStack::new(),
            types: RibStack::new(),
            late_fn_bodies: Vec::new(),
            resolutions: Resolutions::default(),
            errors: Vec::new(),
        }
    }

    /// Resolve a whole file.
    pub fn resolve(arena: &AstArena, file: &File) -> Result<Resolutions, Vec<ResolveError>> {
        let mut resolver = Resolver::new(arena);
        resolver.resolve_file(file);
        resolver.finish()
    }

    pub fn resolve_file(&mut self, file: &File) {
        self.late_fn_bodies.push(Vec::new());
        for &stmt in &file.stmts {
            self.resolve_stmt(stmt);
        }
        self.resolve_bodies();

        tracing::debug!(
            records = self.resolutions.len(),
            errors = self.errors.len(),
            "resolved file"
        );
    }

    pub fn resolutions(&self) -> &Resolutions {
        &self.resolutions
    }

    pub fn errors(&self) -> &[ResolveError] {
        &self.errors
    }

    pub fn finish(self) -> Result<Resolutions, Vec<ResolveError>> {
        if self.errors.is_empty() {
            Ok(self.resolutions)
        } else {
            Err(self.errors)
        }
    }

    // =========================================================================
    // Ribs
    // =========================================================================

    fn rib_point(&self) -> usize {
        self.values.depth()
    }

    fn rib_restore(&mut self, point: usize) {
        self.values.truncate(point);
        self.types.truncate(point);
    }

    fn push_rib(&mut self, kind: RibKind) {
        tracing::trace!(?kind, depth = self.values.depth(), "push rib");
        self.values.push(kind);
        self.types.push(kind);
    }

    // =========================================================================
    // Blocks and deferred bodies
    // =========================================================================

    fn resolve_block(&mut self, block: &Block) {
        self.late_fn_bodies.push(Vec::new());
        let point = self.rib_point();
        self.push_rib(RibKind::Normal);

        for &stmt in &block.stmts {
            self.resolve_stmt(stmt);
        }
        if let Some(tail) = block.tail {
            self.resolve_expr(tail);
        }

        self.resolve_bodies();
        self.rib_restore(point);
    }

    /// Resolve the function bodies queued by the innermost block.
    fn resolve_bodies(&mut self) {
        let arena = self.arena;
        let bodies = self.late_fn_bodies.pop().unwrap_or_default();

        for id in bodies {
            let Some(func) = arena.fn_stmt(id) else {
                continue;
            };
            tracing::trace!(name = %func.name, stmt = %id, "resolve fn body");

            let point = self.rib_point();
            self.push_rib(RibKind::Fn);

            for (index, param) in func.params.iter().enumerate() {
                if let Some(previous) = self.values.in_top(&param.name) {
                    self.errors.push(ResolveError::duplicate_param(
                        param.name.clone(),
                        param.pos,
                        previous.pos(arena),
                    ));
                    continue;
                }
                self.values.define(&param.name, Res::FnParam { func: id, index });
            }

            self.resolve_block(&func.body);
            self.rib_restore(point);
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn resolve_stmt(&mut self, id: StmtId) {
        let arena = self.arena;
        match &arena[id].kind {
            StmtKind::Error | StmtKind::Break => {}
            StmtKind::Fn(func) => self.resolve_fn_stmt(id, func),
            StmtKind::Let(local) => self.resolve_let_stmt(id, local),
            StmtKind::Block(block) => self.resolve_block(block),
            StmtKind::If(stmt) => {
                self.resolve_expr(stmt.cond);
                self.resolve_block(&stmt.truthy);
                match &stmt.falsy {
                    Some(IfTail::Block(block)) => self.resolve_block(block),
                    Some(IfTail::If(nested)) => self.resolve_stmt(*nested),
                    None => {}
                }
            }
            StmtKind::While { cond, body } => {
                self.resolve_expr(*cond);
                self.resolve_block(body);
            }
            StmtKind::Return(value) => {
                if let Some(value) = value {
                    self.resolve_expr(*value);
                }
            }
            StmtKind::Assign { dest, src } => {
                self.resolve_expr(*dest);
                self.resolve_expr(*src);
            }
            StmtKind::Expr(expr) => self.resolve_expr(*expr),
        }
    }

    fn resolve_fn_stmt(&mut self, id: StmtId, func: &FnStmt) {
        let arena = self.arena;
        if let Some(previous) = self.values.in_top(&func.name) {
            self.errors.push(ResolveError::duplicate_fn(
                func.name.clone(),
                arena[id].pos,
                previous.pos(arena),
            ));
            return;
        }
        self.values.define(&func.name, Res::Fn(id));

        for param in &func.params {
            self.resolve_ty(param.ty);
        }
        if let Some(ret_ty) = func.ret_ty {
            self.resolve_ty(ret_ty);
        }

        if let Some(queue) = self.late_fn_bodies.last_mut() {
            queue.push(id);
        }
    }

    /// The binding is visible only to the statements after the `let`.
    fn resolve_let_stmt(&mut self, id: StmtId, local: &LetStmt) {
        if let Some(ty) = local.ty {
            self.resolve_ty(ty);
        }
        self.resolve_expr(local.init);
        self.push_rib(RibKind::Normal);
        self.values.define(&local.name, Res::Let(id));
    }

    // =========================================================================
    // Expressions and types
    // =========================================================================

    /// Resolve every name inside an expression.
    pub fn resolve_expr(&mut self, id: ExprId) {
        let arena = self.arena;
        // Explicit stack: operator and postfix chains can be arbitrarily long.
        let mut pending = vec![id];

        while let Some(id) = pending.pop() {
            match &arena[id].kind {
                ExprKind::Error
                | ExprKind::Unit
                | ExprKind::Int(_)
                | ExprKind::Bool(_)
                | ExprKind::Str(_) => {}
                ExprKind::Ident(name) => {
                    self.resolve_ident_expr(id, name);
                }
                ExprKind::Tuple(elements) | ExprKind::Array(elements) => {
                    pending.extend(elements.iter().rev());
                }
                ExprKind::Repeat { value, len } => pending.extend([*len, *value]),
                ExprKind::Elem { expr, .. } | ExprKind::Unary { expr, .. } => pending.push(*expr),
                ExprKind::Index { expr, index } => pending.extend([*index, *expr]),
                ExprKind::Call { callee, args } => {
                    pending.extend(args.iter().rev());
                    pending.push(*callee);
                }
                ExprKind::Binary { left, right, .. } => pending.extend([*right, *left]),
            }
        }
    }

    fn resolve_ident_expr(&mut self, id: ExprId, name: &str) -> Option<Res> {
        if let Some(res) = self.resolutions.expr(id) {
            return Some(res);
        }
        match self.values.lookup(name) {
            Some(res) => {
                self.resolutions.exprs.insert(id, res);
                Some(res)
            }
            None => {
                self.errors
                    .push(ResolveError::undefined_value(name, self.arena[id].pos));
                None
            }
        }
    }

    /// Resolve every name inside a type, including array length expressions.
    pub fn resolve_ty(&mut self, id: TyId) {
        let arena = self.arena;
        match &arena[id].kind {
            TyKind::Error | TyKind::Unit | TyKind::Int | TyKind::Bool | TyKind::Str => {}
            TyKind::Ident(name) => {
                self.resolve_ident_ty(id, name);
            }
            TyKind::Tuple(elements) => {
                for &element in elements {
                    self.resolve_ty(element);
                }
            }
            TyKind::Slice(elem) => self.resolve_ty(*elem),
            TyKind::Array { elem, len } => {
                self.resolve_ty(*elem);
                self.resolve_expr(*len);
            }
        }
    }

    fn resolve_ident_ty(&mut self, id: TyId, name: &str) -> Option<Res> {
        if let Some(res) = self.resolutions.ty(id) {
            return Some(res);
        }
        match self.types.lookup(name) {
            Some(res) => {
                self.resolutions.tys.insert(id, res);
                Some(res)
            }
            None => {
                self.errors
                    .push(ResolveError::undefined_type(name, self.arena[id].pos));
                None
            }
        }
    }
}
