//! Compact S-expression rendering of syntax trees.
//!
//! Used by `slate parse` and by tests that assert on tree shape:
//! `1 + 2 * 3` renders as `(+ 1 (* 2 3))`.

use std::fmt::Write;

use crate::expr::ExprKind;
use crate::stmt::{Block, IfTail, StmtKind};
use crate::ty::TyKind;
use crate::{AstArena, ExprId, StmtId, TyId};

pub fn expr_to_string(arena: &AstArena, id: ExprId) -> String {
    let mut p = Printer::new(arena);
    p.expr(id);
    p.out
}

pub fn ty_to_string(arena: &AstArena, id: TyId) -> String {
    let mut p = Printer::new(arena);
    p.ty(id);
    p.out
}

pub fn stmt_to_string(arena: &AstArena, id: StmtId) -> String {
    let mut p = Printer::new(arena);
    p.stmt(id);
    p.out
}

enum Step {
    Expr(ExprId),
    Space,
    Close,
}

struct Printer<'a> {
    arena: &'a AstArena,
    out: String,
}

impl<'a> Printer<'a> {
    fn new(arena: &'a AstArena) -> Self {
        Self { arena, out: String::new() }
    }

    fn list(&mut self, head: &str, items: &[ExprId]) {
        self.out.push('(');
        self.out.push_str(head);
        for &item in items {
            self.out.push(' ');
            self.expr(item);
        }
        self.out.push(')');
    }

    /// Operator and postfix chains can be arbitrarily long, so expressions
    /// are printed from an explicit work stack.
    fn expr(&mut self, id: ExprId) {
        let arena = self.arena;
        let mut steps = vec![Step::Expr(id)];

        while let Some(step) = steps.pop() {
            let id = match step {
                Step::Expr(id) => id,
                Step::Space => {
                    self.out.push(' ');
                    continue;
                }
                Step::Close => {
                    self.out.push(')');
                    continue;
                }
            };
            match &arena[id].kind {
                ExprKind::Error => self.out.push_str("<error>"),
                ExprKind::Ident(name) => self.out.push_str(name),
                ExprKind::Unit => self.out.push_str("()"),
                ExprKind::Int(n) => {
                    let _ = write!(self.out, "{n}");
                }
                ExprKind::Bool(b) => {
                    let _ = write!(self.out, "{b}");
                }
                ExprKind::Str(s) => {
                    let _ = write!(self.out, "{s:?}");
                }
                ExprKind::Tuple(items) => self.open("tuple", items, &mut steps),
                ExprKind::Array(items) => self.open("array", items, &mut steps),
                ExprKind::Repeat { value, len } => self.open("repeat", &[*value, *len], &mut steps),
                ExprKind::Elem { expr, index } => {
                    self.open(&format!(".{index}"), &[*expr], &mut steps)
                }
                ExprKind::Index { expr, index } => self.open("index", &[*expr, *index], &mut steps),
                ExprKind::Call { callee, args } => {
                    let mut items = vec![*callee];
                    items.extend(args);
                    self.open("call", &items, &mut steps);
                }
                ExprKind::Unary { op, expr } => self.open(op.as_str(), &[*expr], &mut steps),
                ExprKind::Binary { op, left, right } => {
                    self.open(op.as_str(), &[*left, *right], &mut steps)
                }
            }
        }
    }

    /// Write `(head` now and schedule ` item`s and the closing paren.
    fn open(&mut self, head: &str, items: &[ExprId], steps: &mut Vec<Step>) {
        self.out.push('(');
        self.out.push_str(head);
        steps.push(Step::Close);
        for &item in items.iter().rev() {
            steps.push(Step::Expr(item));
            steps.push(Step::Space);
        }
    }

    fn ty(&mut self, id: TyId) {
        let arena = self.arena;
        match &arena[id].kind {
            TyKind::Error => self.out.push_str("<error>"),
            TyKind::Ident(name) => self.out.push_str(name),
            TyKind::Unit => self.out.push_str("()"),
            TyKind::Int => self.out.push_str("int"),
            TyKind::Bool => self.out.push_str("bool"),
            TyKind::Str => self.out.push_str("str"),
            TyKind::Tuple(items) => {
                self.out.push_str("(tuple");
                for &item in items {
                    self.out.push(' ');
                    self.ty(item);
                }
                self.out.push(')');
            }
            TyKind::Slice(elem) => {
                self.out.push('[');
                self.ty(*elem);
                self.out.push(']');
            }
            TyKind::Array { elem, len } => {
                self.out.push('[');
                self.ty(*elem);
                self.out.push_str("; ");
                self.expr(*len);
                self.out.push(']');
            }
        }
    }

    fn block(&mut self, block: &Block) {
        self.out.push_str("(block");
        for &stmt in &block.stmts {
            self.out.push(' ');
            self.stmt(stmt);
        }
        if let Some(tail) = block.tail {
            self.out.push(' ');
            self.expr(tail);
        }
        self.out.push(')');
    }

    fn stmt(&mut self, id: StmtId) {
        let arena = self.arena;
        let stmt = &arena[id];
        for attr in &stmt.attrs {
            let _ = write!(self.out, "#[{}] ", attr.name);
        }
        match &stmt.kind {
            StmtKind::Error => self.out.push_str("<error>"),
            StmtKind::Fn(func) => {
                let _ = write!(self.out, "(fn {} (", func.name);
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    let _ = write!(self.out, "({} ", param.name);
                    self.ty(param.ty);
                    self.out.push(')');
                }
                self.out.push_str(") ");
                if let Some(ret) = func.ret_ty {
                    self.out.push_str("-> ");
                    self.ty(ret);
                    self.out.push(' ');
                }
                self.block(&func.body);
                self.out.push(')');
            }
            StmtKind::Let(local) => {
                let _ = write!(self.out, "(let {}", local.name);
                if let Some(ty) = local.ty {
                    self.out.push_str(": ");
                    self.ty(ty);
                }
                self.out.push(' ');
                self.expr(local.init);
                self.out.push(')');
            }
            StmtKind::Block(block) => self.block(block),
            StmtKind::If(if_stmt) => {
                self.out.push_str("(if ");
                self.expr(if_stmt.cond);
                self.out.push(' ');
                self.block(&if_stmt.truthy);
                match &if_stmt.falsy {
                    Some(IfTail::Block(block)) => {
                        self.out.push(' ');
                        self.block(block);
                    }
                    Some(IfTail::If(next)) => {
                        self.out.push(' ');
                        self.stmt(*next);
                    }
                    None => {}
                }
                self.out.push(')');
            }
            StmtKind::While { cond, body } => {
                self.out.push_str("(while ");
                self.expr(*cond);
                self.out.push(' ');
                self.block(body);
                self.out.push(')');
            }
            StmtKind::Return(Some(value)) => self.list("return", &[*value]),
            StmtKind::Return(None) => self.out.push_str("(return)"),
            StmtKind::Break => self.out.push_str("(break)"),
            StmtKind::Assign { dest, src } => self.list("=", &[*dest, *src]),
            StmtKind::Expr(expr) => self.expr(*expr),
        }
    }
}
