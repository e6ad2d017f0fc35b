// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statement grammar.

use slate_ast::stmt::{Attr, Block, FnStmt, IfStmt, IfTail, LetStmt, Param, StmtKind};
use slate_ast::token::TokenKind;
use slate_ast::StmtId;

use crate::parser::{PResult, Parser};

impl Parser<'_> {
    /// Parse one statement.
    ///
    /// On a syntax error the error is recorded, input is skipped to the next
    /// statement boundary, and an `Error` statement is returned.
    pub fn parse_stmt(&mut self) -> StmtId {
        let start = self.pos();
        match self.stmt() {
            Ok(id) => id,
            Err(error) => {
                self.record_error(error);
                self.synchronize();
                self.arena.alloc_stmt(StmtKind::Error, start, Vec::new())
            }
        }
    }

    fn stmt(&mut self) -> PResult<StmtId> {
        let attrs = self.parse_attrs()?;
        let pos = self.pos();

        let kind = match self.current_kind() {
            Some(TokenKind::Fn) => self.parse_fn()?,
            Some(TokenKind::Let) => self.parse_let()?,
            Some(TokenKind::LBrace) => StmtKind::Block(self.parse_block()?),
            Some(TokenKind::If) => self.parse_if()?,
            Some(TokenKind::While) => self.parse_while()?,
            Some(TokenKind::Return) => self.parse_return()?,
            Some(TokenKind::Break) => {
                self.advance();
                self.expect_semi();
                StmtKind::Break
            }
            _ => self.parse_expr_or_assign()?,
        };

        Ok(self.arena.alloc_stmt(kind, pos, attrs))
    }

    /// `#[name]` annotations, any number of them.
    fn parse_attrs(&mut self) -> PResult<Vec<Attr>> {
        let mut attrs = Vec::new();
        while self.check(&TokenKind::Hash) {
            let pos = self.expect(&TokenKind::Hash)?;
            self.expect(&TokenKind::LBracket)?;
            let (name, _) = self.expect_ident()?;
            self.expect(&TokenKind::RBracket)?;
            attrs.push(Attr { name, pos });
        }
        Ok(attrs)
    }

    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> PResult<Block> {
        self.nested("block", Self::parse_block_inner)
    }

    fn parse_block_inner(&mut self) -> PResult<Block> {
        let pos = self.expect(&TokenKind::LBrace)?;
        let mut stmts = Vec::new();

        while !self.check(&TokenKind::RBrace) && !self.at_end() && !self.too_many_errors() {
            let before = self.pos();
            stmts.push(self.parse_stmt());
            if self.pos() == before {
                self.advance();
            }
        }

        self.expect(&TokenKind::RBrace)?;
        Ok(Block { stmts, tail: None, pos })
    }

    /// `fn name(a: T, b: U,) -> R { ... }`
    fn parse_fn(&mut self) -> PResult<StmtKind> {
        self.expect(&TokenKind::Fn)?;
        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::LParen)?;

        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.at_end() {
            let (param_name, pos) = self.expect_ident()?;
            self.expect(&TokenKind::Colon)?;
            let ty = self.ty()?;
            params.push(Param { name: param_name, ty, pos });
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;

        let ret_ty = if self.match_token(&TokenKind::Arrow) {
            Some(self.ty()?)
        } else {
            None
        };
        let body = self.parse_block()?;

        Ok(StmtKind::Fn(FnStmt { name, params, ret_ty, body }))
    }

    /// `let name: T = init;`
    fn parse_let(&mut self) -> PResult<StmtKind> {
        self.expect(&TokenKind::Let)?;
        let (name, _) = self.expect_ident()?;
        let ty = if self.match_token(&TokenKind::Colon) {
            Some(self.ty()?)
        } else {
            None
        };
        self.expect(&TokenKind::Eq)?;
        let init = self.expr()?;
        self.expect_semi();
        Ok(StmtKind::Let(LetStmt { name, ty, init }))
    }

    /// `if cond { ... } else { ... }` or `... else if ...`
    fn parse_if(&mut self) -> PResult<StmtKind> {
        self.expect(&TokenKind::If)?;
        let cond = self.expr()?;
        let truthy = self.parse_block()?;

        let falsy = if self.match_token(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                let pos = self.pos();
                let kind = self.nested("`else if` chain", Self::parse_if)?;
                Some(IfTail::If(self.arena.alloc_stmt(kind, pos, Vec::new())))
            } else {
                Some(IfTail::Block(self.parse_block()?))
            }
        } else {
            None
        };

        Ok(StmtKind::If(IfStmt { cond, truthy, falsy }))
    }

    fn parse_while(&mut self) -> PResult<StmtKind> {
        self.expect(&TokenKind::While)?;
        let cond = self.expr()?;
        let body = self.parse_block()?;
        Ok(StmtKind::While { cond, body })
    }

    /// `return;` or `return value;`
    fn parse_return(&mut self) -> PResult<StmtKind> {
        self.expect(&TokenKind::Return)?;
        if self.match_token(&TokenKind::Semi) {
            return Ok(StmtKind::Return(None));
        }
        let value = self.expr()?;
        self.expect_semi();
        Ok(StmtKind::Return(Some(value)))
    }

    /// `expr;` or `dest = src;`
    fn parse_expr_or_assign(&mut self) -> PResult<StmtKind> {
        let expr = self.expr()?;
        if self.match_token(&TokenKind::Eq) {
            let src = self.expr()?;
            self.expect_semi();
            return Ok(StmtKind::Assign { dest: expr, src });
        }
        self.expect_semi();
        Ok(StmtKind::Expr(expr))
    }
}
