// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression grammar using Pratt parsing.

use slate_ast::expr::{BinOp, ExprKind, UnaryOp};
use slate_ast::token::TokenKind;
use slate_ast::ExprId;

use crate::error::ParseError;
use crate::parser::{PResult, Parser};

impl Parser<'_> {
    /// Parse one expression.
    ///
    /// On a syntax error the error is recorded and an `Error` expression is
    /// returned; no input is skipped.
    pub fn parse_expr(&mut self) -> ExprId {
        let start = self.pos();
        match self.expr() {
            Ok(id) => id,
            Err(error) => {
                self.record_error(error);
                self.arena.alloc_expr(ExprKind::Error, start)
            }
        }
    }

    pub(crate) fn expr(&mut self) -> PResult<ExprId> {
        self.nested("expression", |p| p.parse_expr_bp(0))
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> PResult<ExprId> {
        let start = self.pos();
        let mut lhs = self.parse_unary()?;

        while let Some(op) = self.binop() {
            let (l_bp, r_bp) = op.binding_power();
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr_bp(r_bp)?;
            lhs = self
                .arena
                .alloc_expr(ExprKind::Binary { op, left: lhs, right: rhs }, start);
        }

        Ok(lhs)
    }

    fn binop(&self) -> Option<BinOp> {
        Some(match self.current_kind()? {
            TokenKind::Or => BinOp::Or,
            TokenKind::And => BinOp::And,
            TokenKind::EqEq => BinOp::Eq,
            TokenKind::BangEq => BinOp::Ne,
            TokenKind::Lt => BinOp::Lt,
            TokenKind::Gt => BinOp::Gt,
            TokenKind::Plus => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Star => BinOp::Mul,
            TokenKind::Slash => BinOp::Div,
            _ => return None,
        })
    }

    /// `not x` and `-x` bind tighter than any binary operator and take a
    /// postfix chain as their operand.
    fn parse_unary(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let op = match self.current_kind() {
            Some(TokenKind::Not) => UnaryOp::Not,
            Some(TokenKind::Minus) => UnaryOp::Neg,
            _ => return self.parse_postfix(),
        };
        self.advance();
        let expr = self.parse_postfix()?;
        Ok(self.arena.alloc_expr(ExprKind::Unary { op, expr }, start))
    }

    /// Primary followed by any number of `.N`, `[index]` and `(args)`.
    fn parse_postfix(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let mut expr = self.parse_primary()?;

        loop {
            let kind = match self.current_kind() {
                Some(TokenKind::Dot) => {
                    self.advance();
                    let index = self.parse_elem_index()?;
                    ExprKind::Elem { expr, index }
                }
                Some(TokenKind::LBracket) => {
                    self.advance();
                    let index = self.expr()?;
                    self.expect(&TokenKind::RBracket)?;
                    ExprKind::Index { expr, index }
                }
                Some(TokenKind::LParen) => {
                    self.advance();
                    let args = self.parse_args()?;
                    ExprKind::Call { callee: expr, args }
                }
                _ => break,
            };
            expr = self.arena.alloc_expr(kind, start);
        }

        Ok(expr)
    }

    fn parse_elem_index(&mut self) -> PResult<u32> {
        let pos = self.pos();
        match self.current_kind() {
            Some(&TokenKind::Int(n)) => {
                self.advance();
                u32::try_from(n).map_err(|_| {
                    ParseError::new(format!("element index {n} is too large"), pos)
                        .with_hint("tuples have far fewer elements")
                })
            }
            _ => Err(self.expected("element index")),
        }
    }

    /// Call arguments after `(`, through the closing `)`.
    fn parse_args(&mut self) -> PResult<Vec<ExprId>> {
        let mut args = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.at_end() {
            args.push(self.expr()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> PResult<ExprId> {
        let start = self.pos();

        let kind = match self.current_kind() {
            Some(TokenKind::Ident(name)) => {
                let kind = match name.as_str() {
                    "true" => ExprKind::Bool(true),
                    "false" => ExprKind::Bool(false),
                    _ => ExprKind::Ident(name.clone()),
                };
                self.advance();
                kind
            }
            Some(&TokenKind::Int(n)) => {
                self.advance();
                ExprKind::Int(n)
            }
            Some(TokenKind::Str(s)) => {
                let kind = ExprKind::Str(s.clone());
                self.advance();
                kind
            }
            Some(TokenKind::LParen) => return self.parse_paren_or_tuple(),
            Some(TokenKind::LBracket) => return self.parse_array_literal(),
            // Already reported by the lexer.
            Some(TokenKind::Error) => {
                self.advance();
                ExprKind::Error
            }
            _ => return Err(self.expected("expression")),
        };

        Ok(self.arena.alloc_expr(kind, start))
    }

    /// `()`, `(e)`, `(e,)` or `(a, b, ...)`.
    fn parse_paren_or_tuple(&mut self) -> PResult<ExprId> {
        let start = self.expect(&TokenKind::LParen)?;

        if self.match_token(&TokenKind::RParen) {
            return Ok(self.arena.alloc_expr(ExprKind::Unit, start));
        }

        let first = self.expr()?;

        if self.match_token(&TokenKind::Comma) {
            let mut elements = vec![first];
            while !self.check(&TokenKind::RParen) && !self.at_end() {
                elements.push(self.expr()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RParen)?;
            Ok(self.arena.alloc_expr(ExprKind::Tuple(elements), start))
        } else {
            self.expect(&TokenKind::RParen)?;
            Ok(first)
        }
    }

    /// `[value; len]` or `[a, b, ...]`.
    fn parse_array_literal(&mut self) -> PResult<ExprId> {
        let start = self.expect(&TokenKind::LBracket)?;

        if self.match_token(&TokenKind::RBracket) {
            return Ok(self.arena.alloc_expr(ExprKind::Array(Vec::new()), start));
        }

        let first = self.expr()?;

        if self.match_token(&TokenKind::Semi) {
            let len = self.expr()?;
            self.expect(&TokenKind::RBracket)?;
            return Ok(self.arena.alloc_expr(ExprKind::Repeat { value: first, len }, start));
        }

        let mut elements = vec![first];
        if self.match_token(&TokenKind::Comma) {
            while !self.check(&TokenKind::RBracket) && !self.at_end() {
                elements.push(self.expr()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RBracket)?;
        Ok(self.arena.alloc_expr(ExprKind::Array(elements), start))
    }
}
