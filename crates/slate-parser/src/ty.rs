// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type grammar.

use slate_ast::token::TokenKind;
use slate_ast::ty::TyKind;
use slate_ast::TyId;

use crate::parser::{PResult, Parser};

impl Parser<'_> {
    /// Parse one type.
    ///
    /// On a syntax error the error is recorded and an `Error` type is
    /// returned; no input is skipped.
    pub fn parse_ty(&mut self) -> TyId {
        let start = self.pos();
        match self.ty() {
            Ok(id) => id,
            Err(error) => {
                self.record_error(error);
                self.arena.alloc_ty(TyKind::Error, start)
            }
        }
    }

    pub(crate) fn ty(&mut self) -> PResult<TyId> {
        self.nested("type", Self::ty_inner)
    }

    fn ty_inner(&mut self) -> PResult<TyId> {
        let start = self.pos();

        let kind = match self.current_kind() {
            Some(TokenKind::Ident(name)) => {
                let kind = TyKind::primitive(name).unwrap_or_else(|| TyKind::Ident(name.clone()));
                self.advance();
                kind
            }
            Some(TokenKind::LParen) => {
                self.advance();
                self.parse_tuple_ty()?
            }
            Some(TokenKind::LBracket) => {
                self.advance();
                let elem = self.ty()?;
                if self.match_token(&TokenKind::Semi) {
                    let len = self.expr()?;
                    self.expect(&TokenKind::RBracket)?;
                    TyKind::Array { elem, len }
                } else {
                    self.expect(&TokenKind::RBracket)?;
                    TyKind::Slice(elem)
                }
            }
            // Already reported by the lexer.
            Some(TokenKind::Error) => {
                self.advance();
                TyKind::Error
            }
            _ => return Err(self.expected("type")),
        };

        Ok(self.arena.alloc_ty(kind, start))
    }

    /// After `(`: `)` is unit, anything else is a tuple, even with one element.
    fn parse_tuple_ty(&mut self) -> PResult<TyKind> {
        if self.match_token(&TokenKind::RParen) {
            return Ok(TyKind::Unit);
        }

        let mut elements = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.at_end() {
            elements.push(self.ty()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(TyKind::Tuple(elements))
    }
}
