//! Expression parsing implementation
//!
//! # Grammar
//!
//! ```text
//! expr     ::= (NOT expr | LPAREN expr RPAREN | rvalue) (operator expr)?
//! operator ::= PLUS | MINUS | MULTIPLY | DIVIDE | MODULO | AND | OR
//!            | EQUAL | NOT_EQUAL | LESS | LESS_EQUAL | GREATER | GREATER_EQUAL
//! rvalue   ::= pval | NIL | NEW ID | NEG expr | ID ( call_tail | (DOT ID)* )
//! args     ::= expr (COMMA expr)*
//! ```
//!
//! # Precedence
//!
//! There is none. After the first operator the entire remainder is parsed
//! as one sub-expression, so `1 + 2 * 3` is `1 + (2 * 3)` and `2 * 3 + 1`
//! is `2 * (3 + 1)`. Programs group explicitly with parentheses.
//!
//! # Nesting
//!
//! Chains of any length parse without recursion. Nesting through `not`,
//! parentheses, `neg` or call arguments is capped at `MAX_NESTING` levels
//! and deeper input is a syntax error.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::token::{Token, TokenKind};

/// Deepest `not`/`(`/`neg`/argument nesting accepted before giving up
pub(crate) const MAX_NESTING: usize = 64;

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        if self.nesting >= MAX_NESTING {
            return Err(self.error("expression nested too deeply"));
        }
        self.nesting += 1;
        let expr = self.parse_chain();
        self.nesting -= 1;
        expr
    }

    /// Operator chains are read in a loop and folded from the right, so
    /// chain length never costs stack depth.
    fn parse_chain(&mut self) -> Result<Expr, ParseError> {
        let mut links = Vec::new();
        let (negated, first) = loop {
            let (negated, first) = self.parse_head()?;
            if negated || !self.current.kind.is_operator() {
                break (negated, first);
            }
            let op = self.advance()?;
            links.push((first, op));
        };

        let mut expr = Expr {
            negated,
            first,
            rest: None,
        };
        while let Some((first, op)) = links.pop() {
            expr = Expr {
                negated: false,
                first,
                rest: Some(ExprRest {
                    op,
                    expr: Box::new(expr),
                }),
            };
        }
        Ok(expr)
    }

    /// Leading term of a chain; the flag is set for `not`.
    fn parse_head(&mut self) -> Result<(bool, Term), ParseError> {
        if self.match_token(TokenKind::Not)?.is_some() {
            // `not` applies to the whole chain that follows
            let inner = self.parse_expression()?;
            return Ok((true, Term::Complex(Box::new(inner))));
        }
        if self.match_token(TokenKind::LParen)?.is_some() {
            let inner = self.parse_expression()?;
            self.eat(TokenKind::RParen, "expecting ')' to close expression")?;
            return Ok((false, Term::Complex(Box::new(inner))));
        }
        Ok((false, Term::Simple(self.parse_rvalue()?)))
    }

    fn parse_rvalue(&mut self) -> Result<RValue, ParseError> {
        let kind = self.current.kind;
        match kind {
            _ if kind.is_literal() => self.advance().map(RValue::Simple),
            TokenKind::Nil => self.advance().map(RValue::Simple),
            TokenKind::New => {
                self.advance()?;
                let type_id = self.eat(TokenKind::Id, "expecting type name after 'new'")?;
                Ok(RValue::New(type_id))
            }
            TokenKind::Neg => {
                self.advance()?;
                let inner = self.parse_expression()?;
                Ok(RValue::Negated(Box::new(inner)))
            }
            TokenKind::Id => {
                let id = self.advance()?;
                if self.check(TokenKind::LParen) {
                    self.parse_call_tail(id).map(RValue::Call)
                } else {
                    self.parse_path_tail(id).map(RValue::Id)
                }
            }
            _ => Err(self.error("expecting value")),
        }
    }

    /// `( args? )` after an already-consumed function name
    pub(crate) fn parse_call_tail(&mut self, function_id: Token) -> Result<CallExpr, ParseError> {
        self.eat(TokenKind::LParen, "expecting '(' in function call")?;

        let mut args = Vec::new();
        if self.current.kind.starts_expr() {
            args.push(self.parse_expression()?);
            while self.match_token(TokenKind::Comma)?.is_some() {
                args.push(self.parse_expression()?);
            }
        }

        self.eat(TokenKind::RParen, "expecting ')' after arguments")?;
        Ok(CallExpr { function_id, args })
    }

    /// `(DOT ID)*` after an already-consumed head identifier
    pub(crate) fn parse_path_tail(&mut self, head: Token) -> Result<Vec<Token>, ParseError> {
        let mut path = vec![head];
        while self.match_token(TokenKind::Dot)?.is_some() {
            path.push(self.eat(TokenKind::Id, "expecting field name after '.'")?);
        }
        Ok(path)
    }
}
