//! Declaration parsing implementation
//!
//! # Grammar
//!
//! ```text
//! program ::= (tdecl | fdecl)* EOS
//! tdecl   ::= TYPE ID vdecl_stmt* END
//! fdecl   ::= FUN (dtype | NIL) ID LPAREN params? RPAREN stmt* END
//! params  ::= ID COLON dtype (COMMA ID COLON dtype)*
//! dtype   ::= INT | DOUBLE | BOOL | CHAR | STRING | ID
//! ```

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::token::{Token, TokenKind};

impl Parser<'_> {
    /// Parse a top-level declaration (type or function)
    pub(crate) fn parse_declaration(&mut self) -> Result<Decl, ParseError> {
        match self.current.kind {
            TokenKind::Type => self.parse_type_declaration().map(Decl::Type),
            TokenKind::Fun => self.parse_function_declaration().map(Decl::Fun),
            _ => Err(self.error("expecting 'type' or 'fun'")),
        }
    }

    fn parse_type_declaration(&mut self) -> Result<TypeDecl, ParseError> {
        self.eat(TokenKind::Type, "expecting 'type'")?;
        let id = self.expect_identifier()?;

        let mut fields = Vec::new();
        while self.check(TokenKind::Var) {
            fields.push(self.parse_var_declaration()?);
        }

        self.expect_end("after type fields")?;
        Ok(TypeDecl { id, fields })
    }

    fn parse_function_declaration(&mut self) -> Result<FunDecl, ParseError> {
        self.eat(TokenKind::Fun, "expecting 'fun'")?;

        let return_type = match self.match_token(TokenKind::Nil)? {
            Some(nil) => nil,
            None => self.parse_data_type()?,
        };
        let id = self.expect_identifier()?;

        self.eat(TokenKind::LParen, "expecting '(' after function name")?;
        let params = self.parse_parameter_list()?;
        self.eat(TokenKind::RParen, "expecting ')' after parameters")?;

        let body = self.parse_statements()?;
        self.expect_end("after function body")?;

        Ok(FunDecl {
            return_type,
            id,
            params,
            body,
        })
    }

    /// Zero or more `id: type` pairs; a trailing comma is an error.
    fn parse_parameter_list(&mut self) -> Result<Vec<FunParam>, ParseError> {
        let mut params = Vec::new();

        if !self.check(TokenKind::Id) {
            return Ok(params);
        }

        loop {
            let id = self.expect_identifier()?;
            self.eat(TokenKind::Colon, "expecting ':' after parameter name")?;
            let param_type = self.parse_data_type()?;
            params.push(FunParam { id, param_type });

            if self.match_token(TokenKind::Comma)?.is_none() {
                break;
            }
        }

        Ok(params)
    }

    pub(crate) fn parse_data_type(&mut self) -> Result<Token, ParseError> {
        if self.current.kind.is_data_type() {
            self.advance()
        } else {
            Err(self.error("expecting data type"))
        }
    }
}
