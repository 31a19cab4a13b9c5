//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! stmt           ::= vdecl_stmt | assign_or_call | cond_stmt
//!                  | while_stmt | for_stmt | exit_stmt
//! vdecl_stmt     ::= VAR ID (COLON dtype)? ASSIGN expr
//! assign_or_call ::= ID ( LPAREN args? RPAREN | (DOT ID)* ASSIGN expr )
//! cond_stmt      ::= IF expr THEN stmt* (ELSEIF expr THEN stmt*)* (ELSE stmt*)? END
//! while_stmt     ::= WHILE expr DO stmt* END
//! for_stmt       ::= FOR ID ASSIGN expr TO expr DO stmt* END
//! exit_stmt      ::= RETURN expr
//! ```
//!
//! Statement lists stop at the first token that cannot start a statement;
//! the enclosing production then demands its closing keyword.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse `stmt*`
    pub(crate) fn parse_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while self.current.kind.starts_stmt() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current.kind {
            TokenKind::Var => self.parse_var_declaration().map(Stmt::VarDecl),
            TokenKind::Id => self.parse_assign_or_call(),
            TokenKind::If => self.parse_if_statement().map(Stmt::If),
            TokenKind::While => self.parse_while_statement().map(Stmt::While),
            TokenKind::For => self.parse_for_statement().map(Stmt::For),
            TokenKind::Return => self.parse_return_statement().map(Stmt::Return),
            _ => Err(self.error("expecting statement")),
        }
    }

    /// Also used for the fields of a `type` declaration.
    pub(crate) fn parse_var_declaration(&mut self) -> Result<VarDeclStmt, ParseError> {
        self.eat(TokenKind::Var, "expecting 'var'")?;
        let id = self.expect_identifier()?;

        let declared_type = match self.match_token(TokenKind::Colon)? {
            Some(_) => Some(self.parse_data_type()?),
            None => None,
        };

        self.eat(TokenKind::Assign, "expecting '=' in variable declaration")?;
        let init = self.parse_expression()?;

        Ok(VarDeclStmt {
            id,
            declared_type,
            init,
        })
    }

    /// The identifier is consumed first; `(` then decides call vs. assignment.
    fn parse_assign_or_call(&mut self) -> Result<Stmt, ParseError> {
        let id = self.expect_identifier()?;

        if self.check(TokenKind::LParen) {
            return self.parse_call_tail(id).map(Stmt::Call);
        }

        let path = self.parse_path_tail(id)?;
        self.eat(TokenKind::Assign, "expecting '=' in assignment")?;
        let value = self.parse_expression()?;

        Ok(Stmt::Assign(AssignStmt { path, value }))
    }

    fn parse_if_statement(&mut self) -> Result<IfStmt, ParseError> {
        self.eat(TokenKind::If, "expecting 'if'")?;
        let if_part = self.parse_basic_if()?;

        let mut else_ifs = Vec::new();
        while self.match_token(TokenKind::ElseIf)?.is_some() {
            else_ifs.push(self.parse_basic_if()?);
        }

        let else_body = match self.match_token(TokenKind::Else)? {
            Some(_) => self.parse_statements()?,
            None => Vec::new(),
        };

        self.expect_end("to close 'if'")?;

        Ok(IfStmt {
            if_part,
            else_ifs,
            else_body,
        })
    }

    /// `expr THEN stmt*`, shared by `if` and `elseif`
    fn parse_basic_if(&mut self) -> Result<BasicIf, ParseError> {
        let cond = self.parse_expression()?;
        self.eat(TokenKind::Then, "expecting 'then' after condition")?;
        let body = self.parse_statements()?;
        Ok(BasicIf { cond, body })
    }

    fn parse_while_statement(&mut self) -> Result<WhileStmt, ParseError> {
        self.eat(TokenKind::While, "expecting 'while'")?;
        let cond = self.parse_expression()?;
        self.eat(TokenKind::Do, "expecting 'do' after while condition")?;
        let body = self.parse_statements()?;
        self.expect_end("to close 'while'")?;

        Ok(WhileStmt { cond, body })
    }

    fn parse_for_statement(&mut self) -> Result<ForStmt, ParseError> {
        self.eat(TokenKind::For, "expecting 'for'")?;
        let var_id = self.expect_identifier()?;
        self.eat(TokenKind::Assign, "expecting '=' after loop variable")?;
        let start = self.parse_expression()?;
        self.eat(TokenKind::To, "expecting 'to' in for loop")?;
        let end = self.parse_expression()?;
        self.eat(TokenKind::Do, "expecting 'do' in for loop")?;
        let body = self.parse_statements()?;
        self.expect_end("to close 'for'")?;

        Ok(ForStmt {
            var_id,
            start,
            end,
            body,
        })
    }

    fn parse_return_statement(&mut self) -> Result<ReturnStmt, ParseError> {
        self.eat(TokenKind::Return, "expecting 'return'")?;
        let value = self.parse_expression()?;
        Ok(ReturnStmt { value })
    }
}
