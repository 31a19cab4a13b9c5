//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and the primitives every
//! production is written in terms of.
//!
//! # Parser Architecture
//!
//! Recursive descent with a single token of lookahead (`current`). The
//! parser pulls tokens from the [`Lexer`] one at a time; nothing is
//! buffered beyond the current token. Productions are split across:
//! - `declarations`: `type` and `fun` declarations, parameters, data types
//! - `statements`: variable declarations, assignments, calls, control flow
//! - `expressions`: the flat operator chain, terms and r-values
//!
//! The first violation aborts the parse; no partial tree is returned.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};

/// Token stream the parser pulls from: a [`Lexer`], or tokens scanned earlier
type TokenStream<'a> = Box<dyn Iterator<Item = Result<Token, ParseError>> + 'a>;

/// Recursive descent parser for MyPL
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    pub(crate) current: Token,
    /// Open `not`/`(`/`neg`/call-argument expressions
    pub(crate) nesting: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser and read the first token.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        Self::from_tokens(Lexer::new(source))
    }

    /// Parse from any token source ending in `EOS` or an error, such as a
    /// [`Lexer`] or a `Vec` it was collected into.
    pub fn from_tokens<I>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Result<Token, ParseError>>,
        I::IntoIter: 'a,
    {
        let mut tokens: TokenStream<'a> = Box::new(tokens.into_iter());
        let current = match tokens.next() {
            Some(token) => token?,
            None => Token::new(TokenKind::Eos, "", SourceLocation::new(1, 1)),
        };
        Ok(Self {
            tokens,
            current,
            nesting: 0,
        })
    }

    /// Parse the entire program (top-level declarations) through `EOS`.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.check(TokenKind::Eos) {
            let decl = self.parse_declaration()?;
            program.decls.push(decl);
        }
        self.eat(TokenKind::Eos, "expecting end-of-file")?;

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Move to the next token and hand back the one just consumed.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = match self.tokens.next() {
            Some(token) => token?,
            // the stream has ended; keep answering with EOS
            None => Token::new(TokenKind::Eos, "", self.current.location),
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Result<Option<Token>, ParseError> {
        if self.check(kind) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consume a token of the given kind or fail with `message`.
    pub(crate) fn eat(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.error(message))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<Token, ParseError> {
        self.eat(TokenKind::Id, "expecting identifier")
    }

    pub(crate) fn expect_end(&mut self, ctx: &str) -> Result<Token, ParseError> {
        self.eat(TokenKind::End, &format!("expecting 'end' {ctx}"))
    }

    /// Syntax error pointing at the current token
    pub(crate) fn error(&self, message: &str) -> ParseError {
        ParseError::syntax(
            format!("{}, found {}", message, self.current),
            self.current.location,
        )
    }
}
