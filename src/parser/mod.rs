//! MyPL source parser
//!
//! This module transforms MyPL source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds, tokens and the reserved-word table
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`visitor`]: Traversal contract for AST consumers
//! - [`error`]: The single failure type for both stages
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent, one function per grammar production and a
//! single token of lookahead. Binary operators have no precedence; see
//! `expressions` for the chain shape.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parse;
pub mod token;
pub mod visitor;

mod declarations;
mod expressions;
mod statements;

pub use ast::Program;
pub use error::{ErrorKind, ParseError};
pub use lexer::Lexer;
pub use parse::Parser;
pub use token::{SourceLocation, Token, TokenKind};
pub use visitor::Visitor;

/// Parse a complete source file.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source)?.parse_program()
}
