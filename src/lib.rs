//! # Introduction
//!
//! `mypl` is the front end for MyPL, a small statically typed teaching
//! language: it turns source text into tokens, tokens into an abstract
//! syntax tree, and exposes a visitor contract over that tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Visitor (printer, explorer outline, ...)
//! ```
//!
//! 1. [`parser`]: tokens, the pull-based lexer, the LL(1) recursive-descent
//!    parser, the AST types and the [`parser::Visitor`] trait.
//! 2. [`printer`]: a visitor that renders an AST back to source text.
//! 3. [`report`]: turns a [`parser::ParseError`] into a caret diagnostic.
//! 4. [`cli`] and [`ui`]: the `mypl` binary's arguments and its terminal
//!    explorer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let program = mypl::parse("fun nil main() print(\"hi\") end").unwrap();
//! assert_eq!(program.decls.len(), 1);
//! ```

pub mod cli;
pub mod parser;
pub mod printer;
pub mod report;
pub mod ui;

pub use parser::{parse, ParseError, Program};
