//! Failure type shared by the lexer and the parser
//!
//! Both stages stop at the first violation. A [`ParseError`] carries the
//! stage that failed, a human-readable message, and the exact position.

use super::token::SourceLocation;
use std::fmt;

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed character sequence
    Lexer,
    /// Token stream does not match the grammar
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexer => write!(f, "Lexer"),
            ErrorKind::Syntax => write!(f, "Syntax"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn lexer(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind: ErrorKind::Lexer,
            message: message.into(),
            location,
        }
    }

    pub fn syntax(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}
