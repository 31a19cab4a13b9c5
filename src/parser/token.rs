//! Token definitions for MyPL source
//!
//! A [`Token`] is an immutable value: its [`TokenKind`], the exact source
//! text it was scanned from, and the position where that text starts.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Source location information for error reporting (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literal values
    IntVal,
    DoubleVal,
    BoolVal,
    CharVal,
    StringVal,

    // Identifiers
    Id,

    // Keywords
    Type,
    Fun,
    Var,
    If,
    Then,
    ElseIf,
    Else,
    End,
    While,
    For,
    To,
    Do,
    Return,
    New,
    Nil,
    Not,
    Neg,
    And,
    Or,

    // Primitive type names
    IntType,
    DoubleType,
    BoolType,
    CharType,
    StringType,

    // Punctuation
    Comma,     // ,
    LParen,    // (
    RParen,    // )
    Colon,     // :
    Dot,       // .
    Assign,    // =

    // Operators
    Plus,         // +
    Minus,        // -
    Multiply,     // *
    Divide,       // /
    Modulo,       // %
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // End of stream
    Eos,
}

/// The fixed reserved-word table. Any word not listed here lexes as [`TokenKind::Id`].
pub const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("type", TokenKind::Type),
    ("fun", TokenKind::Fun),
    ("var", TokenKind::Var),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("elseif", TokenKind::ElseIf),
    ("else", TokenKind::Else),
    ("end", TokenKind::End),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("to", TokenKind::To),
    ("do", TokenKind::Do),
    ("return", TokenKind::Return),
    ("new", TokenKind::New),
    ("nil", TokenKind::Nil),
    ("not", TokenKind::Not),
    ("neg", TokenKind::Neg),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("int", TokenKind::IntType),
    ("double", TokenKind::DoubleType),
    ("bool", TokenKind::BoolType),
    ("char", TokenKind::CharType),
    ("string", TokenKind::StringType),
    ("true", TokenKind::BoolVal),
    ("false", TokenKind::BoolVal),
];

fn reserved_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| RESERVED_WORDS.iter().copied().collect())
}

impl TokenKind {
    /// Look a word up in the reserved-word table.
    pub fn reserved(word: &str) -> Option<TokenKind> {
        reserved_table().get(word).copied()
    }

    /// Reserved words other than literal values
    pub fn is_keyword(self) -> bool {
        !self.is_literal() && RESERVED_WORDS.iter().any(|(_, kind)| *kind == self)
    }

    /// Binary operators allowed between the terms of an expression chain.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Modulo
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
        )
    }

    /// Kinds accepted where a data type is expected (`dtype`).
    pub fn is_data_type(self) -> bool {
        matches!(
            self,
            TokenKind::IntType
                | TokenKind::DoubleType
                | TokenKind::BoolType
                | TokenKind::CharType
                | TokenKind::StringType
                | TokenKind::Id
        )
    }

    /// Primitive literal values (`pval`).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntVal
                | TokenKind::DoubleVal
                | TokenKind::BoolVal
                | TokenKind::CharVal
                | TokenKind::StringVal
        )
    }

    /// Kinds that can start an expression.
    pub fn starts_expr(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                TokenKind::Not
                    | TokenKind::LParen
                    | TokenKind::Nil
                    | TokenKind::New
                    | TokenKind::Neg
                    | TokenKind::Id
            )
    }

    /// Kinds that can start a statement.
    pub fn starts_stmt(self) -> bool {
        matches!(
            self,
            TokenKind::Var
                | TokenKind::Id
                | TokenKind::If
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Return
        )
    }

    /// Upper-case grammar name, as used by `mypl tokens`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::IntVal => "INT_VAL",
            TokenKind::DoubleVal => "DOUBLE_VAL",
            TokenKind::BoolVal => "BOOL_VAL",
            TokenKind::CharVal => "CHAR_VAL",
            TokenKind::StringVal => "STRING_VAL",
            TokenKind::Id => "ID",
            TokenKind::Type => "TYPE",
            TokenKind::Fun => "FUN",
            TokenKind::Var => "VAR",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::ElseIf => "ELSEIF",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::Do => "DO",
            TokenKind::Return => "RETURN",
            TokenKind::New => "NEW",
            TokenKind::Nil => "NIL",
            TokenKind::Not => "NOT",
            TokenKind::Neg => "NEG",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::IntType => "INT",
            TokenKind::DoubleType => "DOUBLE",
            TokenKind::BoolType => "BOOL",
            TokenKind::CharType => "CHAR",
            TokenKind::StringType => "STRING",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Eos => "EOS",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntVal => write!(f, "int literal"),
            TokenKind::DoubleVal => write!(f, "double literal"),
            TokenKind::BoolVal => write!(f, "bool literal"),
            TokenKind::CharVal => write!(f, "char literal"),
            TokenKind::StringVal => write!(f, "string literal"),
            TokenKind::Id => write!(f, "identifier"),
            TokenKind::Eos => write!(f, "end of file"),
            other => match RESERVED_WORDS.iter().find(|(_, kind)| kind == other) {
                Some((word, _)) => write!(f, "'{}'", word),
                None => write!(f, "'{}'", other.symbol()),
            },
        }
    }
}

impl TokenKind {
    fn symbol(self) -> &'static str {
        match self {
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulo => "%",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            _ => "?",
        }
    }
}

/// One lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text. String and char literals keep the text between their
    /// delimiters, escapes included as written.
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Id
            | TokenKind::IntVal
            | TokenKind::DoubleVal
            | TokenKind::BoolVal => write!(f, "{} '{}'", self.kind, self.lexeme),
            TokenKind::CharVal => write!(f, "char literal '{}'", self.lexeme),
            TokenKind::StringVal => write!(f, "string literal \"{}\"", self.lexeme),
            _ => write!(f, "{}", self.kind),
        }
    }
}
