// AST (Abstract Syntax Tree) definitions for MyPL
//
// Every node owns its children outright: no sharing, no back references.
// Dropping a `Program` tears the whole tree down.

use super::token::{Token, TokenKind};

/// Root of a parsed source file; declarations in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}

impl Program {
    pub fn new() -> Self {
        Self { decls: Vec::new() }
    }
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Type(TypeDecl),
    Fun(FunDecl),
}

impl Decl {
    /// Name token of the declared type or function
    pub fn id(&self) -> &Token {
        match self {
            Decl::Type(decl) => &decl.id,
            Decl::Fun(decl) => &decl.id,
        }
    }
}

/// `type <id> <var decls> end`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub id: Token,
    pub fields: Vec<VarDeclStmt>,
}

/// Function parameter `<id>: <type>`
#[derive(Debug, Clone, PartialEq)]
pub struct FunParam {
    pub id: Token,
    pub param_type: Token,
}

/// `fun <type|nil> <id>(<params>) <stmts> end`
#[derive(Debug, Clone, PartialEq)]
pub struct FunDecl {
    /// A data type token or `nil`
    pub return_type: Token,
    pub id: Token,
    pub params: Vec<FunParam>,
    pub body: Vec<Stmt>,
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assign(AssignStmt),
    Call(CallExpr),
    Return(ReturnStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
}

/// `var <id> [: <type>] = <expr>`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub id: Token,
    pub declared_type: Option<Token>,
    pub init: Expr,
}

/// `<id>(.<id>)* = <expr>`; `path` is never empty
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub path: Vec<Token>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

/// Condition and body shared by the `if` clause and each `elseif` clause
#[derive(Debug, Clone, PartialEq)]
pub struct BasicIf {
    pub cond: Expr,
    pub body: Vec<Stmt>,
}

/// An empty `else_body` means there was no `else` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub if_part: BasicIf,
    pub else_ifs: Vec<BasicIf>,
    pub else_body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Vec<Stmt>,
}

/// `for <id> = <start> to <end> do <stmts> end`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub var_id: Token,
    pub start: Expr,
    pub end: Expr,
    pub body: Vec<Stmt>,
}

/// Expression chain: `first [op rest]`.
///
/// There is no operator precedence. `a op b op c` is always
/// `a op (b op c)`; only explicit parentheses group differently.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Set when the chain was introduced by `not`
    pub negated: bool,
    pub first: Term,
    pub rest: Option<ExprRest>,
}

/// Operator and the remainder of the chain
#[derive(Debug, Clone, PartialEq)]
pub struct ExprRest {
    pub op: Token,
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn op(&self) -> Option<&Token> {
        self.rest.as_ref().map(|rest| &rest.op)
    }

    pub fn rest_expr(&self) -> Option<&Expr> {
        self.rest.as_ref().map(|rest| rest.expr.as_ref())
    }
}

/// Unlinks the chain one node at a time; long chains would otherwise
/// recurse once per operator while dropping.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut rest = self.rest.take();
        while let Some(mut link) = rest {
            rest = link.expr.rest.take();
        }
    }
}

/// Operand of an expression chain
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Simple(RValue),
    /// Parenthesized, or the operand of `not`
    Complex(Box<Expr>),
}

/// Value-producing atoms
#[derive(Debug, Clone, PartialEq)]
pub enum RValue {
    /// Literal value or `nil`
    Simple(Token),
    /// `new <type id>`
    New(Token),
    Call(CallExpr),
    /// Dotted field path, never empty
    Id(Vec<Token>),
    /// `neg <expr>`
    Negated(Box<Expr>),
}

impl RValue {
    pub fn is_nil(&self) -> bool {
        matches!(self, RValue::Simple(token) if token.is(TokenKind::Nil))
    }
}

/// `<id>(<args>)`, usable as a statement or an r-value
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub function_id: Token,
    pub args: Vec<Expr>,
}
