//! Visitor contract over the AST
//!
//! Each polymorphic category ([`Decl`], [`Stmt`], [`Term`], [`RValue`])
//! exposes `accept`, which matches on the variant and calls the
//! corresponding `visit_*` method. Every method has a default body that
//! walks the node's children in source order, so an implementation only
//! overrides the nodes it cares about. Overriding a method replaces the
//! walk; call the matching `walk_*` function to keep descending.

use super::ast::*;
use super::token::Token;

pub trait Visitor {
    // top level
    fn visit_program(&mut self, node: &Program) {
        walk_program(self, node);
    }

    fn visit_type_decl(&mut self, node: &TypeDecl) {
        walk_type_decl(self, node);
    }

    fn visit_fun_decl(&mut self, node: &FunDecl) {
        walk_fun_decl(self, node);
    }

    // statements
    fn visit_var_decl_stmt(&mut self, node: &VarDeclStmt) {
        self.visit_expr(&node.init);
    }

    fn visit_assign_stmt(&mut self, node: &AssignStmt) {
        self.visit_expr(&node.value);
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        self.visit_expr(&node.value);
    }

    fn visit_if_stmt(&mut self, node: &IfStmt) {
        walk_if_stmt(self, node);
    }

    fn visit_while_stmt(&mut self, node: &WhileStmt) {
        self.visit_expr(&node.cond);
        walk_stmts(self, &node.body);
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        self.visit_expr(&node.start);
        self.visit_expr(&node.end);
        walk_stmts(self, &node.body);
    }

    // expressions
    fn visit_expr(&mut self, node: &Expr) {
        walk_expr(self, node);
    }

    fn visit_simple_term(&mut self, node: &RValue) {
        node.accept(self);
    }

    fn visit_complex_term(&mut self, node: &Expr) {
        self.visit_expr(node);
    }

    // rvalues
    fn visit_simple_rvalue(&mut self, _value: &Token) {}

    fn visit_new_rvalue(&mut self, _type_id: &Token) {}

    /// Reached both for call statements and call r-values
    fn visit_call_expr(&mut self, node: &CallExpr) {
        for arg in &node.args {
            self.visit_expr(arg);
        }
    }

    fn visit_id_rvalue(&mut self, _path: &[Token]) {}

    fn visit_negated_rvalue(&mut self, node: &Expr) {
        self.visit_expr(node);
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, node: &Program) {
    for decl in &node.decls {
        decl.accept(visitor);
    }
}

pub fn walk_type_decl<V: Visitor + ?Sized>(visitor: &mut V, node: &TypeDecl) {
    for field in &node.fields {
        visitor.visit_var_decl_stmt(field);
    }
}

pub fn walk_fun_decl<V: Visitor + ?Sized>(visitor: &mut V, node: &FunDecl) {
    walk_stmts(visitor, &node.body);
}

pub fn walk_stmts<V: Visitor + ?Sized>(visitor: &mut V, stmts: &[Stmt]) {
    for stmt in stmts {
        stmt.accept(visitor);
    }
}

pub fn walk_if_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &IfStmt) {
    visitor.visit_expr(&node.if_part.cond);
    walk_stmts(visitor, &node.if_part.body);
    for else_if in &node.else_ifs {
        visitor.visit_expr(&else_if.cond);
        walk_stmts(visitor, &else_if.body);
    }
    walk_stmts(visitor, &node.else_body);
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, node: &Expr) {
    node.first.accept(visitor);
    if let Some(rest) = node.rest_expr() {
        visitor.visit_expr(rest);
    }
}

impl Decl {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Decl::Type(decl) => visitor.visit_type_decl(decl),
            Decl::Fun(decl) => visitor.visit_fun_decl(decl),
        }
    }
}

impl Stmt {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Stmt::VarDecl(stmt) => visitor.visit_var_decl_stmt(stmt),
            Stmt::Assign(stmt) => visitor.visit_assign_stmt(stmt),
            Stmt::Call(call) => visitor.visit_call_expr(call),
            Stmt::Return(stmt) => visitor.visit_return_stmt(stmt),
            Stmt::If(stmt) => visitor.visit_if_stmt(stmt),
            Stmt::While(stmt) => visitor.visit_while_stmt(stmt),
            Stmt::For(stmt) => visitor.visit_for_stmt(stmt),
        }
    }
}

impl Term {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Term::Simple(rvalue) => visitor.visit_simple_term(rvalue),
            Term::Complex(expr) => visitor.visit_complex_term(expr),
        }
    }
}

impl RValue {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            RValue::Simple(value) => visitor.visit_simple_rvalue(value),
            RValue::New(type_id) => visitor.visit_new_rvalue(type_id),
            RValue::Call(call) => visitor.visit_call_expr(call),
            RValue::Id(path) => visitor.visit_id_rvalue(path),
            RValue::Negated(expr) => visitor.visit_negated_rvalue(expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[derive(Default)]
    struct Counter {
        calls: Vec<String>,
        literals: usize,
        paths: usize,
    }

    impl Visitor for Counter {
        fn visit_call_expr(&mut self, node: &CallExpr) {
            self.calls.push(node.function_id.lexeme.clone());
            for arg in &node.args {
                self.visit_expr(arg);
            }
        }

        fn visit_simple_rvalue(&mut self, _value: &Token) {
            self.literals += 1;
        }

        fn visit_id_rvalue(&mut self, _path: &[Token]) {
            self.paths += 1;
        }
    }

    #[test]
    fn test_default_walk_reaches_nested_nodes() {
        let source = "
            type Node
              var val = 0
            end
            fun nil main()
              print(itos(f(1, x.y)))
              if 1 < 2 then
                while not done do g() end
              elseif neg 3 then
                return new Node
              else
                for i = 0 to (n - 1) do h(i) end
              end
            end
        ";
        let program = parse(source).unwrap();
        let mut counter = Counter::default();
        counter.visit_program(&program);

        assert_eq!(counter.calls, vec!["print", "itos", "f", "g", "h"]);
        // 0, 1, 1, 2, 3, 0, 1
        assert_eq!(counter.literals, 7);
        // x.y, done, n, i
        assert_eq!(counter.paths, 4);
    }
}
