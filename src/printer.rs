//! Pretty printer
//!
//! [`Printer`] is a [`Visitor`] that renders an AST back to MyPL source.
//! The output re-parses to the same tree: parenthesized sub-expressions keep
//! their parentheses, and string/char literals are re-wrapped in their
//! delimiters with their escapes untouched.

use crate::parser::ast::*;
use crate::parser::token::{Token, TokenKind};
use crate::parser::visitor::Visitor;
use std::fmt;

const INDENT_WIDTH: usize = 3;

/// Renders source text into an in-memory buffer
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a whole program.
    pub fn print(program: &Program) -> String {
        let mut printer = Printer::new();
        printer.visit_program(program);
        printer.finish()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_indent(&mut self) {
        self.out.extend(std::iter::repeat(' ').take(self.indent));
    }

    /// One statement per line, one level deeper than the enclosing construct
    fn body(&mut self, stmts: &[Stmt]) {
        self.indent += INDENT_WIDTH;
        for stmt in stmts {
            self.write_indent();
            stmt.accept(self);
            self.write("\n");
        }
        self.indent -= INDENT_WIDTH;
    }

    fn clause(&mut self, keyword: &str, cond: &Expr, stmts: &[Stmt]) {
        self.write(keyword);
        self.write(" ");
        self.visit_expr(cond);
        self.write(" then\n");
        self.body(stmts);
    }

    fn var_decl(&mut self, node: &VarDeclStmt) {
        self.write("var ");
        self.write(&node.id.lexeme);
        if let Some(declared) = &node.declared_type {
            self.write(": ");
            self.write(&declared.lexeme);
        }
        self.write(" = ");
        self.visit_expr(&node.init);
    }
}

impl Visitor for Printer {
    fn visit_program(&mut self, node: &Program) {
        for (i, decl) in node.decls.iter().enumerate() {
            if i > 0 {
                self.write("\n");
            }
            decl.accept(self);
        }
    }

    fn visit_type_decl(&mut self, node: &TypeDecl) {
        self.write("type ");
        self.write(&node.id.lexeme);
        self.write("\n");
        self.indent += INDENT_WIDTH;
        for field in &node.fields {
            self.write_indent();
            self.var_decl(field);
            self.write("\n");
        }
        self.indent -= INDENT_WIDTH;
        self.write("end\n");
    }

    fn visit_fun_decl(&mut self, node: &FunDecl) {
        self.write("fun ");
        self.write(&node.return_type.lexeme);
        self.write(" ");
        self.write(&node.id.lexeme);
        self.write("(");
        let params = node
            .params
            .iter()
            .map(|p| format!("{}: {}", p.id.lexeme, p.param_type.lexeme))
            .collect::<Vec<_>>()
            .join(", ");
        self.write(&params);
        self.write(")\n");
        self.body(&node.body);
        self.write("end\n");
    }

    fn visit_var_decl_stmt(&mut self, node: &VarDeclStmt) {
        self.var_decl(node);
    }

    fn visit_assign_stmt(&mut self, node: &AssignStmt) {
        self.write(&join_path(&node.path));
        self.write(" = ");
        self.visit_expr(&node.value);
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        self.write("return ");
        self.visit_expr(&node.value);
    }

    fn visit_if_stmt(&mut self, node: &IfStmt) {
        self.clause("if", &node.if_part.cond, &node.if_part.body);
        for else_if in &node.else_ifs {
            self.write_indent();
            self.clause("elseif", &else_if.cond, &else_if.body);
        }
        if !node.else_body.is_empty() {
            self.write_indent();
            self.write("else\n");
            self.body(&node.else_body);
        }
        self.write_indent();
        self.write("end");
    }

    fn visit_while_stmt(&mut self, node: &WhileStmt) {
        self.write("while ");
        self.visit_expr(&node.cond);
        self.write(" do\n");
        self.body(&node.body);
        self.write_indent();
        self.write("end");
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        self.write("for ");
        self.write(&node.var_id.lexeme);
        self.write(" = ");
        self.visit_expr(&node.start);
        self.write(" to ");
        self.visit_expr(&node.end);
        self.write(" do\n");
        self.body(&node.body);
        self.write_indent();
        self.write("end");
    }

    fn visit_expr(&mut self, node: &Expr) {
        if node.negated {
            self.write("not ");
            match &node.first {
                Term::Complex(inner) => self.visit_expr(inner),
                Term::Simple(rvalue) => rvalue.accept(self),
            }
        } else {
            node.first.accept(self);
        }

        if let Some(rest) = &node.rest {
            self.write(" ");
            self.write(&rest.op.lexeme);
            self.write(" ");
            self.visit_expr(&rest.expr);
        }
    }

    fn visit_complex_term(&mut self, node: &Expr) {
        self.write("(");
        self.visit_expr(node);
        self.write(")");
    }

    fn visit_simple_rvalue(&mut self, value: &Token) {
        match value.kind {
            TokenKind::StringVal => {
                self.write("\"");
                self.write(&value.lexeme);
                self.write("\"");
            }
            TokenKind::CharVal => {
                self.write("'");
                self.write(&value.lexeme);
                self.write("'");
            }
            _ => self.write(&value.lexeme),
        }
    }

    fn visit_new_rvalue(&mut self, type_id: &Token) {
        self.write("new ");
        self.write(&type_id.lexeme);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.write(&node.function_id.lexeme);
        self.write("(");
        for (i, arg) in node.args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.visit_expr(arg);
        }
        self.write(")");
    }

    fn visit_id_rvalue(&mut self, path: &[Token]) {
        self.write(&join_path(path));
    }

    fn visit_negated_rvalue(&mut self, node: &Expr) {
        self.write("neg ");
        self.visit_expr(node);
    }
}

fn join_path(path: &[Token]) -> String {
    path.iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::print(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer::new();
        printer.visit_expr(self);
        f.write_str(&printer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_print_layout() {
        let source = "type Point var x:int=0 end
            fun nil main() var p = new Point p.x = neg 3
            if p.x<0 then print(\"neg\") elseif p.x==0 then print(\"zero\")
            else print(\"pos\") end end";
        let expected = "\
type Point
   var x: int = 0
end

fun nil main()
   var p = new Point
   p.x = neg 3
   if p.x < 0 then
      print(\"neg\")
   elseif p.x == 0 then
      print(\"zero\")
   else
      print(\"pos\")
   end
end
";
        let program = parse(source).unwrap();
        assert_eq!(Printer::print(&program), expected);
    }

    #[test]
    fn test_print_keeps_groups_and_negation() {
        let program = parse("fun bool f(a: int, b: Node) return not (a < 1) or b.ok end").unwrap();
        assert_eq!(
            program.to_string(),
            "fun bool f(a: int, b: Node)\n   return not (a < 1) or b.ok\nend\n"
        );
    }

    #[test]
    fn test_print_literals() {
        let program =
            parse(r#"fun nil f() g('a', "x\"y", 2.50, true, nil) end"#).unwrap();
        assert_eq!(
            program.to_string(),
            "fun nil f()\n   g('a', \"x\\\"y\", 2.50, true, nil)\nend\n"
        );
    }

    #[test]
    fn test_nested_loops_indent() {
        let program =
            parse("fun nil f() while x do for i = 1 to 2 do x = false end end end").unwrap();
        assert_eq!(
            program.to_string(),
            "fun nil f()\n   while x do\n      for i = 1 to 2 do\n         x = false\n      end\n   end\nend\n"
        );
    }
}
