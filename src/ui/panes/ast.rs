//! AST outline pane
//!
//! [`Outline`] walks the tree through the [`Visitor`] contract and flattens
//! it into indented rows; the pane then scrolls over those rows. When the
//! parse failed the pane shows the diagnostic instead.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::token::{SourceLocation, Token};
use crate::parser::visitor::{walk_expr, walk_stmts, Visitor};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// One row of the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub label: String,
    pub location: Option<SourceLocation>,
}

/// Flattens an AST into [`OutlineRow`]s
#[derive(Debug, Default)]
pub struct Outline {
    rows: Vec<OutlineRow>,
    depth: usize,
}

impl Outline {
    pub fn build(program: &Program) -> Vec<OutlineRow> {
        let mut outline = Outline::default();
        outline.visit_program(program);
        outline.rows
    }

    fn row(&mut self, label: impl Into<String>, token: Option<&Token>) {
        self.rows.push(OutlineRow {
            depth: self.depth,
            label: label.into(),
            location: token.map(|t| t.location),
        });
    }

    /// Emit a row and visit `children` one level deeper.
    fn nested(&mut self, label: impl Into<String>, token: Option<&Token>, children: impl FnOnce(&mut Self)) {
        self.row(label, token);
        self.depth += 1;
        children(self);
        self.depth -= 1;
    }

    fn block(&mut self, label: &str, stmts: &[Stmt]) {
        self.nested(label, None, |o| walk_stmts(o, stmts));
    }
}

impl Visitor for Outline {
    fn visit_type_decl(&mut self, node: &TypeDecl) {
        self.nested(format!("type {}", node.id.lexeme), Some(&node.id), |o| {
            for field in &node.fields {
                o.visit_var_decl_stmt(field);
            }
        });
    }

    fn visit_fun_decl(&mut self, node: &FunDecl) {
        let params = node
            .params
            .iter()
            .map(|p| format!("{}: {}", p.id.lexeme, p.param_type.lexeme))
            .collect::<Vec<_>>()
            .join(", ");
        let label = format!(
            "fun {}({}) -> {}",
            node.id.lexeme, params, node.return_type.lexeme
        );
        self.nested(label, Some(&node.id), |o| walk_stmts(o, &node.body));
    }

    fn visit_var_decl_stmt(&mut self, node: &VarDeclStmt) {
        let label = match &node.declared_type {
            Some(t) => format!("var {}: {}", node.id.lexeme, t.lexeme),
            None => format!("var {}", node.id.lexeme),
        };
        self.nested(label, Some(&node.id), |o| o.visit_expr(&node.init));
    }

    fn visit_assign_stmt(&mut self, node: &AssignStmt) {
        let target = node
            .path
            .iter()
            .map(|t| t.lexeme.as_str())
            .collect::<Vec<_>>()
            .join(".");
        self.nested(format!("assign {}", target), node.path.first(), |o| {
            o.visit_expr(&node.value)
        });
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        self.nested("return", None, |o| o.visit_expr(&node.value));
    }

    fn visit_if_stmt(&mut self, node: &IfStmt) {
        self.nested("if", None, |o| {
            o.visit_expr(&node.if_part.cond);
            o.block("then", &node.if_part.body);
            for else_if in &node.else_ifs {
                o.nested("elseif", None, |o| {
                    o.visit_expr(&else_if.cond);
                    o.block("then", &else_if.body);
                });
            }
            if !node.else_body.is_empty() {
                o.block("else", &node.else_body);
            }
        });
    }

    fn visit_while_stmt(&mut self, node: &WhileStmt) {
        self.nested("while", None, |o| {
            o.visit_expr(&node.cond);
            o.block("do", &node.body);
        });
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        self.nested(format!("for {}", node.var_id.lexeme), Some(&node.var_id), |o| {
            o.nested("from", None, |o| o.visit_expr(&node.start));
            o.nested("to", None, |o| o.visit_expr(&node.end));
            o.block("do", &node.body);
        });
    }

    fn visit_expr(&mut self, node: &Expr) {
        if node.negated {
            // the negated chain is always wrapped in a complex term
            self.nested("not", None, |o| match &node.first {
                Term::Complex(inner) => o.visit_expr(inner),
                term => term.accept(o),
            });
            if let Some(rest) = node.rest_expr() {
                self.visit_expr(rest);
            }
        } else if let Some(op) = node.op() {
            self.nested(format!("op {}", op.lexeme), Some(op), |o| walk_expr(o, node));
        } else {
            walk_expr(self, node);
        }
    }

    fn visit_complex_term(&mut self, node: &Expr) {
        self.nested("( )", None, |o| o.visit_expr(node));
    }

    fn visit_simple_rvalue(&mut self, value: &Token) {
        self.row(format!("{} {}", value.kind.name(), value.lexeme), Some(value));
    }

    fn visit_new_rvalue(&mut self, type_id: &Token) {
        self.row(format!("new {}", type_id.lexeme), Some(type_id));
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.nested(format!("call {}", node.function_id.lexeme), Some(&node.function_id), |o| {
            for arg in &node.args {
                o.visit_expr(arg);
            }
        });
    }

    fn visit_id_rvalue(&mut self, path: &[Token]) {
        let joined = path
            .iter()
            .map(|t| t.lexeme.as_str())
            .collect::<Vec<_>>()
            .join(".");
        self.row(format!("path {}", joined), path.first());
    }

    fn visit_negated_rvalue(&mut self, node: &Expr) {
        self.nested("neg", None, |o| o.visit_expr(node));
    }
}

fn row_line(row: &OutlineRow) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    let (head, tail) = row.label.split_once(' ').unwrap_or((row.label.as_str(), ""));
    let mut spans = vec![
        Span::raw(indent),
        Span::styled(
            head.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", tail), Style::default().fg(DEFAULT_THEME.text)),
    ];
    if let Some(loc) = row.location {
        spans.push(Span::styled(
            format!("  @{}", loc),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    Line::from(spans)
}

/// Render the outline, or the error that prevented building it.
pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[OutlineRow],
    error: Option<&ParseError>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = super::pane_block(" Syntax Tree ".to_string(), is_focused);

    if let Some(err) = error {
        let paragraph = Paragraph::new(err.to_string())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.error))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(rows.len().saturating_sub(visible_height));

    let lines: Vec<Line> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(row_line)
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn labels(source: &str) -> Vec<String> {
        let program = parse(source).unwrap();
        Outline::build(&program)
            .into_iter()
            .map(|row| format!("{}{}", "  ".repeat(row.depth), row.label))
            .collect()
    }

    #[test]
    fn test_outline_of_function() {
        assert_eq!(
            labels("fun int f(n: int) var x = n + 1 return not (x) end"),
            vec![
                "fun f(n: int) -> int",
                "  var x",
                "    op +",
                "      path n",
                "      INT_VAL 1",
                "  return",
                "    not",
                "      ( )",
                "        path x",
            ]
        );
    }

    #[test]
    fn test_outline_of_if_chain() {
        assert_eq!(
            labels("fun nil g() if a then f() elseif b then else x.y = neg 2 end end"),
            vec![
                "fun g() -> nil",
                "  if",
                "    path a",
                "    then",
                "      call f",
                "    elseif",
                "      path b",
                "      then",
                "    else",
                "      assign x.y",
                "        neg",
                "          INT_VAL 2",
            ]
        );
    }

    #[test]
    fn test_rows_carry_locations() {
        let program = parse("type T\n  var v = new T\nend").unwrap();
        let rows = Outline::build(&program);
        assert_eq!(rows[0].location, Some(SourceLocation::new(1, 6)));
        assert_eq!(rows[2].label, "new T");
        assert_eq!(rows[2].location, Some(SourceLocation::new(2, 15)));
    }
}
