//! Explorer application state and event loop

use crate::parser::error::ParseError;
use crate::parser::lexer::Lexer;
use crate::parser::parse::Parser;
use crate::parser::token::Token;
use crate::ui::panes::{self, Outline, OutlineRow, SourceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Rows moved by PageUp/PageDown
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Ast,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> ast)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Source,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Ast,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Ast => FocusedPane::Tokens,
        }
    }
}

/// The explorer state
pub struct App {
    pub source_code: String,
    pub file_name: String,

    /// Tokens up to EOS, or up to the first lexical error
    pub tokens: Vec<Token>,
    /// Outline of the parsed program; empty when parsing failed
    pub outline: Vec<OutlineRow>,
    /// First error reported by the parser
    pub error: Option<ParseError>,

    pub focused_pane: FocusedPane,
    pub selected_token: usize,

    pub source_scroll: SourceScrollState,
    pub tokens_scroll: usize,
    pub ast_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,
}

impl App {
    /// Lex and parse `source_code` up front; the explorer never re-parses.
    pub fn new(source_code: String, file_name: impl Into<String>) -> Self {
        // One scan feeds both the token pane and the parser.
        let scanned: Vec<Result<Token, ParseError>> = Lexer::new(&source_code).collect();
        let tokens = scanned
            .iter()
            .filter_map(|item| item.as_ref().ok().cloned())
            .collect();

        let parsed = Parser::from_tokens(scanned).and_then(|mut parser| parser.parse_program());
        let (outline, error) = match parsed {
            Ok(program) => (Outline::build(&program), None),
            Err(err) => (Vec::new(), Some(err)),
        };

        let file_name = file_name.into();
        let status_message = match &error {
            Some(err) => err.to_string(),
            None => format!("{}: {} declarations", file_name, count_decls(&outline)),
        };

        App {
            source_code,
            file_name,
            tokens,
            outline,
            error,
            focused_pane: FocusedPane::Tokens,
            selected_token: 0,
            source_scroll: SourceScrollState::default(),
            tokens_scroll: 0,
            ast_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run until the user quits. Blocks on input; there is nothing to animate.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// The source line to highlight: the error line, else the selected token's line
    pub fn current_line(&self) -> usize {
        match &self.error {
            Some(err) => err.line(),
            None => self
                .tokens
                .get(self.selected_token)
                .map_or(0, |token| token.line()),
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.current_line(),
            self.error.as_ref().map(|err| err.column()),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.selected_token,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        panes::render_ast_pane(
            frame,
            right_rows[1],
            &self.outline,
            self.error.as_ref(),
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected_token,
            self.tokens.len(),
            self.error.is_some(),
        );
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE),
            KeyCode::PageDown => self.scroll_down(PAGE),
            KeyCode::Home => self.scroll_up(usize::MAX),
            KeyCode::End => self.scroll_down(usize::MAX),
            _ => {}
        }
    }

    fn scroll_up(&mut self, by: usize) {
        match self.focused_pane {
            FocusedPane::Source => {
                // Scrolling up makes the current line move down visually
                if let Some(row) = self.source_scroll.target_line_row {
                    self.source_scroll.target_line_row = Some(row.saturating_add(by));
                }
            }
            FocusedPane::Tokens => {
                self.selected_token = self.selected_token.saturating_sub(by);
                self.describe_selection();
            }
            FocusedPane::Ast => {
                self.ast_scroll = self.ast_scroll.saturating_sub(by);
            }
        }
    }

    fn scroll_down(&mut self, by: usize) {
        match self.focused_pane {
            FocusedPane::Source => {
                if let Some(row) = self.source_scroll.target_line_row {
                    self.source_scroll.target_line_row = Some(row.saturating_sub(by));
                }
            }
            FocusedPane::Tokens => {
                let last = self.tokens.len().saturating_sub(1);
                self.selected_token = self.selected_token.saturating_add(by).min(last);
                self.describe_selection();
            }
            FocusedPane::Ast => {
                // clamped against the pane height when rendered
                self.ast_scroll = self
                    .ast_scroll
                    .saturating_add(by)
                    .min(self.outline.len().saturating_sub(1));
            }
        }
    }

    fn describe_selection(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Some(token) = self.tokens.get(self.selected_token) {
            self.status_message = format!("{} at {}", token, token.location);
        }
    }
}

fn count_decls(outline: &[OutlineRow]) -> usize {
    outline.iter().filter(|row| row.depth == 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenKind;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_new_collects_tokens_and_outline() {
        let app = App::new("fun nil main() end".to_string(), "main.mypl");
        assert_eq!(app.tokens.len(), 7);
        assert_eq!(app.tokens.last().map(|t| t.kind), Some(TokenKind::Eos));
        assert_eq!(app.outline.len(), 1);
        assert!(app.error.is_none());
        assert_eq!(app.status_message, "main.mypl: 1 declarations");
    }

    #[test]
    fn test_new_keeps_tokens_before_lexer_error() {
        let app = App::new("fun nil main()\n  var x = 1 ! 2\nend".to_string(), "bad.mypl");
        assert_eq!(app.tokens.last().map(|t| t.lexeme.as_str()), Some("1"));
        assert!(app.outline.is_empty());
        let err = app.error.as_ref().unwrap();
        assert_eq!((err.line(), err.column()), (2, 13));
        assert_eq!(app.current_line(), 2);
    }

    #[test]
    fn test_lexer_error_reaches_status_unchanged() {
        let source = "fun nil main()\n  var c = 'ab'\nend";
        let lexed = Lexer::new(source).tokenize().unwrap_err();
        let app = App::new(source.to_string(), "bad.mypl");
        assert_eq!(app.error.as_ref(), Some(&lexed));
        assert_eq!(app.status_message, lexed.to_string());
        assert!(app.tokens.iter().all(|t| !t.is(TokenKind::Eos)));
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = App::new(String::new(), "empty.mypl");
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Ast);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Source);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Ast);
        app.handle_key_event(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
    }

    #[test]
    fn test_token_selection_is_clamped() {
        let mut app = App::new("fun nil main()\nend".to_string(), "main.mypl");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_token, 0);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected_token, app.tokens.len() - 1);
        assert_eq!(app.current_line(), 2);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_token, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.status_message, "'nil' at 1:5");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(String::new(), "empty.mypl");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
