//! Source code pane rendering with syntax highlighting
//!
//! Displays the MyPL file with line numbers, keyword highlighting, and the
//! line of interest: the selected token's line, or the failure line when
//! lexing or parsing stopped.
//!
//! # Rendering
//!
//! Highlighting uses a simple per-line character scanner (not the real
//! lexer) so that a malformed line still renders.

use crate::parser::token::{TokenKind, RESERVED_WORDS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one line of MyPL
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments run to end of line
        if c == '#' {
            flush_word(&mut spans, &mut current_word, false);
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        // String and char literals
        if c == '"' || c == '\'' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                end += if chars[end] == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.literal)));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' && !(c == '.' && is_numeric(&current_word)) {
            flush_word(&mut spans, &mut current_word, c == '(');
            let style = match c {
                '(' | ')' => Style::default().fg(DEFAULT_THEME.accent),
                _ => Style::default().fg(DEFAULT_THEME.text),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    Line::from(spans)
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, is_function: bool) {
    if word.is_empty() {
        return;
    }
    let style = get_keyword_style(word, is_function);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return Style::default().fg(DEFAULT_THEME.number);
    }

    match RESERVED_WORDS.iter().find(|(w, _)| *w == word).map(|(_, kind)| *kind) {
        Some(
            TokenKind::IntType
            | TokenKind::DoubleType
            | TokenKind::BoolType
            | TokenKind::CharType
            | TokenKind::StringType,
        ) => Style::default().fg(DEFAULT_THEME.type_name),
        Some(TokenKind::BoolVal | TokenKind::Nil) => Style::default().fg(DEFAULT_THEME.number),
        Some(_) => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        None if is_function => Style::default().fg(DEFAULT_THEME.function),
        None => Style::default().fg(DEFAULT_THEME.text),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Visual row the current line is pinned to (None = centre on first render)
    pub target_line_row: Option<usize>,
}

impl SourceScrollState {
    /// Pin `current_line` (1-based, 0 = none) to the target row and clamp
    /// the offset so the last page stays full.
    fn follow(&mut self, current_line: usize, total_lines: usize, visible_height: usize) {
        let target_row = self
            .target_line_row
            .unwrap_or(visible_height / 2)
            .min(visible_height.saturating_sub(1));
        self.target_line_row = Some(target_row);

        if (1..=total_lines).contains(&current_line) {
            self.offset = (current_line - 1).saturating_sub(target_row);
        }
        self.offset = self.offset.min(total_lines.saturating_sub(visible_height));
    }
}

/// Line-number gutter plus highlighted text
fn numbered_line(line_num: usize, text: &str, current: bool, failed: bool) -> Line<'_> {
    let mut content = highlight_source_code(text);

    let gutter_style = if failed {
        let error_style = Style::default()
            .bg(DEFAULT_THEME.error)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
        content.spans.iter_mut().for_each(|span| span.style = error_style);
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else if current {
        let highlight = Style::default().bg(DEFAULT_THEME.highlight_bg);
        content
            .spans
            .iter_mut()
            .for_each(|span| span.style = span.style.patch(highlight));
        Style::default()
            .fg(DEFAULT_THEME.current_line_number)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    let mut spans = vec![Span::styled(format!("{:4} ", line_num), gutter_style)];
    spans.extend(content.spans);
    Line::from(spans)
}

/// `^` under the failing column; tabs are kept so the caret lines up
fn caret_line(text: &str, column: usize) -> Line<'static> {
    let pad: String = text
        .chars()
        .take(column.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    Line::from(vec![
        Span::raw(format!("     {}", pad)),
        Span::styled(
            "^",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render the source pane. With `error_column` set, `current_line` is the
/// failure line and a caret row is drawn beneath it.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    error_column: Option<usize>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = super::pane_block(" Source Code ".to_string(), is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    // borders take two rows
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    scroll_state.follow(current_line, lines.len(), visible_height);

    let mut visible_lines = Vec::with_capacity(visible_height + 1);
    for (idx, text) in lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
    {
        let line_num = idx + 1;
        let current = line_num == current_line;
        visible_lines.push(numbered_line(line_num, text, current, current && error_column.is_some()));
        if let Some(column) = error_column.filter(|_| current) {
            visible_lines.push(caret_line(text, column));
        }
    }

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
