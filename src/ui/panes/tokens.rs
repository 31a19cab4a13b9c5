//! Token stream pane rendering

use crate::parser::token::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::StringVal | TokenKind::CharVal => Style::default().fg(DEFAULT_THEME.literal),
        TokenKind::IntVal | TokenKind::DoubleVal | TokenKind::BoolVal | TokenKind::Nil => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        TokenKind::Id => Style::default().fg(DEFAULT_THEME.text),
        TokenKind::Eos => Style::default().fg(DEFAULT_THEME.comment),
        k if k.is_data_type() => Style::default().fg(DEFAULT_THEME.type_name),
        k if k.is_keyword() => Style::default().fg(DEFAULT_THEME.keyword),
        _ => Style::default().fg(DEFAULT_THEME.accent),
    }
}

/// One row of the token list: `line:col  KIND  lexeme`
pub fn token_row(token: &Token) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>9}  ", token.location.to_string()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<14}", token.kind.name()), kind_style(token.kind)),
        Span::raw(token.lexeme.clone()),
    ])
}

/// Render the token list, keeping `selected` visible.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = super::pane_block(format!(" Tokens ({}) ", tokens.len()), is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = visible_window(*scroll_offset, selected, visible_height, tokens.len());

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, token)| {
            let item = ListItem::new(token_row(token));
            if idx == selected {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Smallest scroll change that keeps `selected` inside the window.
pub fn visible_window(offset: usize, selected: usize, height: usize, total: usize) -> usize {
    let mut offset = offset;
    if selected < offset {
        offset = selected;
    } else if selected >= offset + height {
        offset = selected + 1 - height;
    }
    offset.min(total.saturating_sub(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_follows_selection() {
        assert_eq!(visible_window(0, 3, 10, 50), 0);
        assert_eq!(visible_window(0, 12, 10, 50), 3);
        assert_eq!(visible_window(20, 5, 10, 50), 5);
        assert_eq!(visible_window(45, 49, 10, 50), 40);
    }
}
