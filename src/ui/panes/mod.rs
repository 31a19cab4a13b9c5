//! TUI pane rendering modules
//!
//! - [`source`]: Source text with syntax highlighting and the line of interest
//! - [`tokens`]: The token stream, one row per token
//! - [`ast`]: Indented outline of the syntax tree, or the parse error
//! - [`status`]: Status bar with keybindings and parse state
//!
//! Each pane module exports a `render_*` function plus whatever scroll
//! state it needs between frames.

pub mod ast;
pub mod source;
pub mod status;
pub mod tokens;

pub use ast::{render_ast_pane, Outline, OutlineRow};
pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered pane frame; the focused pane gets a bold highlighted border.
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
