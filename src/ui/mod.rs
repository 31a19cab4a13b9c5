//! Terminal explorer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: explorer state, keyboard event loop, pane focus
//! - **[`panes`]**: render functions for each visible pane
//! - **[`theme`]**: colour palette shared by all panes
//!
//! Construct an [`App`] from source text and call [`App::run`] with a
//! terminal the caller has already put into raw mode.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
