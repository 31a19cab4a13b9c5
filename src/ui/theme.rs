use ratatui::style::Color;

/// Explorer colours, keyed by what is being drawn rather than by hue
pub struct Theme {
    pub text: Color,
    pub accent: Color,
    pub current_line_number: Color,
    pub comment: Color,
    pub ok: Color,
    pub error: Color,

    // token roles
    pub keyword: Color,
    pub type_name: Color,
    pub literal: Color,
    pub number: Color,
    pub function: Color,

    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    text: Color::Rgb(205, 214, 244),
    accent: Color::Rgb(137, 180, 250),
    current_line_number: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    ok: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),

    keyword: Color::Rgb(203, 166, 247),   // Mauve
    type_name: Color::Rgb(148, 226, 213), // Teal
    literal: Color::Rgb(166, 227, 161),   // Green for strings and chars
    number: Color::Rgb(250, 179, 135),    // Peach for numbers, bools, nil
    function: Color::Rgb(249, 226, 175),

    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    highlight_bg: Color::Rgb(50, 50, 70),
};
