use crossterm::style::{Color, Stylize};

/// Design tokens for the roster prompt.
pub mod colors {
    use super::Color;

    pub const ERROR: Color = Color::Red;
}

/// Wrap `text` in the given color when color output is enabled.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}
