//! Common UI styles and layout helpers for the pocket TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

/// Gadget-pocket blue
pub const POCKET_BLUE: Color = Color::Rgb(0, 150, 225);
/// Collar red
pub const COLLAR_RED: Color = Color::Rgb(216, 15, 40);
/// Bell gold
pub const BELL_GOLD: Color = Color::Rgb(244, 208, 63);

/// Common UI styles
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(POCKET_BLUE)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(POCKET_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(COLLAR_RED)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn warning() -> Style {
        Style::default().fg(BELL_GOLD)
    }

    pub fn info() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn active_border() -> Style {
        Style::default().fg(BELL_GOLD)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn key() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Terminal column width of the first `chars` characters of `text`.
/// Kana and kanji take two columns each. Saturates at `u16::MAX`.
pub fn display_width(text: &str, chars: usize) -> u16 {
    let end = text
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    u16::try_from(UnicodeWidthStr::width(&text[..end])).unwrap_or(u16::MAX)
}

/// Center a rectangle within another rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("ねこ", 2), 4);
        assert_eq!(display_width("ねこ", 1), 2);
        assert_eq!(display_width("neko", 3), 3);
        assert_eq!(display_width("猫cat", 10), 5);

        let long = "猫".repeat(40_000);
        assert_eq!(display_width(&long, 40_000), u16::MAX);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(80, 70, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 80);
    }
}
