//! Common styling utilities for TUI components

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panel borders
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for chart headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Creates a block with focus-dependent border styling
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Creates a focused block with help text in the bottom-right corner
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let block = focused_block(title, focused);
    if focused {
        block.title_bottom(
            Line::from(format!(" {help_text} "))
                .style(Style::default().fg(HELP_COLOR))
                .right_aligned(),
        )
    } else {
        block
    }
}
