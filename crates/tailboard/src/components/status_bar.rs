use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;

/// Status bar showing key bindings or the last pipeline error
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// One key map covers all four dashboards.
    fn help_text() -> &'static str {
        "1-4: switch tabs | Tab: panel | j/k: select | h/l: adjust | r: resample | q: quit"
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.clone()),
                Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
