pub mod chart_panel;
pub mod charts;
pub mod param_list;
pub mod status_bar;
pub mod tab_bar;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, stop propagation
    Handled,
    /// Event was not handled, continue propagation
    NotHandled,
}

/// A UI component that can handle events and render itself
pub trait Component {
    /// Handle a key event, returning whether it was handled
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
