//! Fleet economics dashboard: steady-state rate, speed, and
//! utilization assumptions, and how long a truck takes to pay for
//! itself.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::chart_panel::render_chart_panel;
use crate::components::param_list::render_param_list;
use crate::components::{Component, EventResult};
use crate::state::{AppState, FocusedPanel, TabId};

pub struct EconomicsScreen;

impl EconomicsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EconomicsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EconomicsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Tab => {
                let s = &mut state.economics;
                s.focused_panel = s.focused_panel.toggle();
                EventResult::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let s = &mut state.economics;
                match s.focused_panel {
                    FocusedPanel::Parameters => {
                        let count = s.param_count();
                        s.selected_param = (s.selected_param + count - 1) % count;
                    }
                    FocusedPanel::Charts => {
                        let count = s.charts.len().max(1);
                        s.selected_chart = (s.selected_chart + count - 1) % count;
                    }
                }
                EventResult::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let s = &mut state.economics;
                match s.focused_panel {
                    FocusedPanel::Parameters => {
                        s.selected_param = (s.selected_param + 1) % s.param_count();
                    }
                    FocusedPanel::Charts => {
                        s.selected_chart = (s.selected_chart + 1) % s.charts.len().max(1);
                    }
                }
                EventResult::Handled
            }
            KeyCode::Left | KeyCode::Char('h')
                if state.economics.focused_panel == FocusedPanel::Parameters =>
            {
                let row = state.economics.selected_param;
                state.economics.adjust(row, -1.0);
                state.recompute_dependents(TabId::Economics);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l')
                if state.economics.focused_panel == FocusedPanel::Parameters =>
            {
                let row = state.economics.selected_param;
                state.economics.adjust(row, 1.0);
                state.recompute_dependents(TabId::Economics);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = &state.economics;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        render_param_list(
            frame,
            chunks[0],
            &s.rows(),
            s.selected_param,
            s.focused_panel == FocusedPanel::Parameters,
        );
        render_chart_panel(
            frame,
            chunks[1],
            &s.charts,
            s.selected_chart,
            s.focused_panel == FocusedPanel::Charts,
        );
    }
}
