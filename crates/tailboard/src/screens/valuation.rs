//! Valuation dashboard: price multiples on the target ramp year, with
//! a catastrophe haircut on the disaster-adjusted view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::chart_panel::render_chart_panel;
use crate::components::param_list::render_param_list;
use crate::components::{Component, EventResult};
use crate::state::{AppState, FocusedPanel, TabId, VALUATION_TARGET_YEAR};
use crate::util::format::format_percentage;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, focused_block};

pub struct ValuationScreen;

impl ValuationScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_survival(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(" CATASTROPHE ", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(survival) = state.valuation.survival else {
            return;
        };

        let exposure = state.valuation.params.years_exposed.value;
        let lines = vec![
            Line::from(vec![
                Span::raw(format!("Survival over {exposure:.0} years  ")),
                Span::styled(
                    format_percentage(survival),
                    Style::default().fg(HEADER_COLOR),
                ),
            ]),
            Line::from(Span::styled(
                format!("Haircuts {VALUATION_TARGET_YEAR} ARR in the adjusted multiple"),
                Style::default().fg(HELP_COLOR),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for ValuationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ValuationScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Tab => {
                let s = &mut state.valuation;
                s.focused_panel = s.focused_panel.toggle();
                EventResult::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let s = &mut state.valuation;
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
                let s = &mut state.valuation;
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
                if state.valuation.focused_panel == FocusedPanel::Parameters =>
            {
                let row = state.valuation.selected_param;
                state.valuation.adjust(row, -1.0);
                state.recompute_dependents(TabId::Valuation);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l')
                if state.valuation.focused_panel == FocusedPanel::Parameters =>
            {
                let row = state.valuation.selected_param;
                state.valuation.adjust(row, 1.0);
                state.recompute_dependents(TabId::Valuation);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = &state.valuation;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(columns[0]);

        render_param_list(
            frame,
            left[0],
            &s.rows(),
            s.selected_param,
            s.focused_panel == FocusedPanel::Parameters,
        );
        self.render_survival(frame, left[1], state);
        render_chart_panel(
            frame,
            columns[1],
            &s.charts,
            s.selected_chart,
            s.focused_panel == FocusedPanel::Charts,
        );
    }
}
