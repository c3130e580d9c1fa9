//! Cash burn dashboard: R&D and SG&A spend per year, plus the
//! aggregated burn across the whole horizon.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use tailboard_core::stats;

use crate::components::chart_panel::render_chart_panel;
use crate::components::param_list::render_param_list;
use crate::components::{Component, EventResult};
use crate::state::{AppState, FocusedPanel, TabId};
use crate::util::format::format_scalar;
use crate::util::styles::{HEADER_COLOR, focused_block};

pub struct BurnScreen;

impl BurnScreen {
    pub fn new() -> Self {
        Self
    }

    /// Readout under the sliders. The horizon total is the last chart
    /// the pipeline pushes.
    fn render_totals(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(" HORIZON ", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(total) = state.burn.charts.last() else {
            return;
        };

        let mean = stats::mean(&total.samples);
        let p95 = stats::percentile(&total.samples, 0.95);
        let lines = vec![
            Line::from(vec![
                Span::raw("Total burn mean  "),
                Span::styled(
                    format!("{} $mn", format_scalar(mean)),
                    Style::default().fg(HEADER_COLOR),
                ),
            ]),
            Line::from(vec![
                Span::raw("Total burn p95   "),
                Span::styled(
                    format!("{} $mn", format_scalar(p95)),
                    Style::default().fg(HEADER_COLOR),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for BurnScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BurnScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Tab => {
                let s = &mut state.burn;
                s.focused_panel = s.focused_panel.toggle();
                EventResult::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let s = &mut state.burn;
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
                let s = &mut state.burn;
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
                if state.burn.focused_panel == FocusedPanel::Parameters =>
            {
                let row = state.burn.selected_param;
                state.burn.adjust(row, -1.0);
                state.recompute_dependents(TabId::Burn);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l')
                if state.burn.focused_panel == FocusedPanel::Parameters =>
            {
                let row = state.burn.selected_param;
                state.burn.adjust(row, 1.0);
                state.recompute_dependents(TabId::Burn);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = &state.burn;
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
        self.render_totals(frame, left[1], state);
        render_chart_panel(
            frame,
            columns[1],
            &s.charts,
            s.selected_chart,
            s.focused_panel == FocusedPanel::Charts,
        );
    }
}
