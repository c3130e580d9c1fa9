//! The chart pane shared by every dashboard: one histogram at a time,
//! selected with j/k, with its title above and a percentile strip
//! below.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tailboard_core::stats;

use super::charts::histogram;
use crate::state::ChartData;
use crate::util::format::format_scalar;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, focused_block_with_help};

/// Render the selected chart from `charts`.
pub fn render_chart_panel(
    frame: &mut Frame,
    area: Rect,
    charts: &[ChartData],
    selected: usize,
    focused: bool,
) {
    let position = if charts.is_empty() {
        0
    } else {
        selected.min(charts.len() - 1) + 1
    };
    let block = focused_block_with_help(
        &format!(" DISTRIBUTIONS [{}/{}] ", position, charts.len()),
        focused,
        "j/k switch chart",
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(chart) = charts.get(position.saturating_sub(1)) else {
        let msg = Paragraph::new("No charts yet, press r to sample")
            .style(Style::default().fg(HELP_COLOR));
        frame.render_widget(msg, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Chart title
            Constraint::Min(0),    // Histogram
            Constraint::Length(1), // Percentile strip
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        chart.title.clone(),
        Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    histogram::render_histogram(frame, chunks[1], chart);

    let strip = Line::from(Span::styled(
        format!(
            "p5 {}   median {}   p95 {}",
            format_scalar(stats::percentile(&chart.samples, 0.05)),
            format_scalar(stats::percentile(&chart.samples, 0.5)),
            format_scalar(stats::percentile(&chart.samples, 0.95)),
        ),
        Style::default().fg(HELP_COLOR),
    ));
    frame.render_widget(Paragraph::new(strip), chunks[2]);
}
