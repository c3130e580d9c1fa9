//! The editable assumption list shared by every dashboard.
//!
//! Rendering is driven by the rows the active screen hands over; key
//! handling lives with the screen so this stays a pure widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::state::ParamRow;
use crate::util::styles::{HELP_COLOR, focused_block_with_help};

/// Render the assumption rows with the selected one highlighted.
/// Bounds hints sit dimmed at the end of each row.
pub fn render_param_list(
    frame: &mut Frame,
    area: Rect,
    rows: &[ParamRow],
    selected: usize,
    focused: bool,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let marker = if idx == selected { "> " } else { "  " };
            let style = if idx == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{:<20}{:>8} ", row.label, row.value), style),
                Span::styled(row.hint.clone(), Style::default().fg(HELP_COLOR)),
            ]))
        })
        .collect();

    let list = List::new(items).block(focused_block_with_help(
        " ASSUMPTIONS ",
        focused,
        "h/l adjust",
    ));
    frame.render_widget(list, area);
}
