//! Histogram rendering for Monte Carlo sample arrays.
//!
//! Draws a sample array as a colored block-character histogram, with
//! an optional secondary array overlaid in gray for comparison. Bars
//! are colored by their position relative to the mean: red below -1σ,
//! green above +1σ, cyan within.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tailboard_core::stats;

use crate::state::ChartData;
use crate::util::format::format_scalar;

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Keep only the finite samples. Inf and NaN trials are legitimate
/// model output (degenerate betas, division by zero payoffs) but have
/// no home on a finite axis.
fn finite(samples: &[f64]) -> Vec<f64> {
    samples.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Count samples into `num_bins` equal-width bins over `[min, max]`,
/// clamping both edges into the outermost bins.
fn bin_counts(samples: &[f64], num_bins: usize, min: f64, max: f64) -> Vec<usize> {
    let range = (max - min).max(1e-9);
    let bin_width = range / num_bins as f64;
    let mut counts = vec![0usize; num_bins];
    for &v in samples {
        if !v.is_finite() {
            continue;
        }
        let bin = ((v - min) / bin_width).floor() as usize;
        counts[bin.min(num_bins - 1)] += 1;
    }
    counts
}

/// Render one chart into `area`: histogram rows plus a min/mean/max
/// label line underneath.
pub fn render_histogram(frame: &mut Frame, area: Rect, chart: &ChartData) {
    let num_bins = (area.width as usize).saturating_sub(4).max(10);
    let height = area.height.saturating_sub(2) as usize;

    if height < 3 || area.width < 20 {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let primary = finite(&chart.samples);
    if primary.is_empty() {
        let msg =
            Paragraph::new("No finite samples to draw").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let secondary = chart.secondary.as_deref().map(finite);

    // Shared range so an overlay lines up bin-for-bin
    let mut min_val = primary.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut max_val = primary.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if let Some(other) = &secondary {
        min_val = other.iter().cloned().fold(min_val, f64::min);
        max_val = other.iter().cloned().fold(max_val, f64::max);
    }

    let mean = stats::mean(&primary);
    let std_dev = stats::std_dev(&primary);

    let counts = bin_counts(&primary, num_bins, min_val, max_val);
    let overlay_counts = secondary
        .as_ref()
        .map(|s| bin_counts(s, num_bins, min_val, max_val));

    // One shared scale keeps the two histograms comparable
    let max_count = counts
        .iter()
        .chain(overlay_counts.iter().flatten())
        .max()
        .copied()
        .unwrap_or(1)
        .max(1);

    let bin_width = (max_val - min_val).max(1e-9) / num_bins as f64;
    let height_units = height * 8;
    let to_height =
        |c: usize| ((c as f64 / max_count as f64) * height_units as f64).round() as usize;
    let bar_heights: Vec<usize> = counts.iter().map(|&c| to_height(c)).collect();
    let overlay_heights: Option<Vec<usize>> =
        overlay_counts.map(|cs| cs.iter().map(|&c| to_height(c)).collect());

    let x_offset = (area.width as usize).saturating_sub(num_bins) / 2;

    for row in 0..height {
        let row_base = (height - 1 - row) * 8;
        let row_top = row_base + 8;
        let mut spans = Vec::new();

        if x_offset > 0 {
            spans.push(Span::raw(" ".repeat(x_offset)));
        }

        for (i, &bar_h) in bar_heights.iter().enumerate() {
            let x = min_val + (i as f64 + 0.5) * bin_width;

            let primary_color = if x < mean - std_dev {
                Color::Red // Below -1σ
            } else if x > mean + std_dev {
                Color::Green // Above +1σ
            } else {
                Color::Cyan // Within ±1σ
            };

            // The primary owns any cell it reaches; the overlay shows
            // through in gray only above the primary's top
            let overlay_h = overlay_heights.as_ref().map_or(0, |hs| hs[i]);
            let (h, color) = if bar_h > row_base {
                (bar_h, primary_color)
            } else if overlay_h > row_base {
                (overlay_h, Color::DarkGray)
            } else {
                (0, primary_color)
            };

            let char_to_use = if h >= row_top {
                "█"
            } else if h > row_base {
                let fill_level = h - row_base;
                BIN_CHARS[fill_level.min(8)]
            } else {
                " "
            };

            spans.push(Span::styled(char_to_use, Style::default().fg(color)));
        }

        let line = Line::from(spans);
        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    // Render x-axis labels
    let label_y = area.y + height as u16;
    let label_line = Line::from(vec![
        Span::styled(
            format!("{:>6}", format_scalar(min_val)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" ".repeat((area.width as usize).saturating_sub(20) / 2)),
        Span::styled(
            format!("μ={}", format_scalar(mean)),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" ".repeat((area.width as usize).saturating_sub(20) / 2)),
        Span::styled(
            format!("{:<6}", format_scalar(max_val)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let label_area = Rect::new(area.x, label_y, area.width, 1);
    frame.render_widget(Paragraph::new(label_line), label_area);
}
