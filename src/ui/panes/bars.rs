//! Bar chart of the array being sorted

use super::utils::{base_color, highlight_color, pane_block};
use crate::playback;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

const MAX_BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 1;

/// Tallest bar once the value range is wider than this
const HEIGHT_SCALE: u64 = 1_000;

/// Bars need positive heights: the smallest value gets 1. Wide ranges are
/// scaled down so the chart's own arithmetic stays small.
fn bar_height(value: i64, min: i64, span: u64) -> u64 {
    let offset = value.abs_diff(min);
    if span < HEIGHT_SCALE {
        return offset + 1;
    }
    let scaled = u128::from(offset) * u128::from(HEIGHT_SCALE - 1) / u128::from(span);
    u64::try_from(scaled).unwrap_or(HEIGHT_SCALE - 1) + 1
}

/// Render the sort view: one bar per element, marked bars highlighted
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: &playback::Frame, title: &str) {
    let block = pane_block(format!(" {} ", title), true);

    let values: Vec<i64> = snapshot.cells.iter().flatten().copied().collect();
    if values.is_empty() {
        let paragraph = Paragraph::new("(nothing to sort)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let min = values.iter().copied().min().unwrap_or(0);
    let top = values.iter().copied().max().unwrap_or(min);
    let span = top.abs_diff(min);
    let max = bar_height(top, min, span);

    let inner_width = area.width.saturating_sub(2);
    let count = values.len() as u16;
    let bar_width = ((inner_width + BAR_GAP) / count.max(1))
        .saturating_sub(BAR_GAP)
        .clamp(1, MAX_BAR_WIDTH);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = if snapshot.marks.contains(index) {
                highlight_color(snapshot.kind)
            } else {
                base_color(snapshot.kind)
            };
            Bar::default()
                .value(bar_height(value, min, span))
                .text_value(value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(color)
                        .add_modifier(Modifier::REVERSED | Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(max);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(cells: Vec<Option<i64>>) -> Terminal<TestBackend> {
        let snapshot = playback::Frame::initial(cells, "start");
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| render_bars_pane(f, f.area(), &snapshot, "Bubble Sort"))
            .unwrap();
        terminal
    }

    #[test]
    fn narrow_ranges_keep_exact_heights() {
        assert_eq!(bar_height(-5, -5, 17), 1);
        assert_eq!(bar_height(12, -5, 17), 18);
        assert_eq!(bar_height(12, 2, 10), 11);
    }

    #[test]
    fn wide_ranges_are_scaled() {
        let span = i64::MAX.abs_diff(-5);
        assert_eq!(bar_height(-5, -5, span), 1);
        assert_eq!(bar_height(i64::MAX, -5, span), HEIGHT_SCALE);

        let full = i64::MAX.abs_diff(i64::MIN);
        assert_eq!(full, u64::MAX);
        assert_eq!(bar_height(i64::MIN, i64::MIN, full), 1);
        assert_eq!(bar_height(0, i64::MIN, full), HEIGHT_SCALE / 2);
        assert_eq!(bar_height(i64::MAX, i64::MIN, full), HEIGHT_SCALE);
    }

    #[test]
    fn extreme_values_render() {
        render(vec![Some(-5), Some(i64::MAX)]);
        render(vec![Some(i64::MIN), Some(0), Some(i64::MAX)]);
    }

    #[test]
    fn empty_array_shows_placeholder() {
        let terminal = render(Vec::new());
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("(nothing to sort)"));
    }
}
