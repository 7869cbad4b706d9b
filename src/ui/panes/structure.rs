//! Shape-aware drawing of a data structure snapshot
//!
//! Snapshots are flat cell lists. The layout depends on the structure:
//! chains for lists and queues, a column for the stack, boxes with indices for
//! the array and levels for the breadth-first tree and heap serializations.

use super::utils::{element_style, pane_block};
use crate::playback::{self, FrameKind};
use crate::step::Cell;
use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

/// Render the structure view for `kind`
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &playback::Frame,
    kind: StructureKind,
) {
    let block = pane_block(format!(" {} ", kind), true).padding(Padding::new(1, 1, 1, 0));

    if snapshot.cells.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let lines = match kind {
        StructureKind::LinkedList => chain_lines(snapshot, "Head", "None"),
        StructureKind::Queue => chain_lines(snapshot, "Front", "Rear"),
        StructureKind::Stack => stack_lines(snapshot),
        StructureKind::Array => array_lines(snapshot),
        StructureKind::BinaryTree | StructureKind::BinaryHeap => level_lines(snapshot, width),
    };

    let alignment = match kind {
        StructureKind::BinaryTree | StructureKind::BinaryHeap => Alignment::Left,
        _ => Alignment::Center,
    };
    let paragraph = Paragraph::new(lines).block(block).alignment(alignment);
    frame.render_widget(paragraph, area);
}

fn label(cell: Cell) -> String {
    match cell {
        Some(value) => value.to_string(),
        None => "·".to_string(),
    }
}

fn cell_span(snapshot: &playback::Frame, index: usize, text: String) -> Span<'static> {
    Span::styled(text, element_style(snapshot.kind, snapshot.marks.contains(index)))
}

fn muted(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.comment))
}

/// `Head → [5] → [3] → None`
fn chain_lines(snapshot: &playback::Frame, first: &str, last: &str) -> Vec<Line<'static>> {
    let mut spans = vec![muted(first), muted(" → ")];
    for (index, &cell) in snapshot.cells.iter().enumerate() {
        if index > 0 {
            spans.push(muted(" → "));
        }
        spans.push(cell_span(snapshot, index, format!("[{}]", label(cell))));
    }
    spans.push(muted(" → "));
    spans.push(muted(last));
    vec![Line::from(spans)]
}

/// Top of the stack first
fn stack_lines(snapshot: &playback::Frame) -> Vec<Line<'static>> {
    let width = snapshot
        .cells
        .iter()
        .map(|&cell| label(cell).len())
        .max()
        .unwrap_or(1)
        + 2;
    let top = snapshot.cells.len() - 1;

    let mut lines: Vec<Line> = snapshot
        .cells
        .iter()
        .enumerate()
        .rev()
        .map(|(index, &cell)| {
            let marker = if index == top { "  ← top" } else { "       " };
            Line::from(vec![
                muted("       │"),
                cell_span(snapshot, index, format!("{:^width$}", label(cell), width = width)),
                muted("│"),
                muted(marker),
            ])
        })
        .collect();
    lines.push(Line::from(muted(&format!("       └{}┘       ", "─".repeat(width)))));
    lines
}

/// Boxed values with their indices underneath
fn array_lines(snapshot: &playback::Frame) -> Vec<Line<'static>> {
    let width = snapshot
        .cells
        .iter()
        .map(|&cell| label(cell).len())
        .chain(std::iter::once(snapshot.cells.len().to_string().len()))
        .max()
        .unwrap_or(1)
        + 2;

    let values: Vec<Span> = snapshot
        .cells
        .iter()
        .enumerate()
        .map(|(index, &cell)| {
            cell_span(snapshot, index, format!("[{:^width$}]", label(cell), width = width))
        })
        .collect();
    let indices: Vec<Span> = (0..snapshot.cells.len())
        .map(|index| muted(&format!(" {:^width$} ", index, width = width)))
        .collect();

    vec![Line::from(values), Line::from(indices)]
}

/// Breadth-first levels: level `k` holds indices `2^k - 1 .. 2^(k+1) - 1`
fn level_lines(snapshot: &playback::Frame, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut level_size = 1;

    while start < snapshot.cells.len() {
        let end = (start + level_size).min(snapshot.cells.len());
        let slot = (width / level_size).max(3);
        let spans: Vec<Span> = (start..end)
            .map(|index| {
                let text = format!("{:^slot$}", label(snapshot.cells[index]), slot = slot);
                match snapshot.cells[index] {
                    Some(_) => cell_span(snapshot, index, text),
                    None => muted(&text),
                }
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());

        start = end;
        level_size *= 2;
    }

    if snapshot.kind == FrameKind::Complete {
        lines.push(Line::from(muted("· marks an empty position")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Frame as Snapshot;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn chain_renders_arrows_between_cells() {
        let snapshot = Snapshot::initial(vec![Some(5), Some(3)], "");
        let lines = chain_lines(&snapshot, "Head", "None");
        assert_eq!(text(&lines[0]), "Head → [5] → [3] → None");
    }

    #[test]
    fn stack_shows_top_first() {
        let snapshot = Snapshot::initial(vec![Some(1), Some(2)], "");
        let lines = stack_lines(&snapshot);
        assert!(text(&lines[0]).contains('2'));
        assert!(text(&lines[0]).contains("top"));
        assert!(text(&lines[1]).contains('1'));
    }

    #[test]
    fn levels_double_in_size() {
        let cells = vec![Some(1), Some(2), None, Some(4)];
        let snapshot = Snapshot::initial(cells, "");
        let lines = level_lines(&snapshot, 40);
        // three levels, each followed by a spacer line
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[2].spans.len(), 2);
        assert_eq!(lines[4].spans.len(), 1);
        assert!(text(&lines[2]).contains('·'));
    }
}
