//! Description, complexity and statistics pane

use super::utils::pane_block;
use crate::playback::Stats;
use crate::registry::{AlgorithmInfo, StructureInfo};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// What the info pane describes
pub enum Selection<'a> {
    Algorithm(&'a AlgorithmInfo),
    Structure(&'a StructureInfo),
}

pub struct InfoRenderData<'a> {
    pub selection: Selection<'a>,
    pub stats: Stats,
    pub delay: Duration,
    pub memory_usage: usize,
    pub memory_limit: usize,
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData) {
    let block = pane_block(" Info ".to_string(), false).padding(Padding::new(1, 1, 0, 0));

    let heading = Style::default()
        .fg(DEFAULT_THEME.heading)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);
    let row = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", name), key),
            Span::styled(text, value),
        ])
    };

    let mut lines = Vec::new();

    match data.selection {
        Selection::Algorithm(info) => {
            lines.push(Line::from(Span::styled(info.name, heading)));
            lines.push(Line::from(Span::styled(info.description, value)));
            lines.push(Line::default());
            lines.push(row("Time", info.time_complexity.to_string()));
            lines.push(row("Space", info.space_complexity.to_string()));
            lines.push(row("Stable", yes_no(info.stable)));
            lines.push(row("In place", yes_no(info.in_place)));
        }
        Selection::Structure(info) => {
            lines.push(Line::from(Span::styled(info.name, heading)));
            lines.push(Line::from(Span::styled(info.description, value)));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Operations", heading)));
            for operation in info.operations {
                lines.push(Line::from(Span::styled(format!("  • {}", operation), value)));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Complexity", heading)));
            for (operation, complexity) in info.time_complexity {
                lines.push(row(&format!("  {}", operation), complexity.to_string()));
            }
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Statistics", heading)));
    lines.push(row("Steps", data.stats.steps.to_string()));
    if let Selection::Algorithm(_) = data.selection {
        lines.push(row("Comparisons", data.stats.comparisons.to_string()));
        lines.push(row("Swaps", data.stats.swaps.to_string()));
    }
    lines.push(row("Delay", format!("{} ms", data.delay.as_millis())));
    lines.push(row(
        "History",
        format!(
            "{} / {} KiB",
            data.memory_usage.div_ceil(1024),
            data.memory_limit / 1024
        ),
    ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}
