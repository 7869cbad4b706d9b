//! Narration pane: one caption per frame up to the cursor

use super::utils::pane_block;
use crate::playback::{self, FrameKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration pane
///
/// `scroll_offset` is clamped here; `usize::MAX` pins the view to the
/// latest caption.
pub fn render_narration_pane<'a>(
    frame: &mut Frame,
    area: Rect,
    frames: impl Iterator<Item = &'a playback::Frame>,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Narration ".to_string(), false);

    let captions: Vec<(FrameKind, &str)> = frames
        .map(|f| (f.kind, f.caption.as_str()))
        .collect();

    if captions.is_empty() {
        let paragraph = Paragraph::new("(nothing played yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = captions.len() - 1;
    let all_items: Vec<ListItem> = captions
        .iter()
        .enumerate()
        .map(|(index, &(kind, caption))| {
            let style = match kind {
                FrameKind::Initial | FrameKind::Complete => {
                    Style::default().fg(DEFAULT_THEME.heading)
                }
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            let style = if index == last {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            };
            ListItem::new(format!("{:>4}  {}", index, caption)).style(style)
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
